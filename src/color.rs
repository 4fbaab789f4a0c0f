//! Task colors
//!
//! Tasks name a palette entry (`"purple"`, `"blue"`...). Each entry has a light background, used for the task block,
//! and a darker accent, used for its dot and border.

use csscolorparser::Color;

/// (name, background, accent)
const PALETTE: &[(&str, &str, &str)] = &[
    ("purple", "#e2d8f3", "#8a63d2"),
    ("blue",   "#dbeafe", "#3b82f6"),
    ("green",  "#dcfce7", "#22c55e"),
    ("orange", "#ffedd5", "#f97316"),
    ("red",    "#fee2e2", "#ef4444"),
    ("pink",   "#fce7f3", "#ec4899"),
];

/// Names of the palette entries
pub fn palette_names() -> impl Iterator<Item = &'static str> {
    PALETTE.iter().map(|(name, _, _)| *name)
}

fn entry(name: &str) -> &'static (&'static str, &'static str, &'static str) {
    let name = name.trim();
    PALETTE.iter()
        .find(|(n, _, _)| n.eq_ignore_ascii_case(name))
        .unwrap_or(&PALETTE[0])
}

/// Parse any CSS color (`#8a63d2`, `rgb(...)`, `hsl(...)`, named colors...)
pub fn parse_color(s: &str) -> Option<Color> {
    match csscolorparser::parse(s) {
        Ok(color) => Some(color),
        Err(err) => {
            log::debug!("Invalid color {:?}: {}", s, err);
            None
        }
    }
}

fn palette_color(hex: &str) -> Color {
    // Palette entries are valid hex colors
    parse_color(hex).unwrap_or(Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 })
}

/// The background of a task block. Unknown names fall back to the first palette entry
pub fn background_for(name: &str) -> Color {
    palette_color(entry(name).1)
}

/// The accent of a task block. Unknown names fall back to the first palette entry
pub fn accent_for(name: &str) -> Color {
    palette_color(entry(name).2)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette() {
        assert_eq!(background_for("blue").to_hex_string(), "#dbeafe");
        assert_eq!(accent_for("blue").to_hex_string(), "#3b82f6");
        assert_eq!(accent_for(" Orange ").to_hex_string(), "#f97316");
    }

    #[test]
    fn unknown_names_fall_back_to_purple() {
        assert_eq!(background_for("teal"), background_for("purple"));
        assert_eq!(accent_for(""), accent_for("purple"));
    }

    #[test]
    fn every_entry_parses() {
        for (_, background, accent) in PALETTE {
            assert!(parse_color(background).is_some());
            assert!(parse_color(accent).is_some());
        }
        assert_eq!(palette_names().count(), PALETTE.len());
    }

    #[test]
    fn css_colors() {
        assert_eq!(parse_color("red").unwrap().to_hex_string(), "#ff0000");
        assert!(parse_color("bg-purple-100").is_none());
    }
}
