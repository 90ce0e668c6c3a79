use egui::Color32;

use crate::error::TurtleError;

/// X11 color names understood by the pen and fill color operations.
///
/// Lookup is case-insensitive; `grey` spellings are accepted alongside `gray`.
const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("black", [0, 0, 0]),
    ("white", [255, 255, 255]),
    ("red", [255, 0, 0]),
    ("green", [0, 255, 0]),
    ("blue", [0, 0, 255]),
    ("yellow", [255, 255, 0]),
    ("cyan", [0, 255, 255]),
    ("magenta", [255, 0, 255]),
    ("pink", [255, 192, 203]),
    ("purple", [160, 32, 240]),
    ("orange", [255, 165, 0]),
    ("brown", [165, 42, 42]),
    ("gray", [190, 190, 190]),
    ("grey", [190, 190, 190]),
    ("darkgray", [169, 169, 169]),
    ("darkgrey", [169, 169, 169]),
    ("lightgray", [211, 211, 211]),
    ("lightgrey", [211, 211, 211]),
    ("navy", [0, 0, 128]),
    ("gold", [255, 215, 0]),
    ("violet", [238, 130, 238]),
    ("maroon", [176, 48, 96]),
    ("olive", [128, 128, 0]),
    ("teal", [0, 128, 128]),
    ("salmon", [250, 128, 114]),
    ("turquoise", [64, 224, 208]),
    ("darkgreen", [0, 100, 0]),
    ("skyblue", [135, 206, 235]),
];

/// Parse a color given as a name or `#rgb` / `#rrggbb` hex string
pub fn parse_color(text: &str) -> Result<Color32, TurtleError> {
    let trimmed = text.trim();

    if let Some(hex) = trimmed.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| TurtleError::BadColor(text.to_owned()));
    }

    let lowered = trimmed.to_ascii_lowercase().replace(' ', "");
    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == lowered)
        .map(|(_, [r, g, b])| Color32::from_rgb(*r, *g, *b))
        .ok_or_else(|| TurtleError::BadColor(text.to_owned()))
}

/// Build a color from three integer channels, each in `0..=255`
pub fn color_from_channels(channels: &[i64]) -> Result<Color32, TurtleError> {
    let [r, g, b] = channels else {
        return Err(TurtleError::BadColor(format!("{channels:?}")));
    };

    let channel = |value: i64| {
        u8::try_from(value).map_err(|_| TurtleError::BadColor(format!("{channels:?}")))
    };

    Ok(Color32::from_rgb(channel(*r)?, channel(*g)?, channel(*b)?))
}

fn parse_hex(hex: &str) -> Option<Color32> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    match hex.len() {
        3 => {
            let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|d| d * 17);
            Some(Color32::from_rgb(digit(0)?, digit(1)?, digit(2)?))
        }
        6 => {
            let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some(Color32::from_rgb(pair(0)?, pair(2)?, pair(4)?))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors_ignore_case() {
        assert_eq!(parse_color("Black").unwrap(), Color32::BLACK);
        assert_eq!(parse_color("RED").unwrap(), Color32::from_rgb(255, 0, 0));
        assert_eq!(parse_color("Gray").unwrap(), parse_color("grey").unwrap());
    }

    #[test]
    fn test_hex_colors() {
        assert_eq!(parse_color("#ff8000").unwrap(), Color32::from_rgb(255, 128, 0));
        assert_eq!(parse_color("#0f0").unwrap(), Color32::from_rgb(0, 255, 0));
        assert!(parse_color("#12345").is_err());
        assert!(parse_color("#gg0000").is_err());
    }

    #[test]
    fn test_unknown_color_is_rejected() {
        assert_eq!(
            parse_color("nosuch"),
            Err(TurtleError::BadColor("nosuch".to_owned()))
        );
    }

    #[test]
    fn test_channels() {
        assert_eq!(color_from_channels(&[10, 20, 30]).unwrap(), Color32::from_rgb(10, 20, 30));
        assert!(color_from_channels(&[256, 0, 0]).is_err());
        assert!(color_from_channels(&[-1, 0, 0]).is_err());
        assert!(color_from_channels(&[1, 2]).is_err());
    }
}
