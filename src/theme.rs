//! Menu colors.
//!
//! Colors come in as `RRGGBB` or `RRGGBBAA` hex strings with an optional
//! leading `#`. Six digits mean fully opaque. Invalid values are reported
//! and the built-in default is kept; a bad color is never fatal.

use ratatui::style::{Color, Style};

/// A parsed RGBA color. A character grid cannot blend, so the alpha byte is
/// carried but does not change how a cell is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub fn color(self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

/// Parses a 6- or 8-hex-digit color, `#` optional.
pub fn parse_color(input: &str) -> Option<Rgba> {
    let hex = input.strip_prefix('#').unwrap_or(input);
    if hex.len() != 6 && hex.len() != 8 {
        return None;
    }
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let parse = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Rgba {
        r: parse(0..2)?,
        g: parse(2..4)?,
        b: parse(4..6)?,
        a: if hex.len() == 8 { parse(6..8)? } else { 0xff },
    })
}

/// The color scheme of the menu strip.
///
/// <pre>
/// [prompt][input........][<][item][selected item][item][>]
///  prompt  normal            normal selection     normal
/// </pre>
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Everything that is not prompt or selection.
    pub normal: Style,
    /// The prompt column.
    pub prompt: Style,
    /// The selected item.
    pub selection: Style,
}

impl Default for Theme {
    fn default() -> Self {
        let background = Rgba::new(0x22, 0x22, 0x22);
        let foreground = Rgba::new(0xbb, 0xbb, 0xbb);
        let accent_bg = Rgba::new(0x00, 0x55, 0x77);
        let accent_fg = Rgba::new(0xee, 0xee, 0xee);
        Self {
            normal: Style::new().fg(foreground.color()).bg(background.color()),
            prompt: Style::new().fg(accent_fg.color()).bg(accent_bg.color()),
            selection: Style::new().fg(accent_fg.color()).bg(accent_bg.color()),
        }
    }
}

impl Theme {
    /// Builds the theme from the color flags, reporting and skipping any
    /// value that does not parse.
    pub fn from_options(options: &crate::Options) -> Self {
        fn pick(what: &str, value: &Option<String>, fallback: Option<Color>) -> Option<Color> {
            match value {
                Some(value) => match parse_color(value) {
                    Some(rgba) => Some(rgba.color()),
                    None => {
                        eprintln!("Invalid {what} color: {value}");
                        fallback
                    }
                },
                None => fallback,
            }
        }

        let mut theme = Self::default();
        theme.normal.bg = pick("background", &options.background, theme.normal.bg);
        theme.normal.fg = pick("foreground", &options.foreground, theme.normal.fg);
        theme.prompt.bg = pick("prompt background", &options.prompt_background, theme.prompt.bg);
        theme.prompt.fg = pick("prompt foreground", &options.prompt_foreground, theme.prompt.fg);
        theme.selection.bg = pick(
            "selection background",
            &options.selection_background,
            theme.selection.bg,
        );
        theme.selection.fg = pick(
            "selection foreground",
            &options.selection_foreground,
            theme.selection.fg,
        );
        theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_digits_default_to_opaque() {
        assert_eq!(
            parse_color("005577"),
            Some(Rgba { r: 0x00, g: 0x55, b: 0x77, a: 0xff })
        );
    }

    #[test]
    fn eight_digits_carry_alpha() {
        assert_eq!(
            parse_color("#11223380"),
            Some(Rgba { r: 0x11, g: 0x22, b: 0x33, a: 0x80 })
        );
    }

    #[test]
    fn leading_hash_is_optional() {
        assert_eq!(parse_color("#ffffff"), parse_color("ffffff"));
    }

    #[test]
    fn malformed_colors_are_rejected() {
        assert_eq!(parse_color(""), None);
        assert_eq!(parse_color("12345"), None);
        assert_eq!(parse_color("1234567"), None);
        assert_eq!(parse_color("gggggg"), None);
        assert_eq!(parse_color("#1122334455"), None);
    }

    #[test]
    fn invalid_option_keeps_the_default() {
        let options = crate::Options {
            background: Some(String::from("nonsense")),
            foreground: Some(String::from("ff0000")),
            ..Default::default()
        };
        let theme = Theme::from_options(&options);
        let defaults = Theme::default();
        assert_eq!(theme.normal.bg, defaults.normal.bg);
        assert_eq!(theme.normal.fg, Some(Color::Rgb(0xff, 0, 0)));
    }
}
