//! Command line options.
//!
//! The flag set mirrors dmenu's single-letter surface so existing scripts
//! keep working. Unknown flags and stray positionals are rejected by clap
//! with usage on stderr and a non-zero exit.

use clap::{ArgAction, Parser};

/// tmenu - dynamic menu for the terminal
///
/// Reads items from standard input, lets the user pick one and prints the
/// choice to standard output.
#[derive(Debug, Clone, Parser)]
#[command(name = "tmenu", version, disable_version_flag = true, about)]
pub struct Options {
    /// Anchor the menu to the bottom of the screen
    #[arg(short = 'b')]
    pub bottom: bool,

    /// Match items case-insensitively
    #[arg(short = 'i')]
    pub insensitive: bool,

    /// Font description, kept for dmenu compatibility
    ///
    /// A terminal cannot change its font, so the value is accepted but cell
    /// metrics always come from the terminal itself.
    #[arg(short = 'f', value_name = "FONT", default_value = "monospace 10")]
    pub font: String,

    /// List items vertically with the given number of lines
    ///
    /// Zero or a negative count selects the horizontal single-row layout.
    #[arg(
        short = 'l',
        value_name = "LINES",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub lines: i32,

    /// Terminal device to render on instead of stderr
    ///
    /// Exits with an error when the device cannot be opened or is not a
    /// terminal.
    #[arg(short = 'o', value_name = "OUTPUT")]
    pub output: Option<String>,

    /// Prompt to be displayed before the input area
    #[arg(short = 'p', value_name = "PROMPT")]
    pub prompt: Option<String>,

    /// Background color, 6 or 8 hex digits with optional leading '#'
    #[arg(short = 'N', value_name = "COLOR")]
    pub background: Option<String>,

    /// Foreground color
    #[arg(short = 'n', value_name = "COLOR")]
    pub foreground: Option<String>,

    /// Prompt background color
    #[arg(short = 'M', value_name = "COLOR")]
    pub prompt_background: Option<String>,

    /// Prompt foreground color
    #[arg(short = 'm', value_name = "COLOR")]
    pub prompt_foreground: Option<String>,

    /// Selection background color
    #[arg(short = 'S', value_name = "COLOR")]
    pub selection_background: Option<String>,

    /// Selection foreground color
    #[arg(short = 's', value_name = "COLOR")]
    pub selection_foreground: Option<String>,

    /// Print version information and exit
    #[arg(short = 'v', action = ArgAction::Version)]
    pub version: Option<bool>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            bottom: false,
            insensitive: false,
            font: String::from("monospace 10"),
            lines: 0,
            output: None,
            prompt: None,
            background: None,
            foreground: None,
            prompt_background: None,
            prompt_foreground: None,
            selection_background: None,
            selection_foreground: None,
            version: None,
        }
    }
}
