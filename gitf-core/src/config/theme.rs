use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Pane colors. Every key is optional; unset keys keep the default palette.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Highlighted row background and search box border
    pub accent: ThemeColor,
    /// Paths, placeholders and the footer
    pub muted: ThemeColor,
    pub border: ThemeColor,
    /// Clean tree, commits ahead, added files
    pub success: ThemeColor,
    /// Modified files and stashes
    pub warning: ThemeColor,
    /// Errors, commits behind, deleted files
    pub error: ThemeColor,
    /// Untracked files
    pub hint: ThemeColor,
    /// Text on the highlighted row
    pub highlight_fg: ThemeColor,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        use NamedColor::{Black, Blue, DarkGray, Green, Magenta, Red, Yellow};
        Self {
            accent: ThemeColor::Named(Magenta),
            muted: ThemeColor::Named(DarkGray),
            border: ThemeColor::Named(DarkGray),
            success: ThemeColor::Named(Green),
            warning: ThemeColor::Named(Yellow),
            error: ThemeColor::Named(Red),
            hint: ThemeColor::Named(Blue),
            highlight_fg: ThemeColor::Named(Black),
        }
    }
}

/// A terminal color: one of the basic named colors or `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeColor {
    Named(NamedColor),
    Rgb(u8, u8, u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
    DarkGray,
}

impl NamedColor {
    fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
            Self::Gray => "gray",
            Self::DarkGray => "darkgray",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        let color = match name.to_ascii_lowercase().as_str() {
            "black" => Self::Black,
            "red" => Self::Red,
            "green" => Self::Green,
            "yellow" => Self::Yellow,
            "blue" => Self::Blue,
            "magenta" => Self::Magenta,
            "cyan" => Self::Cyan,
            "white" => Self::White,
            "gray" | "grey" => Self::Gray,
            "darkgray" | "darkgrey" | "dark_gray" | "dark_grey" => Self::DarkGray,
            _ => return None,
        };
        Some(color)
    }
}

fn parse_hex(hex: &str) -> Option<ThemeColor> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(ThemeColor::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

impl FromStr for ThemeColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = match s.strip_prefix('#') {
            Some(hex) => parse_hex(hex),
            None => NamedColor::from_name(s).map(Self::Named),
        };
        parsed.ok_or_else(|| {
            format!(
                "invalid color '{s}': expected #rrggbb or one of black, red, green, yellow, \
                 blue, magenta, cyan, white, gray, darkgray"
            )
        })
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(named) => f.write_str(named.name()),
            Self::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
        }
    }
}

impl Serialize for ThemeColor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ThemeColor {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config_from_str;

    #[test]
    fn test_missing_theme_uses_defaults() {
        let config = load_config_from_str(r#"search_dirs = ["~/dev"]"#).unwrap();
        assert_eq!(config.theme, ThemeConfig::default());
        assert_eq!(config.theme.accent, ThemeColor::Named(NamedColor::Magenta));
        assert_eq!(config.theme.hint, ThemeColor::Named(NamedColor::Blue));
    }

    #[test]
    fn test_partial_theme_keeps_other_defaults() {
        let config = load_config_from_str(
            r##"
search_dirs = ["~/dev"]

[theme]
accent = "cyan"
muted = "#808080"
"##,
        )
        .unwrap();
        assert_eq!(config.theme.accent, ThemeColor::Named(NamedColor::Cyan));
        assert_eq!(config.theme.muted, ThemeColor::Rgb(128, 128, 128));
        assert_eq!(config.theme.success, ThemeColor::Named(NamedColor::Green));
    }

    #[test]
    fn test_unknown_color_and_key_rejected() {
        let bad_color = load_config_from_str("search_dirs = []\n[theme]\naccent = \"plaid\"\n");
        let err = format!("{:#}", bad_color.unwrap_err());
        assert!(err.contains("invalid color 'plaid'"), "Error was: {err}");

        let bad_key = load_config_from_str("search_dirs = []\n[theme]\nbackground = \"red\"\n");
        assert!(bad_key.is_err());
    }

    #[test]
    fn test_parse_names_and_hex() {
        assert_eq!("RED".parse(), Ok(ThemeColor::Named(NamedColor::Red)));
        assert_eq!("grey".parse(), Ok(ThemeColor::Named(NamedColor::Gray)));
        assert_eq!(
            "dark_grey".parse(),
            Ok(ThemeColor::Named(NamedColor::DarkGray))
        );
        assert_eq!("#00aBfF".parse(), Ok(ThemeColor::Rgb(0, 171, 255)));
        assert!("#fff".parse::<ThemeColor>().is_err());
        assert!("#zzzzzz".parse::<ThemeColor>().is_err());
        assert!("#ffé000".parse::<ThemeColor>().is_err());
    }

    #[test]
    fn test_serialized_theme_reloads() {
        let theme = ThemeConfig {
            border: ThemeColor::Rgb(1, 2, 3),
            ..ThemeConfig::default()
        };
        let text = toml::to_string(&theme).unwrap();
        assert!(text.contains("border = \"#010203\""));
        assert_eq!(toml::from_str::<ThemeConfig>(&text).unwrap(), theme);
    }
}
