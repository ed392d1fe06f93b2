use gitf_core::{
    config::{NamedColor, ThemeColor, ThemeConfig},
    git::ChangeKind,
};
use ratatui::style::Color;

/// Resolved terminal colors for every pane
pub struct Theme {
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub hint: Color,
    pub highlight_fg: Color,
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self {
            accent: color(config.accent),
            muted: color(config.muted),
            border: color(config.border),
            success: color(config.success),
            warning: color(config.warning),
            error: color(config.error),
            hint: color(config.hint),
            highlight_fg: color(config.highlight_fg),
        }
    }

    /// Color for a file row's status code
    pub fn change_color(&self, kind: ChangeKind) -> Color {
        match kind {
            ChangeKind::Modified => self.warning,
            ChangeKind::Added => self.success,
            ChangeKind::Deleted => self.error,
            ChangeKind::Renamed | ChangeKind::Copied => self.accent,
            ChangeKind::Untracked => self.hint,
            ChangeKind::Other => self.muted,
        }
    }
}

fn color(value: ThemeColor) -> Color {
    let named = match value {
        ThemeColor::Rgb(r, g, b) => return Color::Rgb(r, g, b),
        ThemeColor::Named(named) => named,
    };
    match named {
        NamedColor::Black => Color::Black,
        NamedColor::Red => Color::Red,
        NamedColor::Green => Color::Green,
        NamedColor::Yellow => Color::Yellow,
        NamedColor::Blue => Color::Blue,
        NamedColor::Magenta => Color::Magenta,
        NamedColor::Cyan => Color::Cyan,
        NamedColor::White => Color::White,
        NamedColor::Gray => Color::Gray,
        NamedColor::DarkGray => Color::DarkGray,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_defaults() {
        let theme = Theme::from_config(&ThemeConfig::default());
        assert_eq!(theme.accent, Color::Magenta);
        assert_eq!(theme.muted, Color::DarkGray);
        assert_eq!(theme.border, Color::DarkGray);
        assert_eq!(theme.success, Color::Green);
        assert_eq!(theme.warning, Color::Yellow);
        assert_eq!(theme.error, Color::Red);
        assert_eq!(theme.hint, Color::Blue);
        assert_eq!(theme.highlight_fg, Color::Black);
    }

    #[test]
    fn test_theme_custom() {
        let config = ThemeConfig {
            accent: ThemeColor::Named(NamedColor::Blue),
            warning: ThemeColor::Rgb(255, 0, 255),
            ..ThemeConfig::default()
        };
        let theme = Theme::from_config(&config);
        assert_eq!(theme.accent, Color::Blue);
        assert_eq!(theme.warning, Color::Rgb(255, 0, 255));
        assert_eq!(theme.success, Color::Green);
    }

    #[test]
    fn test_change_colors() {
        let theme = Theme::from_config(&ThemeConfig::default());
        assert_eq!(theme.change_color(ChangeKind::Modified), Color::Yellow);
        assert_eq!(theme.change_color(ChangeKind::Added), Color::Green);
        assert_eq!(theme.change_color(ChangeKind::Deleted), Color::Red);
        assert_eq!(theme.change_color(ChangeKind::Renamed), Color::Magenta);
        assert_eq!(theme.change_color(ChangeKind::Untracked), Color::Blue);
        assert_eq!(theme.change_color(ChangeKind::Other), Color::DarkGray);
    }
}
