//! Presentation theme and the document root it is applied to.

use ratatui::style::Color;
use tracing::info;

use crate::error::{Error, Result};
use crate::model::ColorToken;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// The document root: the one piece of process-wide presentation state.
///
/// It carries the theme marker and full-screen status. It is passed
/// explicitly to whatever needs it instead of living in a global.
#[derive(Clone, Debug)]
pub struct Document {
    theme: Theme,
    fullscreen: bool,
    fullscreen_enabled: bool,
}

impl Document {
    /// A fresh session always starts light.
    pub fn new(fullscreen_enabled: bool) -> Self {
        Self {
            theme: Theme::Light,
            fullscreen: false,
            fullscreen_enabled,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Whether the root carries the "dark" marker.
    pub fn is_dark(&self) -> bool {
        self.theme == Theme::Dark
    }

    pub fn set_theme(&mut self, theme: Theme) {
        if self.theme != theme {
            info!(?theme, "theme changed");
        }
        self.theme = theme;
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn request_fullscreen(&mut self) -> Result<()> {
        if !self.fullscreen_enabled {
            return Err(Error::Fullscreen(
                "full-screen is disabled for this session".to_string(),
            ));
        }
        self.fullscreen = true;
        Ok(())
    }

    pub fn exit_fullscreen(&mut self) -> Result<()> {
        if !self.fullscreen {
            return Err(Error::Fullscreen("document is not full-screen".to_string()));
        }
        self.fullscreen = false;
        Ok(())
    }

    pub fn palette(&self) -> Palette {
        Palette::for_theme(self.theme())
    }
}

/// Concrete terminal colors for one theme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub card: Color,
    pub sidebar_bg: Color,
    pub sidebar_fg: Color,
    pub sidebar_active_bg: Color,
    pub sidebar_active_fg: Color,
    pub highlight_bg: Color,
    pub overlay: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::Rgb(243, 243, 249),
                foreground: Color::Rgb(33, 37, 41),
                muted: Color::Rgb(135, 138, 153),
                border: Color::Rgb(206, 212, 218),
                card: Color::Rgb(255, 255, 255),
                sidebar_bg: Color::Rgb(64, 81, 137),
                sidebar_fg: Color::Rgb(171, 185, 232),
                sidebar_active_bg: Color::Rgb(81, 99, 161),
                sidebar_active_fg: Color::White,
                highlight_bg: Color::Rgb(226, 232, 252),
                overlay: Color::Rgb(90, 90, 100),
            },
            Theme::Dark => Self {
                background: Color::Rgb(26, 29, 33),
                foreground: Color::Rgb(206, 212, 218),
                muted: Color::Rgb(135, 138, 153),
                border: Color::Rgb(50, 56, 62),
                card: Color::Rgb(33, 37, 41),
                sidebar_bg: Color::Rgb(33, 37, 41),
                sidebar_fg: Color::Rgb(125, 135, 150),
                sidebar_active_bg: Color::Rgb(50, 56, 62),
                sidebar_active_fg: Color::White,
                highlight_bg: Color::Rgb(45, 52, 70),
                overlay: Color::Rgb(12, 12, 14),
            },
        }
    }

    pub fn token(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Primary => Color::Rgb(64, 81, 137),
            ColorToken::Accent => Color::Rgb(10, 179, 156),
            ColorToken::Destructive => Color::Rgb(240, 101, 72),
            ColorToken::Muted => self.muted,
            ColorToken::Sky => Color::Rgb(41, 156, 219),
            ColorToken::Green => Color::Rgb(10, 179, 156),
            ColorToken::Yellow => Color::Rgb(247, 184, 75),
            ColorToken::Purple => Color::Rgb(118, 93, 220),
            ColorToken::Pink => Color::Rgb(232, 62, 140),
            ColorToken::Blue => Color::Rgb(64, 81, 137),
            ColorToken::Red => Color::Rgb(240, 101, 72),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_is_light() {
        let doc = Document::new(true);
        assert_eq!(doc.theme(), Theme::Light);
        assert!(!doc.is_dark());
        assert!(!doc.is_fullscreen());
    }

    #[test]
    fn test_fullscreen_round_trip() {
        let mut doc = Document::new(true);
        doc.request_fullscreen().unwrap();
        assert!(doc.is_fullscreen());
        doc.exit_fullscreen().unwrap();
        assert!(!doc.is_fullscreen());
    }

    #[test]
    fn test_fullscreen_refused() {
        let mut doc = Document::new(false);
        let err = doc.request_fullscreen().unwrap_err();
        assert!(matches!(err, Error::Fullscreen(_)));
        assert!(!doc.is_fullscreen());
    }

    #[test]
    fn test_palettes_differ() {
        let light = Palette::for_theme(Theme::Light);
        let dark = Palette::for_theme(Theme::Dark);
        assert_ne!(light.background, dark.background);
        assert_eq!(light.token(ColorToken::Muted), light.muted);
    }
}
