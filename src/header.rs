//! Top header controls: search field, theme and full-screen toggles, and the
//! language / account menus.

use tracing::info;

use crate::error::Result;
use crate::theme::{Document, Theme};

pub const USER_NAME: &str = "Anna Adame";
pub const USER_ROLE: &str = "Founder";
pub const USER_INITIALS: &str = "AA";
pub const NOTIFICATION_COUNT: u32 = 5;

pub const LANGUAGES: &[&str] = &["English", "Spanish", "French"];
pub const ACCOUNT_ITEMS: &[&str] = &["Profile", "Settings", "Support", "Log out"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuKind {
    Language,
    Account,
}

impl MenuKind {
    pub fn items(&self) -> &'static [&'static str] {
        match self {
            MenuKind::Language => LANGUAGES,
            MenuKind::Account => ACCOUNT_ITEMS,
        }
    }

    pub fn label(&self) -> Option<&'static str> {
        match self {
            MenuKind::Language => None,
            MenuKind::Account => Some("My Account"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpenMenu {
    pub kind: MenuKind,
    pub cursor: usize,
}

#[derive(Clone, Debug, Default)]
pub struct TopHeader {
    dark_mode: bool,
    /// Search field contents. Nothing filters on it.
    pub search: String,
    pub search_focused: bool,
    menu: Option<OpenMenu>,
}

impl TopHeader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the local flag and put the matching marker on the document root.
    pub fn toggle_dark_mode(&mut self, document: &mut Document) {
        self.dark_mode = !self.dark_mode;
        document.set_theme(if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        });
    }

    /// Enter or leave full-screen depending on the document's current state.
    /// A refusal is returned to the caller untouched.
    pub fn toggle_fullscreen(&self, document: &mut Document) -> Result<()> {
        if document.is_fullscreen() {
            document.exit_fullscreen()
        } else {
            document.request_fullscreen()
        }
    }

    pub fn focus_search(&mut self) {
        self.search_focused = true;
        self.menu = None;
    }

    pub fn blur_search(&mut self) {
        self.search_focused = false;
    }

    pub fn type_char(&mut self, c: char) {
        self.search.push(c);
    }

    pub fn backspace(&mut self) {
        self.search.pop();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    pub fn open_menu(&self) -> Option<OpenMenu> {
        self.menu
    }

    /// Open `kind`, closing any other menu. Opening the menu that is
    /// already open closes it.
    pub fn toggle_menu(&mut self, kind: MenuKind) {
        self.menu = match self.menu {
            Some(open) if open.kind == kind => None,
            _ => Some(OpenMenu { kind, cursor: 0 }),
        };
    }

    pub fn close_menu(&mut self) {
        self.menu = None;
    }

    pub fn menu_down(&mut self) {
        if let Some(ref mut open) = self.menu {
            if open.cursor + 1 < open.kind.items().len() {
                open.cursor += 1;
            }
        }
    }

    pub fn menu_up(&mut self) {
        if let Some(ref mut open) = self.menu {
            open.cursor = open.cursor.saturating_sub(1);
        }
    }

    /// Pick the highlighted item and close the menu. The choice has no
    /// effect beyond being reported.
    pub fn choose(&mut self) -> Option<&'static str> {
        let open = self.menu.take()?;
        let item = open.kind.items().get(open.cursor).copied();
        if let Some(item) = item {
            info!(menu = ?open.kind, item, "header menu item chosen");
        }
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_dark_mode_twice_returns_to_light() {
        let mut doc = Document::new(true);
        let mut header = TopHeader::new();

        header.toggle_dark_mode(&mut doc);
        assert!(doc.is_dark());
        assert!(header.dark_mode);

        header.toggle_dark_mode(&mut doc);
        assert!(!doc.is_dark());
        assert_eq!(doc.theme(), Theme::Light);
    }

    #[test]
    fn test_fullscreen_toggle() {
        let mut doc = Document::new(true);
        let header = TopHeader::new();
        header.toggle_fullscreen(&mut doc).unwrap();
        assert!(doc.is_fullscreen());
        header.toggle_fullscreen(&mut doc).unwrap();
        assert!(!doc.is_fullscreen());
    }

    #[test]
    fn test_fullscreen_refusal_propagates() {
        let mut doc = Document::new(false);
        let header = TopHeader::new();
        let result = header.toggle_fullscreen(&mut doc);
        assert!(matches!(result, Err(Error::Fullscreen(_))));
        assert!(!doc.is_fullscreen());
    }

    #[test]
    fn test_search_buffer() {
        let mut header = TopHeader::new();
        header.focus_search();
        for c in "deals".chars() {
            header.type_char(c);
        }
        header.backspace();
        assert_eq!(header.search, "deal");
        header.clear_search();
        assert!(header.search.is_empty());
    }

    #[test]
    fn test_menus_are_exclusive() {
        let mut header = TopHeader::new();
        header.toggle_menu(MenuKind::Language);
        header.toggle_menu(MenuKind::Account);
        assert_eq!(header.open_menu().map(|m| m.kind), Some(MenuKind::Account));
        header.toggle_menu(MenuKind::Account);
        assert!(header.open_menu().is_none());
    }

    #[test]
    fn test_choose_closes_menu() {
        let mut header = TopHeader::new();
        header.toggle_menu(MenuKind::Account);
        header.menu_down();
        header.menu_down();
        header.menu_down();
        header.menu_down();
        assert_eq!(header.choose(), Some("Log out"));
        assert!(header.open_menu().is_none());
        assert_eq!(header.choose(), None);
    }
}
