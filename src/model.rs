//! Display records for the dashboard.
//!
//! Every display value here (dates, money, percentages) is a pre-formatted
//! string chosen by whoever authored the data. Nothing parses or re-formats
//! them.

// ---------------------------------------------------------------------------
// Shared tokens
// ---------------------------------------------------------------------------

/// Named color slot; the active theme decides the concrete terminal color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorToken {
    Primary,
    Accent,
    Destructive,
    Muted,
    Sky,
    Green,
    Yellow,
    Purple,
    Pink,
    Blue,
    Red,
}

/// Reference to a glyph in the icon set. Only the renderer looks inside.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconRef(pub &'static str);

/// Map an icon name to a terminal glyph.
pub fn icon_glyph(icon: IconRef) -> &'static str {
    match icon.0 {
        "bell" => "\u{1F514}",                 // 🔔
        "circle-dollar-sign" => "\u{1F4B0}",   // 💰
        "activity" => "\u{1F4C8}",             // 📈
        "trophy" => "\u{1F3C6}",               // 🏆
        "heart" => "\u{2665}",                 // ♥
        "layout-dashboard" => "\u{25A6}",      // ▦
        "bar-chart" => "\u{2587}",             // ▇
        "target" => "\u{25CE}",                // ◎
        "shopping-cart" => "\u{1F6D2}",        // 🛒
        "bitcoin" => "\u{20BF}",               // ₿
        "folder-kanban" => "\u{1F4C1}",        // 📁
        "gallery" => "\u{1F5BC}",              // 🖼
        "briefcase" => "\u{1F4BC}",            // 💼
        "file-text" => "\u{1F4DD}",            // 📝
        "app-window" => "\u{25A3}",            // ▣
        "layout-grid" => "\u{25A4}",           // ▤
        "lock" => "\u{1F512}",                 // 🔒
        "copy" => "\u{2750}",                  // ❐
        "rocket" => "\u{1F680}",               // 🚀
        "component" => "\u{25C8}",             // ◈
        "layers" => "\u{2630}",                // ☰
        "toy-brick" => "\u{25A9}",             // ▩
        "clipboard-edit" => "\u{1F4CB}",       // 📋
        "chevron-down" => "\u{203A}",          // ›
        _ => "\u{2022}",                       // •
    }
}

// ---------------------------------------------------------------------------
// Deal
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DealStatus {
    DealWon,
    IntroCall,
    Stuck,
    NewLead,
}

impl DealStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DealStatus::DealWon => "Deal Won",
            DealStatus::IntroCall => "Intro Call",
            DealStatus::Stuck => "Stuck",
            DealStatus::NewLead => "New Lead",
        }
    }

    pub fn color(&self) -> ColorToken {
        match self {
            DealStatus::DealWon => ColorToken::Green,
            DealStatus::IntroCall => ColorToken::Blue,
            DealStatus::Stuck => ColorToken::Red,
            DealStatus::NewLead => ColorToken::Yellow,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SalesRep {
    pub name: &'static str,
    pub avatar_url: Option<&'static str>,
    pub initials: &'static str,
}

impl SalesRep {
    /// What the avatar shows. Terminals cannot load images, so this is
    /// always the fallback initials.
    pub fn avatar_text(&self) -> &'static str {
        self.initials
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Deal {
    pub id: &'static str,
    pub name: &'static str,
    pub last_contacted: &'static str,
    pub rep: SalesRep,
    pub status: DealStatus,
    pub value: &'static str,
}

// ---------------------------------------------------------------------------
// Task
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub description: String,
    pub completed: bool,
    pub due_date: String,
}

impl Task {
    pub fn new(id: &str, description: &str, completed: bool, due_date: &str) -> Self {
        Self {
            id: id.to_string(),
            description: description.to_string(),
            completed,
            due_date: due_date.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Stat card
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrendDirection {
    Up,
    Down,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Trend {
    pub direction: TrendDirection,
    pub value: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub icon: IconRef,
    pub color: ColorToken,
    pub trend: Option<Trend>,
    pub subtext: Option<&'static str>,
    pub indicator: Option<ColorToken>,
}

// ---------------------------------------------------------------------------
// Navigation configuration
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq)]
pub struct Badge {
    pub text: &'static str,
    pub color: ColorToken,
}

/// Navigation entry as authored. `children` follows the optional-list
/// convention of the source data; `nav::NavNode` normalizes it.
#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: IconRef,
    pub href: Option<&'static str>,
    pub badge: Option<Badge>,
    pub children: Option<Vec<NavItem>>,
    pub active: bool,
    pub expanded: bool,
}

impl NavItem {
    pub fn link(
        id: &'static str,
        label: &'static str,
        icon: &'static str,
        href: &'static str,
    ) -> Self {
        Self {
            id,
            label,
            icon: IconRef(icon),
            href: Some(href),
            badge: None,
            children: None,
            active: false,
            expanded: false,
        }
    }

    pub fn group(
        id: &'static str,
        label: &'static str,
        icon: &'static str,
        children: Vec<NavItem>,
    ) -> Self {
        Self {
            id,
            label,
            icon: IconRef(icon),
            href: None,
            badge: None,
            children: Some(children),
            active: false,
            expanded: false,
        }
    }

    pub fn with_badge(mut self, text: &'static str, color: ColorToken) -> Self {
        self.badge = Some(Badge { text, color });
        self
    }

    pub fn active(mut self) -> Self {
        self.active = true;
        self
    }

    pub fn expanded(mut self) -> Self {
        self.expanded = true;
        self
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_status_labels() {
        assert_eq!(DealStatus::DealWon.label(), "Deal Won");
        assert_eq!(DealStatus::IntroCall.label(), "Intro Call");
        assert_eq!(DealStatus::Stuck.label(), "Stuck");
        assert_eq!(DealStatus::NewLead.label(), "New Lead");
    }

    #[test]
    fn test_deal_status_colors() {
        assert_eq!(DealStatus::DealWon.color(), ColorToken::Green);
        assert_eq!(DealStatus::Stuck.color(), ColorToken::Red);
    }

    #[test]
    fn test_avatar_falls_back_to_initials() {
        let rep = SalesRep {
            name: "Donald Risher",
            avatar_url: Some("https://i.pravatar.cc/32?u=donald"),
            initials: "DR",
        };
        assert_eq!(rep.avatar_text(), "DR");

        let no_image = SalesRep {
            avatar_url: None,
            ..rep
        };
        assert_eq!(no_image.avatar_text(), "DR");
    }

    #[test]
    fn test_icon_glyph_unknown_is_bullet() {
        assert_eq!(icon_glyph(IconRef("no-such-icon")), "\u{2022}");
        assert_eq!(icon_glyph(IconRef("bell")), "\u{1F514}");
    }

    #[test]
    fn test_nav_item_builders() {
        let item = NavItem::link("blog", "Blog", "file-text", "#/blog")
            .with_badge("New", ColorToken::Green)
            .active();
        assert!(item.active);
        assert!(item.children.is_none());
        assert_eq!(item.badge.as_ref().map(|b| b.text), Some("New"));
    }
}
