//! Hard-coded mock data the dashboard renders.

use crate::model::{
    ColorToken, Deal, DealStatus, IconRef, NavItem, SalesRep, StatCard, Task, Trend,
    TrendDirection,
};

// ---------------------------------------------------------------------------
// Stats row
// ---------------------------------------------------------------------------

pub fn stat_cards() -> Vec<StatCard> {
    let up = |value| {
        Some(Trend {
            direction: TrendDirection::Up,
            value,
        })
    };
    let down = |value| {
        Some(Trend {
            direction: TrendDirection::Down,
            value,
        })
    };

    vec![
        StatCard {
            title: "Campaign Sent",
            value: "197",
            icon: IconRef("bell"),
            color: ColorToken::Sky,
            trend: None,
            subtext: Some("This Month"),
            indicator: None,
        },
        StatCard {
            title: "Annual Profit",
            value: "$489.4k",
            icon: IconRef("circle-dollar-sign"),
            color: ColorToken::Green,
            trend: up("+18.30 %"),
            subtext: None,
            indicator: Some(ColorToken::Green),
        },
        StatCard {
            title: "Lead Conversation",
            value: "32.89%",
            icon: IconRef("activity"),
            color: ColorToken::Yellow,
            trend: down("-2.7 %"),
            subtext: None,
            indicator: Some(ColorToken::Red),
        },
        StatCard {
            title: "Daily Average Income",
            value: "$1,596.5",
            icon: IconRef("trophy"),
            color: ColorToken::Purple,
            trend: up("+0.6 %"),
            subtext: None,
            indicator: Some(ColorToken::Green),
        },
        StatCard {
            title: "Annual Deals",
            value: "2,659",
            icon: IconRef("heart"),
            color: ColorToken::Pink,
            trend: down("-3.8 %"),
            subtext: None,
            indicator: Some(ColorToken::Red),
        },
    ]
}

// ---------------------------------------------------------------------------
// Deals
// ---------------------------------------------------------------------------

pub fn deals() -> Vec<Deal> {
    let rep = |name, avatar_url, initials| SalesRep {
        name,
        avatar_url: Some(avatar_url),
        initials,
    };

    vec![
        Deal {
            id: "1",
            name: "Absternet LLC",
            last_contacted: "Sep 20, 2021",
            rep: rep("Donald Risher", "https://i.pravatar.cc/32?u=donald", "DR"),
            status: DealStatus::DealWon,
            value: "$100.1K",
        },
        Deal {
            id: "2",
            name: "Raitech Soft",
            last_contacted: "Sep 23, 2021",
            rep: rep("Sofia Cunha", "https://i.pravatar.cc/32?u=sofia", "SC"),
            status: DealStatus::IntroCall,
            value: "$150K",
        },
        Deal {
            id: "3",
            name: "William PVT",
            last_contacted: "Sep 27, 2021",
            rep: rep("Luis Rocha", "https://i.pravatar.cc/32?u=luis", "LR"),
            status: DealStatus::Stuck,
            value: "$78.18K",
        },
        Deal {
            id: "4",
            name: "Loiusee LLP",
            last_contacted: "Sep 30, 2021",
            rep: rep("Vitoria Rodrigues", "https://i.pravatar.cc/32?u=vitoria", "VR"),
            status: DealStatus::DealWon,
            value: "$180K",
        },
        Deal {
            id: "5",
            name: "Futurize Inc.",
            last_contacted: "Oct 02, 2021",
            rep: rep("Marco Geller", "https://i.pravatar.cc/32?u=marco", "MG"),
            status: DealStatus::NewLead,
            value: "$95K",
        },
    ]
}

pub const DEAL_PERIODS: &[(&str, &str)] = &[
    ("nov-2021-dec-2021", "02 Nov 2021 to 31 Dec 2021"),
    ("oct-2021", "Oct 2021"),
    ("last-quarter", "Last Quarter"),
];

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

pub fn initial_tasks() -> Vec<Task> {
    vec![
        Task::new("1", "Review and make sure nothing slips through cracks", false, "15 Sep, 2021"),
        Task::new("2", "Send meeting invites for sales upcampaign", true, "20 Sep, 2021"),
        Task::new("3", "Weekly closed sales won checking with sales team", false, "24 Sep, 2021"),
        Task::new(
            "4",
            "Add notes that can be viewed from the individual view",
            true,
            "27 Sep, 2021",
        ),
        Task::new("5", "Move stuff to another page", true, "27 Sep, 2021"),
        Task::new("6", "Prepare for Q4 planning session", false, "01 Oct, 2021"),
        Task::new("7", "Follow up with new leads from conference", false, "05 Oct, 2021"),
    ]
}

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

/// A titled group of navigation items, optionally with one branch forced
/// open at mount in addition to those flagged `expanded`.
#[derive(Clone, Debug, PartialEq)]
pub struct NavSectionConfig {
    pub title: &'static str,
    pub items: Vec<NavItem>,
    pub default_open: Option<&'static str>,
}

pub fn nav_sections() -> Vec<NavSectionConfig> {
    let menu = vec![
        NavItem::group(
            "dashboards",
            "Dashboards",
            "layout-dashboard",
            vec![
                NavItem::link("analytics", "Analytics", "bar-chart", "#/analytics"),
                NavItem::link("crm", "CRM", "target", "#/crm").active(),
                NavItem::link("ecommerce", "Ecommerce", "shopping-cart", "#/ecommerce"),
            ],
        )
        .expanded(),
        NavItem::link("crypto", "Crypto", "bitcoin", "#/crypto"),
        NavItem::link("projects", "Projects", "folder-kanban", "#/projects"),
        NavItem::link("nft", "NFT", "gallery", "#/nft"),
        NavItem::link("job", "Job", "briefcase", "#/job"),
        NavItem::link("blog", "Blog", "file-text", "#/blog").with_badge("New", ColorToken::Green),
        NavItem::group(
            "apps",
            "Apps",
            "app-window",
            vec![NavItem::link("app-calendar", "Calendar", "chevron-down", "#/apps/calendar")],
        ),
        NavItem::link("layouts", "Layouts", "layout-grid", "#/layouts")
            .with_badge("Hot", ColorToken::Red),
    ];

    let pages = vec![
        NavItem::group(
            "authentication",
            "Authentication",
            "lock",
            vec![NavItem::link("auth-signin", "Sign In", "chevron-down", "#/auth/signin")],
        ),
        NavItem::group(
            "pages",
            "Pages",
            "copy",
            vec![NavItem::link("page-profile", "Profile", "chevron-down", "#/pages/profile")],
        ),
        NavItem::group(
            "landing",
            "Landing",
            "rocket",
            vec![NavItem::link("landing-onepage", "One Page", "chevron-down", "#/landing/onepage")],
        ),
    ];

    let components = vec![
        NavItem::group("base-ui", "Base UI", "component", Vec::new()),
        NavItem::group("advance-ui", "Advance UI", "layers", Vec::new()),
        NavItem::link("widgets", "Widgets", "toy-brick", "#/widgets"),
        NavItem::group("forms", "Forms", "clipboard-edit", Vec::new()),
    ];

    vec![
        NavSectionConfig {
            title: "Menu",
            items: menu,
            default_open: Some("dashboards"),
        },
        NavSectionConfig {
            title: "Pages",
            items: pages,
            default_open: None,
        },
        NavSectionConfig {
            title: "Components",
            items: components,
            default_open: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_tasks_counts() {
        let tasks = initial_tasks();
        assert_eq!(tasks.len(), 7);
        assert_eq!(tasks.iter().filter(|t| t.completed).count(), 3);
        assert!(!tasks[0].completed);
        assert_eq!(tasks[0].id, "1");
    }

    #[test]
    fn test_seed_ids_unique() {
        let ids: HashSet<&str> = deals().iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), 5);
        let ids: HashSet<String> = initial_tasks().into_iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 7);
    }

    #[test]
    fn test_stat_cards() {
        let cards = stat_cards();
        assert_eq!(cards.len(), 5);
        assert_eq!(cards[0].title, "Campaign Sent");
        assert!(cards[0].trend.is_none());
        assert_eq!(cards[0].subtext, Some("This Month"));
        assert!(cards[1..].iter().all(|c| c.trend.is_some()));
    }

    #[test]
    fn test_nav_sections() {
        let sections = nav_sections();
        let titles: Vec<&str> = sections.iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["Menu", "Pages", "Components"]);
        assert_eq!(sections[0].default_open, Some("dashboards"));
    }
}
