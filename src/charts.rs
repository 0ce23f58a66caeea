//! Series data and declarative chart configuration for the charts row.
//!
//! This module only supplies well-formed data; how a chart is drawn is the
//! renderer's business.

use crate::model::ColorToken;
use crate::select::PeriodSelect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Radar,
    Area,
}

/// One row of chart data: a category plus named numeric fields.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartRecord {
    pub category: &'static str,
    pub values: Vec<(&'static str, f64)>,
    /// Per-record fill, for bar charts colored by category.
    pub fill: Option<ColorToken>,
}

impl ChartRecord {
    pub fn new(category: &'static str, values: &[(&'static str, f64)]) -> Self {
        Self {
            category,
            values: values.to_vec(),
            fill: None,
        }
    }

    pub fn with_fill(mut self, fill: ColorToken) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn value(&self, key: &str) -> Option<f64> {
        self.values.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SeriesConfig {
    pub kind: ChartKind,
    pub category_key: &'static str,
    /// Plotted fields, paired index-wise with `colors`.
    pub value_keys: Vec<&'static str>,
    pub colors: Vec<ColorToken>,
    pub tooltip: bool,
    pub legend: bool,
    /// Fixed value-axis domain; derived from the data when absent.
    pub domain: Option<(f64, f64)>,
    pub unit: Option<&'static str>,
}

/// Headline figure shown above a chart, e.g. "$584k Revenue".
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub value: &'static str,
    pub label: &'static str,
    pub color: ColorToken,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartCard {
    pub title: &'static str,
    pub period: PeriodSelect,
    pub config: SeriesConfig,
    pub records: Vec<ChartRecord>,
    pub summary: Vec<Summary>,
}

impl ChartCard {
    /// Every record carries every plotted field, and each field has a color.
    pub fn is_well_formed(&self) -> bool {
        self.config.value_keys.len() == self.config.colors.len()
            && self.records.iter().all(|r| {
                self.config
                    .value_keys
                    .iter()
                    .all(|key| r.value(key).is_some())
            })
    }

    /// Upper bound of the value axis.
    pub fn max_value(&self) -> f64 {
        if let Some((_, hi)) = self.config.domain {
            return hi;
        }
        self.records
            .iter()
            .flat_map(|r| {
                self.config
                    .value_keys
                    .iter()
                    .filter_map(move |key| r.value(key))
            })
            .fold(0.0, f64::max)
    }

    /// `(index, value)` points for one field, in record order.
    pub fn points(&self, key: &str) -> Vec<(f64, f64)> {
        self.records
            .iter()
            .enumerate()
            .filter_map(|(i, r)| r.value(key).map(|v| (i as f64, v)))
            .collect()
    }
}

const SALES_FORECAST_PERIODS: &[(&str, &str)] = &[
    ("nov-2021", "Nov 2021"),
    ("oct-2021", "Oct 2021"),
    ("year-2021", "Year 2021"),
];

const DEAL_TYPE_PERIODS: &[(&str, &str)] = &[
    ("monthly", "Monthly"),
    ("quarterly", "Quarterly"),
    ("yearly", "Yearly"),
];

const BALANCE_PERIODS: &[(&str, &str)] = &[
    ("current-year", "Current Year"),
    ("last-year", "Last Year"),
    ("all-time", "All Time"),
];

pub fn sales_forecast() -> ChartCard {
    ChartCard {
        title: "Sales Forecast",
        period: PeriodSelect::new(SALES_FORECAST_PERIODS, "nov-2021"),
        config: SeriesConfig {
            kind: ChartKind::Bar,
            category_key: "name",
            value_keys: vec!["value"],
            colors: vec![ColorToken::Primary],
            tooltip: true,
            legend: true,
            domain: None,
            unit: None,
        },
        records: vec![
            ChartRecord::new("Goal", &[("value", 37.0)]).with_fill(ColorToken::Primary),
            ChartRecord::new("Pending", &[("value", 12.0)]).with_fill(ColorToken::Accent),
            ChartRecord::new("Revenue", &[("value", 18.0)]).with_fill(ColorToken::Destructive),
        ],
        summary: Vec::new(),
    }
}

pub fn deal_type() -> ChartCard {
    let year = |subject: &'static str, pending: f64, loss: f64, won: f64| {
        ChartRecord::new(subject, &[("Pending", pending), ("Loss", loss), ("Won", won)])
    };

    ChartCard {
        title: "Deal Type",
        period: PeriodSelect::new(DEAL_TYPE_PERIODS, "monthly"),
        config: SeriesConfig {
            kind: ChartKind::Radar,
            category_key: "subject",
            value_keys: vec!["Pending", "Loss", "Won"],
            colors: vec![ColorToken::Primary, ColorToken::Destructive, ColorToken::Accent],
            tooltip: true,
            legend: true,
            domain: Some((0.0, 100.0)),
            unit: None,
        },
        records: vec![
            year("2016", 80.0, 30.0, 70.0),
            year("2017", 60.0, 70.0, 90.0),
            year("2018", 50.0, 85.0, 40.0),
            year("2019", 75.0, 40.0, 60.0),
            year("2020", 90.0, 55.0, 80.0),
            year("2021", 65.0, 65.0, 50.0),
        ],
        summary: Vec::new(),
    }
}

pub fn balance_overview() -> ChartCard {
    const MONTHS: [(&str, f64, f64); 12] = [
        ("Jan", 20.0, 10.0),
        ("Feb", 25.0, 15.0),
        ("Mar", 40.0, 20.0),
        ("Apr", 30.0, 25.0),
        ("May", 35.0, 18.0),
        ("Jun", 50.0, 30.0),
        ("Jul", 60.0, 35.0),
        ("Aug", 70.0, 40.0),
        ("Sep", 85.0, 50.0),
        ("Oct", 75.0, 45.0),
        ("Nov", 90.0, 60.0),
        ("Dec", 100.0, 70.0),
    ];

    ChartCard {
        title: "Balance Overview",
        period: PeriodSelect::new(BALANCE_PERIODS, "current-year"),
        config: SeriesConfig {
            kind: ChartKind::Area,
            category_key: "month",
            value_keys: vec!["Revenue", "Expenses"],
            colors: vec![ColorToken::Accent, ColorToken::Destructive],
            tooltip: true,
            legend: true,
            domain: None,
            unit: Some("k"),
        },
        records: MONTHS
            .iter()
            .map(|&(month, revenue, expenses)| {
                ChartRecord::new(month, &[("Revenue", revenue), ("Expenses", expenses)])
            })
            .collect(),
        summary: vec![
            Summary {
                value: "$584k",
                label: "Revenue",
                color: ColorToken::Accent,
            },
            Summary {
                value: "$497k",
                label: "Expenses",
                color: ColorToken::Destructive,
            },
            Summary {
                value: "3.6%",
                label: "Profit Ratio",
                color: ColorToken::Muted,
            },
        ],
    }
}

/// The three chart cards, left to right.
pub fn charts_row() -> Vec<ChartCard> {
    vec![sales_forecast(), deal_type(), balance_overview()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_cards_well_formed() {
        for card in charts_row() {
            assert!(card.is_well_formed(), "{} is malformed", card.title);
        }
    }

    #[test]
    fn test_category_keys() {
        let keys: Vec<&str> = charts_row().iter().map(|c| c.config.category_key).collect();
        assert_eq!(keys, vec!["name", "subject", "month"]);
    }

    #[test]
    fn test_kinds_in_order() {
        let kinds: Vec<ChartKind> = charts_row().iter().map(|c| c.config.kind).collect();
        assert_eq!(kinds, vec![ChartKind::Bar, ChartKind::Radar, ChartKind::Area]);
    }

    #[test]
    fn test_max_value_uses_domain_when_fixed() {
        assert_eq!(deal_type().max_value(), 100.0);
        assert_eq!(sales_forecast().max_value(), 37.0);
        assert_eq!(balance_overview().max_value(), 100.0);
    }

    #[test]
    fn test_points_follow_record_order() {
        let card = balance_overview();
        let revenue = card.points("Revenue");
        assert_eq!(revenue.len(), 12);
        assert_eq!(revenue[0], (0.0, 20.0));
        assert_eq!(revenue[11], (11.0, 100.0));
        assert!(card.points("Profit").is_empty());
    }

    #[test]
    fn test_missing_field_is_malformed() {
        let mut card = deal_type();
        card.records.push(ChartRecord::new("2022", &[("Pending", 10.0)]));
        assert!(!card.is_well_formed());
    }

    #[test]
    fn test_default_periods() {
        let labels: Vec<&str> = charts_row().iter().map(|c| c.period.label()).collect();
        assert_eq!(labels, vec!["Nov 2021", "Monthly", "Current Year"]);
    }
}
