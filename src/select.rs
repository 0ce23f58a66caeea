/// A fixed-option dropdown showing one value at a time.
///
/// Changing the selection only changes what the control displays; none of
/// the panels re-query their data.
#[derive(Clone, Debug, PartialEq)]
pub struct PeriodSelect {
    /// `(value, label)` pairs.
    options: &'static [(&'static str, &'static str)],
    selected: usize,
}

impl PeriodSelect {
    /// Start on the option whose value is `default`, or the first option.
    pub fn new(options: &'static [(&'static str, &'static str)], default: &str) -> Self {
        let selected = options
            .iter()
            .position(|(value, _)| *value == default)
            .unwrap_or(0);
        Self { options, selected }
    }

    pub fn value(&self) -> &'static str {
        self.options.get(self.selected).map(|o| o.0).unwrap_or("")
    }

    pub fn label(&self) -> &'static str {
        self.options.get(self.selected).map(|o| o.1).unwrap_or("")
    }

    pub fn cycle(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + 1) % self.options.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPTIONS: &[(&str, &str)] = &[
        ("monthly", "Monthly"),
        ("quarterly", "Quarterly"),
        ("yearly", "Yearly"),
    ];

    #[test]
    fn test_default_selection() {
        let select = PeriodSelect::new(OPTIONS, "quarterly");
        assert_eq!(select.value(), "quarterly");
        assert_eq!(select.label(), "Quarterly");
    }

    #[test]
    fn test_unknown_default_picks_first() {
        let select = PeriodSelect::new(OPTIONS, "weekly");
        assert_eq!(select.value(), "monthly");
    }

    #[test]
    fn test_cycle_wraps() {
        let mut select = PeriodSelect::new(OPTIONS, "yearly");
        select.cycle();
        assert_eq!(select.value(), "monthly");
    }

    #[test]
    fn test_empty_options() {
        let mut select = PeriodSelect::new(&[], "x");
        select.cycle();
        assert_eq!(select.value(), "");
        assert_eq!(select.label(), "");
    }
}
