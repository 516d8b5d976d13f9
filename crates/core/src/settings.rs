use crate::sanitize::sanitize_prefix;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scheme {
    #[default]
    Numeric,
    Alphabetical,
    Mixed,
}

impl Scheme {
    /// Maps the menu answer to a scheme. Anything other than `1` or `2` selects
    /// the mixed scheme.
    pub fn from_choice(choice: &str) -> Self {
        match choice.trim() {
            "1" => Scheme::Numeric,
            "2" => Scheme::Alphabetical,
            _ => Scheme::Mixed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Scheme::Numeric => "Numerical",
            Scheme::Alphabetical => "Alphabetical",
            Scheme::Mixed => "Mixed",
        }
    }

    /// Number of distinct tokens the scheme can produce, `None` when unbounded.
    pub fn capacity(self) -> Option<usize> {
        match self {
            Scheme::Numeric => None,
            Scheme::Alphabetical => Some(26 * 26),
            Scheme::Mixed => Some(26 * 10),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateMode {
    #[default]
    Off,
    DayMonth,
    YearDayMonth,
}

impl DateMode {
    pub fn from_toggles(date_specific: bool, include_year: bool) -> Self {
        match (date_specific, include_year) {
            (false, _) => DateMode::Off,
            (true, false) => DateMode::DayMonth,
            (true, true) => DateMode::YearDayMonth,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DateMode::Off => "N/A",
            DateMode::DayMonth => "Day-Month",
            DateMode::YearDayMonth => "Year-Day-Month",
        }
    }

    pub fn is_enabled(self) -> bool {
        self != DateMode::Off
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenameSettings {
    pub prefix: String,
    pub scheme: Scheme,
    pub date_mode: DateMode,
}

impl RenameSettings {
    pub fn new(prefix: &str, scheme: Scheme, date_mode: DateMode) -> Self {
        Self {
            prefix: sanitize_prefix(prefix),
            scheme,
            date_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_choice_falls_back_to_mixed() {
        assert_eq!(Scheme::from_choice("1"), Scheme::Numeric);
        assert_eq!(Scheme::from_choice(" 2 "), Scheme::Alphabetical);
        assert_eq!(Scheme::from_choice("3"), Scheme::Mixed);
        assert_eq!(Scheme::from_choice("banana"), Scheme::Mixed);
        assert_eq!(Scheme::from_choice(""), Scheme::Mixed);
    }

    #[test]
    fn year_toggle_is_ignored_without_date_naming() {
        assert_eq!(DateMode::from_toggles(false, true), DateMode::Off);
        assert_eq!(DateMode::from_toggles(true, false), DateMode::DayMonth);
        assert_eq!(DateMode::from_toggles(true, true), DateMode::YearDayMonth);
    }

    #[test]
    fn labels_match_log_header_wording() {
        assert_eq!(Scheme::Mixed.label(), "Mixed");
        assert_eq!(DateMode::Off.label(), "N/A");
        assert_eq!(DateMode::YearDayMonth.label(), "Year-Day-Month");
    }

    #[test]
    fn new_sanitizes_prefix() {
        let settings = RenameSettings::new("  Day/Z ", Scheme::Numeric, DateMode::Off);
        assert_eq!(settings.prefix, "Day_Z");
    }
}
