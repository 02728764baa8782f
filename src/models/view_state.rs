use super::error::AppError;
use chrono::{DateTime, Utc};

/// Time range shown by the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Trailing window of raw samples, refreshed by polling
    #[default]
    Now,
    /// One bar per hour
    Day,
    /// One bar per day of the week
    Week,
    /// One bar per day of the month
    Month,
}

impl Mode {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Now => "now",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Now => "Now",
            Self::Day => "Day",
            Self::Week => "Week",
            Self::Month => "Month",
        }
    }

    pub fn all() -> &'static [Mode] {
        &[Self::Now, Self::Day, Self::Week, Self::Month]
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Mode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "now" => Ok(Self::Now),
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            _ => Err(AppError::ParseError(format!("Invalid mode: {s}"))),
        }
    }
}

/// Quantity plotted by the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    #[default]
    Energy,
    Price,
}

impl Unit {
    /// Segment used in the URL fragment.
    pub fn hash_code(&self) -> &'static str {
        match self {
            Self::Energy => "watt",
            Self::Price => "euros",
        }
    }

    /// Segment used in API request paths, which depends on the mode for energy.
    pub fn api_segment(&self, mode: Mode) -> &'static str {
        match (self, mode) {
            (Self::Energy, Mode::Now) => "watts",
            (Self::Energy, _) => "kwatthours",
            (Self::Price, _) => "euros",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Energy => "Energy",
            Self::Price => "Price",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Energy => Self::Price,
            Self::Price => Self::Energy,
        }
    }
}

/// Navigation state shared by the menu, the URL fragment and the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub unit: Unit,
    pub mode: Mode,
    /// Reference date of the view, `None` following the present
    pub date: Option<DateTime<Utc>>,
}

impl ViewState {
    pub fn new(unit: Unit, mode: Mode, date: Option<DateTime<Utc>>) -> Self {
        Self { unit, mode, date }
    }

    /// True when the view tracks the live trailing window.
    pub fn is_live(&self) -> bool {
        self.mode == Mode::Now && self.date.is_none()
    }

    /// Serializes to `#<unit>-<mode>[-<epoch seconds>]`.
    pub fn to_hash(&self) -> String {
        let mut hash = format!("#{}-{}", self.unit.hash_code(), self.mode.code());
        if let Some(date) = self.date {
            hash.push_str(&format!("-{}", date.timestamp()));
        }
        hash
    }

    /// Parses a URL fragment, defaulting every missing or unreadable component.
    pub fn from_hash(hash: &str) -> Self {
        let mut parts = hash.trim_start_matches('#').splitn(3, '-');

        let unit = match parts.next() {
            Some("euros") => Unit::Price,
            _ => Unit::Energy,
        };
        let mode = parts
            .next()
            .and_then(|m| m.parse::<Mode>().ok())
            .unwrap_or_default();
        let date = parts
            .next()
            .and_then(|s| s.parse::<i64>().ok())
            .and_then(|secs| DateTime::from_timestamp(secs, 0));

        Self { unit, mode, date }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_mode_parsing() {
        assert_eq!("week".parse::<Mode>().unwrap(), Mode::Week);
        assert!("year".parse::<Mode>().is_err());
        assert_eq!(Mode::Month.to_string(), "month");
    }

    #[test]
    fn test_unit_api_segment() {
        assert_eq!(Unit::Energy.api_segment(Mode::Now), "watts");
        assert_eq!(Unit::Energy.api_segment(Mode::Day), "kwatthours");
        assert_eq!(Unit::Price.api_segment(Mode::Now), "euros");
        assert_eq!(Unit::Price.api_segment(Mode::Month), "euros");
    }

    #[test]
    fn test_hash_format() {
        let date = Utc.with_ymd_and_hms(2014, 3, 2, 10, 0, 0).unwrap();
        let state = ViewState::new(Unit::Price, Mode::Day, Some(date));
        assert_eq!(state.to_hash(), format!("#euros-day-{}", date.timestamp()));
        assert_eq!(ViewState::default().to_hash(), "#watt-now");
    }

    #[test]
    fn test_hash_defaults() {
        assert_eq!(ViewState::from_hash(""), ViewState::default());
        assert_eq!(ViewState::from_hash("#euros"), ViewState::new(Unit::Price, Mode::Now, None));
        assert_eq!(
            ViewState::from_hash("#watt-decade-abc"),
            ViewState::new(Unit::Energy, Mode::Now, None)
        );
    }

    #[test]
    fn test_hash_with_date_before_epoch() {
        let date = Utc.with_ymd_and_hms(1969, 12, 1, 0, 0, 0).unwrap();
        let state = ViewState::new(Unit::Energy, Mode::Day, Some(date));
        assert_eq!(state.to_hash(), "#watt-day--2678400");
        assert_eq!(ViewState::from_hash("#watt-day--2678400"), state);
    }

    #[test]
    fn test_hash_round_trip() {
        let date = Utc.with_ymd_and_hms(2000, 6, 27, 12, 5, 45).unwrap();
        for unit in [Unit::Energy, Unit::Price] {
            for mode in Mode::all() {
                for date in [None, Some(date)] {
                    let state = ViewState::new(unit, *mode, date);
                    assert_eq!(ViewState::from_hash(&state.to_hash()), state);
                }
            }
        }
    }
}
