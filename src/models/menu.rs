use chrono::{DateTime, Duration, Months, Utc};

use super::view_state::{Mode, Unit, ViewState};

/// Outcome of a menu transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Unchanged,
    /// State changed with notifications suppressed
    Silent,
    /// State changed and listeners must be notified
    Fire,
}

impl Transition {
    fn new(changed: bool, notify: bool) -> Self {
        match (changed, notify) {
            (false, _) => Self::Unchanged,
            (true, false) => Self::Silent,
            (true, true) => Self::Fire,
        }
    }

    pub fn changed(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }

    pub fn fires(&self) -> bool {
        matches!(self, Self::Fire)
    }

    /// Combines two consecutive transitions.
    pub fn then(self, next: Transition) -> Transition {
        match (self, next) {
            (Self::Fire, _) | (_, Self::Fire) => Self::Fire,
            (Self::Silent, _) | (_, Self::Silent) => Self::Silent,
            _ => Self::Unchanged,
        }
    }
}

/// Mode, unit and date selection plus the auto-update toggle.
#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    view: ViewState,
    auto_update: bool,
}

impl Default for Menu {
    fn default() -> Self {
        Self {
            view: ViewState::default(),
            auto_update: true,
        }
    }
}

impl Menu {
    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn mode(&self) -> Mode {
        self.view.mode
    }

    pub fn unit(&self) -> Unit {
        self.view.unit
    }

    pub fn date(&self) -> Option<DateTime<Utc>> {
        self.view.date
    }

    pub fn is_updated(&self) -> bool {
        self.auto_update
    }

    pub fn toggle_auto_update(&mut self) -> bool {
        self.auto_update = !self.auto_update;
        self.auto_update
    }

    /// Switching mode goes back to the present.
    pub fn set_mode(&mut self, mode: Mode, notify: bool) -> Transition {
        if mode == self.view.mode {
            return Transition::Unchanged;
        }
        self.view.mode = mode;
        self.view.date = None;
        Transition::new(true, notify)
    }

    pub fn set_unit(&mut self, unit: Unit, notify: bool) -> Transition {
        if unit == self.view.unit {
            return Transition::Unchanged;
        }
        self.view.unit = unit;
        Transition::new(true, notify)
    }

    pub fn toggle_unit(&mut self, notify: bool) -> Transition {
        self.set_unit(self.view.unit.toggled(), notify)
    }

    /// Sets the reference date, truncated to the second.
    ///
    /// Dates later than half a live window before `now` collapse to `None`,
    /// the live view.
    pub fn set_date(
        &mut self,
        date: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
        now_window: Duration,
        notify: bool,
    ) -> Transition {
        let date = date
            .and_then(|d| DateTime::from_timestamp(d.timestamp(), 0))
            .filter(|d| *d <= now - now_window / 2);

        if date == self.view.date {
            return Transition::Unchanged;
        }
        self.view.date = date;
        Transition::new(true, notify)
    }

    /// Moves one period back in time.
    pub fn previous(&mut self, now: DateTime<Utc>, now_window: Duration) -> Transition {
        let reference = self.view.date.unwrap_or(now);
        let target = shift(reference, self.view.mode, now_window, false);
        self.set_date(Some(target), now, now_window, true)
    }

    /// Moves one period forward, back to the live view once the present is reached.
    pub fn next(&mut self, now: DateTime<Utc>, now_window: Duration) -> Transition {
        let Some(reference) = self.view.date else {
            return Transition::Unchanged;
        };
        let target = shift(reference, self.view.mode, now_window, true);
        let target = if self.view.mode != Mode::Now && target > now {
            None
        } else {
            Some(target)
        };
        self.set_date(target, now, now_window, true)
    }
}

fn shift(date: DateTime<Utc>, mode: Mode, now_window: Duration, forward: bool) -> DateTime<Utc> {
    let step = match mode {
        Mode::Now => now_window,
        Mode::Day => Duration::days(1),
        Mode::Week => Duration::weeks(1),
        Mode::Month => {
            let months = Months::new(1);
            let shifted = if forward {
                date.checked_add_months(months)
            } else {
                date.checked_sub_months(months)
            };
            return shifted.unwrap_or(date);
        }
    };
    if forward { date + step } else { date - step }
}
