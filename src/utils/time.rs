//! Calendar arithmetic on local dates.
//!
//! Period boundaries are rebuilt from local calendar dates instead of adding
//! fixed offsets, so a day is 23 or 25 hours long across a DST transition.

use chrono::{
    DateTime, Datelike, Duration, LocalResult, Months, NaiveDate, NaiveTime, TimeZone, Utc,
};

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn hour_length() -> Duration {
    Duration::hours(1)
}

pub fn day_length() -> Duration {
    Duration::days(1)
}

pub fn week_length() -> Duration {
    Duration::weeks(1)
}

/// Returns the first instant of `date` in `tz`.
fn local_midnight<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Tz> {
    let naive = date.and_time(NaiveTime::MIN);
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(d) | LocalResult::Ambiguous(d, _) => d,
        // Midnight skipped by a DST jump: the day starts at the first valid hour
        LocalResult::None => (1..=3)
            .find_map(|h| {
                tz.from_local_datetime(&(naive + Duration::hours(h)))
                    .earliest()
            })
            .unwrap_or_else(|| tz.from_utc_datetime(&naive)),
    }
}

fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn first_of_next_month(date: NaiveDate) -> NaiveDate {
    let first = first_of_month(date);
    first.checked_add_months(Months::new(1)).unwrap_or(first)
}

pub fn day_start<Tz: TimeZone>(date: &DateTime<Tz>) -> DateTime<Tz> {
    local_midnight(&date.timezone(), date.date_naive())
}

pub fn day_end<Tz: TimeZone>(date: &DateTime<Tz>) -> DateTime<Tz> {
    local_midnight(&date.timezone(), date.date_naive() + Duration::days(1))
}

/// Weeks start on Monday.
pub fn week_start<Tz: TimeZone>(date: &DateTime<Tz>) -> DateTime<Tz> {
    local_midnight(&date.timezone(), monday_of(date.date_naive()))
}

pub fn week_end<Tz: TimeZone>(date: &DateTime<Tz>) -> DateTime<Tz> {
    local_midnight(
        &date.timezone(),
        monday_of(date.date_naive()) + Duration::days(7),
    )
}

pub fn month_start<Tz: TimeZone>(date: &DateTime<Tz>) -> DateTime<Tz> {
    local_midnight(&date.timezone(), first_of_month(date.date_naive()))
}

pub fn month_end<Tz: TimeZone>(date: &DateTime<Tz>) -> DateTime<Tz> {
    local_midnight(&date.timezone(), first_of_next_month(date.date_naive()))
}

/// Number of calendar days in the month containing `date`.
pub fn days_in_month<Tz: TimeZone>(date: &DateTime<Tz>) -> u32 {
    let naive = date.date_naive();
    let days = first_of_next_month(naive)
        .signed_duration_since(first_of_month(naive))
        .num_days();
    u32::try_from(days).unwrap_or(0)
}

/// Nominal length of the month containing `date` (whole 24h days).
pub fn month_length<Tz: TimeZone>(date: &DateTime<Tz>) -> Duration {
    Duration::days(i64::from(days_in_month(date)))
}

/// Weekday name, Monday being index 0.
pub fn weekday_name(index: usize) -> &'static str {
    WEEKDAYS[index % WEEKDAYS.len()]
}

/// Month name, January being index 0.
pub fn month_name(index: usize) -> &'static str {
    MONTHS[index % MONTHS.len()]
}

fn day_and_month(date: NaiveDate) -> String {
    format!("{} {}", date.day(), month_name(date.month0() as usize))
}

/// "today", "yesterday", "last friday", falling back to "30 December".
pub fn human_day<Tz: TimeZone>(date: &DateTime<Tz>, now: &DateTime<Tz>) -> String {
    let day = date.date_naive();
    let today = now.date_naive();

    match day.signed_duration_since(today).num_days() {
        0 => return "today".to_string(),
        1 => return "tomorrow".to_string(),
        -1 => return "yesterday".to_string(),
        _ => {}
    }

    if monday_of(day) == monday_of(today) && date < now {
        let weekday = weekday_name(day.weekday().num_days_from_monday() as usize);
        return format!("last {}", weekday.to_lowercase());
    }

    day_and_month(day)
}

pub fn human_week<Tz: TimeZone>(date: &DateTime<Tz>, now: &DateTime<Tz>) -> String {
    let monday = monday_of(date.date_naive());

    match monday
        .signed_duration_since(monday_of(now.date_naive()))
        .num_days()
    {
        0 => "this week".to_string(),
        7 => "next week".to_string(),
        -7 => "last week".to_string(),
        _ => format!(
            "between {} and {}",
            day_and_month(monday),
            day_and_month(monday + Duration::days(6))
        ),
    }
}

pub fn human_month<Tz: TimeZone>(date: &DateTime<Tz>, now: &DateTime<Tz>) -> String {
    let day = date.date_naive();
    let today = now.date_naive();

    if day.year() == today.year() && day.month() == today.month() {
        "this month".to_string()
    } else {
        format!("in {}", month_name(day.month0() as usize))
    }
}

/// Relative for the last hour ("12s ago", "in 3min"), absolute afterwards.
pub fn human_time<Tz: TimeZone>(date: &DateTime<Tz>, now: &DateTime<Tz>) -> String {
    let diff = date.clone().signed_duration_since(now);
    let past = diff < Duration::zero();
    let seconds = diff.num_milliseconds().abs() as f64 / 1000.0;

    let relative = |amount: f64, suffix: &str| {
        if past {
            format!("{amount:.0}{suffix} ago")
        } else {
            format!("in {amount:.0}{suffix}")
        }
    };

    if seconds < 60.0 {
        return relative(seconds.round(), "s");
    }
    if seconds < 3600.0 {
        return relative((seconds / 60.0).round(), "min");
    }

    let clock = date.naive_local().format("%H:%M").to_string();
    if date.date_naive() == now.date_naive() {
        clock
    } else {
        format!("{} at {clock}", human_day(date, now))
    }
}

/// Wall clock corrected by the offset between the sensor host and this client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    offset: Duration,
}

impl Default for Clock {
    fn default() -> Self {
        Self {
            offset: Duration::zero(),
        }
    }
}

impl Clock {
    /// Builds a clock from the server epoch seconds observed at `client_now`.
    pub fn from_server_time(server_seconds: f64, client_now: DateTime<Utc>) -> Self {
        let server_ms = (server_seconds * 1000.0).round() as i64;
        Self {
            offset: Duration::milliseconds(server_ms - client_now.timestamp_millis()),
        }
    }

    pub fn offset(&self) -> Duration {
        self.offset
    }

    /// Server time corresponding to a client instant.
    pub fn at(&self, client_now: DateTime<Utc>) -> DateTime<Utc> {
        client_now + self.offset
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.at(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[test]
    fn test_fixed_lengths() {
        assert_eq!(hour_length().num_seconds(), 3600);
        assert_eq!(day_length().num_seconds(), 86_400);
        assert_eq!(week_length().num_seconds(), 604_800);
    }

    #[test]
    fn test_month_lengths_2000() {
        assert_eq!(month_length(&at(2000, 1, 31, 0, 0, 0)), Duration::days(31));
        assert_eq!(month_length(&at(2000, 2, 29, 0, 0, 0)), Duration::days(29));
        assert_eq!(month_length(&at(2000, 3, 31, 0, 0, 0)), Duration::days(31));
        assert_eq!(month_length(&at(2000, 4, 30, 0, 0, 0)), Duration::days(30));
        assert_eq!(month_length(&at(1900, 2, 10, 0, 0, 0)), Duration::days(28));
    }

    #[test]
    fn test_boundaries_mid_year() {
        let d = at(2000, 6, 27, 12, 5, 45);
        assert_eq!(day_start(&d), at(2000, 6, 27, 0, 0, 0));
        assert_eq!(day_end(&d), at(2000, 6, 28, 0, 0, 0));
        assert_eq!(week_start(&d), at(2000, 6, 26, 0, 0, 0));
        assert_eq!(week_end(&d), at(2000, 7, 3, 0, 0, 0));
        assert_eq!(month_start(&d), at(2000, 6, 1, 0, 0, 0));
        assert_eq!(month_end(&d), at(2000, 7, 1, 0, 0, 0));
        assert_eq!(week_end(&d) - week_start(&d), Duration::days(7));
    }

    #[test]
    fn test_boundaries_across_year_end() {
        let d = at(1999, 12, 30, 18, 12, 9);
        assert_eq!(day_start(&d), at(1999, 12, 30, 0, 0, 0));
        assert_eq!(day_end(&d), at(1999, 12, 31, 0, 0, 0));
        assert_eq!(week_start(&d), at(1999, 12, 27, 0, 0, 0));
        assert_eq!(week_end(&d), at(2000, 1, 3, 0, 0, 0));
        assert_eq!(month_start(&d), at(1999, 12, 1, 0, 0, 0));
        assert_eq!(month_end(&d), at(2000, 1, 1, 0, 0, 0));
        assert_eq!(month_end(&d) - month_start(&d), month_length(&d));
    }

    #[test]
    fn test_week_start_on_sunday_and_monday() {
        // 2000-07-02 is a Sunday, 2000-07-03 a Monday
        assert_eq!(week_start(&at(2000, 7, 2, 23, 0, 0)), at(2000, 6, 26, 0, 0, 0));
        assert_eq!(week_start(&at(2000, 7, 3, 0, 0, 0)), at(2000, 7, 3, 0, 0, 0));
    }

    #[test]
    fn test_names() {
        assert_eq!(weekday_name(3), "Thursday");
        assert_eq!(month_name(11), "December");
    }

    #[test]
    fn test_human_day() {
        let now = at(2000, 6, 29, 15, 0, 0); // Thursday
        assert_eq!(human_day(&at(2000, 6, 29, 1, 0, 0), &now), "today");
        assert_eq!(human_day(&at(2000, 6, 30, 1, 0, 0), &now), "tomorrow");
        assert_eq!(human_day(&at(2000, 6, 28, 1, 0, 0), &now), "yesterday");
        assert_eq!(human_day(&at(2000, 6, 26, 9, 0, 0), &now), "last monday");
        assert_eq!(human_day(&at(1999, 12, 30, 18, 0, 0), &now), "30 December");
    }

    #[test]
    fn test_human_week_and_month() {
        let now = at(2000, 6, 29, 15, 0, 0);
        assert_eq!(human_week(&at(2000, 6, 26, 0, 0, 0), &now), "this week");
        assert_eq!(human_week(&at(2000, 7, 4, 0, 0, 0), &now), "next week");
        assert_eq!(human_week(&at(2000, 6, 20, 0, 0, 0), &now), "last week");
        assert_eq!(
            human_week(&at(1999, 12, 30, 18, 12, 9), &now),
            "between 27 December and 2 January"
        );
        assert_eq!(human_month(&at(2000, 6, 2, 0, 0, 0), &now), "this month");
        assert_eq!(human_month(&at(1999, 12, 30, 0, 0, 0), &now), "in December");
    }

    #[test]
    fn test_human_time() {
        let now = at(2000, 6, 29, 15, 0, 0);
        assert_eq!(human_time(&at(2000, 6, 29, 14, 59, 48), &now), "12s ago");
        assert_eq!(human_time(&at(2000, 6, 29, 15, 3, 0), &now), "in 3min");
        assert_eq!(human_time(&at(2000, 6, 29, 9, 7, 0), &now), "09:07");
        assert_eq!(
            human_time(&at(2000, 6, 28, 22, 30, 0), &now),
            "yesterday at 22:30"
        );
    }

    #[test]
    fn test_clock_offset() {
        let client = at(2000, 6, 29, 15, 0, 0);
        let server_seconds = client.timestamp() as f64 + 90.5;
        let clock = Clock::from_server_time(server_seconds, client);

        assert_eq!(clock.offset(), Duration::milliseconds(90_500));
        assert_eq!(clock.at(client), client + Duration::milliseconds(90_500));
        assert_eq!(Clock::default().offset(), Duration::zero());
    }
}
