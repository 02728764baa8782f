//! Application context: the menu, the current graph and the request
//! bookkeeping that ties them to the sensor API.
//!
//! All transitions go through [`Dashboard::apply`], which the UI drives as a
//! Yew reducer. Network access stays outside: the dashboard only describes
//! the next request ([`RequestPlan`]) and absorbs its results.

use chrono::{DateTime, Duration, Local, TimeZone, Utc};

use super::graph::{Graph, GraphStyle, bar_legend};
use super::measurement::{Sample, Tariff};
use super::menu::{Menu, Transition};
use super::view_state::{Mode, Unit, ViewState};
use crate::config::Config;
use crate::utils::time::{
    Clock, day_end, day_length, day_start, days_in_month, hour_length, human_day, human_month,
    human_time, human_week, month_end, month_start, week_length, week_start,
};

/// Everything needed to issue one series request.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestPlan {
    /// Graph generation the response belongs to
    pub generation: u64,
    pub mode: Mode,
    pub unit: Unit,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub step_seconds: f64,
    /// Fraction of a month covered by the view, applied to the base price
    pub modifier: f64,
    /// Date the bar legends are computed from
    pub reference: DateTime<Utc>,
}

impl RequestPlan {
    /// `/<sensor>/get/<unit>/by_time/<start>/<end>/<step>`, times in float seconds.
    pub fn path(&self, sensor_id: u32) -> String {
        format!(
            "/{sensor_id}/get/{}/by_time/{}/{}/{}",
            self.unit.api_segment(self.mode),
            epoch_seconds(&self.start),
            epoch_seconds(&self.end),
            self.step_seconds
        )
    }

    /// The tariff threshold is drawn on energy graphs of the live window.
    pub fn wants_threshold(&self) -> bool {
        self.mode == Mode::Now && self.unit == Unit::Energy
    }

    /// Number of buckets the requested range holds.
    pub fn bucket_count(&self) -> usize {
        if self.step_seconds <= 0.0 {
            return 0;
        }
        let span = seconds(self.end.signed_duration_since(self.start));
        (span / self.step_seconds).round().max(0.0) as usize
    }

    /// History prices include the subscription share of the period.
    pub fn wants_base_price(&self) -> bool {
        self.mode != Mode::Now && self.unit == Unit::Price
    }
}

fn epoch_seconds(date: &DateTime<Utc>) -> f64 {
    date.timestamp_millis() as f64 / 1000.0
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    /// Server clock is known and the initial view restored from the hash
    Initialize { clock: Clock, view: ViewState },
    /// View decoded from an external hash change
    Restore(ViewState),
    SetMode(Mode),
    SetUnit(Unit),
    ToggleUnit,
    SetDate(Option<DateTime<Utc>>),
    Previous,
    Next,
    ToggleAutoUpdate,
    /// Measured width of the graph container in pixels
    Resized(u32),
    Loaded {
        generation: u64,
        samples: Vec<Sample>,
        base_price: f64,
    },
    /// Incremental samples fetched by a live poll
    Appended {
        generation: u64,
        samples: Vec<Sample>,
        until: DateTime<Utc>,
    },
    LoadFailed { generation: u64 },
    Threshold { generation: u64, value: f64 },
    RateChanged(Tariff),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    menu: Menu,
    graph: Graph,
    clock: Clock,
    generation: u64,
    tariff: Option<Tariff>,
    last_call: Option<DateTime<Utc>>,
    pixel_width: u32,
    timestep: f64,
    ready: bool,
    request: Option<RequestPlan>,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(Config::TIMESTEP_SECONDS, Config::DEFAULT_GRAPH_WIDTH_PX)
    }
}

impl Dashboard {
    pub fn new(timestep: f64, pixel_width: u32) -> Self {
        let menu = Menu::default();
        let view = menu.view();
        Self {
            graph: Graph::new(GraphStyle::for_view(view.unit, view.mode, timestep), pixel_width),
            menu,
            clock: Clock::default(),
            generation: 0,
            tariff: None,
            last_call: None,
            pixel_width,
            timestep,
            ready: false,
            request: None,
        }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn view(&self) -> ViewState {
        self.menu.view()
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn tariff(&self) -> Option<Tariff> {
        self.tariff
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Series request of the current generation.
    pub fn request(&self) -> Option<&RequestPlan> {
        self.request.as_ref()
    }

    pub fn last_call(&self) -> Option<DateTime<Utc>> {
        self.last_call
    }

    /// Width of the live window: one timestep per visible bar plus lookback.
    pub fn now_window(&self) -> Duration {
        let buckets = self.graph.capacity() as f64 + f64::from(Config::NOW_LOOKBACK_EXTRA_BUCKETS);
        Duration::milliseconds((self.timestep * buckets * 1000.0).round() as i64)
    }

    /// Applies an action at the current server time in the browser's time zone.
    pub fn apply(&mut self, action: DashboardAction) -> bool {
        let now = self.clock.now();
        self.apply_at(action, now, &Local)
    }

    /// Applies an action, returning whether anything changed.
    pub fn apply_at<Tz: TimeZone>(&mut self, action: DashboardAction, now: DateTime<Utc>, tz: &Tz) -> bool {
        match action {
            DashboardAction::Initialize { clock, view } => {
                self.clock = clock;
                self.restore(view, now);
                self.ready = true;
                self.reload(now, tz);
                true
            }
            DashboardAction::Restore(view) => {
                if !self.ready || view == self.menu.view() {
                    return false;
                }
                if self.restore(view, now).changed() {
                    self.reload(now, tz);
                    true
                } else {
                    false
                }
            }
            DashboardAction::SetMode(mode) => {
                let transition = self.menu.set_mode(mode, true);
                self.settle(transition, now, tz)
            }
            DashboardAction::SetUnit(unit) => {
                let transition = self.menu.set_unit(unit, true);
                self.settle(transition, now, tz)
            }
            DashboardAction::ToggleUnit => {
                let transition = self.menu.toggle_unit(true);
                self.settle(transition, now, tz)
            }
            DashboardAction::SetDate(date) => {
                let window = self.now_window();
                let transition = self.menu.set_date(date, now, window, true);
                self.settle(transition, now, tz)
            }
            DashboardAction::Previous => {
                let window = self.now_window();
                let transition = self.menu.previous(now, window);
                self.settle(transition, now, tz)
            }
            DashboardAction::Next => {
                let window = self.now_window();
                let transition = self.menu.next(now, window);
                self.settle(transition, now, tz)
            }
            DashboardAction::ToggleAutoUpdate => {
                self.menu.toggle_auto_update();
                true
            }
            DashboardAction::Resized(width) => {
                if width == 0 || width == self.pixel_width {
                    return false;
                }
                self.pixel_width = width;
                self.graph.set_pixel_width(width);
                true
            }
            DashboardAction::Loaded {
                generation,
                samples,
                base_price,
            } => {
                if generation != self.generation {
                    return false;
                }
                let Some(plan) = self.request.clone() else {
                    return false;
                };
                self.absorb_series(&plan, &samples, base_price, tz);
                true
            }
            DashboardAction::Appended {
                generation,
                samples,
                until,
            } => {
                if generation != self.generation || !self.menu.view().is_live() {
                    return false;
                }
                for value in samples.iter().filter_map(Sample::value) {
                    self.graph.add_bar(Some(value), true, "");
                    self.graph.set_overview(Some(value));
                }
                self.last_call = Some(until);
                true
            }
            DashboardAction::LoadFailed { generation } => {
                if generation != self.generation {
                    return false;
                }
                self.graph.stop_loading();
                true
            }
            DashboardAction::Threshold { generation, value } => {
                if generation != self.generation || value <= 0.0 {
                    return false;
                }
                self.graph.add_absolute_graduation(value);
                true
            }
            DashboardAction::RateChanged(tariff) => {
                if self.tariff == Some(tariff) {
                    return false;
                }
                self.tariff = Some(tariff);
                true
            }
        }
    }

    /// Incremental request for the live window, `None` when no poll is due.
    pub fn poll_plan(&self, now: DateTime<Utc>) -> Option<RequestPlan> {
        let view = self.menu.view();
        if !self.ready || !view.is_live() || !self.menu.is_updated() || self.graph.is_loading() {
            return None;
        }
        let last_call = self.last_call?;
        let start = last_call.max(now - self.now_window());
        if start >= now {
            return None;
        }

        Some(RequestPlan {
            generation: self.generation,
            mode: Mode::Now,
            unit: view.unit,
            start,
            end: now,
            step_seconds: self.timestep,
            modifier: 0.0,
            reference: now,
        })
    }

    /// Replays a view with notifications suppressed.
    fn restore(&mut self, view: ViewState, now: DateTime<Utc>) -> Transition {
        let window = self.now_window();
        self.menu
            .set_unit(view.unit, false)
            .then(self.menu.set_mode(view.mode, false))
            .then(self.menu.set_date(view.date, now, window, false))
    }

    fn settle<Tz: TimeZone>(&mut self, transition: Transition, now: DateTime<Utc>, tz: &Tz) -> bool {
        if transition.fires() && self.ready {
            self.reload(now, tz);
        }
        transition.changed()
    }

    /// Discards the graph and prepares the request of a new generation.
    fn reload<Tz: TimeZone>(&mut self, now: DateTime<Utc>, tz: &Tz) {
        let view = self.menu.view();
        let style = GraphStyle::for_view(view.unit, view.mode, self.timestep);

        let mut graph = Graph::new(style, self.pixel_width);
        graph.set_autoremove(view.is_live());
        graph.init();
        graph.set_overview(None);
        self.graph = graph;

        self.generation += 1;
        let (plan, label) = self.plan_in(now, tz);
        self.graph.set_overview_label(label);
        self.graph.start_loading();
        self.last_call = Some(plan.end);
        self.request = Some(plan);
    }

    /// Request range, bucket width and overview label of the current view.
    pub fn plan_in<Tz: TimeZone>(&self, now: DateTime<Utc>, tz: &Tz) -> (RequestPlan, String) {
        let view = self.menu.view();
        let reference = view.date.unwrap_or(now);
        let local = reference.with_timezone(tz);
        let local_now = now.with_timezone(tz);

        let (start, end, step, modifier, label) = match view.mode {
            Mode::Now => {
                let start = reference - self.now_window();
                let label = if view.date.is_none() {
                    "Current consumption".to_string()
                } else {
                    format!(
                        "Consumption between {} and {}",
                        human_time(&start.with_timezone(tz), &local_now),
                        human_time(&local, &local_now)
                    )
                };
                (start, reference, self.timestep, 0.0, label)
            }
            Mode::Day => (
                day_start(&local).with_timezone(&Utc),
                day_end(&local).with_timezone(&Utc),
                seconds(hour_length()),
                1.0 / f64::from(days_in_month(&local)),
                format!("Consumption {}", human_day(&local, &local_now)),
            ),
            Mode::Week => {
                let start = week_start(&local).with_timezone(&Utc);
                (
                    start,
                    start + week_length(),
                    seconds(day_length()),
                    7.0 / f64::from(days_in_month(&local)),
                    format!("Consumption {}", human_week(&local, &local_now)),
                )
            }
            Mode::Month => (
                month_start(&local).with_timezone(&Utc),
                month_end(&local).with_timezone(&Utc),
                seconds(day_length()),
                1.0,
                format!("Consumption {}", human_month(&local, &local_now)),
            ),
        };

        let plan = RequestPlan {
            generation: self.generation,
            mode: view.mode,
            unit: view.unit,
            start,
            end,
            step_seconds: step,
            modifier,
            reference,
        };
        (plan, label)
    }

    fn absorb_series<Tz: TimeZone>(&mut self, plan: &RequestPlan, samples: &[Sample], base_price: f64, tz: &Tz) {
        let mode = plan.mode;
        // An empty history series still shows one "no data" bar per bucket
        let missing;
        let samples = if mode != Mode::Now && samples.is_empty() {
            missing = vec![Sample(None); plan.bucket_count()];
            missing.as_slice()
        } else {
            samples
        };
        if mode != Mode::Now {
            self.graph.fit_to(samples.len());
        }

        let reference = plan.reference.with_timezone(tz);
        let summary = self
            .graph
            .feed_series(samples, mode, |index| bar_legend(mode, &reference, index));

        let overview = match summary.last_defined {
            None => None,
            Some(last) if mode == Mode::Now => Some(last),
            Some(_) if plan.wants_base_price() => Some(summary.sum + base_price * plan.modifier),
            Some(_) => Some(summary.sum),
        };
        self.graph.set_overview(overview);
        self.graph.stop_loading();
    }
}

fn seconds(duration: Duration) -> f64 {
    duration.num_milliseconds() as f64 / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2014, 3, 12, 15, 0, 0).unwrap()
    }

    fn ready_dashboard(view: ViewState) -> Dashboard {
        // 140px holds 10 bars, so the live window is 11 timesteps
        let mut dashboard = Dashboard::new(8.0, 140);
        dashboard.apply_at(
            DashboardAction::Initialize {
                clock: Clock::default(),
                view,
            },
            now(),
            &Utc,
        );
        dashboard
    }

    fn samples(values: &[Option<f64>]) -> Vec<Sample> {
        values.iter().copied().map(Sample::from).collect()
    }

    #[test]
    fn test_initialize_plans_live_window() {
        let dashboard = ready_dashboard(ViewState::default());
        let plan = dashboard.request().unwrap();

        assert_eq!(dashboard.generation(), 1);
        assert!(dashboard.graph().is_loading());
        assert_eq!(dashboard.now_window(), Duration::seconds(88));
        assert_eq!(plan.end, now());
        assert_eq!(plan.start, now() - Duration::seconds(88));
        assert_eq!(
            plan.path(3),
            format!("/3/get/watts/by_time/{}/{}/8", now().timestamp() - 88, now().timestamp())
        );
        assert_eq!(dashboard.graph().overview_label(), "Current consumption");
    }

    #[test]
    fn test_day_plan() {
        let date = Utc.with_ymd_and_hms(2014, 3, 2, 10, 0, 0).unwrap();
        let dashboard = ready_dashboard(ViewState::new(Unit::Energy, Mode::Day, Some(date)));
        let plan = dashboard.request().unwrap();

        assert_eq!(plan.start, Utc.with_ymd_and_hms(2014, 3, 2, 0, 0, 0).unwrap());
        assert_eq!(plan.end, Utc.with_ymd_and_hms(2014, 3, 3, 0, 0, 0).unwrap());
        assert_eq!(plan.step_seconds, 3600.0);
        assert!((plan.modifier - 1.0 / 31.0).abs() < 1e-12);
        assert!(plan.path(1).contains("/get/kwatthours/by_time/"));
        assert_eq!(dashboard.graph().overview_label(), "Consumption 2 March");
    }

    #[test]
    fn test_week_plan_spans_seven_days() {
        let date = Utc.with_ymd_and_hms(2014, 3, 5, 10, 0, 0).unwrap();
        let dashboard = ready_dashboard(ViewState::new(Unit::Energy, Mode::Week, Some(date)));
        let plan = dashboard.request().unwrap();

        assert_eq!(plan.start, Utc.with_ymd_and_hms(2014, 3, 3, 0, 0, 0).unwrap());
        assert_eq!(plan.end - plan.start, Duration::days(7));
        assert_eq!(plan.step_seconds, 86400.0);
        assert_eq!(dashboard.graph().overview_label(), "Consumption last week");
    }

    #[test]
    fn test_unit_switch_in_day_mode_discards_bars() {
        let mut dashboard = ready_dashboard(ViewState::new(Unit::Energy, Mode::Day, None));
        dashboard.apply_at(
            DashboardAction::Loaded {
                generation: 1,
                samples: samples(&[Some(1.0), Some(2.0), None]),
                base_price: 0.0,
            },
            now(),
            &Utc,
        );
        assert_eq!(dashboard.graph().bar_count(), 3);

        assert!(dashboard.apply_at(DashboardAction::SetUnit(Unit::Price), now(), &Utc));

        assert_eq!(dashboard.graph().bar_count(), 0);
        assert!(dashboard.graph().is_loading());
        assert_eq!(dashboard.graph().style().unit_label, "€");
        let plan = dashboard.request().unwrap();
        assert_eq!(plan.generation, 2);
        assert!(plan.path(1).contains("/get/euros/by_time/"));
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut dashboard = ready_dashboard(ViewState::default());
        dashboard.apply_at(DashboardAction::SetMode(Mode::Day), now(), &Utc);

        let changed = dashboard.apply_at(
            DashboardAction::Loaded {
                generation: 1,
                samples: samples(&[Some(5.0)]),
                base_price: 0.0,
            },
            now(),
            &Utc,
        );

        assert!(!changed);
        assert_eq!(dashboard.graph().bar_count(), 0);
        assert!(dashboard.graph().is_loading());
    }

    #[test]
    fn test_history_overview_adds_base_price_share() {
        let mut dashboard = ready_dashboard(ViewState::new(Unit::Price, Mode::Month, None));
        dashboard.apply_at(
            DashboardAction::Loaded {
                generation: 1,
                samples: samples(&[Some(1.5), None, Some(2.5)]),
                base_price: 10.0,
            },
            now(),
            &Utc,
        );

        assert_eq!(dashboard.graph().overview(), Some(14.0));
        assert!(!dashboard.graph().is_loading());
        let legends: Vec<String> = dashboard.graph().bars().map(|b| b.legend.clone()).collect();
        assert_eq!(legends, vec!["1 March", "2 March", "3 March"]);
    }

    #[test]
    fn test_energy_history_ignores_base_price() {
        let mut dashboard = ready_dashboard(ViewState::new(Unit::Energy, Mode::Day, None));
        dashboard.apply_at(
            DashboardAction::Loaded {
                generation: 1,
                samples: samples(&[Some(1.0), Some(2.0)]),
                base_price: 10.0,
            },
            now(),
            &Utc,
        );
        assert_eq!(dashboard.graph().overview(), Some(3.0));
    }

    #[test]
    fn test_empty_history_series_shows_missing_buckets() {
        let mut dashboard = ready_dashboard(ViewState::new(Unit::Price, Mode::Day, None));
        dashboard.apply_at(
            DashboardAction::Loaded {
                generation: 1,
                samples: Vec::new(),
                base_price: 10.0,
            },
            now(),
            &Utc,
        );

        assert_eq!(dashboard.graph().bar_count(), 24);
        assert!(dashboard.graph().bars().all(|b| !b.is_defined()));
        assert_eq!(dashboard.graph().overview(), None);
        assert_eq!(dashboard.graph().overview_text(), None);
        assert!(!dashboard.graph().is_loading());
    }

    #[test]
    fn test_all_missing_history_series_has_no_overview() {
        let mut dashboard = ready_dashboard(ViewState::new(Unit::Energy, Mode::Week, None));
        dashboard.apply_at(
            DashboardAction::Loaded {
                generation: 1,
                samples: vec![Sample(None); 7],
                base_price: 0.0,
            },
            now(),
            &Utc,
        );

        assert_eq!(dashboard.graph().bar_count(), 7);
        assert_eq!(dashboard.graph().overview(), None);
    }

    #[test]
    fn test_bucket_counts() {
        let day = ready_dashboard(ViewState::new(Unit::Energy, Mode::Day, None));
        assert_eq!(day.request().unwrap().bucket_count(), 24);
        let week = ready_dashboard(ViewState::new(Unit::Energy, Mode::Week, None));
        assert_eq!(week.request().unwrap().bucket_count(), 7);
        let month = ready_dashboard(ViewState::new(Unit::Energy, Mode::Month, None));
        assert_eq!(month.request().unwrap().bucket_count(), 31);
    }

    #[test]
    fn test_failed_poll_keeps_window() {
        let mut dashboard = ready_dashboard(ViewState::default());
        dashboard.apply_at(
            DashboardAction::Loaded {
                generation: 1,
                samples: samples(&[Some(100.0)]),
                base_price: 0.0,
            },
            now(),
            &Utc,
        );

        let first = dashboard.poll_plan(now() + Duration::seconds(16)).unwrap();
        assert_eq!(first.start, now());

        // Nothing is dispatched for a failed poll
        let retry = dashboard.poll_plan(now() + Duration::seconds(32)).unwrap();
        assert_eq!(retry.start, now());
        assert_eq!(retry.end, now() + Duration::seconds(32));
        assert_eq!(dashboard.last_call(), Some(now()));
    }

    #[test]
    fn test_restore_is_idempotent() {
        let view = ViewState::new(Unit::Price, Mode::Week, None);
        let mut dashboard = ready_dashboard(view);

        assert!(!dashboard.apply_at(DashboardAction::Restore(view), now(), &Utc));
        assert_eq!(dashboard.generation(), 1);

        let other = ViewState::new(Unit::Energy, Mode::Month, None);
        assert!(dashboard.apply_at(DashboardAction::Restore(other), now(), &Utc));
        assert_eq!(dashboard.generation(), 2);
        assert_eq!(dashboard.view(), other);
    }

    #[test]
    fn test_restore_before_ready_is_ignored() {
        let mut dashboard = Dashboard::new(8.0, 140);
        let view = ViewState::new(Unit::Price, Mode::Day, None);
        assert!(!dashboard.apply_at(DashboardAction::Restore(view), now(), &Utc));
        assert_eq!(dashboard.request(), None);
    }

    #[test]
    fn test_poll_appends_live_samples() {
        let mut dashboard = ready_dashboard(ViewState::default());
        assert_eq!(dashboard.poll_plan(now()), None);

        dashboard.apply_at(
            DashboardAction::Loaded {
                generation: 1,
                samples: samples(&[Some(100.0), Some(120.0)]),
                base_price: 0.0,
            },
            now(),
            &Utc,
        );
        let later = now() + Duration::seconds(16);
        let poll = dashboard.poll_plan(later).unwrap();
        assert_eq!(poll.start, now());
        assert_eq!(poll.end, later);

        dashboard.apply_at(
            DashboardAction::Appended {
                generation: poll.generation,
                samples: samples(&[Some(130.0), None]),
                until: poll.end,
            },
            later,
            &Utc,
        );

        assert_eq!(dashboard.graph().bar_count(), 3);
        assert_eq!(dashboard.graph().overview(), Some(130.0));
        assert_eq!(dashboard.last_call(), Some(later));
    }

    #[test]
    fn test_no_poll_when_paused_or_in_history() {
        let mut dashboard = ready_dashboard(ViewState::default());
        dashboard.apply_at(
            DashboardAction::Loaded {
                generation: 1,
                samples: Vec::new(),
                base_price: 0.0,
            },
            now(),
            &Utc,
        );
        let later = now() + Duration::seconds(16);

        dashboard.apply_at(DashboardAction::ToggleAutoUpdate, now(), &Utc);
        assert_eq!(dashboard.poll_plan(later), None);

        dashboard.apply_at(DashboardAction::ToggleAutoUpdate, now(), &Utc);
        dashboard.apply_at(DashboardAction::Previous, now(), &Utc);
        assert_eq!(dashboard.poll_plan(later), None);
        assert!(dashboard.graph().overview_label().starts_with("Consumption between"));
    }

    #[test]
    fn test_threshold_for_live_energy() {
        let mut dashboard = ready_dashboard(ViewState::default());
        assert!(dashboard.request().unwrap().wants_threshold());

        assert!(dashboard.apply_at(DashboardAction::Threshold { generation: 1, value: 6000.0 }, now(), &Utc));
        assert_eq!(dashboard.graph().graduations().len(), 5);
        assert!(!dashboard.apply_at(DashboardAction::Threshold { generation: 0, value: 6000.0 }, now(), &Utc));
    }

    #[test]
    fn test_rate_change_deduplicated() {
        let mut dashboard = Dashboard::default();
        assert!(dashboard.apply_at(DashboardAction::RateChanged(Tariff::Night), now(), &Utc));
        assert!(!dashboard.apply_at(DashboardAction::RateChanged(Tariff::Night), now(), &Utc));
        assert_eq!(dashboard.tariff(), Some(Tariff::Night));
    }

    #[test]
    fn test_resize_changes_capacity() {
        let mut dashboard = Dashboard::new(8.0, 140);
        assert!(dashboard.apply_at(DashboardAction::Resized(280), now(), &Utc));
        assert_eq!(dashboard.graph().capacity(), 20);
        assert!(!dashboard.apply_at(DashboardAction::Resized(280), now(), &Utc));
    }
}
