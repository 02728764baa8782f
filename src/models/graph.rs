//! Bar chart state: bars, vertical scale, axis graduations and the overview
//! readout. Rendering lives in `components::graph`; everything here is plain
//! data so it can be exercised without a browser.

use std::collections::VecDeque;

use chrono::{DateTime, Datelike, TimeZone};

use super::measurement::Sample;
use super::view_state::{Mode, Unit};
use crate::config::Config;
use crate::utils::time::{month_name, weekday_name};

/// Relative positions of the default axis graduations.
const GRADUATIONS: [f64; 4] = [0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0];

/// Initial scale maximum, grown by the first bar.
const INITIAL_MAX: f64 = 1e-6;

/// Headroom kept above an absolute graduation.
const ABSOLUTE_HEADROOM: f64 = 1.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphKind {
    Energy,
    Price,
}

impl GraphKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            GraphKind::Energy => "energy",
            GraphKind::Price => "price",
        }
    }
}

/// Color band of a height expressed in percent of the scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTier {
    Low,
    Mid,
    High,
}

impl ColorTier {
    pub fn from_percent(percent: f64) -> Self {
        if percent < 33.3 {
            ColorTier::Low
        } else if percent < 66.7 {
            ColorTier::Mid
        } else {
            ColorTier::High
        }
    }
}

/// Rendering rules of one graph variant.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphStyle {
    pub kind: GraphKind,
    pub unit_label: &'static str,
    /// Multiplier applied to server values before they are displayed
    pub value_factor: f64,
}

impl GraphStyle {
    /// Live prices come in euros per timestep and are shown in cents per minute.
    pub fn for_view(unit: Unit, mode: Mode, timestep_seconds: f64) -> Self {
        match (unit, mode) {
            (Unit::Energy, Mode::Now) => Self {
                kind: GraphKind::Energy,
                unit_label: "W",
                value_factor: 1.0,
            },
            (Unit::Energy, _) => Self {
                kind: GraphKind::Energy,
                unit_label: "kWh",
                value_factor: 1.0,
            },
            (Unit::Price, Mode::Now) => Self {
                kind: GraphKind::Price,
                unit_label: "c/min",
                value_factor: 60.0 / timestep_seconds * 100.0,
            },
            (Unit::Price, _) => Self {
                kind: GraphKind::Price,
                unit_label: "€",
                value_factor: 1.0,
            },
        }
    }

    /// Energy keeps one decimal, prices are rounded to the cent.
    pub fn round(&self, value: f64) -> f64 {
        match self.kind {
            GraphKind::Energy => (value * 10.0).round() / 10.0,
            GraphKind::Price => (value * 100.0).round() / 100.0,
        }
    }

    pub fn color_class(&self, tier: ColorTier) -> &'static str {
        match (self.kind, tier) {
            (GraphKind::Energy, ColorTier::Low) => "yellow",
            (GraphKind::Energy, ColorTier::Mid) => "orange",
            (GraphKind::Energy, ColorTier::High) => "red",
            (GraphKind::Price, ColorTier::Low) => "light-blue",
            (GraphKind::Price, ColorTier::Mid) => "blue",
            (GraphKind::Price, ColorTier::High) => "dark-blue",
        }
    }
}

/// Current maximum of the vertical axis. Only grows during a graph's lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphScale {
    pub max_value: f64,
    pub unit_label: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    /// Stable key for list rendering
    pub id: u64,
    /// Displayed value, `None` for a bucket without data
    pub value: Option<f64>,
    /// Height in percent of the scale
    pub height: f64,
    pub tier: ColorTier,
    pub animated: bool,
    pub legend: String,
}

impl Bar {
    pub fn is_defined(&self) -> bool {
        self.value.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GraduationKind {
    /// Fraction of the scale maximum
    Relative(f64),
    /// Fixed value, such as the tariff threshold
    Absolute(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Graduation {
    pub kind: GraduationKind,
    /// Position from the bottom in percent
    pub bottom: f64,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GraphState {
    Loading,
    #[default]
    Idle,
}

/// Totals gathered while feeding a series into the graph.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SeriesSummary {
    /// Sum of the defined samples
    pub sum: f64,
    pub last_defined: Option<f64>,
    pub interpolated: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    style: GraphStyle,
    scale: GraphScale,
    bars: VecDeque<Bar>,
    graduations: Vec<Graduation>,
    overview: Option<f64>,
    overview_label: String,
    state: GraphState,
    pixel_width: u32,
    rect_width: f64,
    rect_margin: f64,
    autoremove: bool,
    rescale_count: u32,
    next_bar_id: u64,
}

impl Graph {
    pub fn new(style: GraphStyle, pixel_width: u32) -> Self {
        let scale = GraphScale {
            max_value: INITIAL_MAX,
            unit_label: style.unit_label,
        };
        Self {
            style,
            scale,
            bars: VecDeque::new(),
            graduations: Vec::new(),
            overview: None,
            overview_label: String::new(),
            state: GraphState::Idle,
            pixel_width,
            rect_width: Config::RECT_WIDTH_PX,
            rect_margin: Config::RECT_MARGIN_PX,
            autoremove: true,
            rescale_count: 0,
            next_bar_id: 0,
        }
    }

    /// Clears bars and draws the default graduations.
    pub fn init(&mut self) {
        self.bars.clear();
        self.graduations.clear();
        for position in GRADUATIONS {
            self.add_graduation(GraduationKind::Relative(position));
        }
    }

    pub fn style(&self) -> &GraphStyle {
        &self.style
    }

    pub fn scale(&self) -> &GraphScale {
        &self.scale
    }

    pub fn bars(&self) -> impl Iterator<Item = &Bar> {
        self.bars.iter()
    }

    pub fn bar_count(&self) -> usize {
        self.bars.len()
    }

    pub fn graduations(&self) -> &[Graduation] {
        &self.graduations
    }

    pub fn rect_width(&self) -> f64 {
        self.rect_width
    }

    pub fn rescale_count(&self) -> u32 {
        self.rescale_count
    }

    pub fn set_autoremove(&mut self, autoremove: bool) {
        self.autoremove = autoremove;
    }

    pub fn set_pixel_width(&mut self, pixel_width: u32) {
        self.pixel_width = pixel_width;
    }

    /// Number of bars that fit in the container.
    pub fn capacity(&self) -> usize {
        (f64::from(self.pixel_width) / (self.rect_width + self.rect_margin)).floor() as usize
    }

    /// Resizes bars so that `count` of them fill the container.
    pub fn fit_to(&mut self, count: usize) {
        if count > 0 {
            self.rect_width = (f64::from(self.pixel_width) / count as f64 - self.rect_margin).max(1.0);
        }
    }

    pub fn start_loading(&mut self) {
        self.state = GraphState::Loading;
    }

    pub fn stop_loading(&mut self) {
        self.state = GraphState::Idle;
    }

    pub fn is_loading(&self) -> bool {
        self.state == GraphState::Loading
    }

    /// Appends a bar, growing the scale first when `value` exceeds it.
    pub fn add_bar(&mut self, value: Option<f64>, animated: bool, legend: impl Into<String>) {
        let value = value.map(|v| v * self.style.value_factor);
        let magnitude = value.unwrap_or(0.0);

        if magnitude > self.scale.max_value {
            self.rescale(magnitude / self.scale.max_value);
        }

        let height = magnitude / self.scale.max_value * 100.0;
        self.bars.push_back(Bar {
            id: self.next_bar_id,
            value,
            height,
            tier: ColorTier::from_percent(height),
            animated,
            legend: legend.into(),
        });
        self.next_bar_id += 1;

        if self.autoremove && self.bars.len() > self.capacity() + Config::EVICTION_SLACK {
            self.bars.pop_front();
        }
    }

    pub fn remove_last_bar(&mut self) -> Option<Bar> {
        self.bars.pop_back()
    }

    /// Multiplies the scale maximum by `ratio`, resizing and recoloring every
    /// bar and relabeling every graduation in place.
    pub fn rescale(&mut self, ratio: f64) {
        if !ratio.is_finite() || ratio <= 0.0 {
            return;
        }

        self.scale.max_value *= ratio;
        for bar in &mut self.bars {
            bar.height /= ratio;
            bar.tier = ColorTier::from_percent(bar.height);
        }
        for index in 0..self.graduations.len() {
            self.refresh_graduation(index);
        }
        self.rescale_count += 1;
    }

    /// Adds a graduation at a fixed value, growing the scale to keep it visible.
    pub fn add_absolute_graduation(&mut self, value: f64) {
        let needed = value * ABSOLUTE_HEADROOM;
        if needed > self.scale.max_value {
            self.rescale(needed / self.scale.max_value);
        }
        self.add_graduation(GraduationKind::Absolute(value));
    }

    fn add_graduation(&mut self, kind: GraduationKind) {
        self.graduations.push(Graduation {
            kind,
            bottom: 0.0,
            label: String::new(),
        });
        self.refresh_graduation(self.graduations.len() - 1);
    }

    fn refresh_graduation(&mut self, index: usize) {
        let max = self.scale.max_value;
        let (bottom, label) = match self.graduations[index].kind {
            GraduationKind::Relative(position) => {
                (position * 100.0, self.format(position * max))
            }
            GraduationKind::Absolute(value) => (value / max * 100.0, self.format(value)),
        };
        let graduation = &mut self.graduations[index];
        graduation.bottom = bottom;
        graduation.label = label;
    }

    /// Sets the headline value, `None` blanks it.
    pub fn set_overview(&mut self, value: Option<f64>) {
        self.overview = value.map(|v| v * self.style.value_factor);
    }

    pub fn set_overview_label(&mut self, label: impl Into<String>) {
        self.overview_label = label.into();
    }

    pub fn overview(&self) -> Option<f64> {
        self.overview
    }

    pub fn overview_label(&self) -> &str {
        &self.overview_label
    }

    pub fn overview_text(&self) -> Option<String> {
        self.overview.map(|v| self.format(v))
    }

    /// Rounded value followed by the scale unit.
    pub fn format(&self, value: f64) -> String {
        format!("{} {}", self.style.round(value), self.scale.unit_label)
    }

    /// Color class of the overview, banded against the current scale.
    pub fn overview_class(&self) -> Option<&'static str> {
        self.overview.map(|v| {
            let tier = ColorTier::from_percent(v / self.scale.max_value * 100.0);
            self.style.color_class(tier)
        })
    }

    /// Appends a whole series.
    ///
    /// In `Mode::Now` a single missing bucket bounded by defined samples is
    /// replaced by the mean of its neighbours, and a trailing missing bucket
    /// is skipped, so the leading edge of the live chart shows no false gap.
    pub fn feed_series<F>(&mut self, samples: &[Sample], mode: Mode, legend: F) -> SeriesSummary
    where
        F: Fn(usize) -> String,
    {
        let mut summary = SeriesSummary::default();
        let mut before_last: Option<f64> = None;
        let mut last: Option<f64> = None;

        for (index, sample) in samples.iter().enumerate() {
            match sample.value() {
                Some(value) => {
                    if mode == Mode::Now && last.is_none() {
                        if let Some(previous) = before_last {
                            self.remove_last_bar();
                            self.add_bar(Some((previous + value) / 2.0), false, legend(index - 1));
                            summary.interpolated += 1;
                        }
                    }
                    self.add_bar(Some(value), false, legend(index));
                    summary.sum += value;
                    summary.last_defined = Some(value);
                    before_last = last;
                    last = Some(value);
                }
                None if mode != Mode::Now || index + 1 < samples.len() => {
                    self.add_bar(None, false, legend(index));
                    before_last = last;
                    last = None;
                }
                None => {}
            }
        }

        summary
    }
}

/// Hover legend of the `index`-th bar of a view.
pub fn bar_legend<Tz: TimeZone>(mode: Mode, date: &DateTime<Tz>, index: usize) -> String {
    match mode {
        Mode::Now => String::new(),
        Mode::Day => format!("{index}h - {}h", index + 1),
        Mode::Week => weekday_name(index).to_string(),
        Mode::Month => format!("{} {}", index + 1, month_name(date.month0() as usize)),
    }
}
