use serde::Deserialize;

/// Electricity pricing period reported alongside measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tariff {
    Day,
    Night,
    #[serde(other)]
    Unknown,
}

impl Tariff {
    pub fn label(&self) -> &'static str {
        match self {
            Tariff::Day => "Day rate",
            Tariff::Night => "Night rate",
            Tariff::Unknown => "",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Tariff::Day => "rate-day",
            Tariff::Night => "rate-night",
            Tariff::Unknown => "rate-hidden",
        }
    }
}

/// Wire form of a bucket: `null` or `{"value": ...}`.
#[derive(Debug, Deserialize)]
pub struct RawSample {
    pub value: Option<f64>,
}

/// One time bucket of a measurement series. `None` marks a bucket without data.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "Option<RawSample>")]
pub struct Sample(pub Option<f64>);

impl From<Option<RawSample>> for Sample {
    fn from(raw: Option<RawSample>) -> Self {
        Self(raw.and_then(|r| r.value))
    }
}

impl Sample {
    pub fn value(&self) -> Option<f64> {
        self.0
    }

    pub fn is_defined(&self) -> bool {
        self.0.is_some()
    }
}

impl From<Option<f64>> for Sample {
    fn from(value: Option<f64>) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Sensor {
    pub id: u32,
    pub name: String,
}

/// Linear energy to price conversion per tariff period.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct ProviderInfo {
    #[serde(default, rename = "day_slope_watt_euros")]
    pub day_slope: f64,
    #[serde(default, rename = "day_constant_watt_euros")]
    pub day_constant: f64,
    #[serde(default, rename = "night_slope_watt_euros")]
    pub night_slope: f64,
    #[serde(default, rename = "night_constant_watt_euros")]
    pub night_constant: f64,
    #[serde(default)]
    pub threshold: f64,
}

/// Coefficients of `price = slope * energy + constant`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Conversion {
    pub slope: f64,
    pub constant: f64,
}

impl ProviderInfo {
    /// Coefficients for a tariff period. Unknown periods use the day rate.
    pub fn conversion(&self, tariff: Tariff) -> Conversion {
        match tariff {
            Tariff::Night => Conversion {
                slope: self.night_slope,
                constant: self.night_constant,
            },
            Tariff::Day | Tariff::Unknown => Conversion {
                slope: self.day_slope,
                constant: self.day_constant,
            },
        }
    }
}

/// Response envelope shared by every API endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
    pub rate: Option<Tariff>,
}
