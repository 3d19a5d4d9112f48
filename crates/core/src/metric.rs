//! Agronomic metrics and their static description table
//!
//! Every metric the sensors report has a fixed physical range used for
//! normalization into [0, 1], a base distance-decay exponent for
//! interpolation, and default color-scale anchors for whoever renders the
//! result. The table is loaded once and never mutated.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A metric reported by field sensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    /// Soil/air temperature in °C
    #[serde(alias = "temperatura")]
    Temperature,
    /// Relative air humidity in %
    #[serde(alias = "humedad")]
    AirHumidity,
    /// Illuminance in lux
    #[serde(alias = "luz")]
    Light,
    /// Volumetric soil moisture in %
    #[serde(alias = "humedadSuelo")]
    SoilMoisture,
    /// Electrical conductivity in dS/m
    #[serde(alias = "salinidad")]
    Salinity,
    /// Sensor battery charge in %
    #[serde(alias = "bateria")]
    Battery,
}

/// Static description of one metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricSpec {
    /// Canonical identifier
    pub name: &'static str,
    /// Physical unit of raw readings
    pub unit: &'static str,
    /// Lower end of the physical range (maps to 0.0)
    pub min: f64,
    /// Upper end of the physical range (maps to 1.0)
    pub max: f64,
    /// IDW decay exponent before intensity adjustment.
    /// Metrics with more local variability get a sharper falloff.
    pub base_decay_exponent: f64,
    /// Value substituted for a missing reading ("zero signal")
    pub neutral_default: f64,
    /// Default color-scale anchors `(raw value, hex color)`, owned by rendering
    pub color_anchors: &'static [(f64, &'static str)],
}

const TEMPERATURE: MetricSpec = MetricSpec {
    name: "temperature",
    unit: "°C",
    min: 0.0,
    max: 40.0,
    base_decay_exponent: 2.0,
    neutral_default: 0.0,
    color_anchors: &[
        (0.0, "#ffffb2"),
        (10.0, "#fecc5c"),
        (20.0, "#fd8d3c"),
        (30.0, "#f03b20"),
        (40.0, "#bd0026"),
    ],
};

const AIR_HUMIDITY: MetricSpec = MetricSpec {
    name: "airHumidity",
    unit: "%",
    min: 0.0,
    max: 100.0,
    base_decay_exponent: 2.0,
    neutral_default: 0.0,
    color_anchors: &[(0.0, "#eff3ff"), (50.0, "#6baed6"), (100.0, "#08519c")],
};

const LIGHT: MetricSpec = MetricSpec {
    name: "light",
    unit: "lx",
    min: 0.0,
    max: 10_000.0,
    base_decay_exponent: 1.5,
    neutral_default: 0.0,
    color_anchors: &[(0.0, "#fff7bc"), (5_000.0, "#fec44f"), (10_000.0, "#d95f0e")],
};

const SOIL_MOISTURE: MetricSpec = MetricSpec {
    name: "soilMoisture",
    unit: "%",
    min: 0.0,
    max: 100.0,
    base_decay_exponent: 2.5,
    neutral_default: 0.0,
    color_anchors: &[(0.0, "#a6611a"), (50.0, "#dfc27d"), (100.0, "#018571")],
};

const SALINITY: MetricSpec = MetricSpec {
    name: "salinity",
    unit: "dS/m",
    min: 0.0,
    max: 8.0,
    base_decay_exponent: 3.0,
    neutral_default: 0.0,
    color_anchors: &[
        (0.0, "#4ade80"),
        (2.0, "#facc15"),
        (4.0, "#f97316"),
        (8.0, "#ef4444"),
    ],
};

const BATTERY: MetricSpec = MetricSpec {
    name: "battery",
    unit: "%",
    min: 0.0,
    max: 100.0,
    base_decay_exponent: 2.0,
    neutral_default: 0.0,
    color_anchors: &[(0.0, "#ef4444"), (50.0, "#facc15"), (100.0, "#4ade80")],
};

impl Metric {
    /// All supported metrics, in display order.
    pub const ALL: &'static [Metric] = &[
        Metric::Temperature,
        Metric::AirHumidity,
        Metric::Light,
        Metric::SoilMoisture,
        Metric::Salinity,
        Metric::Battery,
    ];

    /// Static description of this metric.
    pub fn spec(&self) -> &'static MetricSpec {
        match self {
            Metric::Temperature => &TEMPERATURE,
            Metric::AirHumidity => &AIR_HUMIDITY,
            Metric::Light => &LIGHT,
            Metric::SoilMoisture => &SOIL_MOISTURE,
            Metric::Salinity => &SALINITY,
            Metric::Battery => &BATTERY,
        }
    }

    /// Canonical identifier (`temperature`, `soilMoisture`, ...).
    pub fn name(&self) -> &'static str {
        self.spec().name
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "temperature" | "temperatura" => Ok(Metric::Temperature),
            "airHumidity" | "humidity" | "humedad" => Ok(Metric::AirHumidity),
            "light" | "luz" => Ok(Metric::Light),
            "soilMoisture" | "humedadSuelo" => Ok(Metric::SoilMoisture),
            "salinity" | "salinidad" => Ok(Metric::Salinity),
            "battery" | "bateria" => Ok(Metric::Battery),
            other => Err(Error::UnknownMetric(other.to_string())),
        }
    }
}

impl MetricSpec {
    /// Rescale a raw reading into [0, 1] using the physical range.
    ///
    /// Values outside the range clamp to the nearest end; non-finite input
    /// maps to 0.
    pub fn normalize(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return 0.0;
        }
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }

    /// Inverse of [`normalize`](Self::normalize) for values in [0, 1].
    pub fn denormalize(&self, normalized: f64) -> f64 {
        self.min + normalized.clamp(0.0, 1.0) * (self.max - self.min)
    }
}

/// Soil salinity severity bands (electrical conductivity, dS/m).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalinityClass {
    /// < 2 dS/m
    Optimal,
    /// 2 – 4 dS/m
    Moderate,
    /// 4 – 8 dS/m
    High,
    /// ≥ 8 dS/m
    Severe,
}

impl SalinityClass {
    pub const ALL: &'static [SalinityClass] = &[
        SalinityClass::Optimal,
        SalinityClass::Moderate,
        SalinityClass::High,
        SalinityClass::Severe,
    ];

    /// Classify a conductivity reading.
    pub fn classify(ds_per_m: f64) -> Self {
        if ds_per_m < 2.0 {
            SalinityClass::Optimal
        } else if ds_per_m < 4.0 {
            SalinityClass::Moderate
        } else if ds_per_m < 8.0 {
            SalinityClass::High
        } else {
            SalinityClass::Severe
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SalinityClass::Optimal => "< 2 (optimal)",
            SalinityClass::Moderate => "2 - 4 (moderate)",
            SalinityClass::High => "4 - 8 (high)",
            SalinityClass::Severe => "> 8 (severe)",
        }
    }
}
