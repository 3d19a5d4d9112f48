//! Sensor records and validated observations
//!
//! A [`SensorRecord`] is what the upstream API hands us: coordinates may be
//! missing or garbage and any reading may be absent. An [`Observation`] is
//! a record whose coordinates passed validation; the interpolation pipeline
//! only ever sees observations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::metric::Metric;

/// Per-metric readings of one record. `None` means "not measured".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Readings {
    #[serde(default, alias = "temperatura", skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, alias = "humedad", skip_serializing_if = "Option::is_none")]
    pub air_humidity: Option<f64>,
    #[serde(default, alias = "luz", skip_serializing_if = "Option::is_none")]
    pub light: Option<f64>,
    #[serde(default, alias = "humedadSuelo", skip_serializing_if = "Option::is_none")]
    pub soil_moisture: Option<f64>,
    #[serde(default, alias = "salinidad", skip_serializing_if = "Option::is_none")]
    pub salinity: Option<f64>,
    #[serde(default, alias = "bateria", skip_serializing_if = "Option::is_none")]
    pub battery: Option<f64>,
}

impl Readings {
    /// Reading for `metric`, or `None` when absent or not finite.
    pub fn get(&self, metric: Metric) -> Option<f64> {
        let value = match metric {
            Metric::Temperature => self.temperature,
            Metric::AirHumidity => self.air_humidity,
            Metric::Light => self.light,
            Metric::SoilMoisture => self.soil_moisture,
            Metric::Salinity => self.salinity,
            Metric::Battery => self.battery,
        };
        value.filter(|v| v.is_finite())
    }

    pub fn set(&mut self, metric: Metric, value: Option<f64>) {
        let slot = match metric {
            Metric::Temperature => &mut self.temperature,
            Metric::AirHumidity => &mut self.air_humidity,
            Metric::Light => &mut self.light,
            Metric::SoilMoisture => &mut self.soil_moisture,
            Metric::Salinity => &mut self.salinity,
            Metric::Battery => &mut self.battery,
        };
        *slot = value;
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, metric: Metric, value: f64) -> Self {
        self.set(metric, Some(value));
        self
    }
}

/// A raw geotagged record as delivered by the sensor API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorRecord {
    #[serde(default)]
    pub device_id: String,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, alias = "latitud")]
    pub latitude: Option<f64>,
    #[serde(default, alias = "longitud")]
    pub longitude: Option<f64>,
    #[serde(flatten)]
    pub readings: Readings,
}

impl SensorRecord {
    pub fn new(device_id: impl Into<String>, latitude: Option<f64>, longitude: Option<f64>) -> Self {
        Self {
            device_id: device_id.into(),
            latitude,
            longitude,
            ..Default::default()
        }
    }

    pub fn with_reading(mut self, metric: Metric, value: f64) -> Self {
        self.readings.set(metric, Some(value));
        self
    }
}

/// Whether `(latitude, longitude)` is a finite point on the globe.
#[inline]
pub fn valid_coordinates(latitude: f64, longitude: f64) -> bool {
    latitude.is_finite()
        && longitude.is_finite()
        && latitude.abs() <= 90.0
        && longitude.abs() <= 180.0
}

/// A record with validated coordinates.
///
/// Invariant: `|latitude| <= 90`, `|longitude| <= 180`, both finite.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    latitude: f64,
    longitude: f64,
    device_id: String,
    timestamp: Option<DateTime<Utc>>,
    readings: Readings,
}

impl Observation {
    /// Create an observation, rejecting out-of-range coordinates.
    pub fn new(latitude: f64, longitude: f64, device_id: impl Into<String>) -> Result<Self> {
        if !valid_coordinates(latitude, longitude) {
            return Err(Error::InvalidParameter {
                name: "coordinates",
                value: format!("({latitude}, {longitude})"),
                reason: "latitude must be within ±90 and longitude within ±180".into(),
            });
        }
        Ok(Self {
            latitude,
            longitude,
            device_id: device_id.into(),
            timestamp: None,
            readings: Readings::default(),
        })
    }

    /// Validate a raw record. Returns `None` when coordinates are missing,
    /// not finite, or out of bounds.
    pub fn from_record(record: &SensorRecord) -> Option<Self> {
        let (lat, lng) = (record.latitude?, record.longitude?);
        if !valid_coordinates(lat, lng) {
            return None;
        }
        Some(Self {
            latitude: lat,
            longitude: lng,
            device_id: record.device_id.clone(),
            timestamp: record.timestamp,
            readings: record.readings,
        })
    }

    pub fn with_reading(mut self, metric: Metric, value: f64) -> Self {
        self.readings.set(metric, Some(value));
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    pub fn readings(&self) -> &Readings {
        &self.readings
    }

    /// Reading for `metric`, `None` when not measured.
    pub fn reading(&self, metric: Metric) -> Option<f64> {
        self.readings.get(metric)
    }
}
