//! Caller-supplied interpolation configuration
//!
//! The configuration is read-only input to every invocation; the engine
//! never mutates or persists it. Tier parsing is strict: an unrecognized
//! tier is a configuration error, never silently replaced by a default.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Three-level knob used for both resolution and intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Tier {
    Low,
    #[default]
    Medium,
    High,
}

impl Tier {
    pub const ALL: &'static [Tier] = &[Tier::Low, Tier::Medium, Tier::High];

    /// Column index into tier-keyed lookup tables.
    pub fn index(&self) -> usize {
        match self {
            Tier::Low => 0,
            Tier::Medium => 1,
            Tier::High => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Low => "low",
            Tier::Medium => "medium",
            Tier::High => "high",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Tier::Low),
            "medium" => Ok(Tier::Medium),
            "high" => Ok(Tier::High),
            _ => Err(Error::UnknownTier(s.to_string())),
        }
    }
}

impl TryFrom<String> for Tier {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Resolution/intensity/smoothing selection for one heat-map invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterpolationConfig {
    /// Grid fineness
    #[serde(rename = "resolutionTier", alias = "resolution", default)]
    pub resolution: Tier,
    /// Decay exponent shift; higher means sharper localization
    #[serde(rename = "intensityTier", alias = "intensity", default)]
    pub intensity: Tier,
    /// Apply exponential distance damping on top of the power law
    #[serde(default = "default_smoothing")]
    pub smoothing: bool,
}

fn default_smoothing() -> bool {
    true
}

impl Default for InterpolationConfig {
    fn default() -> Self {
        Self {
            resolution: Tier::Medium,
            intensity: Tier::Medium,
            smoothing: true,
        }
    }
}

impl InterpolationConfig {
    pub fn new(resolution: Tier, intensity: Tier, smoothing: bool) -> Self {
        Self {
            resolution,
            intensity,
            smoothing,
        }
    }

    /// Build from string tiers, failing fast on anything unrecognized.
    pub fn parse(resolution: &str, intensity: &str, smoothing: bool) -> Result<Self> {
        Ok(Self::new(resolution.parse()?, intensity.parse()?, smoothing))
    }
}
