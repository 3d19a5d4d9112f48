//! Output unit of the heat-map pipeline

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One normalized heat-map point.
///
/// Serializes as a `[lat, lng, value]` array, the shape heat-map layers
/// consume directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSample {
    pub latitude: f64,
    pub longitude: f64,
    /// Normalized value in [0, 1]
    pub value: f64,
}

impl GridSample {
    pub fn new(latitude: f64, longitude: f64, value: f64) -> Self {
        Self {
            latitude,
            longitude,
            value,
        }
    }

    pub fn as_triple(&self) -> [f64; 3] {
        [self.latitude, self.longitude, self.value]
    }
}

impl Serialize for GridSample {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_triple().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GridSample {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let [latitude, longitude, value] = <[f64; 3]>::deserialize(deserializer)?;
        Ok(Self::new(latitude, longitude, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_triple() {
        let json = serde_json::to_string(&GridSample::new(37.5, -5.25, 0.5)).unwrap();
        assert_eq!(json, "[37.5,-5.25,0.5]");
    }

    #[test]
    fn test_deserializes_from_triple() {
        let s: GridSample = serde_json::from_str("[1.0, 2.0, 0.75]").unwrap();
        assert_eq!(s, GridSample::new(1.0, 2.0, 0.75));
        assert!(serde_json::from_str::<GridSample>("[1.0, 2.0]").is_err());
    }
}
