//! Observation filter
//!
//! Partial or noisy sensor data is normal operation, so records with
//! unusable coordinates are dropped silently rather than reported.

use std::collections::HashMap;

use agroheat_core::{Observation, SensorRecord};

/// Keep records whose coordinates are present, finite and on the globe.
///
/// Order is preserved. An empty input yields an empty output.
pub fn filter_valid(records: &[SensorRecord]) -> Vec<Observation> {
    records.iter().filter_map(Observation::from_record).collect()
}

/// Keep only the most recent observation of each device.
///
/// Dated observations beat undated ones; between equally dated (or both
/// undated) observations the later one in input order wins. The survivors
/// keep their relative input order.
pub fn latest_per_device(observations: &[Observation]) -> Vec<Observation> {
    let mut latest: HashMap<&str, usize> = HashMap::new();

    for (idx, obs) in observations.iter().enumerate() {
        latest
            .entry(obs.device_id())
            .and_modify(|kept| {
                if obs.timestamp() >= observations[*kept].timestamp() {
                    *kept = idx;
                }
            })
            .or_insert(idx);
    }

    let mut keep: Vec<usize> = latest.into_values().collect();
    keep.sort_unstable();
    keep.into_iter().map(|idx| observations[idx].clone()).collect()
}
