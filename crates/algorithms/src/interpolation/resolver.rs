//! Parameter resolver
//!
//! The single home of the tuning constants. Grid size is looked up by
//! observation-density band and resolution tier; the decay exponent is the
//! metric's base exponent shifted by intensity tier.

use agroheat_core::{Error, InterpolationConfig, Metric, Result, Tier};

/// Observation-count bands used to pick grid fineness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DensityBand {
    /// Fewer than 15 observations
    Sparse,
    /// 15 to 49 observations
    Moderate,
    /// 50 or more observations
    Dense,
}

impl DensityBand {
    pub fn from_count(observation_count: usize) -> Self {
        match observation_count {
            0..=14 => DensityBand::Sparse,
            15..=49 => DensityBand::Moderate,
            _ => DensityBand::Dense,
        }
    }

    fn index(&self) -> usize {
        match self {
            DensityBand::Sparse => 0,
            DensityBand::Moderate => 1,
            DensityBand::Dense => 2,
        }
    }
}

/// Grid intervals per axis, `[density band][resolution tier]`.
/// Coarser meshes for sparse data avoid a fine grid the data can't justify.
const GRID_SIZES: [[usize; 3]; 3] = [
    // Low, Medium, High
    [30, 40, 50], // Sparse
    [40, 55, 65], // Moderate
    [50, 65, 80], // Dense
];

/// Decay exponent shift per intensity tier.
const INTENSITY_SHIFT: [f64; 3] = [-0.5, 0.0, 0.5];

/// Concrete interpolation parameters for one invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedParams {
    /// Intervals per axis; the lattice has `(grid_size + 1)²` nodes
    pub grid_size: usize,
    /// IDW power, always positive
    pub decay_exponent: f64,
    pub density: DensityBand,
}

/// Shift `base` by the intensity tier, rejecting a non-positive result.
pub fn decay_exponent(base: f64, intensity: Tier) -> Result<f64> {
    let exponent = base + INTENSITY_SHIFT[intensity.index()];
    if !exponent.is_finite() || exponent <= 0.0 {
        return Err(Error::InvalidParameter {
            name: "decay_exponent",
            value: exponent.to_string(),
            reason: "must be a positive finite number".into(),
        });
    }
    Ok(exponent)
}

/// Resolve tiers, metric and observation count into grid size and exponent.
///
/// Deterministic and side-effect free.
pub fn resolve(
    config: &InterpolationConfig,
    metric: Metric,
    observation_count: usize,
) -> Result<ResolvedParams> {
    let density = DensityBand::from_count(observation_count);
    let grid_size = GRID_SIZES[density.index()][config.resolution.index()];
    let decay_exponent = decay_exponent(metric.spec().base_decay_exponent, config.intensity)?;

    Ok(ResolvedParams {
        grid_size,
        decay_exponent,
        density,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(resolution: Tier, intensity: Tier) -> InterpolationConfig {
        InterpolationConfig::new(resolution, intensity, true)
    }

    #[test]
    fn test_density_bands() {
        assert_eq!(DensityBand::from_count(0), DensityBand::Sparse);
        assert_eq!(DensityBand::from_count(14), DensityBand::Sparse);
        assert_eq!(DensityBand::from_count(15), DensityBand::Moderate);
        assert_eq!(DensityBand::from_count(49), DensityBand::Moderate);
        assert_eq!(DensityBand::from_count(50), DensityBand::Dense);
    }

    #[test]
    fn test_grid_sizes_bounded_and_monotonic() {
        for &res in Tier::ALL {
            let mut last = 0;
            for count in [3, 20, 200] {
                let p = resolve(&config(res, Tier::Medium), Metric::Temperature, count).unwrap();
                assert!((30..=80).contains(&p.grid_size));
                assert!(p.grid_size >= last);
                last = p.grid_size;
            }
        }
        let finest = resolve(&config(Tier::High, Tier::High), Metric::Salinity, 1000).unwrap();
        assert_eq!(finest.grid_size, 80);
        let coarsest = resolve(&config(Tier::Low, Tier::Low), Metric::Salinity, 2).unwrap();
        assert_eq!(coarsest.grid_size, 30);
    }

    #[test]
    fn test_intensity_shifts_exponent() {
        let base = Metric::SoilMoisture.spec().base_decay_exponent;
        let low = resolve(&config(Tier::Medium, Tier::Low), Metric::SoilMoisture, 10).unwrap();
        let med = resolve(&config(Tier::Medium, Tier::Medium), Metric::SoilMoisture, 10).unwrap();
        let high = resolve(&config(Tier::Medium, Tier::High), Metric::SoilMoisture, 10).unwrap();
        assert_eq!(low.decay_exponent, base - 0.5);
        assert_eq!(med.decay_exponent, base);
        assert_eq!(high.decay_exponent, base + 0.5);
    }

    #[test]
    fn test_all_metrics_resolve_positive() {
        for &metric in Metric::ALL {
            for &tier in Tier::ALL {
                let p = resolve(&config(tier, tier), metric, 5).unwrap();
                assert!(p.decay_exponent > 0.0);
            }
        }
    }

    #[test]
    fn test_non_positive_exponent_rejected() {
        assert!(decay_exponent(0.3, Tier::Low).is_err());
        assert!(decay_exponent(0.5, Tier::Low).is_err());
        assert!(decay_exponent(f64::NAN, Tier::Medium).is_err());
        assert!(decay_exponent(0.3, Tier::Medium).is_ok());
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let cfg = config(Tier::High, Tier::Low);
        assert_eq!(
            resolve(&cfg, Metric::Light, 33).unwrap(),
            resolve(&cfg, Metric::Light, 33).unwrap()
        );
    }
}
