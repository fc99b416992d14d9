//! Core/bypass mixer.

use crate::common::require_loss_fraction;
use crate::error::ComponentResult;
use crate::station::StationState;
use serde::{Deserialize, Serialize};
use tf_core::units::{k, kgps, pa};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MixerConfig {
    /// Fractional stagnation pressure loss in [0, 1)
    pub pressure_loss: f64,
}

impl Default for MixerConfig {
    fn default() -> Self {
        Self {
            pressure_loss: 0.02,
        }
    }
}

impl MixerConfig {
    pub fn validate(&self) -> ComponentResult<()> {
        require_loss_fraction(self.pressure_loss, "mixer pressure loss")?;
        Ok(())
    }
}

/// Constant-cp mixer for the core (post-LPT) and bypass (post-fan) streams.
///
/// ```text
/// ṁ_mix  = ṁ_core + ṁ_bypass
/// Tt_mix = (ṁ_core·Tt_core + ṁ_bypass·Tt_bypass) / ṁ_mix
/// Pt_mix = min(Pt_core, Pt_bypass) · (1 - Δp)
/// ```
///
/// The lower stream pressure governs so mixing never raises total pressure.
#[derive(Clone, Debug)]
pub struct Mixer {
    pub name: String,
    pub config: MixerConfig,
}

impl Mixer {
    pub fn new(name: impl Into<String>, config: MixerConfig) -> ComponentResult<Self> {
        config.validate()?;
        Ok(Self {
            name: name.into(),
            config,
        })
    }

    pub fn mix(&self, core: &StationState, bypass: &StationState) -> ComponentResult<StationState> {
        core.require_flow()?;
        bypass.require_flow()?;

        let m_core = core.mdot_kgps();
        let m_bypass = bypass.mdot_kgps();
        let mdot = m_core + m_bypass;
        let tt = (m_core * core.tt_k() + m_bypass * bypass.tt_k()) / mdot;
        let pt = core.pt_pa().min(bypass.pt_pa()) * (1.0 - self.config.pressure_loss);

        StationState::with_fuel(
            k(tt),
            pa(pt),
            kgps(mdot),
            kgps(core.fuel_kgps() + bypass.fuel_kgps()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixer() -> Mixer {
        Mixer::new("mixer", MixerConfig::default()).unwrap()
    }

    #[test]
    fn mixed_flow_is_sum_of_inputs() {
        let core = StationState::with_fuel(k(1237.3), pa(4.66e5), kgps(102.4), kgps(2.5)).unwrap();
        let bypass = StationState::from_si(459.2, 4.053e5, 44.9).unwrap();
        let out = mixer().mix(&core, &bypass).unwrap();

        assert_eq!(out.mdot_kgps(), 102.4 + 44.9);
        assert_eq!(out.fuel_kgps(), 2.5);
    }

    #[test]
    fn mixed_temperature_is_mass_weighted() {
        let core = StationState::from_si(1200.0, 5.0e5, 30.0).unwrap();
        let bypass = StationState::from_si(400.0, 4.0e5, 10.0).unwrap();
        let out = mixer().mix(&core, &bypass).unwrap();
        assert!((out.tt_k() - 1000.0).abs() < 1e-9);
        assert!(out.tt_k() < core.tt_k() && out.tt_k() > bypass.tt_k());
    }

    #[test]
    fn lower_pressure_governs() {
        let core = StationState::from_si(1200.0, 5.0e5, 30.0).unwrap();
        let bypass = StationState::from_si(400.0, 4.0e5, 10.0).unwrap();
        let out = mixer().mix(&core, &bypass).unwrap();
        assert!((out.pt_pa() - 4.0e5 * 0.98).abs() < 1e-6);

        let out = mixer().mix(&bypass, &core).unwrap();
        assert!((out.pt_pa() - 4.0e5 * 0.98).abs() < 1e-6);
    }

    #[test]
    fn empty_stream_rejected() {
        let core = StationState::from_si(1200.0, 5.0e5, 30.0).unwrap();
        let empty = StationState::from_si(400.0, 4.0e5, 0.0).unwrap();
        assert!(mixer().mix(&core, &empty).is_err());
    }
}
