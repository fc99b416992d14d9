//! Fan and high-pressure compressor.

use crate::common::{check_finite, require_efficiency};
use crate::error::{ComponentError, ComponentResult};
use crate::station::StationState;
use crate::traits::StreamComponent;
use serde::{Deserialize, Serialize};
use tf_core::GasModel;
use tf_core::units::{Power, SpecEnthalpy, k, pa, watts};

/// Fixed design-point constants of one compression device.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompressorConfig {
    /// Total pressure ratio π (≥ 1)
    pub pressure_ratio: f64,
    /// Isentropic efficiency (0 < eta <= 1)
    pub efficiency: f64,
}

impl CompressorConfig {
    /// Three-stage F119 fan.
    pub fn f119_fan() -> Self {
        Self {
            pressure_ratio: 4.0,
            efficiency: 0.857,
        }
    }

    /// Six-stage F119 HPC; with the fan this gives an overall ratio of 26.
    pub fn f119_hpc() -> Self {
        Self {
            pressure_ratio: 6.5,
            efficiency: 0.87,
        }
    }

    pub fn validate(&self) -> ComponentResult<()> {
        let pi = check_finite(self.pressure_ratio, "compressor pressure ratio")?;
        if pi < 1.0 {
            return Err(ComponentError::InvalidInput {
                field: "compressor pressure ratio",
                reason: "must be at least 1",
            });
        }
        require_efficiency(self.efficiency, "compressor efficiency")?;
        Ok(())
    }
}

/// Exit solution of a compression device.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Compression {
    pub exit: StationState,
    /// Stagnation enthalpy rise Δh = cp·(Tt_out - Tt_in)
    pub delta_h: SpecEnthalpy,
    /// Shaft power the matching turbine must supply, ṁ·Δh (≥ 0)
    pub required_work: Power,
}

/// Adiabatic compressor with fixed pressure ratio and isentropic efficiency.
///
/// ## Model
///
/// ```text
/// Tt_out = Tt_in · (1 + (π^((γ-1)/γ) - 1) / η)
/// Pt_out = Pt_in · π
/// W      = ṁ · cp · (Tt_out - Tt_in)
/// ```
///
/// Used for both the fan (full engine flow) and the HPC (core flow).
#[derive(Clone, Debug)]
pub struct Compressor {
    pub name: String,
    pub config: CompressorConfig,
    pub gas: GasModel,
}

impl Compressor {
    pub fn new(
        name: impl Into<String>,
        config: CompressorConfig,
        gas: GasModel,
    ) -> ComponentResult<Self> {
        config.validate()?;
        gas.validate()?;
        Ok(Self {
            name: name.into(),
            config,
            gas,
        })
    }

    /// Actual stagnation temperature ratio Tt_out/Tt_in.
    pub fn temperature_ratio(&self) -> f64 {
        let ideal = self
            .config
            .pressure_ratio
            .powf(1.0 / self.gas.pressure_exponent());
        1.0 + (ideal - 1.0) / self.config.efficiency
    }
}

impl StreamComponent for Compressor {
    type Output = Compression;

    fn name(&self) -> &str {
        &self.name
    }

    fn compute(&self, inlet: &StationState) -> ComponentResult<Compression> {
        inlet.require_flow()?;

        let tt_out = inlet.tt_k() * self.temperature_ratio();
        let pt_out = inlet.pt_pa() * self.config.pressure_ratio;
        let delta_h = self.gas.cp * (tt_out - inlet.tt_k());
        let work = inlet.mdot_kgps() * delta_h;

        check_finite(work, "compressor work")?;

        let exit = StationState::with_fuel(k(tt_out), pa(pt_out), inlet.mdot(), inlet.fuel())?;
        Ok(Compression {
            exit,
            delta_h,
            required_work: watts(work),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fan() -> Compressor {
        Compressor::new("fan", CompressorConfig::f119_fan(), GasModel::air()).unwrap()
    }

    #[test]
    fn compressor_creation() {
        assert!(Compressor::new("hpc", CompressorConfig::f119_hpc(), GasModel::air()).is_ok());
    }

    #[test]
    fn compressor_invalid_parameters() {
        let bad_eta = CompressorConfig {
            pressure_ratio: 4.0,
            efficiency: 1.5,
        };
        assert!(Compressor::new("fan", bad_eta, GasModel::air()).is_err());

        let bad_pi = CompressorConfig {
            pressure_ratio: 0.8,
            efficiency: 0.9,
        };
        assert!(matches!(
            Compressor::new("fan", bad_pi, GasModel::air()),
            Err(ComponentError::InvalidInput {
                field: "compressor pressure ratio",
                ..
            })
        ));
    }

    #[test]
    fn fan_raises_stagnation_state() {
        let inlet = StationState::from_si(293.0, 101_325.0, 144.82).unwrap();
        let out = fan().compute(&inlet).unwrap();

        assert_eq!(out.exit.pt_pa(), 4.0 * 101_325.0);
        assert!(out.exit.tt_k() > inlet.tt_k());
        assert_eq!(out.exit.mdot_kgps(), inlet.mdot_kgps());
        // 4^(2/7) = 1.4860, so ΔTt = 293 · 0.4860 / 0.857
        assert!((out.exit.tt_k() - 459.17).abs() < 0.05);
    }

    #[test]
    fn work_is_mass_flow_times_enthalpy_rise() {
        let inlet = StationState::from_si(293.0, 101_325.0, 100.0).unwrap();
        let out = fan().compute(&inlet).unwrap();
        assert!(out.required_work.value > 0.0);
        assert_eq!(out.required_work.value, 100.0 * out.delta_h);
        assert_eq!(
            out.delta_h,
            1004.5 * (out.exit.tt_k() - inlet.tt_k())
        );
    }

    #[test]
    fn unity_ratio_is_a_pass_through() {
        let config = CompressorConfig {
            pressure_ratio: 1.0,
            efficiency: 0.9,
        };
        let c = Compressor::new("idle", config, GasModel::air()).unwrap();
        let inlet = StationState::from_si(300.0, 1.0e5, 10.0).unwrap();
        let out = c.compute(&inlet).unwrap();
        assert_eq!(out.exit.tt_k(), 300.0);
        assert_eq!(out.required_work.value, 0.0);
    }

    #[test]
    fn zero_flow_rejected() {
        let inlet = StationState::from_si(293.0, 101_325.0, 0.0).unwrap();
        assert!(matches!(
            fan().compute(&inlet),
            Err(ComponentError::InvalidInput {
                field: "mass flow",
                ..
            })
        ));
    }
}
