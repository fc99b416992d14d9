//! High- and low-pressure turbines.

use crate::common::{check_finite, require_efficiency, require_non_negative};
use crate::error::{ComponentError, ComponentResult};
use crate::station::StationState;
use serde::{Deserialize, Serialize};
use tf_core::GasModel;
use tf_core::units::{Power, SpecEnthalpy, k, pa};

/// Fixed design-point constants of a turbine.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurbineConfig {
    /// Isentropic efficiency (0 < eta <= 1)
    pub efficiency: f64,
}

impl TurbineConfig {
    pub fn f119_hpt() -> Self {
        Self { efficiency: 0.90 }
    }

    pub fn f119_lpt() -> Self {
        Self { efficiency: 0.91 }
    }

    pub fn validate(&self) -> ComponentResult<()> {
        require_efficiency(self.efficiency, "turbine efficiency")?;
        Ok(())
    }
}

/// Exit solution of a turbine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Expansion {
    pub exit: StationState,
    /// Stagnation enthalpy drop taken from the stream
    pub delta_h: SpecEnthalpy,
    /// Shaft power delivered; equals the matched compressor's requirement
    pub work: Power,
}

/// Work-matched turbine.
///
/// The turbine does not get a pressure ratio. It extracts exactly the power
/// its spool's compressor needs (ideal shaft, no mechanical loss) and the exit
/// state follows from the energy balance:
///
/// ```text
/// Δh     = W_required / (ṁ · η_t)
/// Tt_out = Tt_in - Δh / cp
/// Pt_out = Pt_in · (1 - (1 - Tt_out/Tt_in) / η_t)^(γ/(γ-1))
/// ```
///
/// ## Errors
///
/// If the requested work drives `Tt_out` to zero or below, or makes the base
/// of the pressure term non-positive, the stream does not carry enough
/// enthalpy for this spool and the point is infeasible.
#[derive(Clone, Debug)]
pub struct Turbine {
    pub name: String,
    pub config: TurbineConfig,
    pub gas: GasModel,
}

impl Turbine {
    pub fn new(name: impl Into<String>, config: TurbineConfig, gas: GasModel) -> ComponentResult<Self> {
        config.validate()?;
        gas.validate()?;
        Ok(Self {
            name: name.into(),
            config,
            gas,
        })
    }

    /// Expand `inlet` until it has delivered `required_work` to the shaft.
    pub fn expand(&self, inlet: &StationState, required_work: Power) -> ComponentResult<Expansion> {
        inlet.require_flow()?;
        let work = require_non_negative(required_work.value, "turbine required work")?;
        let eta = self.config.efficiency;

        let delta_h = work / (inlet.mdot_kgps() * eta);
        let tt_out = inlet.tt_k() - delta_h / self.gas.cp;
        if tt_out <= 0.0 {
            return Err(ComponentError::infeasible(
                &self.name,
                "exit stagnation temperature is not positive",
            ));
        }

        let base = 1.0 - (1.0 - tt_out / inlet.tt_k()) / eta;
        if base <= 0.0 {
            return Err(ComponentError::infeasible(
                &self.name,
                "required work exceeds available expansion",
            ));
        }
        let pt_out = inlet.pt_pa() * base.powf(self.gas.pressure_exponent());
        check_finite(pt_out, "turbine exit pressure")?;

        let exit = StationState::with_fuel(k(tt_out), pa(pt_out), inlet.mdot(), inlet.fuel())?;
        Ok(Expansion {
            exit,
            delta_h,
            work: required_work,
        })
    }
}
