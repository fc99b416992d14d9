//! Inlet: freestream to stagnation conditions and captured mass flow.

use crate::common::{require_non_negative, require_positive};
use crate::error::{ComponentError, ComponentResult};
use crate::station::StationState;
use serde::{Deserialize, Serialize};
use tf_core::GasModel;
use tf_core::units::{Pressure, Temperature, Velocity, k, kgps, mps, pa};

/// Freestream flight condition: Mach number and static ambient state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Freestream {
    mach: f64,
    p_static: Pressure,
    t_static: Temperature,
}

impl Freestream {
    /// # Errors
    /// Mach must be finite and not negative; pressure and temperature must be
    /// positive.
    pub fn new(mach: f64, p_static: Pressure, t_static: Temperature) -> ComponentResult<Self> {
        require_non_negative(mach, "mach")?;
        require_positive(p_static.value, "ambient pressure")?;
        require_positive(t_static.value, "ambient temperature")?;
        Ok(Self {
            mach,
            p_static,
            t_static,
        })
    }

    pub fn mach(&self) -> f64 {
        self.mach
    }

    pub fn p_static(&self) -> Pressure {
        self.p_static
    }

    pub fn t_static(&self) -> Temperature {
        self.t_static
    }

    /// Flight velocity V0 = M0·a0.
    pub fn velocity(&self, gas: &GasModel) -> Velocity {
        mps(gas.velocity(self.mach, self.t_static.value))
    }
}

/// Inlet geometry.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InletConfig {
    /// Capture area (m²); ≈ 40 in diameter face
    pub capture_area_m2: f64,
    /// Inlet-face Mach drawn by the engine at low flight speed. Captured flow
    /// is evaluated at `max(M0, face_mach_static)`.
    pub face_mach_static: f64,
}

impl Default for InletConfig {
    fn default() -> Self {
        Self {
            capture_area_m2: 0.811,
            face_mach_static: 0.5,
        }
    }
}

impl InletConfig {
    pub fn validate(&self) -> ComponentResult<()> {
        require_positive(self.capture_area_m2, "inlet capture area")?;
        require_non_negative(self.face_mach_static, "inlet face Mach")?;
        Ok(())
    }
}

/// Isentropic, lossless inlet.
///
/// ## Model
///
/// ```text
/// Tt0 = T0 · (1 + (γ-1)/2 · M0²)
/// Pt0 = P0 · (1 + (γ-1)/2 · M0²)^(γ/(γ-1))
/// ṁ   = Pt0·A/√Tt0 · M·√(γ/R) · (1 + (γ-1)/2 · M²)^(-(γ+1)/(2(γ-1)))
/// ```
///
/// with `M = max(M0, face_mach_static)` in the flow relation only. The
/// shorthand `ṁ = Pt0·A/√Tt0 · M0·√γ · …` is not a mass rate: the `1/√R`
/// factor is needed for kg/s, and at M0 = 0 it would capture no air.
#[derive(Clone, Debug)]
pub struct Inlet {
    pub name: String,
    pub config: InletConfig,
    pub gas: GasModel,
}

impl Inlet {
    pub fn new(name: impl Into<String>, config: InletConfig, gas: GasModel) -> ComponentResult<Self> {
        config.validate()?;
        gas.validate()?;
        Ok(Self {
            name: name.into(),
            config,
            gas,
        })
    }

    /// Mach number at which the captured-flow relation is evaluated.
    pub fn face_mach(&self, freestream: &Freestream) -> f64 {
        freestream.mach().max(self.config.face_mach_static)
    }

    /// Stagnation state and captured mass flow for `freestream`.
    pub fn capture(&self, freestream: &Freestream) -> ComponentResult<StationState> {
        let m0 = freestream.mach();
        let tt0 = self
            .gas
            .stagnation_temperature(freestream.t_static().value, m0);
        let pt0 = self.gas.stagnation_pressure(freestream.p_static().value, m0);

        let face_mach = self.face_mach(freestream);
        let mdot = pt0 * self.config.capture_area_m2 / tt0.sqrt()
            * self.gas.mass_flow_parameter(face_mach);
        if !(tt0.is_finite() && pt0.is_finite() && mdot.is_finite()) {
            return Err(ComponentError::InvalidInput {
                field: "mach",
                reason: "too large for a finite stagnation state",
            });
        }

        StationState::new(k(tt0), pa(pt0), kgps(mdot))
    }
}
