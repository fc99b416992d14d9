//! Calorically perfect gas and its isentropic flow relations.
//!
//! All relations here are the closed-form one-dimensional results for a gas
//! with constant `gamma`, `r` and `cp`:
//!
//! ```text
//! Tt/T   = 1 + (γ-1)/2 · M²
//! Pt/P   = (Tt/T)^(γ/(γ-1))
//! ṁ√Tt/(Pt·A) = M·√(γ/R) · (Tt/T)^(-(γ+1)/(2(γ-1)))
//! A/A*   = (1/M) · [2/(γ+1) · Tt/T]^((γ+1)/(2(γ-1)))
//! ```
//!
//! Inputs and outputs are raw SI values; callers wrap them in `uom` quantities.

use crate::error::{TfError, TfResult};
use crate::numeric::{Real, ensure_positive};
use crate::units::{GasConstant, SpecHeatCapacity};

/// Working-gas properties shared by every station of the cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GasModel {
    /// Ratio of specific heats cp/cv
    pub gamma: Real,
    /// Specific gas constant [J/(kg·K)]
    pub r: GasConstant,
    /// Specific heat at constant pressure [J/(kg·K)]
    pub cp: SpecHeatCapacity,
}

impl Default for GasModel {
    fn default() -> Self {
        Self::air()
    }
}

impl GasModel {
    /// Create a gas model, rejecting non-physical properties.
    pub fn new(gamma: Real, r: GasConstant, cp: SpecHeatCapacity) -> TfResult<Self> {
        let gas = Self { gamma, r, cp };
        gas.validate()?;
        Ok(gas)
    }

    /// Dry air with the hot-section cp used across the whole engine.
    pub fn air() -> Self {
        Self {
            gamma: 1.4,
            r: 287.0,
            cp: 1004.5,
        }
    }

    pub fn validate(&self) -> TfResult<()> {
        ensure_positive(self.r, "gas constant")?;
        ensure_positive(self.cp, "specific heat")?;
        if !(self.gamma.is_finite() && self.gamma > 1.0) {
            return Err(TfError::InvalidArg {
                what: "gamma must be greater than 1",
            });
        }
        Ok(())
    }

    /// Tt/T at Mach `mach`.
    #[inline]
    pub fn stagnation_ratio(&self, mach: Real) -> Real {
        1.0 + 0.5 * (self.gamma - 1.0) * mach * mach
    }

    /// Isentropic exponent γ/(γ-1) linking pressure and temperature ratios.
    #[inline]
    pub fn pressure_exponent(&self) -> Real {
        self.gamma / (self.gamma - 1.0)
    }

    pub fn stagnation_temperature(&self, t_static: Real, mach: Real) -> Real {
        t_static * self.stagnation_ratio(mach)
    }

    pub fn stagnation_pressure(&self, p_static: Real, mach: Real) -> Real {
        p_static * self.stagnation_ratio(mach).powf(self.pressure_exponent())
    }

    /// Static temperature from stagnation. At `mach == 0` the ratio is exactly
    /// one, so `t_total` comes back unchanged.
    pub fn static_temperature(&self, t_total: Real, mach: Real) -> Real {
        t_total / self.stagnation_ratio(mach)
    }

    pub fn static_pressure(&self, p_total: Real, mach: Real) -> Real {
        p_total / self.stagnation_ratio(mach).powf(self.pressure_exponent())
    }

    /// Corrected flow per unit area, ṁ·√Tt / (Pt·A), in √K·s/m.
    pub fn mass_flow_parameter(&self, mach: Real) -> Real {
        let exponent = -(self.gamma + 1.0) / (2.0 * (self.gamma - 1.0));
        mach * (self.gamma / self.r).sqrt() * self.stagnation_ratio(mach).powf(exponent)
    }

    /// Isentropic area ratio A/A* for a flow at Mach `mach`.
    ///
    /// # Errors
    /// The ratio diverges at zero Mach; `mach` must be strictly positive.
    pub fn area_ratio(&self, mach: Real) -> TfResult<Real> {
        let mach = ensure_positive(mach, "area-ratio Mach number")?;
        let exponent = (self.gamma + 1.0) / (2.0 * (self.gamma - 1.0));
        let bracket = 2.0 / (self.gamma + 1.0) * self.stagnation_ratio(mach);
        Ok(bracket.powf(exponent) / mach)
    }

    pub fn speed_of_sound(&self, t_static: Real) -> Real {
        (self.gamma * self.r * t_static).sqrt()
    }

    pub fn velocity(&self, mach: Real, t_static: Real) -> Real {
        mach * self.speed_of_sound(t_static)
    }
}
