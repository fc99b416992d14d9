//! Convergent-divergent exhaust nozzle.

use crate::common::{check_finite, require_efficiency, require_positive};
use crate::error::ComponentResult;
use crate::station::StationState;
use serde::{Deserialize, Serialize};
use tf_core::GasModel;
use tf_core::units::{Area, Power, Pressure, Temperature, Velocity, k, m2, mps, pa, watts};

/// Nozzle geometry and design exit Mach.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NozzleConfig {
    /// Throat area A* (m²)
    pub throat_area_m2: f64,
    /// Design exit Mach number (> 0). Taken as given rather than solved from
    /// area or pressure matching.
    pub exit_mach: f64,
    /// Kinetic-energy efficiency η_n in (0, 1]; real nozzles sit near 0.98.
    /// Missing from a config file means an isentropic nozzle.
    #[serde(default = "isentropic")]
    pub efficiency: f64,
}

fn isentropic() -> f64 {
    1.0
}

impl NozzleConfig {
    pub fn f119_core() -> Self {
        Self {
            throat_area_m2: 0.40,
            exit_mach: 1.3,
            efficiency: 1.0,
        }
    }

    /// Bypass duct nozzle for the separate-flow arrangement.
    pub fn f119_bypass() -> Self {
        Self {
            throat_area_m2: 0.25,
            exit_mach: 1.0,
            efficiency: 1.0,
        }
    }

    pub fn validate(&self) -> ComponentResult<()> {
        require_positive(self.throat_area_m2, "nozzle throat area")?;
        require_positive(self.exit_mach, "nozzle exit Mach")?;
        require_efficiency(self.efficiency, "nozzle efficiency")?;
        Ok(())
    }
}

/// Exit plane solution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NozzleExit {
    /// Stagnation state and flow at the exit plane (isentropic: unchanged)
    pub station: StationState,
    pub mach: f64,
    pub area: Area,
    pub t_static: Temperature,
    pub p_static: Pressure,
    pub velocity: Velocity,
    pub p_ambient: Pressure,
}

impl NozzleExit {
    /// Momentum flux ṁ·V at the exit plane (N).
    pub fn momentum_thrust(&self) -> f64 {
        self.station.mdot_kgps() * self.velocity.value
    }

    /// A_exit·(P_exit - P_ambient) (N); negative when over-expanded.
    pub fn pressure_thrust(&self) -> f64 {
        self.area.value * (self.p_static.value - self.p_ambient.value)
    }

    /// Kinetic energy flux ½·ṁ·V² leaving the nozzle.
    pub fn jet_power(&self) -> Power {
        watts(0.5 * self.station.mdot_kgps() * self.velocity.value.powi(2))
    }
}

/// Isentropic nozzle expanding to a fixed exit Mach.
///
/// ## Model
///
/// ```text
/// A_e = A* · (1/M) · [2/(γ+1) · (1 + (γ-1)/2·M²)]^((γ+1)/(2(γ-1)))
/// T   = Tt / (1 + (γ-1)/2·M²)
/// P   = Pt / (1 + (γ-1)/2·M²)^(γ/(γ-1))
/// V   = M · √(γ·R·T)
/// ```
///
/// ## Limitations
///
/// The exit Mach is a design input, not the solution of area/pressure matching
/// against ambient, so the exit plane is generally not perfectly expanded. The
/// resulting mismatch is what `pressure_thrust` accounts for.
#[derive(Clone, Debug)]
pub struct Nozzle {
    pub name: String,
    pub config: NozzleConfig,
    pub gas: GasModel,
}

impl Nozzle {
    pub fn new(name: impl Into<String>, config: NozzleConfig, gas: GasModel) -> ComponentResult<Self> {
        config.validate()?;
        gas.validate()?;
        Ok(Self {
            name: name.into(),
            config,
            gas,
        })
    }

    /// Static temperature at Mach `mach`; `mach == 0` returns `tt` unchanged.
    pub fn static_temperature(&self, tt: Temperature, mach: f64) -> Temperature {
        k(self.gas.static_temperature(tt.value, mach))
    }

    pub fn static_pressure(&self, pt: Pressure, mach: f64) -> Pressure {
        pa(self.gas.static_pressure(pt.value, mach))
    }

    pub fn exit_area(&self) -> ComponentResult<Area> {
        let ratio = self.gas.area_ratio(self.config.exit_mach)?;
        Ok(m2(self.config.throat_area_m2 * ratio))
    }

    pub fn expand(&self, inlet: &StationState, p_ambient: Pressure) -> ComponentResult<NozzleExit> {
        inlet.require_flow()?;
        require_positive(p_ambient.value, "ambient pressure")?;

        let mach = self.config.exit_mach;
        let eta = self.config.efficiency;
        let t_ideal = self.gas.static_temperature(inlet.tt_k(), mach);
        // Losses leave the exit hotter and slower at the same static pressure
        let t_static = k(t_ideal + (1.0 - eta) * (inlet.tt_k() - t_ideal));
        let p_static = self.static_pressure(inlet.pt(), mach);
        let velocity = eta.sqrt() * self.gas.velocity(mach, t_ideal);
        check_finite(velocity, "nozzle exit velocity")?;

        Ok(NozzleExit {
            station: *inlet,
            mach,
            area: self.exit_area()?,
            t_static,
            p_static,
            velocity: mps(velocity),
            p_ambient,
        })
    }
}
