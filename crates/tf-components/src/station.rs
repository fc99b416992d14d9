//! Station state: the gas stream at a cut plane between components.

use crate::common::{require_non_negative, require_positive};
use crate::error::{ComponentError, ComponentResult};
use tf_core::units::{MassRate, Pressure, Temperature, k, kgps, pa};

/// Stagnation state and mass flow at one engine station.
///
/// A station is produced once by a component and never modified afterwards;
/// components build a new `StationState` for their exit plane. `fuel` is the
/// portion of `mdot` that entered as fuel upstream of this station (zero
/// before the combustor).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StationState {
    tt: Temperature,
    pt: Pressure,
    mdot: MassRate,
    fuel: MassRate,
}

impl StationState {
    /// Create a fuel-free station.
    ///
    /// # Errors
    /// Temperature and pressure must be finite and positive; mass flow must be
    /// finite and not negative.
    pub fn new(tt: Temperature, pt: Pressure, mdot: MassRate) -> ComponentResult<Self> {
        Self::with_fuel(tt, pt, mdot, kgps(0.0))
    }

    /// Create a station whose flow already carries `fuel` kg/s of burnt fuel.
    pub fn with_fuel(
        tt: Temperature,
        pt: Pressure,
        mdot: MassRate,
        fuel: MassRate,
    ) -> ComponentResult<Self> {
        require_positive(tt.value, "stagnation temperature")?;
        require_positive(pt.value, "stagnation pressure")?;
        require_non_negative(mdot.value, "mass flow")?;
        require_non_negative(fuel.value, "fuel flow")?;
        if fuel.value > mdot.value {
            return Err(ComponentError::InvalidInput {
                field: "fuel flow",
                reason: "cannot exceed total mass flow",
            });
        }
        Ok(Self { tt, pt, mdot, fuel })
    }

    /// Convenience constructor from raw SI values (K, Pa, kg/s).
    pub fn from_si(tt_k: f64, pt_pa: f64, mdot_kgps: f64) -> ComponentResult<Self> {
        Self::new(k(tt_k), pa(pt_pa), kgps(mdot_kgps))
    }

    pub fn tt(&self) -> Temperature {
        self.tt
    }

    pub fn pt(&self) -> Pressure {
        self.pt
    }

    pub fn mdot(&self) -> MassRate {
        self.mdot
    }

    pub fn fuel(&self) -> MassRate {
        self.fuel
    }

    pub fn tt_k(&self) -> f64 {
        self.tt.value
    }

    pub fn pt_pa(&self) -> f64 {
        self.pt.value
    }

    pub fn mdot_kgps(&self) -> f64 {
        self.mdot.value
    }

    pub fn fuel_kgps(&self) -> f64 {
        self.fuel.value
    }

    /// Air (non-fuel) portion of the mass flow.
    pub fn air_kgps(&self) -> f64 {
        self.mdot.value - self.fuel.value
    }

    /// Reject a stream with no flow; every component divides by or scales with
    /// mass flow.
    pub fn require_flow(&self) -> ComponentResult<&Self> {
        require_positive(self.mdot.value, "mass flow")?;
        Ok(self)
    }
}
