//! Uninstalled thrust, TSFC and specific thrust from the exhaust streams.

use crate::error::{CycleError, CycleResult};
use serde::{Deserialize, Serialize};
use tf_components::NozzleExit;
use tf_components::common::check_finite;
use tf_core::units::{MassRate, Power, Velocity};

/// Engine-level performance for one flight condition.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Performance {
    /// Net uninstalled thrust (N)
    pub net_thrust_n: f64,
    /// Thrust-specific fuel consumption (kg fuel / (N·s))
    pub tsfc_kg_per_n_s: f64,
    /// Net thrust per unit captured air flow (N per kg/s)
    pub specific_thrust_n_s_per_kg: f64,
    /// Combustor + afterburner fuel flow (kg/s)
    pub fuel_flow_kgps: f64,
    /// Captured air flow (kg/s)
    pub air_flow_kgps: f64,
    pub fuel_air_ratio: f64,
    /// Freestream velocity V0 (m/s)
    pub flight_velocity_mps: f64,
    /// Jet kinetic-energy gain over the fuel's chemical power
    pub thermal_efficiency: f64,
    /// Thrust power over jet kinetic-energy gain; zero when static
    pub propulsive_efficiency: f64,
    /// Thrust power over fuel chemical power
    pub overall_efficiency: f64,
}

impl Performance {
    /// TSFC in the customary mg/(N·s).
    pub fn tsfc_mg_per_n_s(&self) -> f64 {
        self.tsfc_kg_per_n_s * 1.0e6
    }
}

/// Net thrust contribution of one exhaust stream:
///
/// ```text
/// F_i = ṁ_exit·V_exit - ṁ_air·V0 + A_exit·(P_exit - P_ambient)
/// ```
///
/// `ṁ_air` is the stream's exit flow minus the fuel it carries, i.e. the air
/// that was captured and accelerated from V0.
pub fn stream_thrust(exit: &NozzleExit, flight_velocity: Velocity) -> f64 {
    exit.momentum_thrust() - exit.station.air_kgps() * flight_velocity.value
        + exit.pressure_thrust()
}

/// Sum the exhaust streams into engine performance.
///
/// Total fuel is whatever the exit streams carry, so combustor and
/// afterburner fuel are both counted exactly once. `fuel_power` is the
/// chemical power of that fuel, `ṁ_f · h_PR` summed over the burners.
///
/// ```text
/// ΔKE  = Σ ½·ṁ_exit·V_exit² - ½·ṁ_air·V0²
/// η_th = ΔKE / fuel_power
/// η_p  = F·V0 / ΔKE
/// η_o  = F·V0 / fuel_power = η_th · η_p
/// ```
///
/// Pressure thrust counts toward `F` but not toward `ΔKE`.
///
/// # Errors
/// Net thrust at or below zero leaves TSFC undefined; the point is reported
/// as infeasible.
pub fn aggregate(
    exits: &[NozzleExit],
    flight_velocity: Velocity,
    air_flow: MassRate,
    fuel_power: Power,
) -> CycleResult<Performance> {
    if exits.is_empty() {
        return Err(CycleError::InvalidInput {
            field: "exhaust streams",
            reason: "at least one nozzle exit is required".to_string(),
        });
    }

    let net_thrust: f64 = exits
        .iter()
        .map(|exit| stream_thrust(exit, flight_velocity))
        .sum();
    let fuel: f64 = exits.iter().map(|exit| exit.station.fuel_kgps()).sum();
    check_finite(net_thrust, "net thrust")?;

    if net_thrust <= 0.0 {
        return Err(CycleError::Infeasible {
            what: "net thrust is not positive",
        });
    }

    let air = air_flow.value;
    let v0 = flight_velocity.value;
    let jet_power: f64 = exits.iter().map(|exit| exit.jet_power().value).sum();
    let kinetic_gain = jet_power - 0.5 * air * v0 * v0;
    let thrust_power = net_thrust * v0;
    let per_fuel = |p: f64| {
        if fuel_power.value > 0.0 {
            p / fuel_power.value
        } else {
            0.0
        }
    };
    let propulsive_efficiency = if kinetic_gain > 0.0 {
        thrust_power / kinetic_gain
    } else {
        0.0
    };

    Ok(Performance {
        net_thrust_n: net_thrust,
        tsfc_kg_per_n_s: fuel / net_thrust,
        specific_thrust_n_s_per_kg: net_thrust / air,
        fuel_flow_kgps: fuel,
        air_flow_kgps: air,
        fuel_air_ratio: fuel / air,
        flight_velocity_mps: v0,
        thermal_efficiency: per_fuel(kinetic_gain),
        propulsive_efficiency,
        overall_efficiency: per_fuel(thrust_power),
    })
}
