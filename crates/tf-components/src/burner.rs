//! Heat addition: main combustor and afterburner.

use crate::common::{check_finite, require_efficiency, require_loss_fraction, require_positive};
use crate::error::{ComponentError, ComponentResult};
use crate::station::StationState;
use crate::traits::StreamComponent;
use serde::{Deserialize, Serialize};
use tf_core::GasModel;
use tf_core::units::{MassRate, Power, k, kgps, pa, watts};

/// Jet-A lower heating value (J/kg).
pub const JET_A_HEATING_VALUE: f64 = 43.0e6;

/// Fixed design-point constants of a burner.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BurnerConfig {
    /// Fixed exit stagnation temperature (K)
    pub exit_temperature_k: f64,
    /// Fuel lower heating value (J/kg)
    pub fuel_heating_value: f64,
    /// Combustion efficiency (0 < eta <= 1)
    pub efficiency: f64,
    /// Fractional stagnation pressure loss in [0, 1)
    pub pressure_loss: f64,
}

impl BurnerConfig {
    /// Main combustor; sets the F119 turbine inlet temperature.
    pub fn f119_combustor() -> Self {
        Self {
            exit_temperature_k: 1900.0,
            fuel_heating_value: JET_A_HEATING_VALUE,
            efficiency: 0.99,
            pressure_loss: 0.05,
        }
    }

    pub fn f119_afterburner() -> Self {
        Self {
            exit_temperature_k: 2200.0,
            fuel_heating_value: JET_A_HEATING_VALUE,
            efficiency: 0.95,
            pressure_loss: 0.05,
        }
    }

    pub fn validate(&self) -> ComponentResult<()> {
        require_positive(self.exit_temperature_k, "burner exit temperature")?;
        require_positive(self.fuel_heating_value, "fuel heating value")?;
        require_efficiency(self.efficiency, "combustion efficiency")?;
        require_loss_fraction(self.pressure_loss, "burner pressure loss")?;
        Ok(())
    }
}

/// Exit solution of a burner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Combustion {
    pub exit: StationState,
    /// Fuel burnt in this burner only
    pub fuel_flow: MassRate,
    /// Heat released into the stream, Q = ṁ·cp·(T_exit - Tt_in)
    pub heat_added: Power,
}

/// Constant exit-temperature burner.
///
/// ## Model
///
/// ```text
/// Q      = ṁ · cp · (T_exit - Tt_in)
/// ṁ_fuel = Q / (FHV · η_b)
/// Tt_out = T_exit
/// Pt_out = Pt_in · (1 - Δp)
/// ṁ_out  = ṁ + ṁ_fuel
/// ```
///
/// The combustor and the afterburner share this model with their own
/// constants.
///
/// ## Errors
///
/// A `T_exit` at or below the inlet stagnation temperature would need
/// negative heat; that design point is reported as infeasible.
#[derive(Clone, Debug)]
pub struct Burner {
    pub name: String,
    pub config: BurnerConfig,
    pub gas: GasModel,
}

impl Burner {
    pub fn new(name: impl Into<String>, config: BurnerConfig, gas: GasModel) -> ComponentResult<Self> {
        config.validate()?;
        gas.validate()?;
        Ok(Self {
            name: name.into(),
            config,
            gas,
        })
    }
}

impl StreamComponent for Burner {
    type Output = Combustion;

    fn name(&self) -> &str {
        &self.name
    }

    fn compute(&self, inlet: &StationState) -> ComponentResult<Combustion> {
        inlet.require_flow()?;

        let t_exit = self.config.exit_temperature_k;
        if t_exit <= inlet.tt_k() {
            return Err(ComponentError::infeasible(
                &self.name,
                "exit temperature does not exceed inlet stagnation temperature",
            ));
        }

        let heat = inlet.mdot_kgps() * self.gas.cp * (t_exit - inlet.tt_k());
        let fuel = heat / (self.config.fuel_heating_value * self.config.efficiency);
        check_finite(fuel, "burner fuel flow")?;

        let pt_out = inlet.pt_pa() * (1.0 - self.config.pressure_loss);
        let exit = StationState::with_fuel(
            k(t_exit),
            pa(pt_out),
            kgps(inlet.mdot_kgps() + fuel),
            kgps(inlet.fuel_kgps() + fuel),
        )?;

        Ok(Combustion {
            exit,
            fuel_flow: kgps(fuel),
            heat_added: watts(heat),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combustor() -> Burner {
        Burner::new("combustor", BurnerConfig::f119_combustor(), GasModel::air()).unwrap()
    }

    #[test]
    fn combustor_reaches_turbine_inlet_temperature() {
        let inlet = StationState::from_si(832.3, 2.634e6, 99.88).unwrap();
        let out = combustor().compute(&inlet).unwrap();

        assert_eq!(out.exit.tt_k(), 1900.0);
        assert!((out.exit.pt_pa() - 0.95 * 2.634e6).abs() < 1e-6);
        assert!(out.fuel_flow.value > 0.0);
        assert_eq!(out.exit.mdot_kgps(), 99.88 + out.fuel_flow.value);
        assert_eq!(out.exit.fuel_kgps(), out.fuel_flow.value);
    }

    #[test]
    fn fuel_flow_from_heat_balance() {
        let inlet = StationState::from_si(800.0, 2.0e6, 100.0).unwrap();
        let out = combustor().compute(&inlet).unwrap();
        let q = 100.0 * 1004.5 * 1100.0;
        assert!((out.heat_added.value - q).abs() < 1e-3);
        assert!((out.fuel_flow.value - q / (43.0e6 * 0.99)).abs() < 1e-12);
    }

    #[test]
    fn fuel_accumulates_across_burners() {
        let ab = Burner::new("afterburner", BurnerConfig::f119_afterburner(), GasModel::air())
            .unwrap();
        let inlet = StationState::with_fuel(k(1000.0), pa(4.0e5), kgps(147.0), kgps(2.5)).unwrap();
        let out = ab.compute(&inlet).unwrap();
        assert_eq!(out.exit.tt_k(), 2200.0);
        assert!((out.exit.fuel_kgps() - (2.5 + out.fuel_flow.value)).abs() < 1e-12);
    }

    #[test]
    fn negative_heat_is_infeasible() {
        let inlet = StationState::from_si(1950.0, 2.0e6, 100.0).unwrap();
        let err = combustor().compute(&inlet).unwrap_err();
        assert!(err.is_infeasible());
        assert!(err.to_string().contains("combustor"));

        let at_limit = StationState::from_si(1900.0, 2.0e6, 100.0).unwrap();
        assert!(combustor().compute(&at_limit).unwrap_err().is_infeasible());
    }

    #[test]
    fn invalid_constants_rejected() {
        let mut config = BurnerConfig::f119_combustor();
        config.pressure_loss = 1.0;
        assert!(Burner::new("combustor", config, GasModel::air()).is_err());

        let mut config = BurnerConfig::f119_combustor();
        config.fuel_heating_value = 0.0;
        assert!(Burner::new("combustor", config, GasModel::air()).is_err());
    }
}
