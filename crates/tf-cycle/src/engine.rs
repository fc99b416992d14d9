//! Forward pass through the engine for one flight condition.
//!
//! ```text
//! inlet → fan → splitter ─┬─ core:   hpc → combustor → hpt → lpt ─┐
//!                         └─ bypass ──────────────────────────────┴→ mixer → [afterburner] → nozzle
//! ```
//!
//! The HPT is sized by the work the HPC requires and the LPT by the work the
//! fan requires. Each is closed form, so the pass never iterates.

use crate::config::EngineConfig;
use crate::error::{CycleError, CycleResult};
use crate::flight::{Arrangement, FlightCondition, Mode};
use crate::performance::{Performance, aggregate};
use serde::Serialize;
use tf_components::{
    Burner, Combustion, ComponentError, Compression, Compressor, Expansion, Freestream, Inlet,
    Mixer, Nozzle, NozzleExit, SplitStreams, Splitter, StationState, StreamComponent, Turbine,
};
use tf_core::GasModel;
use tf_core::units::watts;
use tracing::{debug, info};

/// Components built once from an [`EngineConfig`].
///
/// Immutable after construction; `run` borrows it and can be called from any
/// number of threads at once.
#[derive(Clone, Debug)]
pub struct Engine {
    gas: GasModel,
    arrangement: Arrangement,
    inlet: Inlet,
    fan: Compressor,
    splitter: Splitter,
    hpc: Compressor,
    combustor: Burner,
    hpt: Turbine,
    lpt: Turbine,
    mixer: Mixer,
    afterburner: Burner,
    nozzle: Nozzle,
    bypass_nozzle: Nozzle,
}

impl Engine {
    /// Validate every section of `config` and build the components.
    ///
    /// # Errors
    /// [`CycleError::Component`] naming the first section that fails.
    pub fn new(config: &EngineConfig) -> CycleResult<Self> {
        let gas = config.gas;
        gas.validate()
            .map_err(ComponentError::from)
            .map_err(CycleError::at("gas"))?;

        Ok(Self {
            gas,
            arrangement: config.arrangement,
            inlet: Inlet::new("inlet", config.inlet, gas).map_err(CycleError::at("inlet"))?,
            fan: Compressor::new("fan", config.fan, gas).map_err(CycleError::at("fan"))?,
            splitter: Splitter::new("splitter", config.splitter)
                .map_err(CycleError::at("splitter"))?,
            hpc: Compressor::new("hpc", config.hpc, gas).map_err(CycleError::at("hpc"))?,
            combustor: Burner::new("combustor", config.combustor, gas)
                .map_err(CycleError::at("combustor"))?,
            hpt: Turbine::new("hpt", config.hpt, gas).map_err(CycleError::at("hpt"))?,
            lpt: Turbine::new("lpt", config.lpt, gas).map_err(CycleError::at("lpt"))?,
            mixer: Mixer::new("mixer", config.mixer).map_err(CycleError::at("mixer"))?,
            afterburner: Burner::new("afterburner", config.afterburner, gas)
                .map_err(CycleError::at("afterburner"))?,
            nozzle: Nozzle::new("nozzle", config.nozzle, gas).map_err(CycleError::at("nozzle"))?,
            bypass_nozzle: Nozzle::new("bypass_nozzle", config.bypass_nozzle, gas)
                .map_err(CycleError::at("bypass_nozzle"))?,
        })
    }

    pub fn gas(&self) -> &GasModel {
        &self.gas
    }

    pub fn arrangement(&self) -> Arrangement {
        self.arrangement
    }

    /// Evaluate one flight condition.
    ///
    /// # Errors
    /// Invalid flight inputs are rejected before any component runs. A stage
    /// whose solution breaks a physical invariant aborts the pass with an
    /// infeasible error naming that stage.
    pub fn run(&self, flight: &FlightCondition, mode: Mode) -> CycleResult<CyclePoint> {
        let freestream = flight.freestream()?;
        let p_ambient = freestream.p_static();

        let inlet = self
            .inlet
            .capture(&freestream)
            .map_err(CycleError::at(&self.inlet.name))?;
        trace_station("inlet", &inlet);

        let fan = stage(&self.fan, &inlet)?;
        trace_station(&self.fan.name, &fan.exit);
        let split = stage(&self.splitter, &fan.exit)?;
        trace_station("splitter core", &split.core);
        trace_station("splitter bypass", &split.bypass);
        let hpc = stage(&self.hpc, &split.core)?;
        trace_station(&self.hpc.name, &hpc.exit);
        let combustor = stage(&self.combustor, &hpc.exit)?;
        trace_station(&self.combustor.name, &combustor.exit);

        let hpt = self
            .hpt
            .expand(&combustor.exit, hpc.required_work)
            .map_err(CycleError::at(&self.hpt.name))?;
        trace_station(&self.hpt.name, &hpt.exit);
        let lpt = self
            .lpt
            .expand(&hpt.exit, fan.required_work)
            .map_err(CycleError::at(&self.lpt.name))?;
        trace_station(&self.lpt.name, &lpt.exit);

        // A zero bypass ratio leaves nothing to mix or to expand separately
        let has_bypass = split.bypass.mdot_kgps() > 0.0;

        let mixer = match self.arrangement {
            Arrangement::Mixed if has_bypass => Some(
                self.mixer
                    .mix(&lpt.exit, &split.bypass)
                    .map_err(CycleError::at(&self.mixer.name))?,
            ),
            _ => None,
        };
        if let Some(mixed) = &mixer {
            trace_station(&self.mixer.name, mixed);
        }

        let afterburner_inlet = mixer.unwrap_or(lpt.exit);
        let afterburner = if mode.is_wet() {
            let burn = stage(&self.afterburner, &afterburner_inlet)?;
            trace_station(&self.afterburner.name, &burn.exit);
            Some(burn)
        } else {
            None
        };

        let nozzle_inlet = afterburner
            .as_ref()
            .map_or(afterburner_inlet, |burn| burn.exit);
        let nozzle = self
            .nozzle
            .expand(&nozzle_inlet, p_ambient)
            .map_err(CycleError::at(&self.nozzle.name))?;

        let bypass_nozzle = match self.arrangement {
            Arrangement::Separate if has_bypass => Some(
                self.bypass_nozzle
                    .expand(&split.bypass, p_ambient)
                    .map_err(CycleError::at(&self.bypass_nozzle.name))?,
            ),
            _ => None,
        };

        let exits: Vec<NozzleExit> = std::iter::once(nozzle).chain(bypass_nozzle).collect();
        let fuel_power = combustor.fuel_flow.value * self.combustor.config.fuel_heating_value
            + afterburner.as_ref().map_or(0.0, |burn| {
                burn.fuel_flow.value * self.afterburner.config.fuel_heating_value
            });
        let performance = aggregate(
            &exits,
            freestream.velocity(&self.gas),
            inlet.mdot(),
            watts(fuel_power),
        )?;

        info!(
            mach = flight.mach,
            %mode,
            arrangement = %self.arrangement,
            net_thrust_n = performance.net_thrust_n,
            tsfc_mg_per_n_s = performance.tsfc_mg_per_n_s(),
            "cycle point solved"
        );

        Ok(CyclePoint {
            flight: *flight,
            mode,
            arrangement: self.arrangement,
            freestream,
            inlet,
            fan,
            split,
            hpc,
            combustor,
            hpt,
            lpt,
            mixer,
            afterburner,
            nozzle,
            bypass_nozzle,
            performance,
        })
    }
}

/// Build an engine from `config` and evaluate one flight condition.
///
/// Prefer [`Engine::run`] when evaluating many points with the same
/// configuration.
pub fn run_engine(
    config: &EngineConfig,
    flight: &FlightCondition,
    mode: Mode,
) -> CycleResult<CyclePoint> {
    Engine::new(config)?.run(flight, mode)
}

fn stage<C: StreamComponent>(component: &C, inlet: &StationState) -> CycleResult<C::Output> {
    component
        .compute(inlet)
        .map_err(CycleError::at(component.name()))
}

fn trace_station(stage: &str, state: &StationState) {
    debug!(
        stage,
        tt_k = state.tt_k(),
        pt_pa = state.pt_pa(),
        mdot_kgps = state.mdot_kgps(),
        fuel_kgps = state.fuel_kgps(),
        "station"
    );
}

/// Everything the forward pass produced for one flight condition.
#[derive(Clone, Debug, PartialEq)]
pub struct CyclePoint {
    pub flight: FlightCondition,
    pub mode: Mode,
    pub arrangement: Arrangement,
    pub freestream: Freestream,
    /// Station 0: freestream stagnation state and captured flow
    pub inlet: StationState,
    pub fan: Compression,
    pub split: SplitStreams,
    pub hpc: Compression,
    pub combustor: Combustion,
    pub hpt: Expansion,
    pub lpt: Expansion,
    /// `None` for the separate arrangement or a zero bypass ratio
    pub mixer: Option<StationState>,
    /// `None` in dry mode
    pub afterburner: Option<Combustion>,
    pub nozzle: NozzleExit,
    /// Separate arrangement only
    pub bypass_nozzle: Option<NozzleExit>,
    pub performance: Performance,
}

impl CyclePoint {
    /// Total fuel flow: combustor plus afterburner (kg/s).
    pub fn total_fuel_kgps(&self) -> f64 {
        self.combustor.fuel_flow.value
            + self
                .afterburner
                .as_ref()
                .map_or(0.0, |burn| burn.fuel_flow.value)
    }

    /// Named stations in flow order.
    pub fn stations(&self) -> Vec<StationRecord> {
        let mut stations = vec![
            StationRecord::new("0", "freestream", &self.inlet),
            StationRecord::new("2", "fan exit", &self.fan.exit),
            StationRecord::new("13", "bypass", &self.split.bypass),
            StationRecord::new("25", "core", &self.split.core),
            StationRecord::new("3", "hpc exit", &self.hpc.exit),
            StationRecord::new("4", "combustor exit", &self.combustor.exit),
            StationRecord::new("45", "hpt exit", &self.hpt.exit),
            StationRecord::new("5", "lpt exit", &self.lpt.exit),
        ];
        if let Some(mixed) = &self.mixer {
            stations.push(StationRecord::new("6", "mixer exit", mixed));
        }
        if let Some(burn) = &self.afterburner {
            stations.push(StationRecord::new("7", "afterburner exit", &burn.exit));
        }
        stations.push(StationRecord::new("9", "nozzle exit", &self.nozzle.station));
        if let Some(bypass) = &self.bypass_nozzle {
            stations.push(StationRecord::new("19", "bypass nozzle exit", &bypass.station));
        }
        stations
    }

    /// HPC and fan shaft work (W).
    pub fn spool_work(&self) -> SpoolWork {
        SpoolWork {
            high_pressure_w: self.hpc.required_work.value,
            low_pressure_w: self.fan.required_work.value,
        }
    }
}

/// Shaft power carried by each spool.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SpoolWork {
    pub high_pressure_w: f64,
    pub low_pressure_w: f64,
}

/// Flat view of one station for tables and JSON output.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StationRecord {
    pub station: &'static str,
    pub label: &'static str,
    pub tt_k: f64,
    pub pt_pa: f64,
    pub mdot_kgps: f64,
    pub fuel_kgps: f64,
}

impl StationRecord {
    fn new(station: &'static str, label: &'static str, state: &StationState) -> Self {
        Self {
            station,
            label,
            tt_k: state.tt_k(),
            pt_pa: state.pt_pa(),
            mdot_kgps: state.mdot_kgps(),
            fuel_kgps: state.fuel_kgps(),
        }
    }
}
