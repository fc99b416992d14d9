//! End-to-end cycle points through the full engine.

use proptest::prelude::*;
use tf_cycle::{
    Ambient, Arrangement, CycleError, Engine, EngineConfig, FlightCondition, Mode, run_engine,
};
use tf_core::numeric::{Tolerances, nearly_equal};

fn f119() -> Engine {
    Engine::new(&EngineConfig::f119()).unwrap()
}

#[test]
fn static_inlet_stagnation_equals_ambient() {
    let point = f119().run(&FlightCondition::sea_level(0.0), Mode::Dry).unwrap();
    assert_eq!(point.inlet.tt_k(), 293.0);
    assert_eq!(point.inlet.pt_pa(), 101_325.0);
    assert_eq!(point.performance.flight_velocity_mps, 0.0);
    // The engine still draws air at the static inlet-face Mach
    assert!((point.inlet.mdot_kgps() - 144.82).abs() < 0.01);
}

#[test]
fn static_wet_point_pays_afterburner_fuel_penalty() {
    let engine = f119();
    let flight = FlightCondition::sea_level(0.0);
    let dry = engine.run(&flight, Mode::Dry).unwrap();
    let wet = engine.run(&flight, Mode::Wet).unwrap();

    assert!(wet.performance.net_thrust_n.is_finite());
    assert!(wet.performance.net_thrust_n > 0.0);
    assert!(wet.performance.net_thrust_n > dry.performance.net_thrust_n);
    assert!(wet.performance.tsfc_kg_per_n_s > dry.performance.tsfc_kg_per_n_s);

    let afterburner = wet.afterburner.as_ref().unwrap();
    assert_eq!(afterburner.exit.tt_k(), 2200.0);
    assert!((wet.performance.net_thrust_n - 175_146.0).abs() < 100.0);
    assert!((wet.performance.fuel_flow_kgps - 6.864).abs() < 0.01);
}

#[test]
fn repeated_runs_are_bit_identical() {
    let engine = f119();
    let flight = FlightCondition::sea_level(1.2);
    let first = engine.run(&flight, Mode::Wet).unwrap();
    let second = engine.run(&flight, Mode::Wet).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        first.performance.tsfc_kg_per_n_s.to_bits(),
        second.performance.tsfc_kg_per_n_s.to_bits()
    );
}

#[test]
fn mass_is_conserved_through_the_engine() {
    let point = f119().run(&FlightCondition::sea_level(0.9), Mode::Wet).unwrap();
    let tol = Tolerances::default();

    let split = &point.split;
    assert!(nearly_equal(
        split.core.mdot_kgps() + split.bypass.mdot_kgps(),
        point.fan.exit.mdot_kgps(),
        tol
    ));
    let mixed = point.mixer.unwrap();
    assert!(nearly_equal(
        mixed.mdot_kgps(),
        point.lpt.exit.mdot_kgps() + split.bypass.mdot_kgps(),
        tol
    ));
    assert!(nearly_equal(
        point.nozzle.station.mdot_kgps(),
        point.inlet.mdot_kgps() + point.total_fuel_kgps(),
        tol
    ));
    assert!(nearly_equal(
        point.nozzle.station.air_kgps(),
        point.inlet.mdot_kgps(),
        tol
    ));
}

#[test]
fn turbines_reproduce_compressor_work() {
    let point = f119().run(&FlightCondition::sea_level(0.6), Mode::Dry).unwrap();
    let tol = Tolerances {
        abs: 1e-6,
        rel: 1e-12,
    };
    let hpt_eta = EngineConfig::f119().hpt.efficiency;
    let lpt_eta = EngineConfig::f119().lpt.efficiency;

    let hpt_work = point.combustor.exit.mdot_kgps() * hpt_eta * point.hpt.delta_h;
    let lpt_work = point.hpt.exit.mdot_kgps() * lpt_eta * point.lpt.delta_h;
    assert!(nearly_equal(hpt_work, point.hpc.required_work.value, tol));
    assert!(nearly_equal(lpt_work, point.fan.required_work.value, tol));
}

#[test]
fn separate_exhaust_uses_bypass_nozzle() {
    let config = EngineConfig {
        arrangement: Arrangement::Separate,
        ..EngineConfig::f119()
    };
    let point = run_engine(&config, &FlightCondition::sea_level(0.0), Mode::Wet).unwrap();

    assert!(point.mixer.is_none());
    let bypass = point.bypass_nozzle.as_ref().unwrap();
    assert_eq!(bypass.station.fuel_kgps(), 0.0);
    assert_eq!(bypass.station.tt_k(), point.fan.exit.tt_k());
    // Afterburner heats the core stream only
    assert!(nearly_equal(
        point.afterburner.as_ref().unwrap().exit.air_kgps(),
        point.split.core.mdot_kgps(),
        Tolerances::default()
    ));

    let stations: Vec<_> = point.stations().iter().map(|s| s.station).collect();
    assert!(stations.contains(&"19"));
    assert!(!stations.contains(&"6"));
    assert!(point.performance.net_thrust_n > 0.0);
}

#[test]
fn zero_bypass_ratio_skips_mixing() {
    let mut config = EngineConfig::f119();
    config.splitter.bypass_ratio = 0.0;
    let point = run_engine(&config, &FlightCondition::sea_level(0.0), Mode::Dry).unwrap();

    assert_eq!(point.split.bypass.mdot_kgps(), 0.0);
    assert!(point.mixer.is_none());
    assert_eq!(point.nozzle.station, point.lpt.exit);
    assert!(point.performance.net_thrust_n > 0.0);
}

#[test]
fn negative_mach_is_invalid_input() {
    let err = f119()
        .run(&FlightCondition::sea_level(-0.1), Mode::Dry)
        .unwrap_err();
    assert!(err.is_invalid_input());
    assert!(matches!(err, CycleError::InvalidInput { field: "mach", .. }));
}

#[test]
fn overflowing_mach_is_invalid_input() {
    let err = run_engine(
        &EngineConfig::f119(),
        &FlightCondition::sea_level(1e160),
        Mode::Dry,
    )
    .unwrap_err();
    assert!(err.is_invalid_input(), "{err}");
    assert!(!err.is_infeasible());
}

#[test]
fn efficiencies_follow_flight_speed() {
    let engine = f119();
    let static_point = engine.run(&FlightCondition::sea_level(0.0), Mode::Dry).unwrap();
    assert_eq!(static_point.performance.propulsive_efficiency, 0.0);
    assert!(static_point.performance.thermal_efficiency > 0.0);
    assert!(static_point.performance.thermal_efficiency < 1.0);

    let perf = engine
        .run(&FlightCondition::sea_level(0.9), Mode::Wet)
        .unwrap()
        .performance;
    assert!(perf.thermal_efficiency > 0.0 && perf.thermal_efficiency < 1.0);
    assert!(perf.overall_efficiency > 0.0);
    let product = perf.thermal_efficiency * perf.propulsive_efficiency;
    assert!((perf.overall_efficiency - product).abs() < 1e-12);
}

#[test]
fn unknown_mode_is_rejected() {
    let err = "reheat".parse::<Mode>().unwrap_err();
    assert!(err.is_invalid_input());
    assert!(err.to_string().contains("reheat"));
}

#[test]
fn cold_combustor_is_infeasible() {
    let mut config = EngineConfig::f119();
    config.combustor.exit_temperature_k = 800.0;
    let err = run_engine(&config, &FlightCondition::sea_level(0.0), Mode::Dry).unwrap_err();
    assert!(err.is_infeasible());
    assert!(matches!(err, CycleError::Component { ref stage, .. } if stage == "combustor"));
}

#[test]
fn overloaded_turbine_is_infeasible() {
    let mut config = EngineConfig::f119();
    config.hpc.pressure_ratio = 20.0;
    config.hpt.efficiency = 0.6;
    let err = run_engine(&config, &FlightCondition::sea_level(0.0), Mode::Dry).unwrap_err();
    assert!(err.is_infeasible());
    assert!(matches!(err, CycleError::Component { ref stage, .. } if stage == "hpt"));
}

#[test]
fn dry_thrust_collapses_at_high_mach() {
    let err = f119()
        .run(&FlightCondition::sea_level(2.25), Mode::Dry)
        .unwrap_err();
    assert!(err.is_infeasible());
    assert!(matches!(err, CycleError::Infeasible { .. }));

    // Lighting the afterburner recovers positive thrust
    let wet = f119().run(&FlightCondition::sea_level(2.25), Mode::Wet).unwrap();
    assert!(wet.performance.net_thrust_n > 0.0);
}

#[test]
fn colder_ambient_raises_captured_flow() {
    let engine = f119();
    let warm = engine.run(&FlightCondition::sea_level(0.8), Mode::Dry).unwrap();
    let cold = engine
        .run(
            &FlightCondition::new(
                0.8,
                Ambient {
                    pressure_pa: 101_325.0,
                    temperature_k: 250.0,
                },
            ),
            Mode::Dry,
        )
        .unwrap();
    assert!(cold.inlet.mdot_kgps() > warm.inlet.mdot_kgps());
}

proptest! {
    #[test]
    fn stagnation_state_rises_through_compression(mach in 0.0_f64..1.8) {
        let point = f119().run(&FlightCondition::sea_level(mach), Mode::Wet).unwrap();
        prop_assert!(point.fan.exit.pt_pa() > point.inlet.pt_pa());
        prop_assert!(point.fan.exit.tt_k() > point.inlet.tt_k());
        prop_assert!(point.hpc.exit.pt_pa() > point.split.core.pt_pa());
        prop_assert!(point.hpc.exit.tt_k() > point.split.core.tt_k());
        prop_assert!(point.hpt.exit.tt_k() < point.combustor.exit.tt_k());
        prop_assert!(point.lpt.exit.pt_pa() < point.hpt.exit.pt_pa());
        prop_assert!(point.performance.tsfc_kg_per_n_s > 0.0);
    }
}
