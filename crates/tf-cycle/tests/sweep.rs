//! Parallel Mach sweeps over the default engine.

use tf_cycle::{
    Ambient, CycleError, Engine, EngineConfig, FlightCondition, MachSweep, Mode, run_sweep,
    sweep_engine,
};

#[test]
fn wet_sweep_solves_every_point_in_order() {
    let report = run_sweep(
        &EngineConfig::f119(),
        &MachSweep::default(),
        Ambient::sea_level(),
        Mode::Wet,
    )
    .unwrap();

    assert!(report.failures.is_empty());
    assert_eq!(report.points.len(), 40);
    assert_eq!(report.mach(), MachSweep::default().values());
    assert!(report.net_thrust().iter().all(|f| *f > 0.0));
    assert!(report.tsfc().iter().all(|s| *s > 0.0));
    assert_eq!(report.specific_thrust().len(), 40);
}

#[test]
fn dry_sweep_skips_points_without_thrust() {
    let sweep = MachSweep::default();
    let report = run_sweep(&EngineConfig::f119(), &sweep, Ambient::sea_level(), Mode::Dry).unwrap();

    assert_eq!(report.points.len() + report.failures.len(), sweep.points);
    assert!(!report.failures.is_empty());
    for failure in &report.failures {
        assert!(failure.infeasible, "{failure:?}");
        assert!(failure.mach > 1.85);
    }
    assert_eq!(report.failures.last().map(|f| f.mach), Some(2.25));

    let mach = report.mach();
    assert!(mach.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(mach[0], 0.0);
}

#[test]
fn sweep_matches_single_point_runs() {
    let engine = Engine::new(&EngineConfig::f119()).unwrap();
    let sweep = MachSweep::new(0.2, 1.4, 7).unwrap();
    let report = sweep_engine(&engine, &sweep, Ambient::sea_level(), Mode::Wet).unwrap();

    for (point, mach) in report.points.iter().zip(sweep.values()) {
        let single = engine.run(&FlightCondition::sea_level(mach), Mode::Wet).unwrap();
        assert_eq!(*point, single);
    }
}

#[test]
fn invalid_config_fails_before_sweeping() {
    let mut config = EngineConfig::f119();
    config.mixer.pressure_loss = 1.5;
    let err = run_sweep(&config, &MachSweep::default(), Ambient::sea_level(), Mode::Dry)
        .unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn vacuum_ambient_fails_before_sweeping() {
    let ambient = Ambient {
        pressure_pa: 0.0,
        temperature_k: 293.0,
    };
    let err = run_sweep(&EngineConfig::f119(), &MachSweep::default(), ambient, Mode::Wet)
        .unwrap_err();
    assert!(matches!(
        err,
        CycleError::InvalidInput {
            field: "ambient pressure",
            ..
        }
    ));
}
