use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tf_cycle::{
    Ambient, Arrangement, CyclePoint, CycleResult, Engine, EngineConfig, FlightCondition,
    MachSweep, Mode, Performance, StationRecord, SweepFailure, SweepReport, sweep_engine,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tf-cli")]
#[command(about = "Turbofan cycle model - F119-class mixed-flow afterburning engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a single flight condition
    Run {
        /// Freestream Mach number
        #[arg(long, default_value_t = 0.0)]
        mach: f64,
        /// Afterburner mode: dry or wet
        #[arg(long, default_value = "dry")]
        mode: Mode,
        #[command(flatten)]
        engine: EngineArgs,
        /// Print every station's stagnation state
        #[arg(long)]
        stations: bool,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Sweep a Mach range and tabulate thrust, TSFC and specific thrust
    Sweep {
        #[arg(long, default_value_t = 0.0)]
        start: f64,
        #[arg(long, default_value_t = 2.25)]
        end: f64,
        #[arg(long, default_value_t = 40)]
        points: usize,
        /// Afterburner mode: dry or wet
        #[arg(long, default_value = "wet")]
        mode: Mode,
        #[command(flatten)]
        engine: EngineArgs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
        /// Output file (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the engine configuration as YAML
    Config {
        /// Configuration file to validate and echo (defaults to the F119 estimate)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Args)]
struct EngineArgs {
    /// Engine configuration file (YAML, or JSON by extension)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the exhaust arrangement: mixed or separate
    #[arg(long)]
    arrangement: Option<Arrangement>,
    /// Ambient static pressure (Pa)
    #[arg(long, default_value_t = 101_325.0)]
    p0: f64,
    /// Ambient static temperature (K)
    #[arg(long, default_value_t = 293.0)]
    t0: f64,
}

impl EngineArgs {
    fn engine_config(&self) -> CycleResult<EngineConfig> {
        let mut config = load_config(self.config.as_deref())?;
        if let Some(arrangement) = self.arrangement {
            config.arrangement = arrangement;
        }
        Ok(config)
    }

    fn ambient(&self) -> Ambient {
        Ambient {
            pressure_pa: self.p0,
            temperature_k: self.t0,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

fn main() -> CycleResult<()> {
    // Logs go to stderr so tables on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            mach,
            mode,
            engine,
            stations,
            json,
        } => cmd_run(mach, mode, &engine, stations, json),
        Commands::Sweep {
            start,
            end,
            points,
            mode,
            engine,
            format,
            output,
        } => cmd_sweep(
            MachSweep::new(start, end, points)?,
            mode,
            &engine,
            format,
            output.as_deref(),
        ),
        Commands::Config { config } => cmd_config(config.as_deref()),
    }
}

fn load_config(path: Option<&Path>) -> CycleResult<EngineConfig> {
    match path {
        Some(path) => EngineConfig::load(path),
        None => Ok(EngineConfig::default()),
    }
}

#[derive(Serialize)]
struct RunOutput<'a> {
    mach: f64,
    mode: Mode,
    arrangement: Arrangement,
    performance: &'a Performance,
    #[serde(skip_serializing_if = "Option::is_none")]
    stations: Option<Vec<StationRecord>>,
}

fn cmd_run(mach: f64, mode: Mode, args: &EngineArgs, stations: bool, json: bool) -> CycleResult<()> {
    let engine = Engine::new(&args.engine_config()?)?;
    let point = engine.run(&FlightCondition::new(mach, args.ambient()), mode)?;

    if json {
        let output = RunOutput {
            mach,
            mode,
            arrangement: point.arrangement,
            performance: &point.performance,
            stations: stations.then(|| point.stations()),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_point(&point);
    if stations {
        print_stations(&point.stations());
    }
    Ok(())
}

fn print_point(point: &CyclePoint) {
    let perf = &point.performance;
    println!(
        "Mach {:.3}, {} mode, {} exhaust",
        point.flight.mach, point.mode, point.arrangement
    );
    println!("  Net thrust:      {:>12.1} N", perf.net_thrust_n);
    println!(
        "  TSFC:            {:>12.4} mg/(N·s)",
        perf.tsfc_mg_per_n_s()
    );
    println!(
        "  Specific thrust: {:>12.1} N/(kg/s)",
        perf.specific_thrust_n_s_per_kg
    );
    println!("  Air flow:        {:>12.2} kg/s", perf.air_flow_kgps);
    println!("  Fuel flow:       {:>12.4} kg/s", perf.fuel_flow_kgps);
    println!("  Fuel-air ratio:  {:>12.5}", perf.fuel_air_ratio);
    println!(
        "  Efficiency:      thermal {:.3}, propulsive {:.3}, overall {:.3}",
        perf.thermal_efficiency, perf.propulsive_efficiency, perf.overall_efficiency
    );

    let work = point.spool_work();
    println!("  HP spool work:   {:>12.3} MW", work.high_pressure_w / 1.0e6);
    println!("  LP spool work:   {:>12.3} MW", work.low_pressure_w / 1.0e6);
}

fn print_stations(stations: &[StationRecord]) {
    println!(
        "\n{:>4}  {:<20} {:>10} {:>12} {:>10} {:>8}",
        "stn", "", "Tt (K)", "Pt (kPa)", "mdot", "fuel"
    );
    for s in stations {
        println!(
            "{:>4}  {:<20} {:>10.1} {:>12.2} {:>10.3} {:>8.4}",
            s.station,
            s.label,
            s.tt_k,
            s.pt_pa / 1.0e3,
            s.mdot_kgps,
            s.fuel_kgps
        );
    }
}

#[derive(Serialize)]
struct SweepRow {
    mach: f64,
    net_thrust_n: f64,
    tsfc_kg_per_n_s: f64,
    specific_thrust_n_s_per_kg: f64,
    fuel_flow_kgps: f64,
}

#[derive(Serialize)]
struct SweepOutput<'a> {
    mode: Mode,
    points: Vec<SweepRow>,
    failures: &'a [SweepFailure],
}

fn sweep_rows(report: &SweepReport) -> Vec<SweepRow> {
    report
        .points
        .iter()
        .map(|p| SweepRow {
            mach: p.flight.mach,
            net_thrust_n: p.performance.net_thrust_n,
            tsfc_kg_per_n_s: p.performance.tsfc_kg_per_n_s,
            specific_thrust_n_s_per_kg: p.performance.specific_thrust_n_s_per_kg,
            fuel_flow_kgps: p.performance.fuel_flow_kgps,
        })
        .collect()
}

fn cmd_sweep(
    sweep: MachSweep,
    mode: Mode,
    args: &EngineArgs,
    format: OutputFormat,
    output: Option<&Path>,
) -> CycleResult<()> {
    let engine = Engine::new(&args.engine_config()?)?;

    let start = Instant::now();
    let report = sweep_engine(&engine, &sweep, args.ambient(), mode)?;
    tracing::info!(elapsed_s = start.elapsed().as_secs_f64(), "sweep timing");

    let rows = sweep_rows(&report);
    let text = match format {
        OutputFormat::Json => {
            let output = SweepOutput {
                mode,
                points: rows,
                failures: &report.failures,
            };
            serde_json::to_string_pretty(&output)? + "\n"
        }
        OutputFormat::Csv => {
            let mut csv =
                String::from("mach,net_thrust_n,tsfc_kg_per_n_s,specific_thrust_n_s_per_kg\n");
            for r in &rows {
                csv.push_str(&format!(
                    "{},{},{},{}\n",
                    r.mach, r.net_thrust_n, r.tsfc_kg_per_n_s, r.specific_thrust_n_s_per_kg
                ));
            }
            csv
        }
        OutputFormat::Table => {
            let mut table = format!(
                "{:>7} {:>14} {:>16} {:>18}\n",
                "Mach", "Thrust (kN)", "TSFC (mg/N·s)", "F/mdot (N·s/kg)"
            );
            for r in &rows {
                table.push_str(&format!(
                    "{:>7.3} {:>14.2} {:>16.4} {:>18.1}\n",
                    r.mach,
                    r.net_thrust_n / 1.0e3,
                    r.tsfc_kg_per_n_s * 1.0e6,
                    r.specific_thrust_n_s_per_kg
                ));
            }
            for f in &report.failures {
                table.push_str(&format!("{:>7.3}  skipped: {}\n", f.mach, f.error));
            }
            table
        }
    };

    if let Some(path) = output {
        std::fs::write(path, text)?;
        println!(
            "✓ Wrote {} points ({} skipped) to {}",
            report.points.len(),
            report.failures.len(),
            path.display()
        );
    } else {
        print!("{}", text);
    }
    Ok(())
}

fn cmd_config(path: Option<&Path>) -> CycleResult<()> {
    let config = load_config(path)?;
    config.validate()?;
    print!("{}", config.to_yaml_string()?);
    Ok(())
}
