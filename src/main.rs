//! Service entry point — CLI wiring and config-driven assembly.

use std::path::Path;
use std::process;
use std::sync::Arc;

use chrono::Utc;
use tariff_compare::config::AppConfig;
use tariff_compare::engine::cost::CostEngine;
use tariff_compare::generator;
use tariff_compare::reporting;
use tariff_compare::store::readings::MeterReadingStore;

/// Parsed CLI arguments.
struct CliArgs {
    config_path: Option<String>,
    seed_override: Option<u64>,
    #[cfg(feature = "api")]
    serve: bool,
    #[cfg(feature = "api")]
    port: u16,
}

fn print_help() {
    eprintln!("tariff-compare — smart-meter price-plan cost comparison");
    eprintln!();
    eprintln!("Usage: tariff-compare [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <path>   Load service config from a TOML file");
    eprintln!("  --seed <u64>      Override the demo-reading random seed");
    #[cfg(feature = "api")]
    {
        eprintln!("  --serve           Start the REST API server");
        eprintln!("  --port <u16>      API server port (default: 8080)");
    }
    eprintln!("  --help            Show this help message");
    eprintln!();
    eprintln!("Without --config, the built-in demo configuration is used.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        config_path: None,
        seed_override: None,
        #[cfg(feature = "api")]
        serve: false,
        #[cfg(feature = "api")]
        port: 8080,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--config" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --config requires a path argument");
                    process::exit(1);
                }
                cli.config_path = Some(args[i].clone());
            }
            "--seed" => {
                i += 1;
                let Some(value) = args.get(i).and_then(|s| s.parse().ok()) else {
                    eprintln!("error: --seed requires a u64 argument");
                    process::exit(1);
                };
                cli.seed_override = Some(value);
            }
            #[cfg(feature = "api")]
            "--serve" => {
                cli.serve = true;
            }
            #[cfg(feature = "api")]
            "--port" => {
                i += 1;
                let Some(value) = args.get(i).and_then(|s| s.parse().ok()) else {
                    eprintln!("error: --port requires a u16 argument");
                    process::exit(1);
                };
                cli.port = value;
            }
            other => {
                eprintln!("error: unknown argument: {other}");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

fn main() {
    let cli = parse_args();

    let mut config = match cli.config_path.as_deref() {
        Some(path) => match AppConfig::from_toml_file(Path::new(path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("error: {e}");
                process::exit(1);
            }
        },
        None => AppConfig::demo(),
    };
    if let Some(seed) = cli.seed_override {
        config.generator.seed = seed;
    }

    let store = Arc::new(MeterReadingStore::new());
    let accounts = config.build_accounts();
    let catalog = Arc::new(config.build_catalog());

    // Seed demo readings for every configured meter; the account table is a
    // BTreeMap, so meter order (and thus each meter's RNG stream) is stable.
    let now = Utc::now();
    for (index, (meter_id, _)) in config.accounts.meters.iter().enumerate() {
        let readings = generator::generate_for_meter(
            config.generator.readings_per_meter,
            now,
            config.generator.seed,
            index as u64,
        );
        store.store(meter_id, readings);
    }

    let engine = CostEngine::new(Arc::clone(&store), catalog);

    for meter_id in config.accounts.meters.keys() {
        let supplier = accounts.supplier_for(meter_id);
        match engine.recommend(meter_id, None) {
            Ok(ranked) => reporting::print_recommendations(meter_id, supplier, &ranked),
            Err(e) => eprintln!("cannot rank plans for {meter_id}: {e}"),
        }
    }

    #[cfg(feature = "api")]
    if cli.serve {
        let state = Arc::new(tariff_compare::api::AppState {
            store,
            accounts,
            engine,
        });
        let addr = std::net::SocketAddr::from(([127, 0, 0, 1], cli.port));
        let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("error: cannot start tokio runtime: {e}");
            process::exit(1);
        });
        runtime.block_on(tariff_compare::api::serve(state, addr));
    }
}
