//! Dashboard entry point: CLI wiring and config-driven rendering.

mod cli;

use std::process;

use tracing::info;

use enerwise::config::DashboardConfig;
use enerwise::error::Error;
use enerwise::io::export::export_snapshot;
use enerwise::logging;
use enerwise::snapshot::DashboardSnapshot;

use cli::{CliOptions, Command};

/// Loads configuration: `--config` takes priority, then `--preset`, then live.
fn load_config(opts: &CliOptions) -> Result<DashboardConfig, Error> {
    let mut cfg = if let Some(ref path) = opts.config {
        DashboardConfig::from_toml_file(path)?
    } else if let Some(ref name) = opts.preset {
        DashboardConfig::from_preset(name)?
    } else {
        DashboardConfig::live()
    };

    if let Some(seed) = opts.seed {
        cfg.generation.seed = Some(seed);
    }
    if let Some(ref level) = opts.log_level {
        cfg.logging.level = level.clone();
    }
    #[cfg(feature = "api")]
    if let Some(port) = opts.port {
        cfg.api.port = port;
    }

    let errors = cfg.validate();
    if !errors.is_empty() {
        return Err(Error::Invalid(errors));
    }
    Ok(cfg)
}

fn run(opts: CliOptions) -> Result<(), Error> {
    let cfg = load_config(&opts)?;
    let seed = cfg.generation.seed;

    #[cfg(feature = "tui")]
    if opts.tui {
        return enerwise::tui::run(seed, cfg.tui.refresh_ms)
            .map_err(|e| Error::io("terminal dashboard failed", e));
    }

    logging::init(&cfg.logging.level);
    info!(seed = ?seed, "generating dashboard");

    let snapshot = DashboardSnapshot::from_seed(seed);
    println!("{snapshot}");

    if let Some(ref dir) = opts.csv_dir {
        export_snapshot(&snapshot, dir)
            .map_err(|e| Error::io(format!("failed to write CSV to {}", dir.display()), e))?;
        eprintln!("Tables written to {}", dir.display());
    }

    #[cfg(feature = "api")]
    if opts.serve {
        serve(seed, cfg.api.port)?;
    }

    Ok(())
}

#[cfg(feature = "api")]
fn serve(seed: Option<u64>, port: u16) -> Result<(), Error> {
    use std::net::SocketAddr;
    use std::sync::Arc;

    let state = Arc::new(enerwise::api::AppState { seed });
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| Error::io("failed to create tokio runtime", e))?;
    rt.block_on(enerwise::api::serve(state, addr))
        .map_err(|e| Error::io(format!("API server on {addr} failed"), e))
}

fn report(err: &Error) {
    match err {
        Error::Invalid(errors) => {
            for e in errors {
                eprintln!("{e}");
            }
        }
        other => eprintln!("error: {other}"),
    }
}

fn main() {
    let opts = match cli::parse_args() {
        Ok(Command::Run(opts)) => opts,
        Ok(Command::Help) => {
            cli::print_help();
            return;
        }
        Err(msg) => {
            eprintln!("error: {msg}");
            cli::print_help();
            process::exit(1);
        }
    };

    if let Err(e) = run(opts) {
        report(&e);
        process::exit(1);
    }
}
