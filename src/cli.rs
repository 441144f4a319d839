//! Command-line argument parsing.

use std::path::PathBuf;

/// Parsed CLI arguments.
#[derive(Debug, Default)]
pub struct CliOptions {
    pub config: Option<PathBuf>,
    pub preset: Option<String>,
    pub seed: Option<u64>,
    pub csv_dir: Option<PathBuf>,
    pub log_level: Option<String>,
    #[cfg(feature = "api")]
    pub serve: bool,
    #[cfg(feature = "api")]
    pub port: Option<u16>,
    #[cfg(feature = "tui")]
    pub tui: bool,
}

/// What the caller should do after parsing.
#[derive(Debug)]
pub enum Command {
    Run(CliOptions),
    Help,
}

pub fn parse_args() -> Result<Command, String> {
    parse_args_from(std::env::args().skip(1))
}

pub fn parse_args_from(args: impl IntoIterator<Item = String>) -> Result<Command, String> {
    let args: Vec<String> = args.into_iter().collect();
    let mut opts = CliOptions::default();

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--config" => {
                i += 1;
                let path = args.next_or_err(i, "--config requires a path argument")?;
                if opts.config.replace(PathBuf::from(path)).is_some() {
                    return Err("--config provided more than once".to_string());
                }
            }
            "--preset" => {
                i += 1;
                let name = args.next_or_err(i, "--preset requires a name argument")?;
                if opts.preset.replace(name.to_string()).is_some() {
                    return Err("--preset provided more than once".to_string());
                }
            }
            "--seed" => {
                i += 1;
                let raw = args.next_or_err(i, "--seed requires a u64 argument")?;
                let seed = raw
                    .parse::<u64>()
                    .map_err(|_| format!("--seed value \"{raw}\" is not a valid u64"))?;
                opts.seed = Some(seed);
            }
            "--csv-dir" => {
                i += 1;
                let path = args.next_or_err(i, "--csv-dir requires a directory argument")?;
                opts.csv_dir = Some(PathBuf::from(path));
            }
            "--log-level" => {
                i += 1;
                let level = args.next_or_err(i, "--log-level requires a level argument")?;
                opts.log_level = Some(level.to_string());
            }
            #[cfg(feature = "api")]
            "--serve" => opts.serve = true,
            #[cfg(feature = "api")]
            "--port" => {
                i += 1;
                let raw = args.next_or_err(i, "--port requires a u16 argument")?;
                let port = raw
                    .parse::<u16>()
                    .map_err(|_| format!("--port value \"{raw}\" is not a valid u16"))?;
                opts.port = Some(port);
            }
            #[cfg(feature = "tui")]
            "--tui" => opts.tui = true,
            other => return Err(format!("unknown argument \"{other}\"")),
        }
        i += 1;
    }

    if opts.config.is_some() && opts.preset.is_some() {
        return Err("--config and --preset are mutually exclusive; choose one source".to_string());
    }

    Ok(Command::Run(opts))
}

trait SliceArgExt {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String>;
}

impl SliceArgExt for [String] {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String> {
        self.get(index)
            .map(String::as_str)
            .ok_or_else(|| err.to_string())
    }
}

pub fn print_help() {
    eprintln!("enerwise: synthetic warehouse energy dashboard");
    eprintln!();
    eprintln!("Usage: enerwise [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <path>          Load configuration from a TOML file");
    eprintln!("  --preset <name>          Use a built-in preset (live, demo)");
    eprintln!("  --seed <u64>             Fix the random seed");
    eprintln!("  --csv-dir <dir>          Export sectors/projections/benchmarks CSV");
    eprintln!("  --log-level <level>      Log level (off, error, warn, info, debug, trace)");
    #[cfg(feature = "api")]
    {
        eprintln!("  --serve                  Start the REST API server");
        eprintln!("  --port <u16>             API server port (default: 3000)");
    }
    #[cfg(feature = "tui")]
    eprintln!("  --tui                    Open the live terminal dashboard");
    eprintln!("  --help                   Show this help message");
    eprintln!();
    eprintln!("If no --config or --preset is given, the live preset is used.");
}
