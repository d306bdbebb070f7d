use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::error::{Error, Result};
use crate::models::SimConfig;

#[derive(Parser, Debug)]
#[command(name = "evtol-sim")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the fleet simulation and print per-operator statistics
    Run(RunArgs),
    /// Print the effective configuration without running
    ShowConfig(ConfigArgs),
    /// Print the vehicle type catalog
    ListTypes(ConfigArgs),
}

#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
    #[arg(long, value_enum, default_value = "human")]
    pub format: FormatArg,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[arg(long, help = "TOML or JSON file with the simulation configuration")]
    pub config: Option<PathBuf>,
    #[arg(long, help = "Simulated horizon in hours")]
    pub horizon: Option<f64>,
    #[arg(long)]
    pub fleet_size: Option<usize>,
    #[arg(long)]
    pub chargers: Option<usize>,
    #[arg(long, help = "Seed for the run; omit to draw one at startup")]
    pub seed: Option<u64>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    Human,
    Summary,
    Json,
}

pub fn parse_args() -> Result<Cli> {
    Cli::try_parse().map_err(|e| Error::Cli(e.to_string()))
}

pub fn build_config(args: &ConfigArgs) -> Result<SimConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => SimConfig::default(),
    };
    if let Some(horizon) = args.horizon {
        config.horizon_hours = horizon;
    }
    if let Some(fleet_size) = args.fleet_size {
        config.fleet_size = fleet_size;
    }
    if let Some(chargers) = args.chargers {
        config.charger_count = chargers;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<SimConfig> {
    let contents = fs::read_to_string(path).map_err(|err| {
        Error::ConfigIo(format!(
            "failed to read config '{}': {}",
            path.display(),
            err
        ))
    })?;
    let ext = path
        .extension()
        .and_then(|value| value.to_str())
        .unwrap_or("");

    match ext {
        "toml" => toml::from_str(&contents)
            .map_err(|err| Error::ConfigParse(format!("failed to parse TOML: {}", err))),
        "json" => serde_json::from_str(&contents)
            .map_err(|err| Error::ConfigParse(format!("failed to parse JSON: {}", err))),
        "" => Err(Error::UnsupportedConfigFormat("unknown".to_string())),
        _ => Err(Error::UnsupportedConfigFormat(ext.to_string())),
    }
}
