use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("horizon must be greater than 0 (got {0})")]
    InvalidHorizon(f64),
    #[error("fleet size must be greater than 0")]
    FleetEmpty,
    #[error("charger count must be greater than 0")]
    NoChargers,
    #[error("vehicle type catalog must not be empty")]
    EmptyCatalog,
    #[error("vehicle type entries must name an operator")]
    BlankOperator,
    #[error("vehicle type '{0}': cruise speed must be greater than 0")]
    InvalidCruiseSpeed(String),
    #[error("vehicle type '{0}': battery capacity must be greater than 0")]
    InvalidBatteryCapacity(String),
    #[error("vehicle type '{0}': energy per mile must be greater than 0")]
    InvalidEnergyRate(String),
    #[error("vehicle type '{0}': time to charge must not be negative")]
    InvalidChargeTime(String),
    #[error("vehicle type '{0}': fault rate must not be negative")]
    InvalidFaultRate(String),
    #[error("vehicle type '{0}': derived flight duration must be positive and finite")]
    DegenerateFlightDuration(String),
    #[error("{0}")]
    ConfigIo(String),
    #[error("{0}")]
    ConfigParse(String),
    #[error("unsupported config format '{0}'")]
    UnsupportedConfigFormat(String),
    #[error("{0}")]
    Cli(String),
}

pub type Result<T> = std::result::Result<T, Error>;
