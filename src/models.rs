use serde::{Deserialize, Serialize};

pub const DEFAULT_HORIZON_HOURS: f64 = 3.0;
pub const DEFAULT_FLEET_SIZE: usize = 20;
pub const DEFAULT_CHARGER_COUNT: usize = 3;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SimConfig {
    #[serde(default = "default_horizon_hours")]
    pub horizon_hours: f64,
    #[serde(default = "default_fleet_size")]
    pub fleet_size: usize,
    #[serde(default = "default_charger_count")]
    pub charger_count: usize,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "reference_catalog")]
    pub catalog: Vec<VehicleTypeConfig>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            horizon_hours: DEFAULT_HORIZON_HOURS,
            fleet_size: DEFAULT_FLEET_SIZE,
            charger_count: DEFAULT_CHARGER_COUNT,
            seed: None,
            catalog: reference_catalog(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct VehicleTypeConfig {
    pub operator: String,
    pub cruise_speed_mph: f64,
    pub battery_capacity_kwh: f64,
    pub time_to_charge_hours: f64,
    pub energy_per_mile_kwh: f64,
    pub passenger_count: u32,
    pub fault_rate_per_hour: f64,
}

impl VehicleTypeConfig {
    pub fn flight_duration_hours(&self) -> f64 {
        self.battery_capacity_kwh / (self.cruise_speed_mph * self.energy_per_mile_kwh)
    }

    pub fn distance_per_flight_miles(&self) -> f64 {
        self.cruise_speed_mph * self.flight_duration_hours()
    }
}

pub fn reference_catalog() -> Vec<VehicleTypeConfig> {
    vec![
        vehicle_type("Alpha", 120.0, 320.0, 0.6, 1.6, 4, 0.25),
        vehicle_type("Bravo", 100.0, 100.0, 0.2, 1.5, 5, 0.10),
        vehicle_type("Charlie", 160.0, 220.0, 0.8, 2.2, 3, 0.05),
        vehicle_type("Delta", 90.0, 120.0, 0.62, 0.8, 2, 0.22),
        vehicle_type("Echo", 30.0, 150.0, 0.3, 5.8, 2, 0.61),
    ]
}

fn vehicle_type(
    operator: &str,
    cruise_speed_mph: f64,
    battery_capacity_kwh: f64,
    time_to_charge_hours: f64,
    energy_per_mile_kwh: f64,
    passenger_count: u32,
    fault_rate_per_hour: f64,
) -> VehicleTypeConfig {
    VehicleTypeConfig {
        operator: operator.to_string(),
        cruise_speed_mph,
        battery_capacity_kwh,
        time_to_charge_hours,
        energy_per_mile_kwh,
        passenger_count,
        fault_rate_per_hour,
    }
}

fn default_horizon_hours() -> f64 {
    DEFAULT_HORIZON_HOURS
}

fn default_fleet_size() -> usize {
    DEFAULT_FLEET_SIZE
}

fn default_charger_count() -> usize {
    DEFAULT_CHARGER_COUNT
}
