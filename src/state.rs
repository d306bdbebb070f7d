use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Vehicle {
    pub id: usize,
    pub type_idx: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityKind {
    Flight,
    Charge,
}

#[derive(Clone, Debug, Serialize)]
pub struct ActivityRecord {
    pub vehicle: usize,
    pub type_idx: usize,
    pub kind: ActivityKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charger: Option<usize>,
    pub started_at_hours: f64,
    pub completed_at_hours: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct OperatorSummary {
    pub operator: String,
    pub vehicles: usize,
    pub flights: u32,
    pub charges: u32,
    pub faults: u32,
    pub total_flight_time_hours: f64,
    pub total_distance_miles: f64,
    pub total_charge_time_hours: f64,
    pub passenger_miles: f64,
    pub avg_flight_time_hours: f64,
    pub avg_distance_miles: f64,
    pub avg_charge_time_hours: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct RunMetadata {
    pub horizon_hours: f64,
    pub fleet_size: usize,
    pub charger_count: usize,
    pub seed: u64,
}

#[derive(Clone, Debug, Serialize)]
pub struct SimulationResult {
    pub metadata: RunMetadata,
    pub operators: Vec<OperatorSummary>,
    pub activity: Vec<ActivityRecord>,
}
