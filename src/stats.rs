use crate::state::OperatorSummary;

#[derive(Clone, Copy, Debug, Default)]
pub struct OperatorStats {
    pub flight_time_hours: f64,
    pub distance_miles: f64,
    pub charge_time_hours: f64,
    pub passenger_miles: f64,
    pub flights: u32,
    pub charges: u32,
    pub faults: u32,
}

#[derive(Debug)]
pub struct StatsBoard {
    per_operator: Vec<OperatorStats>,
}

impl StatsBoard {
    pub fn new(operator_count: usize) -> Self {
        Self {
            per_operator: vec![OperatorStats::default(); operator_count],
        }
    }

    pub fn record_flight(
        &mut self,
        operator: usize,
        duration_hours: f64,
        distance_miles: f64,
        passengers: u32,
    ) {
        let stats = &mut self.per_operator[operator];
        stats.flight_time_hours += duration_hours;
        stats.distance_miles += distance_miles;
        stats.passenger_miles += passengers as f64 * distance_miles;
        stats.flights += 1;
    }

    pub fn record_fault(&mut self, operator: usize) {
        self.per_operator[operator].faults += 1;
    }

    pub fn record_charge(&mut self, operator: usize, duration_hours: f64) {
        let stats = &mut self.per_operator[operator];
        stats.charge_time_hours += duration_hours;
        stats.charges += 1;
    }

    pub fn operator(&self, operator: usize) -> &OperatorStats {
        &self.per_operator[operator]
    }

    pub fn summarize(
        &self,
        operators: &[String],
        vehicle_counts: &[usize],
    ) -> Vec<OperatorSummary> {
        self.per_operator
            .iter()
            .enumerate()
            .map(|(idx, stats)| OperatorSummary {
                operator: operators[idx].clone(),
                vehicles: vehicle_counts[idx],
                flights: stats.flights,
                charges: stats.charges,
                faults: stats.faults,
                total_flight_time_hours: stats.flight_time_hours,
                total_distance_miles: stats.distance_miles,
                total_charge_time_hours: stats.charge_time_hours,
                passenger_miles: stats.passenger_miles,
                avg_flight_time_hours: safe_avg(stats.flight_time_hours, stats.flights),
                avg_distance_miles: safe_avg(stats.distance_miles, stats.flights),
                avg_charge_time_hours: safe_avg(stats.charge_time_hours, stats.charges),
            })
            .collect()
    }
}

fn safe_avg(total: f64, count: u32) -> f64 {
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}
