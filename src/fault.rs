use rand::Rng;

/// One uniform draw against `rate * duration` decides whether the flight
/// faulted. The product is not clamped: past 1.0 every flight faults, a
/// known limit of the linear hazard model.
pub fn fault_occurred(rng: &mut impl Rng, rate_per_hour: f64, duration_hours: f64) -> bool {
    rng.gen::<f64>() < rate_per_hour * duration_hours
}
