use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::charging::ChargerPool;
use crate::error::{Error, Result};
use crate::events::{Event, EventQueue};
use crate::fault::fault_occurred;
use crate::models::{SimConfig, VehicleTypeConfig};
use crate::state::{ActivityKind, ActivityRecord, RunMetadata, SimulationResult, Vehicle};
use crate::stats::StatsBoard;

pub struct SimulationEngine {
    pub config: SimConfig,
    seed: u64,
    rng: StdRng,
    time_hours: f64,
    queue: EventQueue,
    pool: ChargerPool,
    vehicles: Vec<Vehicle>,
    operators: Vec<String>,
    operator_of_type: Vec<usize>,
    stats: StatsBoard,
    activity: Vec<ActivityRecord>,
    store_activity: bool,
}

impl SimulationEngine {
    pub fn new(config: SimConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self {
            config,
            seed,
            rng: StdRng::seed_from_u64(seed),
            time_hours: 0.0,
            queue: EventQueue::new(),
            pool: ChargerPool::new(0),
            vehicles: Vec::new(),
            operators: Vec::new(),
            operator_of_type: Vec::new(),
            stats: StatsBoard::new(0),
            activity: Vec::new(),
            store_activity: false,
        }
    }

    pub fn run(&mut self, store_activity: bool) -> Result<SimulationResult> {
        validate_config(&self.config)?;
        self.store_activity = store_activity;

        let (operators, operator_of_type) = operator_table(&self.config.catalog);
        self.operators = operators;
        self.operator_of_type = operator_of_type;
        self.stats = StatsBoard::new(self.operators.len());
        self.pool = ChargerPool::new(self.config.charger_count);
        self.queue = EventQueue::new();
        self.activity = Vec::new();
        self.time_hours = 0.0;

        let type_count = self.config.catalog.len();
        let vehicles: Vec<Vehicle> = (0..self.config.fleet_size)
            .map(|id| Vehicle {
                id,
                type_idx: self.rng.gen_range(0..type_count),
            })
            .collect();
        self.vehicles = vehicles;

        for id in 0..self.vehicles.len() {
            self.schedule_flight(id, 0.0);
        }

        while let Some(scheduled) = self.queue.pop_within(self.config.horizon_hours) {
            self.time_hours = scheduled.time_hours;
            match scheduled.event {
                Event::FlightEnd {
                    vehicle,
                    started_at_hours,
                    duration_hours,
                } => self.on_flight_end(vehicle, started_at_hours, duration_hours),
                Event::ChargeEnd {
                    vehicle,
                    charger,
                    started_at_hours,
                } => self.on_charge_end(vehicle, charger, started_at_hours),
            }
        }

        Ok(self.collect_result())
    }

    fn on_flight_end(&mut self, vehicle: usize, started_at_hours: f64, duration_hours: f64) {
        let end_hours = started_at_hours + duration_hours;
        if end_hours > self.config.horizon_hours {
            return;
        }

        let type_idx = self.vehicles[vehicle].type_idx;
        let ty = &self.config.catalog[type_idx];
        let distance_miles = ty.distance_per_flight_miles();
        let passengers = ty.passenger_count;
        let fault_rate = ty.fault_rate_per_hour;
        let operator = self.operator_of_type[type_idx];

        self.stats
            .record_flight(operator, duration_hours, distance_miles, passengers);
        if fault_occurred(&mut self.rng, fault_rate, duration_hours) {
            self.stats.record_fault(operator);
        }
        self.record_activity(
            vehicle,
            type_idx,
            ActivityKind::Flight,
            None,
            started_at_hours,
            end_hours,
        );

        self.pool.enqueue(vehicle);
        self.try_charging(end_hours);
    }

    fn on_charge_end(&mut self, vehicle: usize, charger: usize, started_at_hours: f64) {
        let now_hours = self.time_hours;
        let type_idx = self.vehicles[vehicle].type_idx;
        let charge_hours = self.config.catalog[type_idx].time_to_charge_hours;
        let operator = self.operator_of_type[type_idx];

        self.stats.record_charge(operator, charge_hours);
        self.pool.release(charger);
        self.record_activity(
            vehicle,
            type_idx,
            ActivityKind::Charge,
            Some(charger),
            started_at_hours,
            now_hours,
        );

        self.schedule_flight(vehicle, now_hours);
        self.try_charging(now_hours);
    }

    fn schedule_flight(&mut self, vehicle: usize, start_hours: f64) {
        let type_idx = self.vehicles[vehicle].type_idx;
        let duration_hours = self.config.catalog[type_idx].flight_duration_hours();
        let end_hours = start_hours + duration_hours;
        if end_hours > self.config.horizon_hours {
            return;
        }
        self.queue.schedule(
            end_hours,
            Event::FlightEnd {
                vehicle,
                started_at_hours: start_hours,
                duration_hours,
            },
        );
    }

    fn try_charging(&mut self, now_hours: f64) {
        for slot in 0..self.pool.charger_count() {
            if !self.pool.is_idle(slot) {
                continue;
            }
            let vehicle = match self.pool.dequeue_waiting() {
                Some(vehicle) => vehicle,
                None => break,
            };
            let type_idx = self.vehicles[vehicle].type_idx;
            let charge_end = now_hours + self.config.catalog[type_idx].time_to_charge_hours;
            if charge_end > self.config.horizon_hours {
                continue;
            }
            self.pool.occupy(slot, vehicle);
            self.queue.schedule(
                charge_end,
                Event::ChargeEnd {
                    vehicle,
                    charger: slot,
                    started_at_hours: now_hours,
                },
            );
        }
    }

    fn record_activity(
        &mut self,
        vehicle: usize,
        type_idx: usize,
        kind: ActivityKind,
        charger: Option<usize>,
        started_at_hours: f64,
        completed_at_hours: f64,
    ) {
        if !self.store_activity {
            return;
        }
        self.activity.push(ActivityRecord {
            vehicle,
            type_idx,
            kind,
            charger,
            started_at_hours,
            completed_at_hours,
        });
    }

    fn collect_result(&mut self) -> SimulationResult {
        let mut vehicle_counts = vec![0usize; self.operators.len()];
        for vehicle in &self.vehicles {
            vehicle_counts[self.operator_of_type[vehicle.type_idx]] += 1;
        }

        SimulationResult {
            metadata: RunMetadata {
                horizon_hours: self.config.horizon_hours,
                fleet_size: self.config.fleet_size,
                charger_count: self.config.charger_count,
                seed: self.seed,
            },
            operators: self.stats.summarize(&self.operators, &vehicle_counts),
            activity: std::mem::take(&mut self.activity),
        }
    }
}

pub fn run_simulation(config: &SimConfig) -> Result<SimulationResult> {
    run_simulation_with_options(config, true)
}

pub fn run_simulation_summary(config: &SimConfig) -> Result<SimulationResult> {
    run_simulation_with_options(config, false)
}

pub fn run_simulation_with_options(
    config: &SimConfig,
    store_activity: bool,
) -> Result<SimulationResult> {
    let mut engine = SimulationEngine::new(config.clone());
    engine.run(store_activity)
}

fn validate_config(config: &SimConfig) -> Result<()> {
    if !config.horizon_hours.is_finite() || config.horizon_hours <= 0.0 {
        return Err(Error::InvalidHorizon(config.horizon_hours));
    }
    if config.fleet_size == 0 {
        return Err(Error::FleetEmpty);
    }
    if config.charger_count == 0 {
        return Err(Error::NoChargers);
    }
    if config.catalog.is_empty() {
        return Err(Error::EmptyCatalog);
    }
    for ty in &config.catalog {
        if ty.operator.trim().is_empty() {
            return Err(Error::BlankOperator);
        }
        if !ty.cruise_speed_mph.is_finite() || ty.cruise_speed_mph <= 0.0 {
            return Err(Error::InvalidCruiseSpeed(ty.operator.clone()));
        }
        if !ty.battery_capacity_kwh.is_finite() || ty.battery_capacity_kwh <= 0.0 {
            return Err(Error::InvalidBatteryCapacity(ty.operator.clone()));
        }
        if !ty.energy_per_mile_kwh.is_finite() || ty.energy_per_mile_kwh <= 0.0 {
            return Err(Error::InvalidEnergyRate(ty.operator.clone()));
        }
        if !ty.time_to_charge_hours.is_finite() || ty.time_to_charge_hours < 0.0 {
            return Err(Error::InvalidChargeTime(ty.operator.clone()));
        }
        if !ty.fault_rate_per_hour.is_finite() || ty.fault_rate_per_hour < 0.0 {
            return Err(Error::InvalidFaultRate(ty.operator.clone()));
        }
        let duration = ty.flight_duration_hours();
        if !duration.is_finite() || duration <= 0.0 {
            return Err(Error::DegenerateFlightDuration(ty.operator.clone()));
        }
    }
    Ok(())
}

fn operator_table(catalog: &[VehicleTypeConfig]) -> (Vec<String>, Vec<usize>) {
    let mut operators: Vec<String> = Vec::new();
    let mut operator_of_type = Vec::with_capacity(catalog.len());
    for ty in catalog {
        let idx = match operators.iter().position(|name| name == &ty.operator) {
            Some(idx) => idx,
            None => {
                operators.push(ty.operator.clone());
                operators.len() - 1
            }
        };
        operator_of_type.push(idx);
    }
    (operators, operator_of_type)
}
