use crate::models::{SimConfig, VehicleTypeConfig};
use crate::state::SimulationResult;

pub trait Formatter {
    fn write(&self, result: &SimulationResult) -> String;
}

pub struct HumanFormatter;
pub struct SummaryFormatter;
pub struct JsonFormatter;

impl Formatter for HumanFormatter {
    fn write(&self, result: &SimulationResult) -> String {
        let mut out = render_metadata(result);

        if !result.activity.is_empty() {
            out.push_str("Activity:\n");
            for record in &result.activity {
                if let Some(charger) = record.charger {
                    out.push_str(&format!(
                        "vehicle {} charge {:.2} -> {:.2} (charger {})\n",
                        record.vehicle,
                        record.started_at_hours,
                        record.completed_at_hours,
                        charger
                    ));
                } else {
                    out.push_str(&format!(
                        "vehicle {} flight {:.2} -> {:.2}\n",
                        record.vehicle, record.started_at_hours, record.completed_at_hours
                    ));
                }
            }
        }

        for summary in &result.operators {
            out.push_str(&format!("Stats for {}:\n", summary.operator));
            out.push_str(&format!(
                "  avg flight time: {:.2} hr\n",
                summary.avg_flight_time_hours
            ));
            out.push_str(&format!(
                "  avg distance per flight: {:.2} mi\n",
                summary.avg_distance_miles
            ));
            out.push_str(&format!(
                "  avg charge time: {:.2} hr\n",
                summary.avg_charge_time_hours
            ));
            out.push_str(&format!("  total faults: {}\n", summary.faults));
            out.push_str(&format!(
                "  passenger miles: {:.2}\n",
                summary.passenger_miles
            ));
        }

        out.push_str("Vehicle distribution:\n");
        for summary in &result.operators {
            out.push_str(&format!(
                "  {}: {} vehicle(s)\n",
                summary.operator, summary.vehicles
            ));
        }

        out
    }
}

impl Formatter for SummaryFormatter {
    fn write(&self, result: &SimulationResult) -> String {
        let mut out = render_metadata(result);
        out.push_str("Summary:\n");
        for summary in &result.operators {
            out.push_str(&format!(
                "{}: {} flights, {} charges, {} faults ({} vehicles)\n",
                summary.operator,
                summary.flights,
                summary.charges,
                summary.faults,
                summary.vehicles
            ));
        }
        out
    }
}

impl Formatter for JsonFormatter {
    fn write(&self, result: &SimulationResult) -> String {
        match serde_json::to_string_pretty(result) {
            Ok(mut json) => {
                json.push('\n');
                json
            }
            Err(err) => format!("{{\"error\": \"{}\"}}\n", err),
        }
    }
}

fn render_metadata(result: &SimulationResult) -> String {
    format!(
        "Metadata:\nhorizon_hours: {}\nfleet_size: {}\nchargers: {}\nseed: {}\n",
        result.metadata.horizon_hours,
        result.metadata.fleet_size,
        result.metadata.charger_count,
        result.metadata.seed
    )
}

pub fn render_config(config: &SimConfig) -> String {
    let seed = match config.seed {
        Some(seed) => seed.to_string(),
        None => "entropy".to_string(),
    };
    let mut out = format!(
        "Horizon: {} hr\nFleet size: {}\nChargers: {}\nSeed: {}\nCatalog:\n",
        config.horizon_hours, config.fleet_size, config.charger_count, seed
    );
    for ty in &config.catalog {
        out.push_str(&render_type_line(ty));
    }
    out
}

pub fn render_catalog(catalog: &[VehicleTypeConfig]) -> String {
    catalog.iter().map(render_type_line).collect()
}

fn render_type_line(ty: &VehicleTypeConfig) -> String {
    format!(
        "- {} ({} mph, {} kWh, {} h charge, {} kWh/mi, {} pax, {}/h faults)\n",
        ty.operator,
        ty.cruise_speed_mph,
        ty.battery_capacity_kwh,
        ty.time_to_charge_hours,
        ty.energy_per_mile_kwh,
        ty.passenger_count,
        ty.fault_rate_per_hour
    )
}
