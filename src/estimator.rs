//! Trip estimation engine.
//!
//! Turns a [`TripRequest`] into a [`TripResult`]: distance, energy use,
//! charging stops, total time and cost. Pure and synchronous; every call only
//! reads its inputs and allocates a fresh result.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::traits::{ConsumptionProfile, DistanceEstimator};

/// Share of the battery range usable after each charging stop.
pub const SAFETY_MARGIN_FACTOR: f64 = 0.7;

/// Assumed average driving speed in km/h.
pub const AVERAGE_SPEED_KMH: f64 = 80.0;

/// Fast-charging time per stop, in minutes.
pub const CHARGING_MINUTES_PER_STOP: u32 = 25;

/// Energy price per kWh, in the trip's currency.
pub const COST_PER_KWH: f64 = 0.50;

/// Lower bound on the effective range per stop, in km.
const MIN_EFFECTIVE_RANGE_KM: f64 = 1.0;

/// Quotients this close to an integer are treated as exact.
const EXACT_MULTIPLE_TOLERANCE: f64 = 1e-9;

/// A trip to estimate. The `#[validate]` bounds are the trip form's; the
/// engine itself does not check them, see [`crate::validation::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "crate::validation::finite_inputs"))]
pub struct TripRequest {
    #[validate(custom = "crate::validation::not_blank")]
    pub origin: String,

    #[validate(custom = "crate::validation::not_blank")]
    pub destination: String,

    /// Range at 100% charge, in km.
    #[validate(range(min = 100.0, max = 600.0))]
    pub battery_range: f64,

    /// State of charge at departure, percent.
    #[validate(range(min = 10.0, max = 100.0))]
    pub current_charge: f64,

    #[validate(custom = "crate::validation::not_blank")]
    pub vehicle_id: String,
}

impl TripRequest {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        battery_range: f64,
        current_charge: f64,
        vehicle_id: impl Into<String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            battery_range,
            current_charge,
            vehicle_id: vehicle_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripResult {
    /// km
    pub total_distance: u32,
    pub stops_needed: u32,
    /// Driving plus charging, minutes.
    pub estimated_time: u32,
    /// kWh, one decimal.
    pub energy_consumption: f64,
    /// Minutes spent charging across all stops.
    pub charging_time: u32,
    /// Two decimals.
    pub cost_estimate: f64,
}

/// Estimate a single trip.
///
/// Never fails for finite inputs. Negative battery range or charge are clamped
/// to zero and the charge is capped at 100%.
pub fn compute_trip<C, D>(request: &TripRequest, vehicles: &C, distance: &D) -> TripResult
where
    C: ConsumptionProfile + ?Sized,
    D: DistanceEstimator + ?Sized,
{
    let battery_range = request.battery_range.max(0.0);
    let current_charge = request.current_charge.clamp(0.0, 100.0);

    let total_distance = distance.estimate_km(&request.origin, &request.destination);
    let distance_km = f64::from(total_distance);

    let available_range = battery_range * current_charge / 100.0;
    let consumption_rate = vehicles.consumption_rate(&request.vehicle_id);
    let energy_consumption = round_to(distance_km * consumption_rate / 100.0, 1);

    let effective_range_per_stop = (battery_range * SAFETY_MARGIN_FACTOR).max(MIN_EFFECTIVE_RANGE_KM);
    let remaining_distance = (distance_km - available_range).max(0.0);
    let stops_needed = stops_for(remaining_distance, effective_range_per_stop);

    let driving_time = distance_km / AVERAGE_SPEED_KMH * 60.0;
    let charging_time = stops_needed * CHARGING_MINUTES_PER_STOP;
    let estimated_time = (driving_time + f64::from(charging_time)).round() as u32;

    let cost_estimate = round_to(energy_consumption * COST_PER_KWH, 2);

    tracing::debug!(
        origin = %request.origin,
        destination = %request.destination,
        total_distance,
        available_range,
        stops_needed,
        "trip estimated"
    );

    TripResult {
        total_distance,
        stops_needed,
        estimated_time,
        energy_consumption,
        charging_time,
        cost_estimate,
    }
}

/// Estimate many trips in parallel. Results keep the request order.
pub fn compute_trips<C, D>(requests: &[TripRequest], vehicles: &C, distance: &D) -> Vec<TripResult>
where
    C: ConsumptionProfile + Sync + ?Sized,
    D: DistanceEstimator + Sync + ?Sized,
{
    requests
        .par_iter()
        .map(|request| compute_trip(request, vehicles, distance))
        .collect()
}

/// Range left on arrival as the dashboard reports it, in km.
///
/// Computed as the range available at departure minus the distance driven
/// since the last full battery cycle (`total_distance % battery_range`), so it
/// ignores charging stops and goes negative when the trip outruns the starting
/// charge. Halves round towards positive infinity. A battery range of zero or
/// less yields 0.
pub fn remaining_range_at_arrival(request: &TripRequest, result: &TripResult) -> i64 {
    let battery_range = request.battery_range.max(0.0);
    if battery_range == 0.0 {
        return 0;
    }
    let current_charge = request.current_charge.clamp(0.0, 100.0);

    let available_range = battery_range * current_charge / 100.0;
    let since_last_cycle = f64::from(result.total_distance) % battery_range;
    (available_range - since_last_cycle + 0.5).floor() as i64
}

/// Smallest number of stops whose combined effective range covers `remaining`.
fn stops_for(remaining: f64, effective_range: f64) -> u32 {
    if remaining <= 0.0 {
        return 0;
    }

    let quotient = remaining / effective_range;
    let nearest = quotient.round();
    if (quotient - nearest).abs() < EXACT_MULTIPLE_TOLERANCE {
        nearest as u32
    } else {
        quotient.ceil() as u32
    }
}

/// Round half away from zero to `decimals` places.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
