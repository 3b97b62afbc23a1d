//! Core seams for the trip estimator.
//!
//! The engine only talks to distance and consumption data through these
//! traits, so the simulated distance model can be swapped for a real routing
//! lookup without touching the estimation code.

/// Produces a trip distance for an origin/destination pair.
pub trait DistanceEstimator {
    /// Distance in whole kilometers.
    fn estimate_km(&self, origin: &str, destination: &str) -> u32;
}

/// Resolves a vehicle identifier to an energy-consumption rate.
pub trait ConsumptionProfile {
    /// Consumption in kWh per 100 km. Unknown vehicles resolve to a default
    /// rate instead of failing.
    fn consumption_rate(&self, vehicle_id: &str) -> f64;
}
