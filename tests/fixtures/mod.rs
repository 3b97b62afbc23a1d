//! Test fixtures for ev-trip-planner.
//!
//! Provides city pairs with known simulated distances and a request builder
//! with sensible defaults.

#![allow(dead_code)]

pub mod trips;

#[allow(unused_imports)]
pub use trips::*;

use ev_trip_planner::estimator::TripRequest;

/// Builder for trip requests; defaults to a Tesla Model 3 at 80% with 350 km.
#[derive(Clone, Debug)]
pub struct RequestBuilder {
    request: TripRequest,
}

impl RequestBuilder {
    pub fn new(origin: &str, destination: &str) -> Self {
        Self {
            request: TripRequest::new(origin, destination, 350.0, 80.0, "tesla-model-3"),
        }
    }

    pub fn between(pair: &CityPair) -> Self {
        Self::new(pair.origin, pair.destination)
    }

    pub fn battery_range(mut self, km: f64) -> Self {
        self.request.battery_range = km;
        self
    }

    pub fn charge(mut self, percent: f64) -> Self {
        self.request.current_charge = percent;
        self
    }

    pub fn vehicle(mut self, vehicle_id: &str) -> Self {
        self.request.vehicle_id = vehicle_id.to_string();
        self
    }

    pub fn build(self) -> TripRequest {
        self.request
    }
}
