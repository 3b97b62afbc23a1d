//! Backend-first trip planning with a local fallback.
//!
//! When a backend client is configured the planner asks it for a real route.
//! An unreachable backend, or no backend at all, falls back to the
//! self-contained estimator. A backend that answers but refuses the route is
//! reported as [`PlannedTrip::Failed`] so its message and suggestion reach the
//! caller.

use serde::Serialize;

use crate::backend::{BackendClient, BackendError, TripPlan};
use crate::estimator::{compute_trip, TripRequest, TripResult};
use crate::simulated::SimulatedDistance;
use crate::traits::DistanceEstimator;
use crate::vehicle::VehicleProfileTable;

/// Outcome of [`TripPlanner::plan`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "source", content = "trip", rename_all = "camelCase")]
pub enum PlannedTrip {
    /// Routed by the backend.
    Routed(TripPlan),
    /// Estimated locally.
    Estimated(TripResult),
    /// The backend answered but could not plan the route.
    Failed {
        message: String,
        suggestion: Option<String>,
    },
}

impl PlannedTrip {
    pub fn is_estimated(&self) -> bool {
        matches!(self, PlannedTrip::Estimated(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, PlannedTrip::Failed { .. })
    }
}

pub struct TripPlanner<D = SimulatedDistance> {
    backend: Option<BackendClient>,
    vehicles: VehicleProfileTable,
    distance: D,
}

impl TripPlanner<SimulatedDistance> {
    /// Planner that only estimates locally, with the simulated distance model.
    pub fn offline(vehicles: VehicleProfileTable) -> Self {
        Self::new(None, vehicles, SimulatedDistance)
    }
}

impl<D: DistanceEstimator> TripPlanner<D> {
    pub fn new(backend: Option<BackendClient>, vehicles: VehicleProfileTable, distance: D) -> Self {
        Self {
            backend,
            vehicles,
            distance,
        }
    }

    pub fn vehicles(&self) -> &VehicleProfileTable {
        &self.vehicles
    }

    /// Local estimate only, never touching the backend.
    pub fn estimate(&self, request: &TripRequest) -> TripResult {
        compute_trip(request, &self.vehicles, &self.distance)
    }

    /// Plan through the backend when one is configured. Only transport
    /// failures fall back to the local estimate.
    pub fn plan(&self, request: &TripRequest) -> PlannedTrip {
        if let Some(backend) = &self.backend {
            match backend.plan_trip(&request.origin, &request.destination, request.battery_range) {
                Ok(plan) => return PlannedTrip::Routed(plan),
                Err(BackendError::Http(err)) => {
                    tracing::warn!(
                        origin = %request.origin,
                        destination = %request.destination,
                        error = %err,
                        "backend unreachable, falling back to local estimate"
                    );
                }
                Err(err) => {
                    tracing::info!(
                        origin = %request.origin,
                        destination = %request.destination,
                        error = %err,
                        "backend could not plan the route"
                    );
                    return failed(err);
                }
            }
        }

        PlannedTrip::Estimated(self.estimate(request))
    }
}

fn failed(err: BackendError) -> PlannedTrip {
    match err {
        BackendError::Planning { message, suggestion } => PlannedTrip::Failed { message, suggestion },
        BackendError::Rejected(message) => PlannedTrip::Failed {
            message,
            suggestion: None,
        },
        other => PlannedTrip::Failed {
            message: other.to_string(),
            suggestion: None,
        },
    }
}
