//! HTTP adapter for the external trip-planning backend.
//!
//! The backend geocodes, routes and finds real charging stations. Responses
//! come wrapped in a `{success, data, message, chatMessage}` envelope.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::polyline::RouteGeometry;

const DEFAULT_BASE_URL: &str = "https://ev-trip-assistant.onrender.com";
const BASE_URL_ENV: &str = "EV_TRIP_API_BASE_URL";
const TIMEOUT_ENV: &str = "EV_TRIP_API_TIMEOUT_SECS";

#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

impl BackendConfig {
    /// Defaults overridden by `EV_TRIP_API_BASE_URL` and
    /// `EV_TRIP_API_TIMEOUT_SECS` when set. An unparsable timeout keeps the
    /// default.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            if !base_url.trim().is_empty() {
                config.base_url = base_url.trim().trim_end_matches('/').to_string();
            }
        }
        if let Ok(timeout) = std::env::var(TIMEOUT_ENV) {
            match timeout.trim().parse() {
                Ok(secs) => config.timeout_secs = secs,
                Err(_) => tracing::warn!(value = %timeout, "ignoring invalid {}", TIMEOUT_ENV),
            }
        }
        config
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("backend request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("backend rejected the request: {0}")]
    Rejected(String),
    #[error("route planning failed: {message}")]
    Planning {
        message: String,
        suggestion: Option<String>,
    },
    #[error("backend response carried no data")]
    MissingData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargingStop {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    pub lat: f64,
    pub lon: f64,
    /// Minutes.
    #[serde(default)]
    pub charging_time: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningError {
    pub message: String,
    #[serde(default)]
    pub suggestion: Option<String>,
}

/// A routed trip as planned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPlan {
    /// km
    pub distance_total: f64,
    #[serde(default)]
    pub required_stops: u32,
    /// Human-readable duration as sent by the backend.
    #[serde(default)]
    pub duration_total: Option<String>,
    pub origin: Place,
    pub destination: Place,
    #[serde(default)]
    pub charging_stops: Vec<ChargingStop>,
    #[serde(default)]
    pub route_geometry: Option<RouteGeometry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Envelope<T> {
    #[serde(default)]
    success: bool,
    data: Option<T>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    chat_message: Option<String>,
}

impl<T> Envelope<T> {
    fn into_data(self) -> Result<T, BackendError> {
        if !self.success {
            let mut message = self
                .message
                .unwrap_or_else(|| "unknown server error".to_string());
            if let Some(chat) = self.chat_message {
                message.push_str("\n\n");
                message.push_str(&chat);
            }
            return Err(BackendError::Rejected(message));
        }
        self.data.ok_or(BackendError::MissingData)
    }
}

/// Trip data, or the planning error the backend reports inside `data`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PlanData {
    Failed { error: PlanningError },
    Planned(TripPlan),
}

#[derive(Debug, Serialize)]
struct PlanTripBody<'a> {
    origin: &'a str,
    destination: &'a str,
    autonomy: f64,
}

#[derive(Debug, Clone)]
pub struct BackendClient {
    config: BackendConfig,
    client: reqwest::blocking::Client,
}

impl BackendClient {
    pub fn new(config: BackendConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// `POST /api/trip/plan`. `autonomy` is the vehicle's range in km.
    pub fn plan_trip(
        &self,
        origin: &str,
        destination: &str,
        autonomy: f64,
    ) -> Result<TripPlan, BackendError> {
        let url = format!("{}/api/trip/plan", self.config.base_url);
        let body = PlanTripBody {
            origin,
            destination,
            autonomy,
        };

        let envelope = self
            .client
            .post(url)
            .json(&body)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<Envelope<PlanData>>())?;

        parse_plan(envelope)
    }

    /// `GET /api/charging/stations` around a coordinate, optionally limited to
    /// `range_km`.
    pub fn charging_stations(
        &self,
        lat: f64,
        lon: f64,
        range_km: Option<f64>,
    ) -> Result<Vec<ChargingStop>, BackendError> {
        let url = format!("{}/api/charging/stations", self.config.base_url);
        let mut query = vec![("lat", lat.to_string()), ("lon", lon.to_string())];
        if let Some(range) = range_km {
            query.push(("range", range.to_string()));
        }

        self.get_json::<Vec<ChargingStop>>(&url, &query)?.into_data()
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<Envelope<T>, BackendError> {
        let envelope = self
            .client
            .get(url)
            .query(query)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<Envelope<T>>())?;
        Ok(envelope)
    }
}

fn parse_plan(envelope: Envelope<PlanData>) -> Result<TripPlan, BackendError> {
    match envelope.into_data()? {
        PlanData::Planned(plan) => Ok(plan),
        PlanData::Failed { error } => Err(BackendError::Planning {
            message: error.message,
            suggestion: error.suggestion,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(json: &str) -> Envelope<PlanData> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = BackendConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_parse_planned_trip() {
        let plan = parse_plan(envelope(
            r#"{
                "success": true,
                "data": {
                    "distanceTotal": 432.5,
                    "requiredStops": 1,
                    "durationTotal": "5h 40min",
                    "origin": {"lat": -23.55, "lon": -46.63, "displayName": "São Paulo"},
                    "destination": {"lat": -22.90, "lon": -43.17, "displayName": "Rio de Janeiro"},
                    "chargingStops": [
                        {"id": 17, "name": "Posto Graal", "lat": -22.95, "lon": -45.55, "chargingTime": 30}
                    ],
                    "routeGeometry": "BFoz5xJ67i1B1B7PzIhaxL7Y"
                }
            }"#,
        ))
        .unwrap();

        assert_eq!(plan.distance_total, 432.5);
        assert_eq!(plan.required_stops, 1);
        assert_eq!(plan.origin.display_name.as_deref(), Some("São Paulo"));
        assert_eq!(plan.charging_stops.len(), 1);
        assert_eq!(plan.charging_stops[0].charging_time, Some(30.0));
        assert!(matches!(plan.route_geometry, Some(RouteGeometry::Encoded(_))));
    }

    #[test]
    fn test_parse_planning_error() {
        let err = parse_plan(envelope(
            r#"{
                "success": true,
                "data": {"error": {"message": "no route", "suggestion": "try a closer city"}}
            }"#,
        ))
        .unwrap_err();

        match err {
            BackendError::Planning { message, suggestion } => {
                assert_eq!(message, "no route");
                assert_eq!(suggestion.as_deref(), Some("try a closer city"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejection_appends_chat_message() {
        let err = parse_plan(envelope(
            r#"{"success": false, "message": "city not found", "chatMessage": "check spelling"}"#,
        ))
        .unwrap_err();

        match err {
            BackendError::Rejected(message) => assert_eq!(message, "city not found\n\ncheck spelling"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_missing_data() {
        let err = parse_plan(envelope(r#"{"success": true}"#)).unwrap_err();
        assert!(matches!(err, BackendError::MissingData));
    }

    #[test]
    fn test_plan_trip_body_shape() {
        let body = PlanTripBody {
            origin: "A",
            destination: "B",
            autonomy: 350.0,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"origin":"A","destination":"B","autonomy":350.0}"#
        );
    }
}
