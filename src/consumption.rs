//! Consumption series for charting.
//!
//! Spreads a finished trip over evenly spaced checkpoints and perturbs the
//! vehicle's baseline rate at each one. The random source is supplied by the
//! caller; pass a seeded generator to get a reproducible series.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::estimator::{round_to, TripRequest, TripResult};
use crate::traits::ConsumptionProfile;

/// Number of segments a chart normally uses.
pub const DEFAULT_SEGMENTS: u32 = 6;

/// Maximum deviation from the baseline rate, in kWh/100km.
pub const MAX_VARIATION: f64 = 2.0;

/// One checkpoint of the series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionSample {
    /// Cumulative distance in km.
    pub km: u32,
    /// Perturbed consumption at this point (kWh/100km, one decimal).
    pub consumo: f64,
    /// Baseline consumption of the vehicle (kWh/100km).
    pub media: f64,
}

/// Produce `segments + 1` samples from km 0 to `result.total_distance`.
///
/// A `segments` of zero is treated as one.
pub fn sample_consumption<C, R>(
    request: &TripRequest,
    result: &TripResult,
    vehicles: &C,
    segments: u32,
    rng: &mut R,
) -> Vec<ConsumptionSample>
where
    C: ConsumptionProfile + ?Sized,
    R: Rng + ?Sized,
{
    let segments = segments.max(1);
    let consumption_rate = vehicles.consumption_rate(&request.vehicle_id);
    let segment_km = f64::from(result.total_distance) / f64::from(segments);

    (0..=segments)
        .map(|i| {
            let variation = rng.gen_range(-MAX_VARIATION..MAX_VARIATION);
            ConsumptionSample {
                km: (segment_km * f64::from(i)).round() as u32,
                consumo: round_to(consumption_rate + variation, 1),
                media: consumption_rate,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::vehicle::VehicleProfileTable;

    fn result_with_distance(total_distance: u32) -> TripResult {
        TripResult {
            total_distance,
            stops_needed: 0,
            estimated_time: 0,
            energy_consumption: 0.0,
            charging_time: 0,
            cost_estimate: 0.0,
        }
    }

    #[test]
    fn test_checkpoints_are_evenly_spaced() {
        let request = TripRequest::new("A", "B", 350.0, 80.0, "tesla-model-3");
        let mut rng = StdRng::seed_from_u64(7);
        let samples = sample_consumption(
            &request,
            &result_with_distance(300),
            &VehicleProfileTable::builtin(),
            DEFAULT_SEGMENTS,
            &mut rng,
        );

        let km: Vec<u32> = samples.iter().map(|s| s.km).collect();
        assert_eq!(km, vec![0, 50, 100, 150, 200, 250, 300]);
    }

    #[test]
    fn test_km_rounding() {
        let request = TripRequest::new("A", "B", 350.0, 80.0, "tesla-model-3");
        let mut rng = StdRng::seed_from_u64(7);
        let samples = sample_consumption(
            &request,
            &result_with_distance(181),
            &VehicleProfileTable::builtin(),
            DEFAULT_SEGMENTS,
            &mut rng,
        );

        // 181 / 6 = 30.1666...
        let km: Vec<u32> = samples.iter().map(|s| s.km).collect();
        assert_eq!(km, vec![0, 30, 60, 91, 121, 151, 181]);
    }

    #[test]
    fn test_variation_stays_in_band() {
        let request = TripRequest::new("A", "B", 350.0, 80.0, "byd-dolphin");
        let mut rng = StdRng::seed_from_u64(42);
        let samples = sample_consumption(
            &request,
            &result_with_distance(400),
            &VehicleProfileTable::builtin(),
            100,
            &mut rng,
        );

        assert_eq!(samples.len(), 101);
        for sample in &samples {
            assert_eq!(sample.media, 13.5);
            // Rounding to one decimal can land exactly on the band edge.
            assert!(sample.consumo >= 11.5 && sample.consumo <= 15.5, "{:?}", sample);
        }
    }

    #[test]
    fn test_same_seed_same_series() {
        let request = TripRequest::new("A", "B", 350.0, 80.0, "nissan-leaf");
        let vehicles = VehicleProfileTable::builtin();
        let result = result_with_distance(250);

        let first = sample_consumption(&request, &result, &vehicles, 6, &mut StdRng::seed_from_u64(3));
        let second = sample_consumption(&request, &result, &vehicles, 6, &mut StdRng::seed_from_u64(3));
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_segments_treated_as_one() {
        let request = TripRequest::new("A", "B", 350.0, 80.0, "nissan-leaf");
        let mut rng = StdRng::seed_from_u64(1);
        let samples = sample_consumption(
            &request,
            &result_with_distance(120),
            &VehicleProfileTable::builtin(),
            0,
            &mut rng,
        );

        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].km, 0);
        assert_eq!(samples[1].km, 120);
    }

    #[test]
    fn test_unknown_vehicle_uses_default_baseline() {
        let request = TripRequest::new("A", "B", 350.0, 80.0, "unknown-model");
        let mut rng = StdRng::seed_from_u64(9);
        let samples = sample_consumption(
            &request,
            &result_with_distance(90),
            &VehicleProfileTable::builtin(),
            DEFAULT_SEGMENTS,
            &mut rng,
        );

        assert!(samples.iter().all(|s| s.media == 16.0));
    }
}
