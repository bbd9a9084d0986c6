//! Irrigation planning
//!
//! The sequential day-by-day loop that turns a weather series into an
//! irrigation schedule.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::engine::soil_moisture::advance_soil_moisture;
use crate::error::EngineError;
use crate::models::{
    CropCatalog, CropKind, CropProfile, DailyWeather, IrrigationPlan, ScheduleEntry, SoilCatalog,
    SoilType,
};

/// Fraction of the moisture deficit replaced by one irrigation session
const VOLUME_SIZING_FACTOR: f64 = 0.5;

/// Tunable irrigation-decision behavior
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IrrigationPolicy {
    /// Skip irrigation on days where rainfall alone covers the crop's daily
    /// water use, even when moisture sits below the critical threshold
    pub skip_when_rain_covers_demand: bool,
}

/// Plans day-by-day irrigation schedules from a weather series.
///
/// Holds the immutable crop and soil catalogs plus the decision policy;
/// construct once at startup and share.
#[derive(Debug, Clone, Default)]
pub struct IrrigationPlanner {
    crops: CropCatalog,
    soils: SoilCatalog,
    policy: IrrigationPolicy,
}

impl IrrigationPlanner {
    /// Planner with the default catalogs and the plain threshold rule
    pub fn new() -> Self {
        Self::default()
    }

    /// Planner with the default catalogs and an explicit policy
    pub fn with_policy(policy: IrrigationPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Planner over custom catalogs
    pub fn with_catalogs(crops: CropCatalog, soils: SoilCatalog, policy: IrrigationPolicy) -> Self {
        Self {
            crops,
            soils,
            policy,
        }
    }

    pub fn crops(&self) -> &CropCatalog {
        &self.crops
    }

    pub fn soils(&self) -> &SoilCatalog {
        &self.soils
    }

    /// Run the planning loop over one weather series.
    ///
    /// Produces exactly one `ScheduleEntry` per series day, dated
    /// `start_date`, `start_date + 1`, ... Each entry records the day's
    /// pre-irrigation moisture; the running state carries the
    /// post-irrigation value into the next day, so the loop must stay
    /// strictly sequential.
    pub fn plan(
        &self,
        initial_moisture: f64,
        crop: CropKind,
        soil: SoilType,
        weather: &[DailyWeather],
        start_date: NaiveDate,
    ) -> Result<IrrigationPlan, EngineError> {
        let profile = *self.crops.profile(crop)?;
        // Resolve the soil up front so an empty series still surfaces a bad key
        self.soils.characteristics(soil)?;

        let mut moisture = initial_moisture;
        let mut entries = Vec::with_capacity(weather.len());

        for (i, day) in weather.iter().enumerate() {
            moisture = advance_soil_moisture(
                moisture,
                day.precipitation_mm,
                day.evaporation_mm,
                profile.daily_water_use,
                soil,
                &self.soils,
            )?;

            let mut needed = moisture < profile.critical_moisture;
            if needed && self.policy.skip_when_rain_covers_demand {
                needed = day.precipitation_mm < profile.daily_water_use;
            }

            // Record before irrigating; carry the post-irrigation state
            let recorded = round_to_tenth(moisture);
            let volume = if needed {
                irrigation_volume(moisture, &profile)
            } else {
                None
            };
            if let Some(v) = volume {
                moisture += v;
            }

            entries.push(ScheduleEntry {
                date: start_date + Duration::days(i as i64),
                soil_moisture: recorded,
                irrigation_needed: needed,
                irrigation_volume_mm: volume,
                condition: day.condition.clone(),
            });
        }

        Ok(IrrigationPlan {
            entries,
            final_moisture: moisture,
        })
    }
}

/// Volume for one irrigation session, sized to close half the gap to the
/// crop's optimal moisture and rounded up to a whole millimetre.
///
/// `None` when moisture sits at or above the critical threshold.
pub fn irrigation_volume(moisture: f64, profile: &CropProfile) -> Option<f64> {
    if moisture < profile.critical_moisture {
        Some(((profile.optimal_moisture - moisture) * VOLUME_SIZING_FACTOR).ceil())
    } else {
        None
    }
}

/// Round to one decimal place, ties away from zero
fn round_to_tenth(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(date: NaiveDate, precipitation: f64, evaporation: f64, condition: &str) -> DailyWeather {
        DailyWeather {
            date,
            precipitation_mm: precipitation,
            temperature_celsius: 22.0,
            humidity_percent: 55.0,
            wind_speed_mps: 2.0,
            evaporation_mm: evaporation,
            condition: condition.to_string(),
        }
    }

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_single_dry_day_no_irrigation() {
        let planner = IrrigationPlanner::new();
        let weather = vec![day(start(), 0.0, 3.0, "Clear")];
        let plan = planner
            .plan(65.0, CropKind::Wheat, SoilType::Loam, &weather, start())
            .unwrap();

        assert_eq!(plan.entries.len(), 1);
        let entry = &plan.entries[0];
        assert_eq!(entry.soil_moisture, 57.0);
        assert!(!entry.irrigation_needed);
        assert_eq!(entry.irrigation_volume_mm, None);
        assert_eq!(plan.final_moisture, 57.0);
    }

    #[test]
    fn test_below_critical_triggers_irrigation() {
        let planner = IrrigationPlanner::new();
        let weather = vec![day(start(), 0.0, 4.0, "Clear")];
        let plan = planner
            .plan(42.0, CropKind::Wheat, SoilType::Loam, &weather, start())
            .unwrap();

        let entry = &plan.entries[0];
        // 42 - 9 = 33, below wheat's 40 floor
        assert_eq!(entry.soil_moisture, 33.0);
        assert!(entry.irrigation_needed);
        // ceil((70 - 33) * 0.5) = 19, applied to the carried state only
        assert_eq!(entry.irrigation_volume_mm, Some(19.0));
        assert_eq!(plan.final_moisture, 52.0);
    }

    #[test]
    fn test_irrigation_feeds_next_day() {
        let planner = IrrigationPlanner::new();
        let weather = vec![
            day(start(), 0.0, 4.0, "Clear"),
            day(start() + Duration::days(1), 0.0, 3.0, "Clouds"),
        ];
        let plan = planner
            .plan(42.0, CropKind::Wheat, SoilType::Loam, &weather, start())
            .unwrap();

        // Day 2 starts from the post-irrigation 52, not the recorded 33
        assert_eq!(plan.entries[1].soil_moisture, 44.0);
        assert!(!plan.entries[1].irrigation_needed);
    }

    #[test]
    fn test_entries_dated_from_start() {
        let planner = IrrigationPlanner::new();
        let weather: Vec<DailyWeather> = (0..5)
            .map(|i| day(start() + Duration::days(i), 1.0, 2.0, "Clouds"))
            .collect();
        let plan = planner
            .plan(70.0, CropKind::Corn, SoilType::Clay, &weather, start())
            .unwrap();

        assert_eq!(plan.entries.len(), 5);
        for (i, entry) in plan.entries.iter().enumerate() {
            assert_eq!(entry.date, start() + Duration::days(i as i64));
        }
    }

    #[test]
    fn test_volume_present_iff_needed() {
        let planner = IrrigationPlanner::new();
        let weather: Vec<DailyWeather> = (0..7)
            .map(|i| day(start() + Duration::days(i), 0.0, 5.0, "Clear"))
            .collect();
        let plan = planner
            .plan(55.0, CropKind::Tomatoes, SoilType::Sandy, &weather, start())
            .unwrap();

        for entry in &plan.entries {
            assert_eq!(entry.irrigation_needed, entry.irrigation_volume_mm.is_some());
            if let Some(v) = entry.irrigation_volume_mm {
                assert!(v > 0.0);
                assert_eq!(v, v.ceil());
            }
        }
    }

    #[test]
    fn test_rain_skip_policy() {
        let weather = vec![day(start(), 6.0, 12.0, "Rain")];

        // Plain threshold: 42 + 6 - 17 = 31 < 40, irrigate
        let plain = IrrigationPlanner::new()
            .plan(42.0, CropKind::Wheat, SoilType::Loam, &weather, start())
            .unwrap();
        assert!(plain.entries[0].irrigation_needed);

        // Rain (6mm) covers wheat's 5mm daily use, so the variant skips
        let skipping = IrrigationPlanner::with_policy(IrrigationPolicy {
            skip_when_rain_covers_demand: true,
        })
        .plan(42.0, CropKind::Wheat, SoilType::Loam, &weather, start())
        .unwrap();
        assert!(!skipping.entries[0].irrigation_needed);
        assert_eq!(skipping.entries[0].irrigation_volume_mm, None);
    }

    #[test]
    fn test_rain_skip_policy_still_irrigates_light_rain() {
        // 2mm of rain does not cover wheat's 5mm use; the variant irrigates
        let weather = vec![day(start(), 2.0, 10.0, "Drizzle")];
        let plan = IrrigationPlanner::with_policy(IrrigationPolicy {
            skip_when_rain_covers_demand: true,
        })
        .plan(42.0, CropKind::Wheat, SoilType::Loam, &weather, start())
        .unwrap();
        assert!(plan.entries[0].irrigation_needed);
    }

    #[test]
    fn test_empty_series_yields_empty_plan() {
        let planner = IrrigationPlanner::new();
        let plan = planner
            .plan(65.0, CropKind::Rice, SoilType::Clay, &[], start())
            .unwrap();
        assert!(plan.entries.is_empty());
        assert_eq!(plan.final_moisture, 65.0);
    }

    #[test]
    fn test_sparse_soil_catalog_fails_even_for_empty_series() {
        let planner = IrrigationPlanner::with_catalogs(
            CropCatalog::with_defaults(),
            SoilCatalog::from_entries(Default::default()),
            IrrigationPolicy::default(),
        );
        let err = planner.plan(65.0, CropKind::Wheat, SoilType::Loam, &[], start());
        assert_eq!(err, Err(EngineError::InvalidSoilType(SoilType::Loam)));
    }

    #[test]
    fn test_sparse_crop_catalog_fails() {
        let planner = IrrigationPlanner::with_catalogs(
            CropCatalog::from_entries(Default::default()),
            SoilCatalog::with_defaults(),
            IrrigationPolicy::default(),
        );
        let err = planner.plan(65.0, CropKind::Wheat, SoilType::Loam, &[], start());
        assert_eq!(err, Err(EngineError::UnknownCropType("wheat".to_string())));
    }

    #[test]
    fn test_recorded_moisture_rounded_to_one_decimal() {
        let planner = IrrigationPlanner::new();
        // 65 + 0.37 - (2.123 + 5) = 58.247 -> 58.2
        let weather = vec![day(start(), 0.37, 2.123, "Clouds")];
        let plan = planner
            .plan(65.0, CropKind::Wheat, SoilType::Loam, &weather, start())
            .unwrap();
        assert_eq!(plan.entries[0].soil_moisture, 58.2);
    }

    #[test]
    fn test_irrigation_volume_sizing() {
        let crops = CropCatalog::with_defaults();
        let wheat = crops.profile(CropKind::Wheat).unwrap();

        assert_eq!(irrigation_volume(33.0, wheat), Some(19.0));
        assert_eq!(irrigation_volume(39.9, wheat), Some(16.0));
        // At or above the floor there is nothing to size
        assert_eq!(irrigation_volume(40.0, wheat), None);
        assert_eq!(irrigation_volume(75.0, wheat), None);
    }

    #[test]
    fn test_rounding_ties_go_up() {
        assert_eq!(round_to_tenth(58.25), 58.3);
        assert_eq!(round_to_tenth(0.05), 0.1);
        assert_eq!(round_to_tenth(57.0), 57.0);
    }
}
