//! Daily soil-moisture water balance

use crate::error::EngineError;
use crate::models::{SoilCatalog, SoilType};

/// Moisture level (%) above which surplus water drains away
pub const FIELD_CAPACITY_PERCENT: f64 = 80.0;

/// Advance the soil-moisture state by one day.
///
/// `raw = current + precipitation - (evaporation + crop water use)`. Any
/// surplus above field capacity drains at the soil's drainage rate; the
/// result is clamped to [0, 100] unconditionally.
pub fn advance_soil_moisture(
    current_moisture: f64,
    precipitation_mm: f64,
    evaporation_mm: f64,
    crop_water_use_mm: f64,
    soil_type: SoilType,
    soils: &SoilCatalog,
) -> Result<f64, EngineError> {
    let soil = soils.characteristics(soil_type)?;

    let raw = current_moisture + precipitation_mm - (evaporation_mm + crop_water_use_mm);

    // Drainage applies only to the excess above field capacity
    let drainage = if raw > FIELD_CAPACITY_PERCENT {
        (raw - FIELD_CAPACITY_PERCENT) * soil.drainage_rate
    } else {
        0.0
    };

    Ok((raw - drainage).clamp(0.0, 100.0))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn soils() -> SoilCatalog {
        SoilCatalog::with_defaults()
    }

    #[test]
    fn test_plain_balance_below_field_capacity() {
        // 65 + 0 - (3 + 5) = 57, no drainage
        let m = advance_soil_moisture(65.0, 0.0, 3.0, 5.0, SoilType::Loam, &soils()).unwrap();
        assert_eq!(m, 57.0);
    }

    #[test]
    fn test_drainage_applies_to_excess_only() {
        // raw = 85 + 10 - 5 = 90; excess 10 drains at loam's 0.5 rate
        let m = advance_soil_moisture(85.0, 10.0, 3.0, 2.0, SoilType::Loam, &soils()).unwrap();
        assert_eq!(m, 85.0);
    }

    #[test]
    fn test_no_drainage_at_field_capacity() {
        // raw lands exactly on 80, which is not above field capacity
        let m = advance_soil_moisture(80.0, 5.0, 3.0, 2.0, SoilType::Sandy, &soils()).unwrap();
        assert_eq!(m, 80.0);
    }

    #[test]
    fn test_clamps_to_floor() {
        let m = advance_soil_moisture(5.0, 0.0, 10.0, 8.0, SoilType::Clay, &soils()).unwrap();
        assert_eq!(m, 0.0);
    }

    #[test]
    fn test_clamps_to_ceiling() {
        // clay drains slowly, so a huge surplus still lands above 100
        let m = advance_soil_moisture(95.0, 60.0, 0.0, 0.0, SoilType::Clay, &soils()).unwrap();
        assert_eq!(m, 100.0);
    }

    #[test]
    fn test_missing_catalog_entry() {
        let sparse = SoilCatalog::from_entries(Default::default());
        let err = advance_soil_moisture(50.0, 0.0, 0.0, 0.0, SoilType::Clay, &sparse);
        assert_eq!(err, Err(EngineError::InvalidSoilType(SoilType::Clay)));
    }

    fn soil_type_strategy() -> impl Strategy<Value = SoilType> {
        prop_oneof![
            Just(SoilType::Sandy),
            Just(SoilType::Loam),
            Just(SoilType::ClayLoam),
            Just(SoilType::Clay),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Output stays in [0, 100] even for wildly out-of-range inputs
        #[test]
        fn prop_output_always_in_range(
            current in -500.0f64..500.0,
            precip in 0.0f64..200.0,
            evap in 0.0f64..15.0,
            crop_use in 0.0f64..10.0,
            soil in soil_type_strategy()
        ) {
            let m = advance_soil_moisture(current, precip, evap, crop_use, soil, &soils())
                .unwrap();
            prop_assert!((0.0..=100.0).contains(&m));
        }

        /// More rain never means less moisture the next day
        #[test]
        fn prop_monotonic_in_precipitation(
            current in 0.0f64..100.0,
            precip in 0.0f64..50.0,
            extra in 0.0f64..50.0,
            evap in 0.0f64..15.0,
            crop_use in 0.0f64..10.0,
            soil in soil_type_strategy()
        ) {
            let drier = advance_soil_moisture(current, precip, evap, crop_use, soil, &soils())
                .unwrap();
            let wetter =
                advance_soil_moisture(current, precip + extra, evap, crop_use, soil, &soils())
                    .unwrap();
            prop_assert!(wetter >= drier);
        }
    }
}
