//! Validation utilities for the Irrigation Forecast Platform

// ============================================================================
// Request Parameter Validations
// ============================================================================

/// Validate a latitude in decimal degrees
pub fn validate_latitude(latitude: f64) -> Result<(), &'static str> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err("Latitude must be between -90 and 90");
    }
    Ok(())
}

/// Validate a longitude in decimal degrees
pub fn validate_longitude(longitude: f64) -> Result<(), &'static str> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}

/// Validate a soil-moisture percentage. Rejects non-finite values.
pub fn validate_moisture_percent(moisture: f64) -> Result<(), &'static str> {
    if !(0.0..=100.0).contains(&moisture) {
        return Err("Soil moisture must be between 0 and 100%");
    }
    Ok(())
}

/// Validate a forecast horizon against the deployment's maximum
pub fn validate_forecast_days(days: u32, max_days: u32) -> Result<(), &'static str> {
    if days == 0 {
        return Err("Forecast horizon must be at least 1 day");
    }
    if days > max_days {
        return Err("Forecast horizon exceeds the supported maximum");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Request Parameter Validation Tests
    // ========================================================================

    #[test]
    fn test_validate_latitude() {
        assert!(validate_latitude(40.7128).is_ok());
        assert!(validate_latitude(-90.0).is_ok());
        assert!(validate_latitude(90.0).is_ok());
        assert!(validate_latitude(90.1).is_err());
        assert!(validate_latitude(-120.0).is_err());
        assert!(validate_latitude(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_longitude() {
        assert!(validate_longitude(-74.006).is_ok());
        assert!(validate_longitude(-180.0).is_ok());
        assert!(validate_longitude(180.0).is_ok());
        assert!(validate_longitude(180.5).is_err());
        assert!(validate_longitude(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_moisture_percent() {
        assert!(validate_moisture_percent(65.0).is_ok());
        assert!(validate_moisture_percent(0.0).is_ok());
        assert!(validate_moisture_percent(100.0).is_ok());
        assert!(validate_moisture_percent(-0.1).is_err());
        assert!(validate_moisture_percent(100.1).is_err());
        assert!(validate_moisture_percent(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_forecast_days() {
        assert!(validate_forecast_days(1, 7).is_ok());
        assert!(validate_forecast_days(7, 7).is_ok());
        assert!(validate_forecast_days(0, 7).is_err());
        assert!(validate_forecast_days(8, 7).is_err());
    }
}
