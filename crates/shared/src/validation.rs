//! Common validation utilities.

use validator::ValidationError;

/// Smallest zone radius accepted, in meters.
pub const MIN_ZONE_RADIUS_METERS: i32 = 1;

/// Largest zone radius accepted, in meters.
pub const MAX_ZONE_RADIUS_METERS: i32 = 50_000;

/// Validates that a latitude value is within valid range (-90 to 90).
pub fn validate_latitude(lat: f64) -> Result<(), ValidationError> {
    if (-90.0..=90.0).contains(&lat) {
        Ok(())
    } else {
        let mut err = ValidationError::new("latitude_range");
        err.message = Some("Latitude must be between -90 and 90".into());
        Err(err)
    }
}

/// Validates that a longitude value is within valid range (-180 to 180).
pub fn validate_longitude(lon: f64) -> Result<(), ValidationError> {
    if (-180.0..=180.0).contains(&lon) {
        Ok(())
    } else {
        let mut err = ValidationError::new("longitude_range");
        err.message = Some("Longitude must be between -180 and 180".into());
        Err(err)
    }
}

/// Validates a zone radius in meters. A zone is a circle; its radius
/// must be strictly positive and bounded.
pub fn validate_radius(radius_meters: i32) -> Result<(), ValidationError> {
    if (MIN_ZONE_RADIUS_METERS..=MAX_ZONE_RADIUS_METERS).contains(&radius_meters) {
        Ok(())
    } else {
        let mut err = ValidationError::new("radius_range");
        err.message = Some("Radius must be between 1 and 50000 meters".into());
        Err(err)
    }
}

/// Validates a phone number: optional leading `+`, then 7-15 digits.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    let ok = (7..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit());
    if ok {
        Ok(())
    } else {
        let mut err = ValidationError::new("phone_format");
        err.message = Some("Phone must be 7-15 digits with an optional leading +".into());
        Err(err)
    }
}

/// Validates an OTP code: exactly six ASCII digits.
pub fn validate_otp_code(code: &str) -> Result<(), ValidationError> {
    if code.len() == 6 && code.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        let mut err = ValidationError::new("otp_format");
        err.message = Some("OTP must be exactly 6 digits".into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_latitude() {
        assert!(validate_latitude(0.0).is_ok());
        assert!(validate_latitude(90.0).is_ok());
        assert!(validate_latitude(-90.0).is_ok());
        assert!(validate_latitude(90.1).is_err());
        assert!(validate_latitude(-90.1).is_err());
    }

    #[test]
    fn test_validate_latitude_error_message() {
        let err = validate_latitude(100.0).unwrap_err();
        assert_eq!(
            err.message.unwrap().to_string(),
            "Latitude must be between -90 and 90"
        );
    }

    #[test]
    fn test_validate_longitude() {
        assert!(validate_longitude(0.0).is_ok());
        assert!(validate_longitude(180.0).is_ok());
        assert!(validate_longitude(-180.0).is_ok());
        assert!(validate_longitude(180.1).is_err());
        assert!(validate_longitude(-180.1).is_err());
    }

    #[test]
    fn test_validate_radius() {
        assert!(validate_radius(1).is_ok());
        assert!(validate_radius(100).is_ok());
        assert!(validate_radius(50_000).is_ok());
        assert!(validate_radius(0).is_err());
        assert!(validate_radius(-10).is_err());
        assert!(validate_radius(50_001).is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("+48123456789").is_ok());
        assert!(validate_phone("48123456789").is_ok());
        assert!(validate_phone("1234567").is_ok());
        assert!(validate_phone("123456").is_err()); // too short
        assert!(validate_phone("+48 123 456 789").is_err()); // spaces
        assert!(validate_phone("phone").is_err());
        assert!(validate_phone("").is_err());
    }

    #[test]
    fn test_validate_otp_code() {
        assert!(validate_otp_code("000000").is_ok());
        assert!(validate_otp_code("123456").is_ok());
        assert!(validate_otp_code("999999").is_ok());
        assert!(validate_otp_code("12345").is_err());
        assert!(validate_otp_code("1234567").is_err());
        assert!(validate_otp_code("12345a").is_err());
        assert!(validate_otp_code("").is_err());
    }
}
