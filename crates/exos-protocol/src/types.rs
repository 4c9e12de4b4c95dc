//! Coordinate types used in the protocol.

use std::fmt;

use crate::error::ProtocolError;

/// An angle as a whole/minutes/seconds triple.
///
/// The same representation carries every angular quantity in the protocol:
/// `major` is hours for hour-angle values (right ascension) and degrees for
/// degree-angle values (declination, latitude, longitude). Components are
/// stored as given; nothing clamps minutes or seconds to [0, 59].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SexagesimalAngle {
    /// Hours or degrees, depending on context.
    pub major: i32,
    /// Minutes component.
    pub minutes: i32,
    /// Seconds component.
    pub seconds: i32,
}

impl SexagesimalAngle {
    /// Create an angle from its components.
    pub fn new(major: i32, minutes: i32, seconds: i32) -> Self {
        SexagesimalAngle {
            major,
            minutes,
            seconds,
        }
    }

    /// Split a decimal value into sexagesimal components.
    ///
    /// Each step truncates toward zero, so sub-second precision is dropped
    /// and a negative value carries its sign into every component
    /// (`-1.5` becomes `{-1, -30, 0}`). The conversion is lossy; only
    /// [`to_decimal`](Self::to_decimal) within one second is guaranteed.
    pub fn from_decimal(value: f32) -> Result<Self, ProtocolError> {
        if !value.is_finite() {
            return Err(ProtocolError::InvalidValue(value));
        }

        let major = value.trunc() as i32;
        let minutes = ((value - major as f32) * 60.0).trunc() as i32;
        let seconds = (3600.0 * (value - major as f32) - 60.0 * minutes as f32).trunc() as i32;

        Ok(SexagesimalAngle {
            major,
            minutes,
            seconds,
        })
    }

    /// Decimal value, `major + minutes/60 + seconds/3600`.
    pub fn to_decimal(&self) -> f32 {
        self.major as f32 + self.minutes as f32 / 60.0 + self.seconds as f32 / 3600.0
    }
}

impl fmt::Display for SexagesimalAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}:{:02}", self.major, self.minutes, self.seconds)
    }
}

/// An equatorial pointing position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EquatorialCoordinates {
    /// Right ascension (hour angle).
    pub ra: SexagesimalAngle,
    /// Declination (degree angle).
    pub dec: SexagesimalAngle,
}

/// An observation site position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GeographicCoordinates {
    /// Site latitude (degree angle).
    pub latitude: SexagesimalAngle,
    /// Site longitude (degree angle).
    pub longitude: SexagesimalAngle,
}

/// Encode a float as its IEEE-754 binary32 little-endian byte image.
pub fn encode_f32(value: f32) -> [u8; 4] {
    value.to_le_bytes()
}

/// Decode an IEEE-754 binary32 little-endian byte image.
pub fn decode_f32(bytes: [u8; 4]) -> f32 {
    f32::from_le_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_decimal_zero() {
        let angle = SexagesimalAngle::from_decimal(0.0).unwrap();
        assert_eq!(angle, SexagesimalAngle::new(0, 0, 0));
    }

    #[test]
    fn test_from_decimal_negative_truncates_toward_zero() {
        let angle = SexagesimalAngle::from_decimal(-1.5).unwrap();
        assert_eq!(angle, SexagesimalAngle::new(-1, -30, 0));
        assert_eq!(angle.to_decimal(), -1.5);
    }

    #[test]
    fn test_to_decimal() {
        let angle = SexagesimalAngle::new(5, 35, 17);
        let expected = 5.0 + 35.0 / 60.0 + 17.0 / 3600.0;
        assert_eq!(angle.to_decimal(), expected);
    }

    #[test]
    fn test_round_trip_within_one_second() {
        let samples = [
            0.25_f32, 5.5881, 12.0, 23.934, -45.7654, 89.9, -0.001, 179.99,
        ];
        for v in samples {
            let rt = SexagesimalAngle::from_decimal(v).unwrap().to_decimal();
            assert!(
                (rt - v).abs() < 1.0 / 3600.0,
                "round trip of {v} drifted to {rt}"
            );
        }
    }

    #[test]
    fn test_out_of_range_components_kept() {
        // Nothing clamps; callers validate ranges before building values.
        let angle = SexagesimalAngle::new(400, 75, 90);
        assert_eq!(angle.major, 400);
        assert_eq!(angle.minutes, 75);
        assert_eq!(angle.seconds, 90);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(SexagesimalAngle::from_decimal(f32::NAN).is_err());
        assert!(SexagesimalAngle::from_decimal(f32::INFINITY).is_err());
        assert!(SexagesimalAngle::from_decimal(f32::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_float_bytes_little_endian() {
        let bytes = encode_f32(1.0);
        assert_eq!(bytes, [0x00, 0x00, 0x80, 0x3F]);
        assert_eq!(decode_f32(bytes), 1.0);
    }
}
