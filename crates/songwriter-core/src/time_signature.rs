//! Song time signature

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SongwriterError};

/// A time signature such as `4/4` or `6/8`.
///
/// The numerator doubles as the number of grid segments per bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSignature {
    segments: u8,
    denominator: u32,
}

impl TimeSignature {
    pub const MAX_SEGMENTS: u8 = 16;

    pub fn new(segments: u8, denominator: u32) -> Result<Self> {
        if segments == 0 || segments > Self::MAX_SEGMENTS {
            return Err(SongwriterError::InvalidTimeSignature(format!("{}/{}", segments, denominator)));
        }
        Ok(Self { segments, denominator })
    }

    /// Segments per bar (the numerator)
    pub fn segments(&self) -> u8 {
        self.segments
    }

    pub fn denominator(&self) -> u32 {
        self.denominator
    }
}

impl Default for TimeSignature {
    fn default() -> Self {
        Self {
            segments: 4,
            denominator: 4,
        }
    }
}

impl fmt::Display for TimeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.segments, self.denominator)
    }
}

impl FromStr for TimeSignature {
    type Err = SongwriterError;

    /// Accepts `digits/digits` with a numerator of 1 to 16
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || SongwriterError::InvalidTimeSignature(s.to_string());
        let is_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

        let (numerator, denominator) = s.split_once('/').ok_or_else(invalid)?;
        if !is_digits(numerator) || !is_digits(denominator) {
            return Err(invalid());
        }

        let segments: u32 = numerator.parse().map_err(|_| invalid())?;
        let denominator: u32 = denominator.parse().map_err(|_| invalid())?;
        if segments == 0 || segments > Self::MAX_SEGMENTS as u32 {
            return Err(invalid());
        }

        Ok(Self {
            segments: segments as u8,
            denominator,
        })
    }
}

impl TryFrom<String> for TimeSignature {
    type Error = SongwriterError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<TimeSignature> for String {
    fn from(ts: TimeSignature) -> Self {
        ts.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let ts: TimeSignature = "3/4".parse().unwrap();
        assert_eq!(ts.segments(), 3);
        assert_eq!(ts.denominator(), 4);
        assert_eq!(ts.to_string(), "3/4");
        assert_eq!("16/8".parse::<TimeSignature>().unwrap().segments(), 16);
    }

    #[test]
    fn test_rejects_malformed() {
        for bad in ["", "4", "4/", "/4", "0/4", "17/4", "a/4", "4/4/4", " 4/4", "-3/4", "4\\4", "99999999999/4"] {
            assert!(bad.parse::<TimeSignature>().is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_new_range() {
        assert!(TimeSignature::new(0, 4).is_err());
        assert!(TimeSignature::new(17, 4).is_err());
        assert_eq!(TimeSignature::new(7, 8).unwrap().to_string(), "7/8");
    }
}
