use std::{fmt, str::FromStr};

use crate::domain::codec::{format_decimal, NOT_APPLICABLE};

/// A pair of signed decimal-degree coordinates.
///
/// Serialized as `lat,lon`. An absent location (only permitted on individual
/// forms, never on a plot) is written as the literal `N/A`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl Location {
    /// Creates a location from decimal-degree coordinates.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Renders an optional location, using the `N/A` sentinel for `None`.
    #[must_use]
    pub fn encode_optional(location: Option<&Self>) -> String {
        location.map_or_else(|| NOT_APPLICABLE.to_string(), ToString::to_string)
    }

    /// Parses an optional location, mapping the literal `N/A` to `None`.
    ///
    /// # Errors
    ///
    /// Returns [`LocationError`] if the value is neither `N/A` nor a valid
    /// `lat,lon` pair.
    pub fn decode_optional(s: &str) -> Result<Option<Self>, LocationError> {
        if s == NOT_APPLICABLE {
            Ok(None)
        } else {
            s.parse().map(Some)
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{}",
            format_decimal(self.latitude),
            format_decimal(self.longitude)
        )
    }
}

impl FromStr for Location {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LocationError(s.to_string());

        let (lat, lon) = s.split_once(',').ok_or_else(invalid)?;
        if lon.contains(',') {
            return Err(invalid());
        }

        let latitude = lat.trim().parse().map_err(|_| invalid())?;
        let longitude = lon.trim().parse().map_err(|_| invalid())?;
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

/// Error returned when a string is not a valid `lat,lon` pair.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid location '{0}': expected 'lat,lon' in decimal degrees")]
pub struct LocationError(pub String);
