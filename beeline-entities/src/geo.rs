use itertools::Itertools;
use std::{fmt, str::FromStr};
use thiserror::Error;

const LAT_DEG_MAX: f64 = 90.0;
const LAT_DEG_MIN: f64 = -90.0;
const LNG_DEG_MAX: f64 = 180.0;
const LNG_DEG_MIN: f64 = -180.0;

/// A geographical location in degrees (WGS 84).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MapPointParseError {
    #[error("Invalid latitude '{0}'")]
    Latitude(String),
    #[error("Invalid longitude '{0}'")]
    Longitude(String),
    #[error("Latitude degrees out of range: {0}")]
    LatitudeRange(f64),
    #[error("Longitude degrees out of range: {0}")]
    LongitudeRange(f64),
    #[error("Failed to parse map point: {0}")]
    Format(String),
}

impl MapPoint {
    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Result<Self, MapPointParseError> {
        let (lat, lng) = (lat.into(), lng.into());
        if !(LAT_DEG_MIN..=LAT_DEG_MAX).contains(&lat) {
            return Err(MapPointParseError::LatitudeRange(lat));
        }
        if !(LNG_DEG_MIN..=LNG_DEG_MAX).contains(&lng) {
            return Err(MapPointParseError::LongitudeRange(lng));
        }
        Ok(Self { lat, lng })
    }

    pub const fn lat(self) -> f64 {
        self.lat
    }

    pub const fn lng(self) -> f64 {
        self.lng
    }

    pub fn to_lat_lng_rad(self) -> (f64, f64) {
        (self.lat.to_radians(), self.lng.to_radians())
    }

    /// Parses the decimal degree strings returned by geocoding services.
    ///
    /// Surrounding whitespace is ignored.
    pub fn parse_lat_lng_deg(
        lat_deg_str: &str,
        lng_deg_str: &str,
    ) -> Result<Self, MapPointParseError> {
        let lat = lat_deg_str
            .trim()
            .parse::<f64>()
            .map_err(|_| MapPointParseError::Latitude(lat_deg_str.to_string()))?;
        let lng = lng_deg_str
            .trim()
            .parse::<f64>()
            .map_err(|_| MapPointParseError::Longitude(lng_deg_str.to_string()))?;
        Self::try_from_lat_lng_deg(lat, lng)
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl FromStr for MapPoint {
    type Err = MapPointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((lat_deg_str, lng_deg_str)) = s.split(',').collect_tuple() {
            MapPoint::parse_lat_lng_deg(lat_deg_str, lng_deg_str)
        } else {
            Err(MapPointParseError::Format(s.to_string()))
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const fn from_meters(meters: f64) -> Self {
        Self(meters)
    }

    pub fn from_kilometers(km: f64) -> Self {
        Self(km * 1_000.0)
    }

    pub const fn to_meters(self) -> f64 {
        self.0
    }

    pub fn to_kilometers(self) -> f64 {
        self.0 / 1_000.0
    }

    pub fn is_valid(self) -> bool {
        self.0 >= 0.0
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.2} km", self.to_kilometers())
    }
}

const MEAN_EARTH_RADIUS_KM: f64 = 6_371.0;

impl MapPoint {
    /// Calculate the great-circle distance on the surface
    /// of the earth using the haversine formula.
    /// Reference: https://en.wikipedia.org/wiki/Haversine_formula
    pub fn distance(p1: MapPoint, p2: MapPoint) -> Distance {
        let (lat1_rad, lng1_rad) = p1.to_lat_lng_rad();
        let (lat2_rad, lng2_rad) = p2.to_lat_lng_rad();

        let dlat_sin = ((lat2_rad - lat1_rad) / 2.0).sin();
        let dlng_sin = ((lng2_rad - lng1_rad) / 2.0).sin();

        let a = dlat_sin * dlat_sin + lat1_rad.cos() * lat2_rad.cos() * dlng_sin * dlng_sin;
        // Rounding may push `a` slightly above 1 for antipodal points
        let a = a.clamp(0.0, 1.0);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        Distance::from_kilometers(MEAN_EARTH_RADIUS_KM * c)
    }
}
