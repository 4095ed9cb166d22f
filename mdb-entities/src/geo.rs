use std::{fmt, str::FromStr};
use thiserror::Error;

/// Mean earth radius used for great-circle distances.
pub const MEAN_EARTH_RADIUS: Distance = Distance::from_meters(6_371_000.0);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoordRangeError {
    #[error("latitude {0} out of range")]
    Latitude(String),
    #[error("longitude {0} out of range")]
    Longitude(String),
}

#[derive(Debug, Error)]
pub enum MapPointParseError {
    #[error("missing or non-numeric coordinate")]
    Number,
    #[error(transparent)]
    Range(#[from] CoordRangeError),
    #[error("expected 'lat,lng'")]
    Format,
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct LatCoord(f64);

impl LatCoord {
    pub const fn min() -> Self {
        Self(-90.0)
    }
    pub const fn max() -> Self {
        Self(90.0)
    }
    pub fn try_from_deg(deg: f64) -> Result<Self, CoordRangeError> {
        if deg.is_finite() && (Self::min().0..=Self::max().0).contains(&deg) {
            Ok(Self(deg))
        } else {
            Err(CoordRangeError::Latitude(deg.to_string()))
        }
    }
    /// Clamps the given degrees into the valid range.
    pub fn from_deg(deg: f64) -> Self {
        Self(deg.clamp(Self::min().0, Self::max().0))
    }
    pub const fn to_deg(self) -> f64 {
        self.0
    }
    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct LngCoord(f64);

impl LngCoord {
    pub const fn min() -> Self {
        Self(-180.0)
    }
    pub const fn max() -> Self {
        Self(180.0)
    }
    pub fn try_from_deg(deg: f64) -> Result<Self, CoordRangeError> {
        if deg.is_finite() && (Self::min().0..=Self::max().0).contains(&deg) {
            Ok(Self(deg))
        } else {
            Err(CoordRangeError::Longitude(deg.to_string()))
        }
    }
    /// Clamps the given degrees into the valid range.
    pub fn from_deg(deg: f64) -> Self {
        Self(deg.clamp(Self::min().0, Self::max().0))
    }
    pub const fn to_deg(self) -> f64 {
        self.0
    }
    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }
}

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MapPoint {
    lat: LatCoord,
    lng: LngCoord,
}

impl MapPoint {
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(self) -> LatCoord {
        self.lat
    }

    pub const fn lng(self) -> LngCoord {
        self.lng
    }

    /// Creates a point from arbitrary degrees by clamping
    /// them into the valid ranges.
    pub fn from_lat_lng_deg(lat: f64, lng: f64) -> Self {
        Self::new(LatCoord::from_deg(lat), LngCoord::from_deg(lng))
    }

    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Result<Self, CoordRangeError> {
        Ok(Self::new(
            LatCoord::try_from_deg(lat)?,
            LngCoord::try_from_deg(lng)?,
        ))
    }

    /// Parses a pair of textual coordinates, e.g. taken from
    /// query parameters or a database column.
    pub fn parse_lat_lng_deg(lat: &str, lng: &str) -> Result<Self, MapPointParseError> {
        let lat = lat
            .trim()
            .parse::<f64>()
            .map_err(|_| MapPointParseError::Number)?;
        let lng = lng
            .trim()
            .parse::<f64>()
            .map_err(|_| MapPointParseError::Number)?;
        Ok(Self::try_from_lat_lng_deg(lat, lng)?)
    }

    pub fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat.to_deg(), self.lng.to_deg())
    }

    /// Great-circle distance between two points (Haversine formula).
    ///
    /// Returns `None` if the computation did not yield a finite value.
    pub fn distance(p1: MapPoint, p2: MapPoint) -> Option<Distance> {
        let lat1 = p1.lat.to_rad();
        let lat2 = p2.lat.to_rad();
        let d_lat = lat2 - lat1;
        let d_lng = p2.lng.to_rad() - p1.lng.to_rad();
        let a = (d_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        let meters = MEAN_EARTH_RADIUS.to_meters() * c;
        if meters.is_finite() {
            Some(Distance::from_meters(meters))
        } else {
            None
        }
    }
}

impl FromStr for MapPoint {
    type Err = MapPointParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s.split_once(',').ok_or(MapPointParseError::Format)?;
        Self::parse_lat_lng_deg(lat, lng)
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat.to_deg(), self.lng.to_deg())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Distance(f64);

impl Distance {
    pub const fn from_meters(meters: f64) -> Self {
        Self(meters)
    }
    pub fn from_km(km: f64) -> Self {
        Self(km * 1_000.0)
    }
    pub const fn to_meters(self) -> f64 {
        self.0
    }
    pub fn to_km(self) -> f64 {
        self.0 / 1_000.0
    }
    pub fn is_valid(self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }
}
