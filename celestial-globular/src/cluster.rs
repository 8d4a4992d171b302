//! Globular cluster records as read from the equatorial coordinate catalog.
//!
//! A record keeps right ascension and declination split into their
//! catalog components (hours + minutes, degrees + arcminutes) alongside
//! galactic coordinates and line-of-sight distance. The declination minute
//! component always carries the sign of the degree component so the two
//! can be summed directly.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Number of numeric fields per catalog line.
pub const FIELD_COUNT: usize = 7;

/// Catalog field names, in file order.
pub const FIELD_NAMES: [&str; FIELD_COUNT] = [
    "ra_hour", "ra_min", "dec_deg", "dec_min", "glat", "glon", "distance",
];

/// One globular cluster.
///
/// Fields are private; records are immutable once built.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ClusterRecord {
    ra_hour: f64,
    ra_min: f64,
    dec_deg: f64,
    dec_min: f64,
    glat: f64,
    glon: f64,
    distance: f64,
}

impl ClusterRecord {
    /// Builds a record from catalog components.
    ///
    /// `dec_min` is given unsigned as in the catalog; it is negated when
    /// `dec_deg` is negative. A zero degree component (including `-0.0`)
    /// counts as non-negative.
    pub fn new(
        ra_hour: f64,
        ra_min: f64,
        dec_deg: f64,
        dec_min: f64,
        glat: f64,
        glon: f64,
        distance: f64,
    ) -> Self {
        let dec_min = if dec_deg >= 0.0 { dec_min } else { -dec_min };
        Self {
            ra_hour,
            ra_min,
            dec_deg,
            dec_min,
            glat,
            glon,
            distance,
        }
    }

    /// Builds a record from the seven catalog fields in file order.
    pub fn from_fields(fields: [f64; FIELD_COUNT]) -> Self {
        let [ra_hour, ra_min, dec_deg, dec_min, glat, glon, distance] = fields;
        Self::new(ra_hour, ra_min, dec_deg, dec_min, glat, glon, distance)
    }

    /// Reference position of the Galactic Center: 17h45m, -29°00.5'.
    pub fn galactic_center() -> Self {
        Self::new(17.0, 45.0, -29.0, 0.5, 0.0, 0.0, 0.0)
    }

    pub fn ra_hour(&self) -> f64 {
        self.ra_hour
    }

    pub fn ra_min(&self) -> f64 {
        self.ra_min
    }

    pub fn dec_deg(&self) -> f64 {
        self.dec_deg
    }

    /// Signed declination minutes (same sign as [`dec_deg`](Self::dec_deg)).
    pub fn dec_min(&self) -> f64 {
        self.dec_min
    }

    /// Galactic latitude in degrees.
    pub fn glat(&self) -> f64 {
        self.glat
    }

    /// Galactic longitude in degrees.
    pub fn glon(&self) -> f64 {
        self.glon
    }

    /// Line-of-sight distance in kilolight-years.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Right ascension in decimal hours.
    pub fn ra_hours_decimal(&self) -> f64 {
        self.ra_hour + self.ra_min / 60.0
    }

    /// Declination in decimal degrees.
    pub fn dec_degrees_decimal(&self) -> f64 {
        self.dec_deg + self.dec_min / 60.0
    }

    /// Distance projected by `cos(glat) * cos(glon)`.
    ///
    /// A crude proxy for the component of the distance pointing at the
    /// Galactic Center (which sits at glat = glon = 0).
    pub fn projected_distance(&self) -> f64 {
        self.distance * self.glat.to_radians().cos() * self.glon.to_radians().cos()
    }
}

impl fmt::Display for ClusterRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "rah: {:?}", self.ra_hour)?;
        writeln!(f, "ram: {:?}", self.ra_min)?;
        writeln!(f, "dec_deg: {:?}", self.dec_deg)?;
        writeln!(f, "dec_min: {:?}", self.dec_min)?;
        writeln!(f, "glat: {:?}", self.glat)?;
        writeln!(f, "glon: {:?}", self.glon)?;
        write!(f, "distance: {:?} kly", self.distance)
    }
}
