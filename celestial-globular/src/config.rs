//! Survey configuration: the center selection window and the chart grid.
//!
//! [`SurveyConfig::default`] reproduces the classic survey constants:
//! a 16h45m–18h45m × −34°…−24° window around the presumed Galactic Center,
//! and a 2h × 15° chart rotated by 12h so the center RA sits mid-chart.
//!
//! With the `serde` feature a config can be read from JSON. Missing keys
//! fall back to their defaults, so a file may override a single bound:
//!
//! ```json
//! { "window": { "dec_low_deg": -40.0 } }
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::{GlobularError, GlobularResult};

/// A right ascension bound given as separate hour and minute components.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HourMinute {
    pub hour: f64,
    pub minute: f64,
}

impl HourMinute {
    pub const fn new(hour: f64, minute: f64) -> Self {
        Self { hour, minute }
    }
}

impl fmt::Display for HourMinute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h{:02}m", self.hour, self.minute)
    }
}

/// Rectangular sky box used to pick clusters near the Galactic Center.
///
/// Only the degree component of declination is compared against the
/// declination bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CenterWindow {
    pub ra_low: HourMinute,
    pub ra_high: HourMinute,
    pub dec_low_deg: f64,
    pub dec_high_deg: f64,
}

impl Default for CenterWindow {
    fn default() -> Self {
        Self {
            ra_low: HourMinute::new(16.0, 45.0),
            ra_high: HourMinute::new(18.0, 45.0),
            dec_low_deg: -34.0,
            dec_high_deg: -24.0,
        }
    }
}

impl fmt::Display for CenterWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RA {}..{}, Dec {}°..{}°",
            self.ra_low, self.ra_high, self.dec_low_deg, self.dec_high_deg
        )
    }
}

/// Bin layout for the sky chart.
///
/// RA bins start at `0, w, 2w, …` up to 24h; Dec bins start at
/// `-90, -90 + w, …` up to +90°. Columns are printed starting from
/// `ra_rotation_hours`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChartGrid {
    pub ra_bin_hours: u32,
    pub dec_bin_deg: u32,
    pub ra_rotation_hours: u32,
}

impl Default for ChartGrid {
    fn default() -> Self {
        Self {
            ra_bin_hours: 2,
            dec_bin_deg: 15,
            ra_rotation_hours: 12,
        }
    }
}

impl ChartGrid {
    /// Checks that both bin widths tile the sky and the rotation lands on
    /// a bin start.
    pub fn validate(&self) -> GlobularResult<()> {
        if self.ra_bin_hours == 0 || 24 % self.ra_bin_hours != 0 {
            return Err(GlobularError::invalid_config(format!(
                "RA bin width {}h does not divide 24h",
                self.ra_bin_hours
            )));
        }
        if self.dec_bin_deg == 0 || 180 % self.dec_bin_deg != 0 {
            return Err(GlobularError::invalid_config(format!(
                "Dec bin width {}° does not divide 180°",
                self.dec_bin_deg
            )));
        }
        if self.ra_rotation_hours >= 24 || self.ra_rotation_hours % self.ra_bin_hours != 0 {
            return Err(GlobularError::invalid_config(format!(
                "RA rotation {}h must be below 24h and a multiple of the {}h bin width",
                self.ra_rotation_hours, self.ra_bin_hours
            )));
        }

        Ok(())
    }
}

/// Full configuration for one survey run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SurveyConfig {
    pub window: CenterWindow,
    pub grid: ChartGrid,
}

impl SurveyConfig {
    /// Checks that the window is well-formed and the grid tiles the sky.
    pub fn validate(&self) -> GlobularResult<()> {
        let w = &self.window;
        let bounds = [
            w.ra_low.hour,
            w.ra_low.minute,
            w.ra_high.hour,
            w.ra_high.minute,
            w.dec_low_deg,
            w.dec_high_deg,
        ];
        if bounds.iter().any(|v| !v.is_finite()) {
            return Err(GlobularError::invalid_config(
                "window bounds must be finite",
            ));
        }
        if w.ra_low.hour > w.ra_high.hour {
            return Err(GlobularError::invalid_config(format!(
                "RA window is inverted: {} > {}",
                w.ra_low, w.ra_high
            )));
        }
        if w.dec_low_deg > w.dec_high_deg {
            return Err(GlobularError::invalid_config(format!(
                "Dec window is inverted: {} > {}",
                w.dec_low_deg, w.dec_high_deg
            )));
        }

        self.grid.validate()
    }

    /// Parses and validates a JSON config.
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> GlobularResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| GlobularError::config_format(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    #[cfg(feature = "serde")]
    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> GlobularResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| GlobularError::io(path, e))?;
        Self::from_json_str(&json)
    }
}
