//! Galactic Center estimate from clusters inside a sky window.
//!
//! Clusters are selected with [`CenterWindow::contains`], then averaged:
//! mean RA/Dec gives the center's position, and two distance estimators
//! give its distance:
//!
//! - the plain mean of the line-of-sight distances, and
//! - the mean of `D · cos(glat) · cos(glon)`, which discounts clusters
//!   lying away from the glat = glon = 0 direction.
//!
//! [`estimate_center`] is pure; [`CenterEstimate`]'s `Display` renders the
//! console report.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;
use tracing::debug;

use crate::cluster::ClusterRecord;
use crate::config::CenterWindow;
use crate::errors::{GlobularError, GlobularResult};

impl CenterWindow {
    /// Whether a cluster falls inside the window.
    ///
    /// RA is compared on (hour, minute) pairs exactly as
    /// `(h > h_lo || (h >= h_lo && m >= m_lo)) && (h < h_hi || (h <= h_hi && m <= m_hi))`.
    /// This is not a true sexagesimal comparison: a fractional hour such as
    /// 16.5h with 0m passes the lower bound even though 16h30m < 16h45m.
    /// Declination compares the degree component only, inclusive.
    pub fn contains(&self, gc: &ClusterRecord) -> bool {
        let (h, m) = (gc.ra_hour(), gc.ra_min());
        let lo = &self.ra_low;
        let hi = &self.ra_high;

        let above_low = h > lo.hour || (h >= lo.hour && m >= lo.minute);
        let below_high = h < hi.hour || (h <= hi.hour && m <= hi.minute);
        let dec_ok = gc.dec_deg() >= self.dec_low_deg && gc.dec_deg() <= self.dec_high_deg;

        above_low && below_high && dec_ok
    }
}

/// Clusters inside `window`, in catalog order.
pub fn select_in_window<'a>(
    clusters: &'a [ClusterRecord],
    window: &CenterWindow,
) -> Vec<&'a ClusterRecord> {
    clusters.iter().filter(|gc| window.contains(gc)).collect()
}

/// Mean position and distance estimates for the selected clusters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CenterEstimate {
    /// Number of clusters inside the window.
    pub count: usize,
    /// Mean right ascension, decimal hours.
    pub ra_hours: f64,
    /// Mean declination, decimal degrees.
    pub dec_degrees: f64,
    /// Mean line-of-sight distance, kly.
    pub mean_distance_kly: f64,
    /// Mean of `D · cos(glat) · cos(glon)`, kly.
    pub projected_distance_kly: f64,
}

/// Estimates the center's position and distance.
///
/// # Errors
/// [`GlobularError::EmptySelection`] when no cluster falls inside `window`.
pub fn estimate_center(
    clusters: &[ClusterRecord],
    window: &CenterWindow,
) -> GlobularResult<CenterEstimate> {
    let selected = select_in_window(clusters, window);
    debug!(total = clusters.len(), selected = selected.len(), %window, "center window applied");

    if selected.is_empty() {
        return Err(GlobularError::empty_selection(window.to_string()));
    }

    let mut total_hours = 0.0;
    let mut total_dec = 0.0;
    let mut total_dist = 0.0;
    let mut total_projected = 0.0;
    for gc in &selected {
        total_hours += gc.ra_hours_decimal();
        total_dec += gc.dec_degrees_decimal();
        total_dist += gc.distance();
        total_projected += gc.projected_distance();
    }

    let n = selected.len() as f64;
    Ok(CenterEstimate {
        count: selected.len(),
        ra_hours: total_hours / n,
        dec_degrees: total_dec / n,
        mean_distance_kly: total_dist / n,
        projected_distance_kly: total_projected / n,
    })
}

impl fmt::Display for CenterEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reference = ClusterRecord::galactic_center();

        writeln!(f)?;
        writeln!(f, "Total number of gcs in range: {}", self.count)?;
        writeln!(f, "Approximate center (mean): ")?;
        writeln!(f, "\tRAH: {:?}", self.ra_hours)?;
        writeln!(f, "\tDEC_DEG: {:?}", self.dec_degrees)?;
        writeln!(f)?;
        writeln!(
            f,
            "Distance to center (simple mean of D): {:.6} kly",
            self.mean_distance_kly
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "Distance to center (D * cos(glat) * cos(glon)): {:.6} kly",
            self.projected_distance_kly
        )?;
        writeln!(f)?;
        write!(
            f,
            "Reference center: RAH {} DEC_DEG {:.6}",
            reference.ra_hours_decimal(),
            reference.dec_degrees_decimal()
        )
    }
}
