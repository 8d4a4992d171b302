//! Coarse RA × Dec histogram of the cluster catalog.
//!
//! Each cluster is dropped into the cell whose lower-left corner is
//! `(ra_hour - ra_hour mod w_ra, dec_deg - dec_deg mod w_dec)`, with a
//! floored modulo (`rem_euclid`), so negative declinations round toward
//! the south: -10° lands in the -15° row, -1° in -15°, -90° in -90°.
//!
//! The rendered table starts its columns at the grid's RA rotation (12h by
//! default) so the Galactic Center region sits in the middle, and lists
//! declination rows from north to south.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;
use tracing::{debug, warn};

use crate::cluster::ClusterRecord;
use crate::config::ChartGrid;
use crate::errors::GlobularResult;

const LABEL_WIDTH: usize = 6;
const CELL_WIDTH: usize = 5;

impl ChartGrid {
    /// Start of the RA bin containing `ra_hour`.
    pub fn ra_bin_start(&self, ra_hour: f64) -> f64 {
        let width = f64::from(self.ra_bin_hours);
        ra_hour - ra_hour.rem_euclid(width)
    }

    /// Start of the Dec bin containing `dec_deg`.
    pub fn dec_bin_start(&self, dec_deg: f64) -> f64 {
        let width = f64::from(self.dec_bin_deg);
        dec_deg - dec_deg.rem_euclid(width)
    }

    /// Number of RA columns; 0 for a zero width.
    pub fn ra_bin_count(&self) -> usize {
        24u32.checked_div(self.ra_bin_hours).unwrap_or(0) as usize
    }

    /// Number of Dec rows; 0 for a zero width.
    pub fn dec_bin_count(&self) -> usize {
        180u32.checked_div(self.dec_bin_deg).unwrap_or(0) as usize
    }

    /// RA bin starts in ascending order: `0, w, 2w, …`.
    pub fn ra_bins(&self) -> Vec<u32> {
        (0..self.ra_bin_count() as u32)
            .map(|i| i * self.ra_bin_hours)
            .collect()
    }

    /// Dec bin starts in ascending order: `-90, -90 + w, …`.
    pub fn dec_bins(&self) -> Vec<i32> {
        (0..self.dec_bin_count() as i32)
            .map(|i| -90 + i * self.dec_bin_deg as i32)
            .collect()
    }

    fn ra_index(&self, ra_hour: f64) -> Option<usize> {
        let start = self.ra_bin_start(ra_hour);
        if !(0.0..24.0).contains(&start) {
            return None;
        }
        Some((start / f64::from(self.ra_bin_hours)).round() as usize)
    }

    fn dec_index(&self, dec_deg: f64) -> Option<usize> {
        let start = self.dec_bin_start(dec_deg);
        if !(-90.0..90.0).contains(&start) {
            return None;
        }
        Some(((start + 90.0) / f64::from(self.dec_bin_deg)).round() as usize)
    }
}

/// Mean sky position in decimal hours and degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MeanPosition {
    pub ra_hours: f64,
    pub dec_degrees: f64,
}

/// Cluster counts per RA × Dec cell plus whole-catalog statistics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SkyChart {
    grid: ChartGrid,
    ra_bins: Vec<u32>,
    dec_bins: Vec<i32>,
    /// `counts[dec_row][ra_col]`, both ascending.
    counts: Vec<Vec<usize>>,
    off_grid: usize,
    catalog_size: usize,
    mean: Option<MeanPosition>,
}

impl SkyChart {
    /// Buckets every cluster in the catalog.
    ///
    /// Clusters whose bin falls outside the grid (e.g. `dec_deg = 90`)
    /// are counted in [`off_grid`](Self::off_grid) instead of a cell but
    /// still contribute to [`mean`](Self::mean).
    ///
    /// # Errors
    /// [`GlobularError::InvalidConfig`](crate::GlobularError::InvalidConfig)
    /// if `grid` fails [`ChartGrid::validate`].
    pub fn build(clusters: &[ClusterRecord], grid: &ChartGrid) -> GlobularResult<Self> {
        grid.validate()?;

        let mut counts = vec![vec![0usize; grid.ra_bin_count()]; grid.dec_bin_count()];
        let mut off_grid = 0;
        let mut total_hours = 0.0;
        let mut total_dec = 0.0;

        for gc in clusters {
            total_hours += gc.ra_hours_decimal();
            total_dec += gc.dec_degrees_decimal();

            match (grid.ra_index(gc.ra_hour()), grid.dec_index(gc.dec_deg())) {
                (Some(col), Some(row)) => counts[row][col] += 1,
                _ => {
                    warn!(
                        ra_hour = gc.ra_hour(),
                        dec_deg = gc.dec_deg(),
                        "cluster falls outside the chart grid"
                    );
                    off_grid += 1;
                }
            }
        }

        let mean = if clusters.is_empty() {
            None
        } else {
            let n = clusters.len() as f64;
            Some(MeanPosition {
                ra_hours: total_hours / n,
                dec_degrees: total_dec / n,
            })
        };

        debug!(catalog = clusters.len(), off_grid, "sky chart built");

        Ok(Self {
            grid: *grid,
            ra_bins: grid.ra_bins(),
            dec_bins: grid.dec_bins(),
            counts,
            off_grid,
            catalog_size: clusters.len(),
            mean,
        })
    }

    pub fn grid(&self) -> &ChartGrid {
        &self.grid
    }

    /// Count in the cell starting at (`ra_bin` hours, `dec_bin` degrees),
    /// or `None` if either value is not a bin start of this grid.
    pub fn count(&self, ra_bin: u32, dec_bin: i32) -> Option<usize> {
        let col = self.ra_bins.iter().position(|&b| b == ra_bin)?;
        let row = self.dec_bins.iter().position(|&b| b == dec_bin)?;
        Some(self.counts[row][col])
    }

    /// Sum of all cell counts.
    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }

    /// Clusters that did not land in any cell.
    pub fn off_grid(&self) -> usize {
        self.off_grid
    }

    pub fn catalog_size(&self) -> usize {
        self.catalog_size
    }

    /// Mean position over the whole catalog; `None` when it is empty.
    pub fn mean(&self) -> Option<MeanPosition> {
        self.mean
    }

    /// Column indices in display order, starting at the RA rotation.
    fn display_columns(&self) -> Vec<usize> {
        let ncols = self.ra_bins.len();
        let shift = (self.grid.ra_rotation_hours / self.grid.ra_bin_hours) as usize;
        (0..ncols).map(|i| (i + shift) % ncols).collect()
    }

    fn rule_width(&self) -> usize {
        LABEL_WIDTH + CELL_WIDTH * self.ra_bins.len()
    }
}

impl fmt::Display for SkyChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = self.display_columns();
        let rule = "_".repeat(self.rule_width());

        write!(f, "{:LABEL_WIDTH$}", "")?;
        for &col in &columns {
            write!(f, "{:>CELL_WIDTH$}", format!("{}  ", self.ra_bins[col]))?;
        }
        writeln!(f)?;
        writeln!(f, "{}", rule)?;

        for (row, dec_bin) in self.dec_bins.iter().enumerate().rev() {
            write!(f, "{:>3} |", dec_bin)?;
            for &col in &columns {
                write!(f, "{:>CELL_WIDTH$}", format!("{} |", self.counts[row][col]))?;
            }
            writeln!(f)?;
            writeln!(f, "{}", rule)?;
        }

        writeln!(f)?;
        writeln!(f, "Total number of globular_clusters {}", self.total())?;
        if self.off_grid > 0 {
            writeln!(f, "Clusters outside the chart grid: {}", self.off_grid)?;
        }
        match self.mean {
            Some(mean) => {
                writeln!(f, "Approximate center (mean): ")?;
                writeln!(f, "\tRAH: {:?}", mean.ra_hours)?;
                write!(f, "\tDEC_DEG: {:?}", mean.dec_degrees)
            }
            None => write!(f, "Approximate center (mean): unavailable (no clusters loaded)"),
        }
    }
}
