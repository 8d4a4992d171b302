//! Galactic Center estimates from a globular cluster catalog.
//!
//! Reads a plain-text catalog of globular clusters (equatorial position,
//! galactic position, distance), charts their distribution on a coarse
//! RA × Dec grid, and estimates where the Galactic Center lies and how far
//! away it is from the clusters that crowd around it.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`cluster`] | [`ClusterRecord`], decimal position helpers, reference center |
//! | [`catalog`] | [`load_catalog`](catalog::load_catalog), [`parse_catalog`](catalog::parse_catalog), [`parse_line`](catalog::parse_line) |
//! | [`config`] | [`SurveyConfig`], [`CenterWindow`], [`ChartGrid`] |
//! | [`center`] | [`estimate_center`](center::estimate_center), [`CenterEstimate`] |
//! | [`chart`] | [`SkyChart`] bucketing and table rendering |
//! | [`errors`] | [`GlobularError`], [`GlobularResult`] |
//!
//! # Quick Start
//!
//! ```no_run
//! use celestial_globular::{catalog, estimate_center, SkyChart, SurveyConfig};
//!
//! let config = SurveyConfig::default();
//! let clusters = catalog::load_catalog("equatorial_coordinates.txt")?;
//!
//! println!("{}", SkyChart::build(&clusters, &config.grid)?);
//! println!("{}", estimate_center(&clusters, &config.window)?);
//! # Ok::<(), celestial_globular::GlobularError>(())
//! ```
//!
//! # Catalog Format
//!
//! One cluster per line, seven whitespace-separated numbers:
//! `ra_hour ra_min dec_deg dec_min glat glon distance`. Declination
//! minutes are unsigned in the file and take the sign of the degrees.
//! Reading stops at the first blank line.
//!
//! # Features
//!
//! - **`serde`** — `Serialize` for results, JSON [`SurveyConfig`] loading.
//! - **`cli`** (default) — the `gcp` binary.

pub mod catalog;
pub mod center;
pub mod chart;
pub mod cluster;
pub mod config;
pub mod errors;

pub use center::{estimate_center, select_in_window, CenterEstimate};
pub use chart::{MeanPosition, SkyChart};
pub use cluster::ClusterRecord;
pub use config::{CenterWindow, ChartGrid, HourMinute, SurveyConfig};
pub use errors::{GlobularError, GlobularResult};
