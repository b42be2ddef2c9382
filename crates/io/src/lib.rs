//! # floodrisk-io
//!
//! Persist flood risk pipeline tables. Discharge, depth, vulnerability and
//! risk records are written as CSV, the risk statistics as JSON, all under a
//! dated [`OutputLayout`]. Depth and vulnerability tables can be read back
//! from CSV for assessments on externally supplied data.

mod error;
mod layout;
mod reader;
mod validate;
mod writer;

pub use error::IoError;
pub use layout::OutputLayout;
pub use reader::{read_depth_csv, read_vulnerability_csv};
pub use writer::{
    write_depth_csv, write_discharge_csv, write_risk_csv, write_statistics_json,
    write_vulnerability_csv,
};
