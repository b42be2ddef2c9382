//! Flood depth severity classification.
//!
//! Maps simulated water depths per river reach onto ordinal severity classes
//! defined by a [`DepthClassTable`]. The default table follows the FEMA
//! depth bands used for HAND-FIM products:
//!
//! | Class | Name      | Depth (m)        |
//! |-------|-----------|------------------|
//! | 0     | None      | `< 0.0001`       |
//! | 1     | Low       | `[0.0001, 0.4)`  |
//! | 2     | Moderate  | `[0.4, 0.8)`     |
//! | 3     | High      | `[0.8, 1.8)`     |
//! | 4     | Very High | `[1.8, ∞)`       |
//!
//! # Quick start
//!
//! ```
//! use floodrisk_depth::{DepthClassTable, DepthRecord, classify};
//!
//! let table = DepthClassTable::fema();
//! let records = vec![
//!     DepthRecord::new("reach-1", 0.0),
//!     DepthRecord::new("reach-2", 0.4),
//! ];
//!
//! let classified = classify(&records, &table).unwrap();
//! assert_eq!(classified[0].severity_class, 0);
//! assert_eq!(classified[1].severity_name, "Moderate");
//! ```

mod classify;
mod error;
mod record;
mod table;

pub use classify::{classify, severity_distribution};
pub use error::DepthError;
pub use record::{ClassifiedDepthRecord, DepthRecord, GeoPoint};
pub use table::{DepthClass, DepthClassTable, NO_IMPACT_NAME, Severity};
