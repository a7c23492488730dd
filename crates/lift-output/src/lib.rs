//! `lift-output` — simulation output writers for the liftbank simulator.
//!
//! The CSV backend creates two files in the output directory:
//!
//! | File                | Contents                                    |
//! |---------------------|---------------------------------------------|
//! | `car_snapshots.csv` | One row per car per snapshot tick           |
//! | `tick_summaries.csv`| One row per tick with movement statistics   |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`FleetOutputObserver`], which implements `lift_sim::FleetObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{CsvWriter, FleetOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = FleetOutputObserver::new(writer, fleet.config());
//! fleet.run_ticks(100, &mut obs);
//! obs.finish();
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::FleetOutputObserver;
pub use row::{direction_label, CarSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
