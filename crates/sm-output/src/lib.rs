//! `sm-output` — rendering and data output for the slime-mold simulation.
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`frame`]    | `Frame` (RGBA8 compositing of field + agents), PPM encoding   |
//! | [`csv`]      | `CsvWriter`: `agent_snapshots.csv`, `tick_summaries.csv`      |
//! | [`writer`]   | `OutputWriter` trait over tabular backends                    |
//! | [`observer`] | `SimOutputObserver`, `FrameObserver` (`SimObserver` adapters) |
//!
//! # Usage
//!
//! ```rust,ignore
//! use sm_output::{CsvWriter, FrameObserver, FrameStyle, SimOutputObserver};
//!
//! let csv = SimOutputObserver::new(CsvWriter::new(Path::new("./output"))?);
//! let frames = FrameObserver::new("./output/frames", FrameStyle::default());
//! let mut obs = (csv, frames);
//! sim.run(&run, &mut obs)?;
//! if let Some(e) = obs.0.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod frame;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use frame::{Frame, FrameStyle};
pub use observer::{FrameObserver, SimOutputObserver};
pub use row::{AgentSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
