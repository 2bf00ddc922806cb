//! `epi-output` — CSV persistence for epigrid runs.
//!
//! [`CsvWriter`] creates three files in the output directory:
//!
//! | File               | Columns                                               |
//! |--------------------|-------------------------------------------------------|
//! | `state_counts.csv` | `tick,susceptible,exposed,infected,recovered,dead`    |
//! | `policy_log.csv`   | `tick,action,district_id,policy_type`                 |
//! | `agent_states.csv` | `tick,agent_id,district_id,state`                     |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `epi_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use epi_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentStateCsvRow, PolicyLogRow, StateCountsRow};
pub use writer::OutputWriter;
