//! `epi-disease` — per-agent health transitions driven by cell contact and
//! elapsed time.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`params`] | `DiseaseParams`, discount factors, `effective_transmission` |
//! | [`engine`] | `DiseaseEngine::step` — one state-dispatched update         |
//!
//! # State dispatch
//!
//! Each activation runs exactly one branch, chosen by the agent's state at
//! the start of the activation:
//!
//! | State       | Branch                                                         |
//! |-------------|----------------------------------------------------------------|
//! | Susceptible | first Infected cellmate that transmits exposes the agent       |
//! | Exposed     | becomes Infected once `latency_period` ticks have elapsed      |
//! | Infected    | tries every Susceptible cellmate, then recovers or dies        |
//! | Recovered   | same as Susceptible (reinfection)                              |
//! | Dead        | nothing                                                        |

pub mod engine;
pub mod params;


pub use engine::{DiseaseEngine, StepOutcome};
pub use params::{DiseaseParams, MASK_FACTOR, RECOVERED_FACTOR, effective_transmission};
