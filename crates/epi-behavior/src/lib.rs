//! `epi-behavior` — how agents decide to move, mask up, or break lockdown.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                        |
//! |----------------|-----------------------------------------------------------------|
//! | [`context`]    | `SimContext<'a>` — read-only world view plus feature extraction |
//! | [`logit`]      | `LogitModel<N>` — linear score + Gumbel noise → logistic        |
//! | [`model`]      | `BehaviorModel` trait                                           |
//! | [`compliance`] | `LogitBehavior` — the default model, from `BehaviorConfig`      |
//! | [`fixed`]      | `StaticBehavior` — constant answers for tests and baselines     |
//! | [`error`]      | `BehaviorError`, `BehaviorResult<T>`                            |
//!
//! # Design notes
//!
//! A behavior model only answers yes/no questions.  Where an agent ends up
//! (workplace, home, a random neighbor) is decided by `epi-mobility` from
//! the answer and the time of day; mask enforcement is layered on top by
//! the caller.  Models read the world through `&SimContext` and draw noise
//! from the shared `SimRng`, so they hold no mutable state.

pub mod compliance;
pub mod context;
pub mod error;
pub mod fixed;
pub mod logit;
pub mod model;


pub use compliance::LogitBehavior;
pub use context::SimContext;
pub use error::{BehaviorError, BehaviorResult};
pub use fixed::StaticBehavior;
pub use logit::{LogitModel, logistic};
pub use model::BehaviorModel;
