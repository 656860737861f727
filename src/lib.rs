//! Real-time 2D fluid simulation core.
//!
//! Velocity and density live on an `(N+2) x (N+2)` cell grid with a one-cell
//! ghost border. Each tick the caller fills the source buffers and calls
//! [`solver::velocity_step`] followed by [`solver::density_step`].

pub mod config;
pub mod error;
pub mod input;
pub mod renderer;
pub mod solver;
pub mod state;

pub use error::SolverError;
pub use solver::{density_step, velocity_step, FieldType, SolverParams};
pub use state::{idx, FluidState, Grid};
