//! Command implementations

pub mod interactive;
pub mod opening;
pub mod sample;
pub mod solve;

pub use interactive::run_interactive;
pub use opening::{run_opening, OpeningResult};
pub use sample::{run_sample, sample_games, SampleConfig, SampleResult};
pub use solve::{run_solve, SolveConfig};
