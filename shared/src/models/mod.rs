//! Domain models for the Farmer Advisory Platform

mod advice;
mod analysis;
mod tips;
mod weather;

pub use advice::*;
pub use analysis::*;
pub use tips::*;
pub use weather::*;
