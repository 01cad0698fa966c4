//! HTTP handlers for the Farmer Advisory Platform

pub mod analysis;
pub mod health;
pub mod recommendation;
pub mod session;
pub mod tips;
pub mod weather;

pub use analysis::*;
pub use health::*;
pub use recommendation::*;
pub use session::*;
pub use tips::*;
pub use weather::*;
