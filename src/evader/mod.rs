//! Core evasion logic.
//!
//! This module contains the eligibility filter, the repulsion math, the
//! screen-bounds aggregation and the polling loop that ties them together.

pub mod bounds;
pub mod eligibility;
pub mod evasion_loop;
pub mod repulsion;

pub use bounds::*;
pub use eligibility::*;
pub use evasion_loop::*;
pub use repulsion::*;
