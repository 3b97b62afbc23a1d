//! ev-trip-planner core
//!
//! Backend-independent feasibility estimates for electric-vehicle trips,
//! plus the small helpers the presentation layer builds on.

pub mod traits;
pub mod vehicle;
pub mod simulated;
pub mod estimator;
pub mod consumption;
pub mod format;
pub mod validation;
pub mod faq;
pub mod latency;
pub mod backend;
pub mod polyline;
pub mod planner;
