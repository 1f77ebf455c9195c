//! Query and filter engine.
//!
//! Filtering is a pure function of the record sequence and the [`Query`];
//! nothing here touches application state.

mod filter;
mod hazard;

pub use filter::{filter, FilteredView, Query};
pub use hazard::{HazardTag, COLOR_LEGEND};
