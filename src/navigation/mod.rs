//! Navigation and input state.
//!
//! This module holds the interactive state behind the browser screen:
//! search text entry, the hazard class selector and the results cursor.

mod hazard_select;
mod results;
mod search;

pub use hazard_select::HazardSelectState;
pub use results::ResultsState;
pub use search::SearchState;
