//! Output formatting for allocation plans.
//!
//! - [`terminal`] - human-readable result table
//! - [`csv`] - CSV export

mod csv;
mod terminal;

pub use csv::plan_csv;
pub use terminal::{format_field, plan_table};
