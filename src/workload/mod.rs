//! Workload calculation.
//!
//! Sums course units per faculty member and classifies the total two ways:
//!
//! - **Load band**: configurable `(lower_bound, label)` table
//!   ([`classify`]).
//! - **Required load**: comparison with the units the faculty member's
//!   appointment requires ([`RequiredLoadPolicy`]).
//!
//! Both are pure functions of their inputs.

mod bands;
mod requirement;

pub use bands::{classify, total_units, validate_bands, Classification, LoadBand};
pub use requirement::RequiredLoadPolicy;
