//! tf-core: stable foundation for the turbofan cycle model.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - gas (calorically perfect gas and isentropic flow relations)
//! - error (shared error types)

pub mod error;
pub mod gas;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{TfError, TfResult};
pub use gas::GasModel;
pub use numeric::*;
pub use units::*;
