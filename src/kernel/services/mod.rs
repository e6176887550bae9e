//! Services layer (ports + adapters).
//!
//! - `ports`: contracts the host implements and data the kernel consumes.
//! - `adapters`: filesystem-backed helpers.

pub mod adapters;
pub mod ports;
