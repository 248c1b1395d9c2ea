//! Shared model of the CRCL admin dashboard.
//!
//! Everything here is target independent: the frontend renders these types,
//! the host test-suite exercises them directly.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
