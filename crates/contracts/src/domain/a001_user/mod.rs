pub mod aggregate;
pub mod decision;
pub mod stats;
