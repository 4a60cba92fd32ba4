//! Custom request extractors.

pub mod params;

pub use params::AcceptedParams;
