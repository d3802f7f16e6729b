//! Orbit view of a finished maze model.

pub mod bounded;
pub use bounded::Bounded;

pub mod orbit;
pub use orbit::{OrbitAction, OrbitConfig, OrbitInput, OrbitState};

#[cfg(test)]
mod tests_orbit;
