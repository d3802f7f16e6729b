//! First-person exploration: input state and the per-frame player integrator.

pub mod input;
pub use input::{FirstPersonInput, Key, LookDelta};

pub mod first_person;
pub use first_person::{resolve_collision, FirstPersonConfig, FirstPersonState};

#[cfg(test)]
mod tests_first_person;
