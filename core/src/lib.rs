pub mod geometry;
pub mod io;
pub mod maze;
pub mod extrusion;
pub mod explore;
pub mod view;
pub mod config;

pub use config::MazeConfig;
