pub use dir::Dir;
pub use grid_point::{GridDim, GridPoint};

pub mod board;
mod dir;
mod grid_point;
