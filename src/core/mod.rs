pub mod data;
pub mod fractals;
pub mod resolution;
pub mod zoom;
