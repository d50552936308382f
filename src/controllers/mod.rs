pub mod frame;
pub mod simulation;
