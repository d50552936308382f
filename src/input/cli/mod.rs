pub mod args;

pub use args::SimulateArgs;
