pub mod fractal_config;
pub mod fractal_kinds;

pub use fractal_config::{FractalConfig, SelfSimilarity, fractal_config, self_similarity_factor};
pub use fractal_kinds::{FractalKind, FractalKindError};
