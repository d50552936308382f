//! Per-fractal zoom configuration.
//!
//! The table is pure data. The one fractal family whose self-similarity
//! depends on a live parameter (the power of a Mandelbulb) is described by
//! [`SelfSimilarity::Power`] and resolved by [`self_similarity_factor`].

use crate::core::data::FractalUniforms;
use crate::core::fractals::fractal_kinds::FractalKind;

/// Lowest factor a power-derived self-similarity may resolve to. Anything
/// closer to 1.0 would wrap almost continuously.
const MIN_POWER_FACTOR: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelfSimilarity {
    Fixed(f64),
    /// Factor tracks the live power uniform, falling back to the given value
    /// when the power is not usable.
    Power { fallback: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalConfig {
    pub display_name: &'static str,
    pub self_similarity: SelfSimilarity,
    pub zoom_supported: bool,
}

#[must_use]
pub const fn fractal_config(kind: FractalKind) -> FractalConfig {
    match kind {
        FractalKind::Primitives => FractalConfig {
            display_name: "Primitives",
            self_similarity: SelfSimilarity::Fixed(1.0),
            zoom_supported: false,
        },
        FractalKind::Menger => FractalConfig {
            display_name: "Menger Sponge",
            self_similarity: SelfSimilarity::Fixed(3.0),
            zoom_supported: true,
        },
        FractalKind::Mandelbulb => FractalConfig {
            display_name: "Mandelbulb",
            self_similarity: SelfSimilarity::Power { fallback: 2.0 },
            zoom_supported: true,
        },
        FractalKind::Sierpinski => FractalConfig {
            display_name: "Sierpinski Tetrahedron",
            self_similarity: SelfSimilarity::Fixed(2.0),
            zoom_supported: true,
        },
        FractalKind::Mandelbox => FractalConfig {
            display_name: "Mandelbox",
            self_similarity: SelfSimilarity::Fixed(2.0),
            zoom_supported: true,
        },
        FractalKind::World => FractalConfig {
            display_name: "World",
            self_similarity: SelfSimilarity::Fixed(1.0),
            zoom_supported: false,
        },
        FractalKind::Truchet => FractalConfig {
            display_name: "Truchet Tiles",
            self_similarity: SelfSimilarity::Fixed(1.0),
            zoom_supported: false,
        },
        FractalKind::DecPreview => FractalConfig {
            display_name: "DEC Preview",
            self_similarity: SelfSimilarity::Fixed(1.0),
            zoom_supported: false,
        },
    }
}

/// Resolves the factor by which the fractal repeats itself under uniform
/// scaling, given the live uniforms.
#[must_use]
pub fn self_similarity_factor(config: &FractalConfig, uniforms: &FractalUniforms) -> f64 {
    match config.self_similarity {
        SelfSimilarity::Fixed(factor) => factor,
        SelfSimilarity::Power { fallback } => {
            if uniforms.power.is_finite() && uniforms.power > 1.0 {
                uniforms.power.max(MIN_POWER_FACTOR)
            } else {
                fallback
            }
        }
    }
}
