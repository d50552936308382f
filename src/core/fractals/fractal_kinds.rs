use clap::ValueEnum;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum FractalKind {
    Primitives,
    #[default]
    Menger,
    Mandelbulb,
    Sierpinski,
    Mandelbox,
    World,
    Truchet,
    DecPreview,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown fractal id {0}")]
pub struct FractalKindError(pub u32);

impl FractalKind {
    pub const ALL: &'static [Self] = &[
        Self::Primitives,
        Self::Menger,
        Self::Mandelbulb,
        Self::Sierpinski,
        Self::Mandelbox,
        Self::World,
        Self::Truchet,
        Self::DecPreview,
    ];

    /// Integer id used by the shader's scene switch.
    #[must_use]
    pub const fn id(self) -> u32 {
        match self {
            Self::Primitives => 0,
            Self::Menger => 1,
            Self::Mandelbulb => 2,
            Self::Sierpinski => 3,
            Self::Mandelbox => 4,
            Self::World => 5,
            Self::Truchet => 6,
            Self::DecPreview => 7,
        }
    }
}

impl TryFrom<u32> for FractalKind {
    type Error = FractalKindError;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.id() == id)
            .ok_or(FractalKindError(id))
    }
}
