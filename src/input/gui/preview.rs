//! CPU stand-in for the raymarched image: a carpet pattern that is
//! self-similar under a 3x zoom about the origin, so scale wraps show up as
//! seamless on screen.

use rayon::prelude::*;

use crate::core::data::FractalUniforms;
use crate::core::fractals::FractalKind;

const MAX_PREVIEW_LEVELS: u32 = 12;

pub fn paint_preview(
    frame: &mut [u8],
    width: u32,
    height: u32,
    fractal: FractalKind,
    uniforms: &FractalUniforms,
) {
    if width == 0 || height == 0 {
        return;
    }

    let row_len = width as usize * 4;
    let aspect = f64::from(width) / f64::from(height);
    let (sin, cos) = uniforms.rotation.y.sin_cos();
    let scale = if uniforms.scale.is_finite() && uniforms.scale > 0.0 {
        uniforms.scale
    } else {
        1.0
    };
    let levels = uniforms.iterations.min(MAX_PREVIEW_LEVELS);
    let tint = tint_for(fractal);

    frame
        .par_chunks_exact_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| {
            let v = 1.0 - 2.0 * (y as f64 + 0.5) / f64::from(height);
            for (x, pixel) in row.chunks_exact_mut(4).enumerate() {
                let u = (2.0 * (x as f64 + 0.5) / f64::from(width) - 1.0) * aspect;
                let world_x = (u * cos - v * sin) / scale;
                let world_y = (u * sin + v * cos) / scale;

                let shade = carpet_shade(world_x, world_y, levels);
                pixel[0] = (f64::from(tint[0]) * shade) as u8;
                pixel[1] = (f64::from(tint[1]) * shade) as u8;
                pixel[2] = (f64::from(tint[2]) * shade) as u8;
                pixel[3] = 255;
            }
        });
}

/// 0.0 inside a hole, brighter the more levels a point survives.
fn carpet_shade(x: f64, y: f64, levels: u32) -> f64 {
    let mut cell_x = x.rem_euclid(1.0);
    let mut cell_y = y.rem_euclid(1.0);

    for level in 0..levels {
        cell_x *= 3.0;
        cell_y *= 3.0;
        let digit_x = cell_x.floor();
        let digit_y = cell_y.floor();
        if digit_x == 1.0 && digit_y == 1.0 {
            return f64::from(level) / f64::from(levels.max(1)) * 0.5;
        }
        cell_x -= digit_x;
        cell_y -= digit_y;
    }

    1.0
}

fn tint_for(fractal: FractalKind) -> [u8; 3] {
    match fractal {
        FractalKind::Menger => [230, 200, 140],
        FractalKind::Mandelbulb => [200, 120, 220],
        FractalKind::Sierpinski => [120, 220, 160],
        FractalKind::Mandelbox => [120, 170, 240],
        _ => [180, 180, 180],
    }
}
