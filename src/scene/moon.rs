//! The textured moon and its glow shell.
//!
//! The surface texture is described here as plain data (gradient + crater and
//! shadow blobs) so it can be generated and tested off the browser; the wasm
//! layer paints it onto a canvas once and uploads it.

use crate::config;
use crate::rng::Rng;

/// One crater: a dark radial blob with a light offset rim ring.
pub struct Crater {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

/// One soft darkening blob.
pub struct Shadow {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub alpha: f32,
}

/// Bake description for the moon surface, produced once at construction.
pub struct MoonSurface {
    pub craters: Vec<Crater>,
    pub shadows: Vec<Shadow>,
}

impl MoonSurface {
    pub fn generate(rng: &mut Rng) -> Self {
        let w = config::MOON_TEX_WIDTH as f32;
        let h = config::MOON_TEX_HEIGHT as f32;

        let craters = (0..config::CRATER_COUNT)
            .map(|_| Crater {
                x: rng.range(0.0, w),
                y: rng.range(0.0, h),
                radius: rng.range(config::CRATER_RADIUS_MIN, config::CRATER_RADIUS_MAX),
            })
            .collect();

        let shadows = (0..config::SHADOW_COUNT)
            .map(|_| Shadow {
                x: rng.range(0.0, w),
                y: rng.range(0.0, h),
                radius: rng.range(config::SHADOW_RADIUS_MIN, config::SHADOW_RADIUS_MAX),
                alpha: rng.range(0.0, config::SHADOW_ALPHA_MAX),
            })
            .collect();

        Self { craters, shadows }
    }
}

/// Per-tick moon state: independent rotations for the body and the glow
/// shell, plus a breathing pulse on the glow scale.
pub struct Moon {
    pub surface: MoonSurface,
    pub rotation: f32,
    pub glow_rotation: f32,
    pub glow_scale: f32,
}

impl Moon {
    pub fn new(rng: &mut Rng) -> Self {
        Self {
            surface: MoonSurface::generate(rng),
            rotation: 0.0,
            glow_rotation: 0.0,
            glow_scale: 1.0,
        }
    }

    pub fn advance(&mut self, time: f32) {
        self.rotation += config::MOON_SPIN;
        self.glow_rotation += config::GLOW_SPIN;
        self.glow_scale =
            1.0 + config::GLOW_PULSE_AMPLITUDE * (time * config::GLOW_PULSE_RATE).sin();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_blob_counts_and_ranges() {
        let mut rng = Rng::new(11);
        let surface = MoonSurface::generate(&mut rng);
        assert_eq!(surface.craters.len(), config::CRATER_COUNT);
        assert_eq!(surface.shadows.len(), config::SHADOW_COUNT);
        let w = config::MOON_TEX_WIDTH as f32;
        let h = config::MOON_TEX_HEIGHT as f32;
        for c in &surface.craters {
            assert!((0.0..w).contains(&c.x) && (0.0..h).contains(&c.y));
            assert!(c.radius >= config::CRATER_RADIUS_MIN && c.radius < config::CRATER_RADIUS_MAX);
        }
        for s in &surface.shadows {
            assert!(s.radius >= config::SHADOW_RADIUS_MIN && s.radius < config::SHADOW_RADIUS_MAX);
            assert!(s.alpha >= 0.0 && s.alpha < config::SHADOW_ALPHA_MAX);
        }
    }

    #[test]
    fn rotations_run_in_opposite_directions() {
        let mut rng = Rng::new(12);
        let mut moon = Moon::new(&mut rng);
        for i in 0..100 {
            moon.advance(i as f32 * config::TIME_STEP);
        }
        assert!(moon.rotation > 0.0);
        assert!(moon.glow_rotation < 0.0);
    }

    #[test]
    fn glow_pulse_stays_within_amplitude() {
        let mut rng = Rng::new(13);
        let mut moon = Moon::new(&mut rng);
        for i in 0..10_000 {
            moon.advance(i as f32 * config::TIME_STEP);
            let dev = (moon.glow_scale - 1.0).abs();
            assert!(dev <= config::GLOW_PULSE_AMPLITUDE + 1e-6);
        }
    }
}
