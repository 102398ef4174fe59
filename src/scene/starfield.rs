//! Procedural star fields: the main particle cloud and the twinkling overlay.

use crate::config;
use crate::rng::Rng;

/// Fixed point cloud with per-point color and size. Generated once; the only
/// per-tick mutation is a whole-field yaw rotation.
pub struct Starfield {
    /// xyz triplets, `PARTICLE_COUNT * 3` floats.
    pub positions: Vec<f32>,
    /// rgb triplets, `PARTICLE_COUNT * 3` floats.
    pub colors: Vec<f32>,
    /// Per-point size, `PARTICLE_COUNT` floats.
    pub sizes: Vec<f32>,
    /// Accumulated yaw of the whole field.
    pub spin: f32,
}

impl Starfield {
    pub fn generate(rng: &mut Rng) -> Self {
        let n = config::PARTICLE_COUNT;
        let mut positions = Vec::with_capacity(n * 3);
        let mut colors = Vec::with_capacity(n * 3);
        let mut sizes = Vec::with_capacity(n);

        for _ in 0..n {
            for _ in 0..3 {
                positions.push(rng.range(-config::FIELD_EXTENT, config::FIELD_EXTENT));
            }
            sizes.push(rng.range(config::PARTICLE_SIZE_MIN, config::PARTICLE_SIZE_MAX));

            let choice = rng.next_f32();
            let palette = if choice < config::PALETTE_WHITE_CUTOFF {
                config::PALETTE_WHITE
            } else if choice < config::PALETTE_BLUE_CUTOFF {
                config::PALETTE_BLUE
            } else {
                config::PALETTE_WARM
            };
            colors.extend_from_slice(&palette);
        }

        Self {
            positions,
            colors,
            sizes,
            spin: 0.0,
        }
    }

    pub fn advance(&mut self) {
        self.spin += config::FIELD_SPIN;
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

/// Sparse overlay stars whose shared opacity oscillates over time. Each point
/// keeps its own random phase; the applied opacity uses the phase of the last
/// point as the representative, which preserves the observable flicker
/// frequency while computing a single value per frame.
pub struct TwinkleField {
    pub positions: Vec<f32>,
    pub phases: Vec<f32>,
    pub opacity: f32,
}

impl TwinkleField {
    pub fn generate(rng: &mut Rng) -> Self {
        let n = config::TWINKLE_COUNT;
        let mut positions = Vec::with_capacity(n * 3);
        let mut phases = Vec::with_capacity(n);
        for _ in 0..n {
            for _ in 0..3 {
                positions.push(rng.range(-config::FIELD_EXTENT, config::FIELD_EXTENT));
            }
            phases.push(rng.range(0.0, std::f32::consts::TAU));
        }
        Self {
            positions,
            phases,
            opacity: 0.8,
        }
    }

    /// Recompute the shared opacity for the given global time.
    pub fn advance(&mut self, time: f32) {
        let phase = self.phases.last().copied().unwrap_or(0.0);
        self.opacity = 0.5 + 0.5 * ((time + phase) * config::TWINKLE_RATE).sin();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_stay_inside_the_field_cube() {
        let mut rng = Rng::new(1);
        let field = Starfield::generate(&mut rng);
        assert_eq!(field.len(), config::PARTICLE_COUNT);
        assert_eq!(field.positions.len(), config::PARTICLE_COUNT * 3);
        for &c in &field.positions {
            assert!(c.abs() <= config::FIELD_EXTENT, "coordinate {c} escapes the cube");
        }
        for &s in &field.sizes {
            assert!(s >= config::PARTICLE_SIZE_MIN && s < config::PARTICLE_SIZE_MAX);
        }
    }

    #[test]
    fn palette_partition_is_roughly_60_20_20() {
        let mut rng = Rng::new(2);
        let field = Starfield::generate(&mut rng);
        let mut counts = [0usize; 3];
        for rgb in field.colors.chunks_exact(3) {
            if rgb == config::PALETTE_WHITE {
                counts[0] += 1;
            } else if rgb == config::PALETTE_BLUE {
                counts[1] += 1;
            } else if rgb == config::PALETTE_WARM {
                counts[2] += 1;
            } else {
                panic!("color {rgb:?} not from any palette");
            }
        }
        let n = field.len() as f32;
        let fractions = [counts[0] as f32 / n, counts[1] as f32 / n, counts[2] as f32 / n];
        assert!((fractions[0] - 0.6).abs() < 0.02, "white share {}", fractions[0]);
        assert!((fractions[1] - 0.2).abs() < 0.02, "blue share {}", fractions[1]);
        assert!((fractions[2] - 0.2).abs() < 0.02, "warm share {}", fractions[2]);
    }

    #[test]
    fn spin_accumulates_per_tick() {
        let mut rng = Rng::new(3);
        let mut field = Starfield::generate(&mut rng);
        for _ in 0..10 {
            field.advance();
        }
        assert!((field.spin - 10.0 * config::FIELD_SPIN).abs() < 1e-7);
    }

    #[test]
    fn twinkle_opacity_stays_normalized() {
        let mut rng = Rng::new(4);
        let mut field = TwinkleField::generate(&mut rng);
        assert_eq!(field.phases.len(), config::TWINKLE_COUNT);
        let mut t = 0.0;
        for _ in 0..5_000 {
            t += config::TIME_STEP;
            field.advance(t);
            assert!((0.0..=1.0).contains(&field.opacity));
        }
    }

    #[test]
    fn twinkle_flicker_period_matches_rate() {
        let mut rng = Rng::new(5);
        let mut field = TwinkleField::generate(&mut rng);
        // opacity(t) has period TAU / TWINKLE_RATE in time units.
        let period = std::f32::consts::TAU / config::TWINKLE_RATE;
        field.advance(1.0);
        let a = field.opacity;
        field.advance(1.0 + period);
        let b = field.opacity;
        assert!((a - b).abs() < 1e-4);
    }
}
