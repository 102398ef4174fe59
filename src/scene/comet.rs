//! Drifting comets: the only scene entities with a destroy/respawn lifecycle.

use glam::Vec3;

use crate::config;
use crate::rng::Rng;

/// A comet nucleus plus the derivation of its fading tail. Spawned on a ring
/// around the origin, aimed roughly at the opposite side, replaced in place
/// once its lifetime runs out.
pub struct Comet {
    pub pos: Vec3,
    pub vel: Vec3,
    /// Accumulated roll around the travel axis.
    pub spin: f32,
    /// Ticks lived so far.
    pub life: f32,
    /// Assigned lifetime; the comet is replaced on the first tick beyond it.
    pub max_life: f32,
}

impl Comet {
    pub fn spawn(rng: &mut Rng) -> Self {
        let angle = rng.range(0.0, std::f32::consts::TAU);
        let radius = rng.range(config::COMET_RING_MIN, config::COMET_RING_MAX);
        let pos = Vec3::new(
            angle.cos() * radius,
            rng.range(-config::COMET_Y_EXTENT, config::COMET_Y_EXTENT),
            angle.sin() * radius,
        );

        let target_angle = angle + std::f32::consts::PI;
        let speed = rng.range(config::COMET_SPEED_MIN, config::COMET_SPEED_MAX);
        let vel = Vec3::new(
            target_angle.cos() * speed,
            rng.range(-config::COMET_Y_JITTER, config::COMET_Y_JITTER),
            target_angle.sin() * speed,
        );

        Self {
            pos,
            vel,
            spin: 0.0,
            life: 0.0,
            max_life: rng.range(config::COMET_LIFE_MIN, config::COMET_LIFE_MAX),
        }
    }

    /// Integrate one tick of motion.
    pub fn step(&mut self) {
        self.pos += self.vel;
        self.spin += config::COMET_SPIN_RATE;
        self.life += 1.0;
    }

    pub fn expired(&self) -> bool {
        self.life > self.max_life
    }

    /// Unit direction the tail trails in (opposite the motion).
    pub fn tail_direction(&self) -> Vec3 {
        -self.vel.normalize_or_zero()
    }

    /// Center, size and opacity of tail segment `i` (0 = closest to the
    /// nucleus). Segments shrink and fade with distance.
    pub fn tail_segment(&self, i: usize) -> (Vec3, f32, f32) {
        let offset = self.tail_direction() * (config::COMET_TAIL_SPACING * (i + 1) as f32);
        let size = config::COMET_NUCLEUS_SIZE - 0.2 - i as f32 * 0.1;
        let alpha = 0.7 - i as f32 * 0.028;
        (self.pos + offset, size.max(0.2), alpha.max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawns_on_the_ring_with_sane_velocity() {
        let mut rng = Rng::new(21);
        for _ in 0..500 {
            let c = Comet::spawn(&mut rng);
            let ring = (c.pos.x * c.pos.x + c.pos.z * c.pos.z).sqrt();
            assert!(ring >= config::COMET_RING_MIN && ring < config::COMET_RING_MAX);
            assert!(c.pos.y.abs() <= config::COMET_Y_EXTENT);
            let speed = (c.vel.x * c.vel.x + c.vel.z * c.vel.z).sqrt();
            assert!(speed >= config::COMET_SPEED_MIN - 1e-4);
            assert!(speed < config::COMET_SPEED_MAX + 1e-4);
            assert!(c.max_life >= config::COMET_LIFE_MIN && c.max_life < config::COMET_LIFE_MAX);
            assert_eq!(c.life, 0.0);
        }
    }

    #[test]
    fn velocity_points_back_across_the_ring() {
        let mut rng = Rng::new(22);
        for _ in 0..200 {
            let c = Comet::spawn(&mut rng);
            // Horizontal velocity is exactly opposite the spawn bearing.
            let outward = Vec3::new(c.pos.x, 0.0, c.pos.z).normalize();
            let horizontal = Vec3::new(c.vel.x, 0.0, c.vel.z).normalize();
            assert!(outward.dot(horizontal) < -0.999);
        }
    }

    #[test]
    fn lifetime_is_monotone_until_expiry() {
        let mut rng = Rng::new(23);
        let mut c = Comet::spawn(&mut rng);
        let mut prev = c.life;
        while !c.expired() {
            c.step();
            assert!(c.life > prev);
            prev = c.life;
        }
        // Expiry is detected at most one tick past the assigned maximum.
        assert!(c.life <= c.max_life + 1.0);
    }

    #[test]
    fn position_integrates_velocity() {
        let mut rng = Rng::new(24);
        let mut c = Comet::spawn(&mut rng);
        let start = c.pos;
        let vel = c.vel;
        for _ in 0..100 {
            c.step();
        }
        let expect = start + vel * 100.0;
        assert!((c.pos - expect).length() < 1e-2);
    }

    #[test]
    fn tail_shrinks_and_fades_away_from_the_nucleus() {
        let mut rng = Rng::new(25);
        let c = Comet::spawn(&mut rng);
        let mut prev_size = f32::INFINITY;
        let mut prev_alpha = f32::INFINITY;
        let mut prev_dist = 0.0;
        for i in 0..config::COMET_TAIL_SEGMENTS {
            let (center, size, alpha) = c.tail_segment(i);
            let dist = (center - c.pos).length();
            assert!(dist > prev_dist);
            assert!(size <= prev_size);
            assert!(alpha <= prev_alpha);
            prev_dist = dist;
            prev_size = size;
            prev_alpha = alpha;
        }
    }
}
