//! The owned scene aggregate and its per-tick update.

pub mod comet;
pub mod moon;
pub mod starfield;
pub mod text;

use glam::Vec3;

use crate::config;
use crate::rng::Rng;

use comet::Comet;
use moon::Moon;
use starfield::{Starfield, TwinkleField};
use text::TextLayer;

/// All mutable scene state, built once and advanced by [`Scene::tick`].
///
/// The text layer stays `None` until the display font resolves; the tick
/// tolerates its absence indefinitely.
pub struct Scene {
    pub time: f32,
    pub starfield: Starfield,
    pub twinkle: TwinkleField,
    pub moon: Moon,
    pub comets: Vec<Comet>,
    pub text: Option<TextLayer>,
    rng: Rng,
}

impl Scene {
    /// Build the full static/semi-static object inventory in one pass.
    pub fn generate(seed: u64) -> Self {
        let mut rng = Rng::new(seed);
        let starfield = Starfield::generate(&mut rng);
        let twinkle = TwinkleField::generate(&mut rng);
        let moon = Moon::new(&mut rng);
        let comets = (0..config::COMET_SLOTS)
            .map(|_| Comet::spawn(&mut rng))
            .collect();
        Self {
            time: 0.0,
            starfield,
            twinkle,
            moon,
            comets,
            text: None,
            rng,
        }
    }

    /// Install the text layer once the font resource is ready. The first
    /// installation wins; a second call is ignored so a stray double
    /// completion cannot duplicate billboards.
    pub fn install_text(&mut self, layer: TextLayer) {
        if self.text.is_none() {
            self.text = Some(layer);
        } else {
            log::warn!("text layer already installed, ignoring");
        }
    }

    /// Advance one animation tick. Camera damping and frame submission are
    /// the caller's steps; nothing here blocks.
    pub fn tick(&mut self, eye: Vec3) {
        self.time += config::TIME_STEP;

        self.starfield.advance();
        self.twinkle.advance(self.time);
        self.moon.advance(self.time);

        if let Some(text) = &mut self.text {
            text.face_camera(eye);
        }

        for slot in &mut self.comets {
            slot.step();
            if slot.expired() {
                // Replacement is atomic within the tick: the slot is never
                // observed empty.
                *slot = Comet::spawn(&mut self.rng);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::text::{self, Billboard};

    fn small_text_layer() -> TextLayer {
        TextLayer {
            title: Billboard::new(text::title_pos(), config::TITLE_HEIGHT, 8.0, 0),
            sub_lines: Vec::new(),
            phrases: Vec::new(),
            sprites: Vec::new(),
        }
    }

    #[test]
    fn inventory_counts_match_construction() {
        let scene = Scene::generate(99);
        assert_eq!(scene.starfield.len(), config::PARTICLE_COUNT);
        assert_eq!(scene.twinkle.phases.len(), config::TWINKLE_COUNT);
        assert_eq!(scene.comets.len(), config::COMET_SLOTS);
        assert!(scene.text.is_none());
    }

    #[test]
    fn tick_tolerates_missing_text_layer() {
        let mut scene = Scene::generate(100);
        for _ in 0..50 {
            scene.tick(Vec3::new(0.0, 50.0, 250.0));
        }
        assert!(scene.text.is_none());
        assert!((scene.time - 50.0 * config::TIME_STEP).abs() < 1e-4);
    }

    #[test]
    fn comet_slot_count_is_preserved_across_respawns() {
        let mut scene = Scene::generate(101);
        // Long enough for every comet to expire at least once.
        for _ in 0..1_000 {
            scene.tick(Vec3::ZERO);
            assert_eq!(scene.comets.len(), config::COMET_SLOTS);
            for c in &scene.comets {
                assert!(c.life <= c.max_life + 1.0, "comet overstayed its lifetime");
            }
        }
    }

    #[test]
    fn expired_comets_are_replaced_with_fresh_ones() {
        let mut scene = Scene::generate(102);
        let initial_lives: Vec<f32> = scene.comets.iter().map(|c| c.max_life).collect();
        for _ in 0..800 {
            scene.tick(Vec3::ZERO);
        }
        // After 800 ticks every original comet (max_life < 700) must have
        // been replaced at least once, so lifetimes restarted.
        for (c, _initial) in scene.comets.iter().zip(initial_lives) {
            assert!(c.life < 800.0);
        }
    }

    #[test]
    fn install_text_is_one_shot() {
        let mut scene = Scene::generate(103);
        scene.tick(Vec3::ZERO);
        scene.install_text(small_text_layer());
        assert!(scene.text.is_some());

        // A second install must not replace the first layer.
        let mut second = small_text_layer();
        second.title.texture = 42;
        scene.install_text(second);
        assert_eq!(scene.text.as_ref().unwrap().title.texture, 0);

        // Billboards orient on the next tick without restarting the loop.
        let eye = Vec3::new(120.0, 30.0, -90.0);
        scene.tick(eye);
        let title = &scene.text.as_ref().unwrap().title;
        let z = (title.orientation * glam::Vec4::new(0.0, 0.0, 1.0, 0.0)).truncate();
        assert!(z.dot((eye - title.pos).normalize()) > 0.999);
    }

    #[test]
    fn time_advances_by_fixed_step() {
        let mut scene = Scene::generate(104);
        scene.tick(Vec3::ZERO);
        assert!((scene.time - config::TIME_STEP).abs() < 1e-7);
    }
}
