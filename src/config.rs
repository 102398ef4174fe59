//! Fixed tuning constants for the galaxy scene.
//!
//! Object counts are deliberate constants, not configurable inputs: the scene
//! is built once with exactly this inventory.

/// Stars in the main particle field.
pub const PARTICLE_COUNT: usize = 15_000;
/// Half-extent of the particle cube; each coordinate is uniform in ±this.
pub const FIELD_EXTENT: f32 = 1_500.0;
/// Yaw applied to the whole field every tick.
pub const FIELD_SPIN: f32 = 0.0002;
/// Per-point size range for depth variation.
pub const PARTICLE_SIZE_MIN: f32 = 0.5;
pub const PARTICLE_SIZE_MAX: f32 = 2.5;

/// Color palettes with their cumulative pick probabilities (60/20/20).
pub const PALETTE_WHITE: [f32; 3] = [1.0, 1.0, 1.0];
pub const PALETTE_BLUE: [f32; 3] = [0.8, 0.9, 1.0];
pub const PALETTE_WARM: [f32; 3] = [1.0, 0.9, 0.6];
pub const PALETTE_WHITE_CUTOFF: f32 = 0.6;
pub const PALETTE_BLUE_CUTOFF: f32 = 0.8;

/// Stars in the twinkling overlay field.
pub const TWINKLE_COUNT: usize = 500;
/// Twinkle flicker rate multiplier inside the sine.
pub const TWINKLE_RATE: f32 = 2.0;

/// Moon sphere radius and its translucent glow shell.
pub const MOON_RADIUS: f32 = 40.0;
pub const GLOW_RADIUS: f32 = 55.0;
pub const MOON_SPIN: f32 = 0.001;
pub const GLOW_SPIN: f32 = -0.0008;
pub const GLOW_PULSE_AMPLITUDE: f32 = 0.05;
pub const GLOW_PULSE_RATE: f32 = 0.5;
pub const GLOW_COLOR: [f32; 3] = [0.8, 0.8, 0.867];
pub const GLOW_OPACITY: f32 = 0.2;

/// Moon texture bake dimensions and blob counts.
pub const MOON_TEX_WIDTH: u32 = 1024;
pub const MOON_TEX_HEIGHT: u32 = 512;
pub const CRATER_COUNT: usize = 150;
pub const CRATER_RADIUS_MIN: f32 = 5.0;
pub const CRATER_RADIUS_MAX: f32 = 35.0;
pub const SHADOW_COUNT: usize = 80;
pub const SHADOW_RADIUS_MIN: f32 = 20.0;
pub const SHADOW_RADIUS_MAX: f32 = 70.0;
pub const SHADOW_ALPHA_MAX: f32 = 0.3;

/// Comet pool.
pub const COMET_SLOTS: usize = 6;
pub const COMET_RING_MIN: f32 = 900.0;
pub const COMET_RING_MAX: f32 = 1_500.0;
pub const COMET_Y_EXTENT: f32 = 350.0;
pub const COMET_SPEED_MIN: f32 = 0.6;
pub const COMET_SPEED_MAX: f32 = 1.8;
pub const COMET_Y_JITTER: f32 = 0.2;
pub const COMET_LIFE_MIN: f32 = 450.0;
pub const COMET_LIFE_MAX: f32 = 700.0;
pub const COMET_SPIN_RATE: f32 = 0.015;
pub const COMET_TAIL_SEGMENTS: usize = 25;
pub const COMET_TAIL_SPACING: f32 = 6.0;
pub const COMET_NUCLEUS_SIZE: f32 = 3.0;
pub const COMET_NUCLEUS_COLOR: [f32; 3] = [0.8, 0.867, 1.0];
pub const COMET_TAIL_COLOR: [f32; 3] = [0.6, 0.733, 1.0];

/// Text layer placement.
pub const TITLE_POS_Y: f32 = 80.0;
pub const TITLE_HEIGHT: f32 = 12.0;
pub const SUBLINE_BASE_Y: f32 = -55.0;
pub const SUBLINE_STEP_Y: f32 = 8.0;
pub const SUBLINE_HEIGHT: f32 = 4.5;
pub const PHRASE_HEIGHT: f32 = 7.0;
/// Half-extent of the random phrase cube.
pub const PHRASE_SPREAD: f32 = 1_000.0;
/// Pink tint shared by all text billboards (0xFFB6C1).
pub const TEXT_COLOR: [f32; 3] = [1.0, 0.714, 0.757];
pub const EMOJI_SIZE: f32 = 20.0;
pub const EMOJI_OFFSET_X: f32 = 80.0;
pub const EMOJI_POS_Y: f32 = 80.0;

/// Camera.
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 5_000.0;
pub const CAMERA_START_Y: f32 = 50.0;
pub const CAMERA_START_Z: f32 = 250.0;
pub const CAMERA_DIST_MIN: f32 = 50.0;
pub const CAMERA_DIST_MAX: f32 = 1_500.0;
pub const CAMERA_DAMPING: f32 = 0.05;
pub const CAMERA_ROTATE_SPEED: f32 = 0.5;
pub const CAMERA_ZOOM_SPEED: f32 = 1.2;

/// Global time advance per tick.
pub const TIME_STEP: f32 = 0.01;

/// Bootstrap timings (milliseconds).
pub const TRANSITION_DELAY_MS: i32 = 800;
pub const BUTTON_FEEDBACK_MS: i32 = 1_500;
/// Playback volume; only applied when the platform allows programmatic
/// volume control (some mobile platforms reject it).
pub const AUDIO_VOLUME: f64 = 0.5;
