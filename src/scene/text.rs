//! Text billboards and emoji sprites.
//!
//! All of this state is created only after the display font resolves; until
//! then the scene holds no text layer and the tick loop skips it.

use glam::{Mat4, Vec3};

use crate::config;
use crate::rng::Rng;

/// Headline shown above the moon.
pub const TITLE: &str = "Mi Cochinita FER  (3 MESES)";

/// The dedication read below the moon, one billboard per line.
pub const SUB_LINES: [&str; 3] = [
    "Seamos como la luna: a veces en pedazos",
    "y otras enteras brillando mas que nunca,",
    "pero siempre amandonos en todas las fases.",
];

pub const PIG_EMOJI: &str = "\u{1F43D}";
pub const HEART_EMOJI: &str = "\u{2764}\u{FE0F}";

/// Phrases scattered through the star field.
pub const PHRASES: [&str; 100] = [
    "Mi cochinita preciosa, eres el amor de mi vida",
    "Fer, cada noche de llamada contigo es mi momento favorito del dia",
    "Mi corazon siempre esta contigo, mi amor",
    "Mi imillita hermosa, te llevo en mi corazon a cada segundo",
    "Ver peliculas en Netflix contigo es mejor que cualquier cine",
    "Nuestras videollamadas son el mejor momento de mis dias",
    "Eres la mujer perfecta para mi, mi Fer adorada",
    "Espero con ansias el dia en que pueda darte todos los besos que te debo",
    "Mi cochinita, eres mi sol y mi luz",
    "La distancia no es nada cuando el amor es todo, mi Fer",
    "Cada conversacion nocturna contigo me hace dormir feliz",
    "Te amo mas alla de las estrellas, mi imillita",
    "Nuestros suenos juntos son mi promesa de amor eterno",
    "El atletismo nos une, pero tu amor me hace volar",
    "Estoy impaciente por abrazarte y no soltarte nunca",
    "Todo mi corazon late por ti, mi Fer preciosa",
    "Cada mensaje tuyo ilumina mi pantalla y mi vida",
    "Nuestro amor es infinito, mi imillita",
    "Cuando estemos juntos, te dare todas las caricias que he guardado",
    "Eres mi imillita, mi amor, mi todo",
    "Nuestros momentos en llamada me vuelven loco de amor",
    "Te quiero muchisisisimo, mi cochinita adorada",
    "3 meses de amor a distancia que valen por anos",
    "Mi Fer, eres la razon por la que sonrio cada noche",
    "Cada pelicula que vemos juntos es especial porque estas tu",
    "La espera vale la pena porque al final estare contigo",
    "Eres mi companera de atletismo y de vida",
    "Tu amor hace que la distancia sea solo un detalle",
    "Mi cochinita preciosa, eres mi mayor bendicion",
    "Fer, tu risa en las llamadas es mi cancion favorita",
    "Nos contamos nuestras vidas cada noche y nunca me canso de escucharte",
    "Aunque dormidos nos dijimos te amo, mi corazon lo siente despierto",
    "Me haces sentir el hombre mas afortunado del mundo",
    "La distancia nos hace mas fuertes, mi amor",
    "Cada dia que pasa es un dia menos para estar juntos",
    "Mi imillita hermosa, eres mi inspiracion diaria",
    "Nuestras noches de conversacion son mejor que cualquier salida",
    "Te amo en la distancia, te amare mas en la cercania",
    "Nuestros corazones estan siempre juntos",
    "Mi cochinita, eres la duena de mi corazon",
    "Cada videollamada contigo es como estar en el paraiso",
    "Fer, tu amor hace que valga la pena cada momento de espera",
    "Cuando te vea, te dare el abrazo mas largo del mundo",
    "Eres mi todo, mi cochinita preciosa",
    "El atletismo nos mantiene fuertes, tu amor me mantiene vivo",
    "Mi Fer adorada, eres mi persona favorita en todo el universo",
    "La distancia es temporal, nuestro amor es eterno",
    "Cada noche me duermo pensando en ti, mi imillita",
    "Eres mi amor, mi amiga, mi cochinita, mi vida entera",
    "3 meses de amor que se sienten como toda una vida juntos",
    "Mi corazon late mas fuerte cada vez que te veo en videollamada",
    "Fer, eres la razon por la que creo en el amor verdadero",
    "Nuestros momentos juntos, aunque virtuales, son reales en mi corazon",
    "Mi cochinita, tu amor me hace sentir completo",
    "La espera terminara y nuestros besos seran inolvidables",
    "Eres mi imillita perfecta, mi amor verdadero",
    "Cada llamada contigo es como una cita bajo las estrellas",
    "Mi Fer preciosa, te amo mas de lo que las palabras pueden expresar",
    "La distancia nos prueba, pero nuestro amor siempre gana",
    "Eres mi cochinita adorada y mi razon de ser",
    "Cuando te abrace, nunca te soltare, mi amor",
    "Nuestro amor a distancia es la prueba de que lo nuestro es real",
    "Mi imillita hermosa, cada dia te quiero mas",
    "Fer, eres mi mayor felicidad",
    "El amor no conoce distancias cuando es verdadero como el nuestro",
    "Mi cochinita preciosa, eres mi alegria infinita",
    "Cada mensaje tuyo es como un abrazo a mi alma",
    "Te amare en cualquier lugar, mi Fer adorada",
    "Eres mi companera de vida, mi cochinita adorada",
    "3 meses es solo el comienzo de nuestra historia de amor infinita",
    "Mi Fer, tu amor me da fuerzas para seguir adelante",
    "La distancia no puede con nuestro amor, mi imillita",
    "Eres mi todo y mucho mas, mi cochinita preciosa",
    "Cada noche de llamada es una bendicion, mi amor",
    "Fer, eres la mujer de mis suenos y de mi realidad",
    "Mi corazon es tuyo, mi cochinita adorada",
    "El amor a distancia es dificil, pero contigo todo vale la pena",
    "Eres mi imillita, mi amor, mi vida entera",
    "Cada segundo que pasa es un segundo mas cerca de ti",
    "Mi Fer preciosa, te amo con toda mi alma",
    "La distancia es solo un obstaculo temporal para nuestro amor eterno",
    "Eres mi cochinita perfecta, mi amor verdadero",
    "Nuestro amor brilla mas fuerte que cualquier estrella",
    "Mi imillita adorada, eres mi mayor tesoro",
    "Fer, tu amor me hace el hombre mas feliz del mundo",
    "Cada dia que pasa te amo mas, mi cochinita preciosa",
    "La distancia no importa cuando el amor es tan grande",
    "Eres mi todo, mi mas y mi siempre, mi Fer adorada",
    "3 meses de amor puro, real y eterno",
    "Mi cochinita, eres la razon de mi felicidad",
    "El amor que siento por ti no tiene limites",
    "Eres mi imillita hermosa, mi amor infinito",
    "Cada llamada contigo es un pedacito de cielo",
    "Mi Fer preciosa, eres mi corazon latiendo",
    "La distancia nos hace valorar cada momento juntos",
    "Eres mi cochinita adorada, mi amor eterno",
    "Te amo hoy, te amare manana, te amare siempre",
    "Nuestro amor es mas fuerte que cualquier kilometro",
    "Mi cochinita, contigo cada noche es una estrella nueva",
    "Fer, mi cielo entero cabe en tus ojos",
];

/// Rotation that points the local +Z axis from `pos` toward `target`
/// (the lookAt billboard behavior).
pub fn face_toward(pos: Vec3, target: Vec3) -> Mat4 {
    let forward = (target - pos).normalize_or_zero();
    if forward == Vec3::ZERO {
        return Mat4::IDENTITY;
    }
    let mut right = Vec3::Y.cross(forward);
    if right.length_squared() < 1e-8 {
        // Looking straight up or down.
        right = Vec3::X;
    }
    let right = right.normalize();
    let up = forward.cross(right);
    Mat4::from_cols(
        right.extend(0.0),
        up.extend(0.0),
        forward.extend(0.0),
        glam::Vec4::W,
    )
}

/// One camera-facing text quad.
pub struct Billboard {
    pub pos: Vec3,
    /// World-space height of the quad.
    pub height: f32,
    /// Width / height of the rasterized texture.
    pub aspect: f32,
    /// Renderer texture slot.
    pub texture: usize,
    /// Recomputed every tick to face the camera eye.
    pub orientation: Mat4,
}

impl Billboard {
    pub fn new(pos: Vec3, height: f32, aspect: f32, texture: usize) -> Self {
        Self {
            pos,
            height,
            aspect,
            texture,
            orientation: Mat4::IDENTITY,
        }
    }
}

/// One of the two static emoji sprites. Camera-plane facing happens in the
/// shader, so there is no per-tick update.
pub struct Sprite {
    pub pos: Vec3,
    pub size: f32,
    pub texture: usize,
}

/// Everything text-bearing, installed into the scene once the font loads.
pub struct TextLayer {
    pub title: Billboard,
    pub sub_lines: Vec<Billboard>,
    pub phrases: Vec<Billboard>,
    pub sprites: Vec<Sprite>,
}

impl TextLayer {
    /// Re-orient every billboard toward the camera eye.
    pub fn face_camera(&mut self, eye: Vec3) {
        self.title.orientation = face_toward(self.title.pos, eye);
        for line in &mut self.sub_lines {
            line.orientation = face_toward(line.pos, eye);
        }
        for phrase in &mut self.phrases {
            phrase.orientation = face_toward(phrase.pos, eye);
        }
    }

    pub fn billboards(&self) -> impl Iterator<Item = &Billboard> {
        std::iter::once(&self.title)
            .chain(self.sub_lines.iter())
            .chain(self.phrases.iter())
    }
}

/// Title position above the moon.
pub fn title_pos() -> Vec3 {
    Vec3::new(0.0, config::TITLE_POS_Y, 0.0)
}

/// Position of dedication line `i`, descending below the moon.
pub fn sub_line_pos(i: usize) -> Vec3 {
    Vec3::new(
        0.0,
        config::SUBLINE_BASE_Y - i as f32 * config::SUBLINE_STEP_Y,
        0.0,
    )
}

/// Random placement for one scattered phrase.
pub fn phrase_pos(rng: &mut Rng) -> Vec3 {
    Vec3::new(
        rng.range(-config::PHRASE_SPREAD, config::PHRASE_SPREAD),
        rng.range(-config::PHRASE_SPREAD, config::PHRASE_SPREAD),
        rng.range(-config::PHRASE_SPREAD, config::PHRASE_SPREAD),
    )
}

/// The pig and heart sprite placements, flanking the title.
pub fn sprite_positions() -> [Vec3; 2] {
    [
        Vec3::new(-config::EMOJI_OFFSET_X, config::EMOJI_POS_Y, 0.0),
        Vec3::new(config::EMOJI_OFFSET_X, config::EMOJI_POS_Y, 0.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transformed_z(m: Mat4) -> Vec3 {
        (m * glam::Vec4::new(0.0, 0.0, 1.0, 0.0)).truncate()
    }

    #[test]
    fn face_toward_points_local_z_at_target() {
        let pos = Vec3::new(10.0, -4.0, 30.0);
        let eye = Vec3::new(-200.0, 80.0, 120.0);
        let m = face_toward(pos, eye);
        let z = transformed_z(m);
        let expect = (eye - pos).normalize();
        assert!(z.dot(expect) > 0.9999, "z={z:?} expect={expect:?}");
    }

    #[test]
    fn face_toward_keeps_an_orthonormal_frame() {
        let m = face_toward(Vec3::new(1.0, 2.0, 3.0), Vec3::new(-5.0, 9.0, 0.5));
        let x = (m * glam::Vec4::X).truncate();
        let y = (m * glam::Vec4::Y).truncate();
        let z = (m * glam::Vec4::new(0.0, 0.0, 1.0, 0.0)).truncate();
        assert!((x.length() - 1.0).abs() < 1e-5);
        assert!((y.length() - 1.0).abs() < 1e-5);
        assert!((z.length() - 1.0).abs() < 1e-5);
        assert!(x.dot(y).abs() < 1e-5);
        assert!(x.dot(z).abs() < 1e-5);
        assert!(y.dot(z).abs() < 1e-5);
    }

    #[test]
    fn face_toward_degenerate_direction_is_identity() {
        let p = Vec3::new(3.0, 3.0, 3.0);
        assert_eq!(face_toward(p, p), Mat4::IDENTITY);
    }

    #[test]
    fn face_toward_handles_straight_up() {
        let pos = Vec3::ZERO;
        let eye = Vec3::new(0.0, 100.0, 0.0);
        let m = face_toward(pos, eye);
        let z = transformed_z(m);
        assert!(z.dot(Vec3::Y) > 0.9999);
    }

    #[test]
    fn phrase_positions_stay_in_spread_cube() {
        let mut rng = Rng::new(31);
        for _ in 0..1_000 {
            let p = phrase_pos(&mut rng);
            assert!(p.x.abs() <= config::PHRASE_SPREAD);
            assert!(p.y.abs() <= config::PHRASE_SPREAD);
            assert!(p.z.abs() <= config::PHRASE_SPREAD);
        }
    }

    #[test]
    fn layer_reorients_all_billboards() {
        let mut rng = Rng::new(32);
        let mut layer = TextLayer {
            title: Billboard::new(title_pos(), config::TITLE_HEIGHT, 8.0, 0),
            sub_lines: (0..3)
                .map(|i| Billboard::new(sub_line_pos(i), config::SUBLINE_HEIGHT, 10.0, 1 + i))
                .collect(),
            phrases: (0..10)
                .map(|i| Billboard::new(phrase_pos(&mut rng), config::PHRASE_HEIGHT, 6.0, 4 + i))
                .collect(),
            sprites: Vec::new(),
        };
        let eye = Vec3::new(0.0, 50.0, 250.0);
        layer.face_camera(eye);
        for b in layer.billboards() {
            let z = transformed_z(b.orientation);
            let expect = (eye - b.pos).normalize();
            assert!(z.dot(expect) > 0.999);
        }
    }
}
