//! The built-in catalog: five categories, three meditations each, plus the
//! ambient beds for the background player.

use crate::i18n::LocalizedText;

use super::model::{AmbientTrack, CategoryKind, Track};

const fn track(
    id: &'static str,
    title: (&'static str, &'static str),
    description: (&'static str, &'static str),
    audio_file: (&'static str, &'static str),
    category: CategoryKind,
    rating: f32,
) -> Track {
    Track {
        id,
        title: LocalizedText::new(title.0, title.1),
        description: LocalizedText::new(description.0, description.1),
        audio_file: LocalizedText::new(audio_file.0, audio_file.1),
        category,
        rating,
    }
}

static TRACKS: [Track; 15] = [
    track(
        "peaceful-drift",
        ("Peaceful Drift", "Deriva Pacífica"),
        (
            "Gently guide your mind and body into deep rest with calming breath and soft visualization.",
            "Guía suavemente tu mente y cuerpo hacia el descanso profundo con respiración calmante.",
        ),
        ("peaceful-drift-en.mp3", "peaceful-drift-es.mp3"),
        CategoryKind::Sleep,
        4.8,
    ),
    track(
        "night-ocean-waves",
        ("Night Ocean Waves", "Olas del Océano Nocturno"),
        (
            "A soothing meditation using imagery of the sea to release tension and invite sleep.",
            "Una meditación relajante usando imágenes del mar para liberar tensión e invitar al sueño.",
        ),
        ("night-ocean-waves-en.mp3", "night-ocean-waves-es.mp3"),
        CategoryKind::Sleep,
        4.7,
    ),
    track(
        "release-the-day",
        ("Release the Day", "Libera el Día"),
        (
            "Let go of thoughts, worries, and busyness as you prepare for a restorative night's rest.",
            "Deja ir pensamientos y preocupaciones mientras te preparas para un descanso reparador.",
        ),
        ("release-the-day-en.mp3", "release-the-day-es.mp3"),
        CategoryKind::Sleep,
        4.6,
    ),
    track(
        "unwind-the-mind",
        ("Unwind the Mind", "Relaja la Mente"),
        (
            "Ease mental tension with gentle breathing and body relaxation.",
            "Alivia la tensión mental con respiración suave y relajación corporal.",
        ),
        ("unwind-the-mind-en.mp3", "unwind-the-mind-es.mp3"),
        CategoryKind::StressRelief,
        4.5,
    ),
    track(
        "melting-the-pressure",
        ("Melting the Pressure", "Derritiendo la Presión"),
        (
            "A calming practice to soften stress, letting it dissolve from head to toe.",
            "Una práctica calmante para suavizar el estrés, dejándolo disolverse de pies a cabeza.",
        ),
        ("melting-the-pressure-en.mp3", "melting-the-pressure-es.mp3"),
        CategoryKind::StressRelief,
        4.6,
    ),
    track(
        "quiet-center",
        ("Quiet Center", "Centro Tranquilo"),
        (
            "Find your inner stillness by focusing on breath and grounding awareness.",
            "Encuentra tu quietud interior enfocándote en la respiración y la conciencia.",
        ),
        ("quiet-center-en.mp3", "quiet-center-es.mp3"),
        CategoryKind::StressRelief,
        4.4,
    ),
    track(
        "calm-in-the-storm",
        ("Calm in the Storm", "Calma en la Tormenta"),
        (
            "Learn to anchor yourself in the present when anxiety feels overwhelming.",
            "Aprende a anclarte en el presente cuando la ansiedad se siente abrumadora.",
        ),
        ("calm-in-the-storm-en.mp3", "calm-in-the-storm-es.mp3"),
        CategoryKind::Anxiety,
        4.9,
    ),
    track(
        "ground-and-breathe",
        ("Ground & Breathe", "Enraízate y Respira"),
        (
            "A simple practice to steady the mind and reconnect to safety through the breath.",
            "Una práctica simple para estabilizar la mente y reconectar con la seguridad.",
        ),
        ("ground-and-breathe-en.mp3", "ground-and-breathe-es.mp3"),
        CategoryKind::Anxiety,
        4.7,
    ),
    track(
        "soft-heart-steady-mind",
        ("Soft Heart, Steady Mind", "Corazón Suave, Mente Firme"),
        (
            "Gentle affirmations to calm racing thoughts and invite peace into the body.",
            "Afirmaciones suaves para calmar pensamientos acelerados e invitar paz al cuerpo.",
        ),
        ("soft-heart-steady-mind-en.mp3", "soft-heart-steady-mind-es.mp3"),
        CategoryKind::Anxiety,
        4.5,
    ),
    track(
        "clear-the-fog",
        ("Clear the Fog", "Despeja la Niebla"),
        (
            "Sharpen your attention with mindful breathing and visualization techniques.",
            "Afila tu atención con respiración consciente y técnicas de visualización.",
        ),
        ("clear-the-fog-en.mp3", "clear-the-fog-es.mp3"),
        CategoryKind::Focus,
        4.6,
    ),
    track(
        "laser-focus",
        ("Laser Focus", "Enfoque Láser"),
        (
            "Guide your energy into one point of concentration for productivity and clarity.",
            "Guía tu energía en un punto de concentración para productividad y claridad.",
        ),
        ("laser-focus-en.mp3", "laser-focus-es.mp3"),
        CategoryKind::Focus,
        4.8,
    ),
    track(
        "present-power",
        ("Present Power", "Poder Presente"),
        (
            "A short meditation to pull your mind back from distractions and into the task at hand.",
            "Una meditación corta para traer tu mente de las distracciones a la tarea presente.",
        ),
        ("present-power-en.mp3", "present-power-es.mp3"),
        CategoryKind::Focus,
        4.4,
    ),
    track(
        "grateful-heart",
        ("Grateful Heart", "Corazón Agradecido"),
        (
            "Reflect on what you appreciate in this moment and let gratitude fill you with warmth.",
            "Reflexiona sobre lo que aprecias en este momento y deja que la gratitud te llene.",
        ),
        ("grateful-heart-en.mp3", "grateful-heart-es.mp3"),
        CategoryKind::Gratitude,
        4.7,
    ),
    track(
        "seeds-of-joy",
        ("Seeds of Joy", "Semillas de Alegría"),
        (
            "A meditation to notice life's small blessings and expand your sense of abundance.",
            "Una meditación para notar las pequeñas bendiciones y expandir tu sentido de abundancia.",
        ),
        ("seeds-of-joy-en.mp3", "seeds-of-joy-es.mp3"),
        CategoryKind::Gratitude,
        4.5,
    ),
    track(
        "circle-of-thanks",
        ("Circle of Thanks", "Círculo de Gratitud"),
        (
            "Extend gratitude outward, to people, experiences, and the world around you.",
            "Extiende gratitud hacia afuera, a personas, experiencias y el mundo que te rodea.",
        ),
        ("circle-of-thanks-en.mp3", "circle-of-thanks-es.mp3"),
        CategoryKind::Gratitude,
        4.6,
    ),
];

static AMBIENT: [AmbientTrack; 3] = [
    AmbientTrack {
        name: "Dream of Light",
        file_name: "dream-of-light.mp3",
    },
    AmbientTrack {
        name: "Night Rain",
        file_name: "night-rain.mp3",
    },
    AmbientTrack {
        name: "Forest Stream",
        file_name: "forest-stream.mp3",
    },
];

/// The categories shown on the home screen, in display order.
pub fn categories() -> &'static [CategoryKind] {
    &[
        CategoryKind::Favorites,
        CategoryKind::Sleep,
        CategoryKind::StressRelief,
        CategoryKind::Anxiety,
        CategoryKind::Focus,
        CategoryKind::Gratitude,
    ]
}

/// Ordered track list for a real category. `Favorites` yields an empty list
/// here; the app layer materializes it from the favorites set.
pub fn tracks_for(category: CategoryKind) -> Vec<&'static Track> {
    TRACKS.iter().filter(|t| t.category == category).collect()
}

pub fn track_by_id(id: &str) -> Option<&'static Track> {
    TRACKS.iter().find(|t| t.id == id)
}

pub fn all_tracks() -> &'static [Track] {
    &TRACKS
}

pub fn ambient_tracks() -> &'static [AmbientTrack] {
    &AMBIENT
}
