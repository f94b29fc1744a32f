use crate::media::MediaItem;
use crate::state::PresentationState;

/// Share of the presentation already seen, as a fraction in `(0, 1]`.
pub fn progress_fraction(index: usize, count: usize) -> f32 {
    (index + 1) as f32 / count as f32
}

/// Rounded progress percentage, `round((index + 1) / count * 100)`.
pub fn progress_percent(index: usize, count: usize) -> u32 {
    ((index + 1) as f64 / count as f64 * 100.0).round() as u32
}

pub fn counter(state: &PresentationState, item: &MediaItem) -> String {
    format!(
        "{} de {} · {}",
        state.current_index + 1,
        state.item_count(),
        item.kind_label()
    )
}

pub fn header_title(name: &str) -> String {
    format!("Cumpleaños de {}", name)
}

pub fn playback_label(is_playing: bool) -> &'static str {
    if is_playing { "Pausar" } else { "Reproducir" }
}

pub fn placeholder_source(item: &MediaItem) -> String {
    format!("Imagen: {}", item.source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Event;

    #[test]
    fn progress_percent_rounds() {
        assert_eq!(progress_percent(0, 64), 2);
        assert_eq!(progress_percent(1, 64), 3);
        assert_eq!(progress_percent(31, 64), 50);
        assert_eq!(progress_percent(62, 64), 98);
        assert_eq!(progress_percent(63, 64), 100);
    }

    #[test]
    fn progress_fraction_reaches_one() {
        assert_eq!(progress_fraction(63, 64), 1.0);
        assert_eq!(progress_fraction(0, 4), 0.25);
    }

    #[test]
    fn counter_is_one_based() {
        let state = PresentationState::new(64).apply(Event::Start).apply(Event::Retreat);
        let item = MediaItem::photo(64);
        assert_eq!(counter(&state, &item), "64 de 64 · Fotografía");
    }

    #[test]
    fn labels() {
        assert_eq!(header_title("Sonia"), "Cumpleaños de Sonia");
        assert_eq!(playback_label(true), "Pausar");
        assert_eq!(playback_label(false), "Reproducir");
        assert_eq!(placeholder_source(&MediaItem::photo(5)), "Imagen: foto5.jpg");
    }
}
