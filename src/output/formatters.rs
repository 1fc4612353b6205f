//! Formatting utilities for terminal output

use crate::core::{WORD_LENGTH, Word};
use crate::daily::{RevealState, Slots};

/// Placeholder shown in an empty slot
pub const EMPTY_SLOT: char = '_';

/// Format the five slots as spaced letters, e.g. `C I G A R` or `_ _ _ _ _`
#[must_use]
pub fn format_slots(slots: &Slots) -> String {
    slots
        .iter()
        .map(|slot| slot.unwrap_or(EMPTY_SLOT).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Slots for a word given the reveal state
#[must_use]
pub fn word_slots(word: &Word, reveal: RevealState) -> Slots {
    let letters = word.slots();
    if reveal.is_revealed() {
        letters.map(Some)
    } else {
        [None; WORD_LENGTH]
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max).clamp(0.0, 1.0) * width as f64) as usize
    } else {
        0
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format an entropy score as a bar relative to the best possible split
#[must_use]
pub fn entropy_bar(entropy: f64, candidates: usize, width: usize) -> String {
    let max_entropy = (candidates.max(2) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_word_is_masked() {
        let word = Word::new("cigar").unwrap();
        let slots = word_slots(&word, RevealState::Hidden);
        assert_eq!(format_slots(&slots), "_ _ _ _ _");
    }

    #[test]
    fn revealed_word_is_uppercase() {
        let word = Word::new("cigar").unwrap();
        let slots = word_slots(&word, RevealState::Revealed);
        assert_eq!(format_slots(&slots), "C I G A R");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full_and_clamped() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
        assert_eq!(create_progress_bar(250.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn entropy_bar_full_for_perfect_split() {
        // 8 candidates split into 8 buckets is 3 bits
        assert_eq!(entropy_bar(3.0, 8, 6), "██████");
    }
}
