//! Formatting utilities for terminal output

use crate::core::{ClueCounts, ClueType};

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Share of `part` in `whole` as a percentage
#[must_use]
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}

/// Format per-type changes between two breakdowns, e.g. `def -1, let -2`
#[must_use]
pub fn format_changes(before: &ClueCounts, after: &ClueCounts) -> String {
    let changes: Vec<String> = after
        .diff(before)
        .iter()
        .filter(|(_, delta)| *delta != 0)
        .map(|(clue, delta)| format!("{} {delta:+}", clue.short_name()))
        .collect();

    if changes.is_empty() {
        "no change".to_string()
    } else {
        changes.join(", ")
    }
}

/// Format a ranked clue-type list, e.g. `letters (12), examples (3)`
#[must_use]
pub fn format_ranked(ranked: &[(ClueType, usize)]) -> String {
    if ranked.is_empty() {
        return "none".to_string();
    }
    ranked
        .iter()
        .map(|(clue, count)| format!("{clue} ({count})"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(10.0, 10.0, 5);
        assert_eq!(bar, "█████");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 10.0, 5);
        assert_eq!(bar, "░░░░░");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(5.0, 10.0, 4);
        assert_eq!(bar, "██░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 3), "░░░");
    }

    #[test]
    fn percentage_of_zero_is_zero() {
        assert!(percentage(3, 0).abs() < f64::EPSILON);
        assert!((percentage(1, 4) - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn changes_are_signed() {
        let before = ClueCounts::new(4, 3, 1, 1, 4);
        let after = ClueCounts::new(3, 2, 1, 1, 2);
        assert_eq!(format_changes(&before, &after), "def -1, ex -1, let -2");
        assert_eq!(format_changes(&after, &after), "no change");
    }

    #[test]
    fn ranked_lists_are_joined() {
        let ranked = [(ClueType::Letters, 12), (ClueType::Examples, 3)];
        assert_eq!(format_ranked(&ranked), "letters (12), examples (3)");
        assert_eq!(format_ranked(&[]), "none");
    }
}
