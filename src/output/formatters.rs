//! Formatting utilities for terminal output

use crate::core::{DIGITS, Score};

/// Format a score as pegs: `●` right position, `○` wrong position, `·` miss
#[must_use]
pub fn score_to_pegs(score: Score) -> String {
    let right = score.right_position() as usize;
    let wrong = score.wrong_position() as usize;
    let miss = DIGITS.saturating_sub(right + wrong);

    format!("{}{}{}", "●".repeat(right), "○".repeat(wrong), "·".repeat(miss))
}

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

/// Share of the candidate set eliminated so far, as a bar
#[must_use]
pub fn elimination_bar(remaining: usize, total: usize, width: usize) -> String {
    let eliminated = total.saturating_sub(remaining);
    create_progress_bar(eliminated as f64, total as f64, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pegs_no_matches() {
        assert_eq!(score_to_pegs(Score::default()), "····");
    }

    #[test]
    fn pegs_perfect() {
        assert_eq!(score_to_pegs(Score::PERFECT), "●●●●");
    }

    #[test]
    fn pegs_mixed() {
        assert_eq!(score_to_pegs(Score::new(1, 2).unwrap()), "●○○·");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn elimination_bar_tracks_removed_share() {
        assert_eq!(elimination_bar(360, 360, 4), "░░░░");
        assert_eq!(elimination_bar(180, 360, 4), "██░░");
        assert_eq!(elimination_bar(0, 360, 4), "████");
    }
}
