//! Pure view-model derivations for bots and leaderboards.
//!
//! # Design
//! - Referentially transparent; no state, no I/O.
//! - Anything the render layer computes from entity fields lives here so it
//!   can be tested without a rendering harness.

use arena_api_models::{BotId, BuildReport, BuildState, LeaderboardOverview, WinrateStat};

/// Conservative lower-bound skill estimate: `mu - 3 * sigma`, rounded to two
/// decimal places.
#[must_use]
pub fn rating_score(mu: f64, sigma: f64) -> f64 {
    (sigma.mul_add(-3.0, mu) * 100.0).round() / 100.0
}

/// Percentage of points taken against an opponent, counting draws as half a
/// win, rounded to the nearest integer. `None` when the pair has no matches;
/// absence of data is not a 0% winrate.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn winrate_percent(wins: u64, loses: u64, draws: u64) -> Option<u8> {
    let total = wins + loses + draws;
    if total == 0 {
        return None;
    }
    let percent = 100.0 * (0.5f64.mul_add(draws as f64, wins as f64)) / total as f64;
    Some(percent.round() as u8)
}

/// Badge shown for one worker's build attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildBadge {
    /// Queued, not yet picked up.
    Pending,
    /// Compiling right now.
    Running,
    /// Finished cleanly.
    Success,
    /// Finished with compiler diagnostics.
    Error,
}

/// Classify a build report into its badge. A finished build with any stderr
/// output is a failure; the wire enum already rejects unknown status strings
/// at deserialization.
#[must_use]
pub fn build_badge(build: &BuildReport) -> BuildBadge {
    match build.status {
        BuildState::Pending => BuildBadge::Pending,
        BuildState::Running => BuildBadge::Running,
        BuildState::Finished => {
            if build.stderr.as_deref().is_some_and(|stderr| !stderr.is_empty()) {
                BuildBadge::Error
            } else {
                BuildBadge::Success
            }
        }
    }
}

/// Visual weight of a winrate cell: how far the percentage sits from the
/// 50% line, bucketed for the background gradient.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WinrateTone {
    /// Winning record (> 50%).
    Favorable,
    /// Exactly even.
    Even,
    /// Losing record (< 50%).
    Unfavorable,
}

/// Map a winrate percentage to its display tone.
#[must_use]
pub const fn winrate_tone(percent: u8) -> WinrateTone {
    if percent > 50 {
        WinrateTone::Favorable
    } else if percent < 50 {
        WinrateTone::Unfavorable
    } else {
        WinrateTone::Even
    }
}

/// Find the head-to-head tally of `bot_id` against `opponent_bot_id` on a
/// leaderboard. Absence means the pair has not played under this filter.
#[must_use]
pub fn winrate_against(
    board: &LeaderboardOverview,
    bot_id: BotId,
    opponent_bot_id: BotId,
) -> Option<&WinrateStat> {
    board
        .winrate_stats
        .iter()
        .find(|stat| stat.bot_id == bot_id && stat.opponent_bot_id == opponent_bot_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn rating_score_is_a_conservative_lower_bound() {
        assert!((rating_score(25.0, 8.333) - 0.0).abs() < EPSILON);
        assert!((rating_score(30.0, 1.0) - 27.0).abs() < EPSILON);
    }

    #[test]
    fn rating_score_rounds_to_two_decimals() {
        assert!((rating_score(25.123, 8.0) - 1.12).abs() < EPSILON);
        assert!((rating_score(0.0, 0.037) - -0.11).abs() < EPSILON);
    }

    #[test]
    fn winrate_counts_draws_as_half() {
        assert_eq!(winrate_percent(6, 3, 1), Some(65));
        assert_eq!(winrate_percent(1, 1, 0), Some(50));
        assert_eq!(winrate_percent(0, 5, 0), Some(0));
    }

    #[test]
    fn winrate_with_no_matches_is_no_data() {
        assert_eq!(winrate_percent(0, 0, 0), None);
    }

    #[test]
    fn build_badges_follow_status_and_stderr() {
        let report = |status, stderr: Option<&str>| BuildReport {
            worker_name: "w1".to_string(),
            status,
            stderr: stderr.map(str::to_string),
        };
        assert_eq!(build_badge(&report(BuildState::Pending, None)), BuildBadge::Pending);
        assert_eq!(build_badge(&report(BuildState::Running, None)), BuildBadge::Running);
        assert_eq!(build_badge(&report(BuildState::Finished, None)), BuildBadge::Success);
        assert_eq!(
            build_badge(&report(BuildState::Finished, Some("boom"))),
            BuildBadge::Error
        );
        // An empty stderr on a finished build still reads as success.
        assert_eq!(build_badge(&report(BuildState::Finished, Some(""))), BuildBadge::Success);
    }

    #[test]
    fn winrate_tone_brackets_the_even_line() {
        assert_eq!(winrate_tone(65), WinrateTone::Favorable);
        assert_eq!(winrate_tone(50), WinrateTone::Even);
        assert_eq!(winrate_tone(35), WinrateTone::Unfavorable);
    }

    #[test]
    fn winrate_lookup_is_directional() {
        let board = LeaderboardOverview {
            id: arena_api_models::LeaderboardId(1),
            name: "duels".to_string(),
            filter: String::new(),
            status: arena_api_models::LeaderboardState::Live,
            error: None,
            items: vec![],
            winrate_stats: vec![WinrateStat {
                bot_id: BotId(1),
                opponent_bot_id: BotId(2),
                wins: 3,
                draws: 0,
                loses: 1,
            }],
            total_matches: 4,
            example_seeds: vec![],
        };
        assert!(winrate_against(&board, BotId(1), BotId(2)).is_some());
        assert!(winrate_against(&board, BotId(2), BotId(1)).is_none());
    }
}
