#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Shared HTTP DTOs for the arena public API.
//!
//! These types mirror the server's `/api` wire contract exactly: field names,
//! enum spellings, and id encodings. The UI crate deserializes every success
//! body into one of these records and serializes every request body from one,
//! so the contract lives in a single place.

use serde::{Deserialize, Serialize};

/// Server-assigned identifier for a bot.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct BotId(
    /// Raw wire value.
    pub i64,
);

impl std::fmt::Display for BotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Server-assigned identifier for a leaderboard.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct LeaderboardId(
    /// Raw wire value.
    pub i64,
);

impl LeaderboardId {
    /// The reserved id of the immutable global leaderboard.
    pub const GLOBAL: Self = Self(0);

    /// Whether this is the global leaderboard, which can never be renamed,
    /// re-filtered, or deleted.
    #[must_use]
    pub const fn is_global(self) -> bool {
        self.0 == Self::GLOBAL.0
    }
}

impl std::fmt::Display for LeaderboardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Lifecycle of one worker's build attempt for a bot.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BuildState {
    /// Queued, not yet picked up by the worker.
    Pending,
    /// The worker is compiling the bot right now.
    Running,
    /// The build completed; `stderr` tells success from failure.
    Finished,
}

/// One worker's build report for a bot.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BuildReport {
    /// Name of the worker that ran (or will run) the build.
    pub worker_name: String,
    /// Current build lifecycle state.
    pub status: BuildState,
    /// Compiler diagnostics; present only on failed finished builds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stderr: Option<String>,
}

/// Full per-bot record reported by the status snapshot.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BotOverview {
    /// Stable server-assigned id.
    pub id: BotId,
    /// Unique display name, at most 32 characters.
    pub name: String,
    /// Free-form language label supplied at submission.
    pub language: String,
    /// Total matches this bot has participated in.
    pub matches_played: u64,
    /// Matches in which this bot crashed or errored.
    pub matches_with_error: u64,
    /// One build report per worker that has attempted a build.
    pub builds: Vec<BuildReport>,
    /// Server-formatted submission timestamp.
    pub created_at: String,
}

/// Recompute lifecycle of a leaderboard.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LeaderboardState {
    /// Ranking is current and renderable.
    Live,
    /// The server is recomputing the ranking; items are stale.
    Computing,
    /// The last recompute failed; see the overview's `error` message.
    Error,
}

/// One ranked row of a leaderboard.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LeaderboardItem {
    /// Bot the row refers to.
    pub id: BotId,
    /// Dense 0-based rank, increasing by descending rating score.
    pub rank: u32,
    /// Skill estimate mean, computed server-side.
    pub rating_mu: f64,
    /// Skill estimate uncertainty, computed server-side.
    pub rating_sigma: f64,
}

/// Head-to-head tally for one ordered bot pair.
///
/// A pair that has never played is absent from the list; absence means
/// "no data", not zero.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WinrateStat {
    /// Perspective bot of the tally.
    pub bot_id: BotId,
    /// Opponent the tally counts against.
    pub opponent_bot_id: BotId,
    /// Matches won by `bot_id`.
    pub wins: u64,
    /// Matches drawn.
    pub draws: u64,
    /// Matches lost by `bot_id`.
    pub loses: u64,
}

/// Full per-leaderboard record reported by the status snapshot.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LeaderboardOverview {
    /// Stable server-assigned id; id 0 is the global leaderboard.
    pub id: LeaderboardId,
    /// Display name.
    pub name: String,
    /// Author-supplied predicate over match metadata.
    pub filter: String,
    /// Recompute lifecycle state.
    pub status: LeaderboardState,
    /// Failure message when `status` is [`LeaderboardState::Error`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Ranked rows, best first.
    pub items: Vec<LeaderboardItem>,
    /// Pairwise head-to-head tallies for pairs that have played.
    pub winrate_stats: Vec<WinrateStat>,
    /// Matches counted into this ranking.
    pub total_matches: u64,
    /// Sample match seeds that satisfy the filter.
    pub example_seeds: Vec<i64>,
}

/// Complete server snapshot returned by `GET /api/status`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StatusResponse {
    /// All bots, newest first.
    pub bots: Vec<BotOverview>,
    /// All leaderboards, global first.
    pub leaderboards: Vec<LeaderboardOverview>,
    /// Whether the server currently schedules new matches.
    pub matchmaking_enabled: bool,
}

/// Body of `POST /api/bots`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateBotRequest {
    /// Unique bot name.
    pub name: String,
    /// Full bot source code.
    pub source_code: String,
    /// Free-form language label.
    pub language: String,
}

/// Body of `PATCH /api/bots/{id}`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenameBotRequest {
    /// New unique bot name.
    pub name: String,
}

/// Body of `POST /api/leaderboards`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateLeaderboardRequest {
    /// Display name for the new leaderboard.
    pub name: String,
    /// Predicate expression over match metadata.
    pub filter: String,
}

/// Body of `PATCH /api/leaderboards/{id}`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PatchLeaderboardRequest {
    /// New display name.
    pub name: String,
    /// New predicate expression.
    pub filter: String,
}

/// Body of `PUT /api/matchmaking`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SetMatchmakingRequest {
    /// Desired matchmaking state.
    pub enabled: bool,
}

/// Body of `GET /api/bots/{id}/source`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceCodeResponse {
    /// The bot's submitted source code.
    pub source_code: String,
}

/// Body of `POST /api/chart`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChartRequest {
    /// Predicate selecting the matches to aggregate.
    pub filter: String,
    /// Match attribute to chart.
    pub attribute_name: String,
}

/// Aggregated attribute values for one turn.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct ChartTurnPoint {
    /// Turn number within the match.
    pub turn: u16,
    /// Mean attribute value across matching matches.
    pub avg: f64,
    /// Minimum observed value.
    pub min: f64,
    /// Maximum observed value.
    pub max: f64,
}

/// Per-bot chart series.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ChartSeries {
    /// Bot the series belongs to.
    pub bot_id: BotId,
    /// Per-turn aggregates, in turn order.
    pub data: Vec<ChartTurnPoint>,
}

/// Response of `POST /api/chart`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ChartOverview {
    /// One series per bot present in the matching matches.
    pub items: Vec<ChartSeries>,
    /// Matches that satisfied the filter.
    pub total_matches: u64,
}

/// Structured error body returned on every non-2xx API response.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// Stable machine-readable code, e.g. `already_exists`.
    pub error_code: String,
    /// Human-readable detail, when the server provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_snapshot_round_trips() {
        let json = r#"{
            "bots": [{
                "id": 3,
                "name": "alpha",
                "language": "rust",
                "matches_played": 12,
                "matches_with_error": 1,
                "builds": [
                    {"worker_name": "w1", "status": "finished"},
                    {"worker_name": "w2", "status": "finished", "stderr": "boom"}
                ],
                "created_at": "01/02/2026 10:30"
            }],
            "leaderboards": [{
                "id": 0,
                "name": "global",
                "filter": "",
                "status": "live",
                "items": [{"id": 3, "rank": 0, "rating_mu": 25.0, "rating_sigma": 8.333}],
                "winrate_stats": [{"bot_id": 3, "opponent_bot_id": 4, "wins": 6, "draws": 1, "loses": 3}],
                "total_matches": 10,
                "example_seeds": [17, 42]
            }],
            "matchmaking_enabled": true
        }"#;
        let status: StatusResponse = serde_json::from_str(json).expect("decode status");
        assert_eq!(status.bots[0].builds[0].status, BuildState::Finished);
        assert_eq!(status.bots[0].builds[0].stderr, None);
        assert_eq!(status.bots[0].builds[1].stderr.as_deref(), Some("boom"));
        assert!(status.leaderboards[0].id.is_global());
        assert_eq!(status.leaderboards[0].status, LeaderboardState::Live);
        assert_eq!(status.leaderboards[0].example_seeds, vec![17, 42]);
        assert!(status.matchmaking_enabled);

        let encoded = serde_json::to_string(&status).expect("encode status");
        let decoded: StatusResponse = serde_json::from_str(&encoded).expect("re-decode status");
        assert_eq!(decoded, status);
    }

    #[test]
    fn unknown_build_status_is_rejected() {
        let err = serde_json::from_str::<BuildReport>(
            r#"{"worker_name": "w1", "status": "exploded"}"#,
        )
        .expect_err("unknown status must fail to decode");
        assert!(err.to_string().contains("exploded"));
    }

    #[test]
    fn error_body_message_is_optional() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"error_code": "not_found"}"#).expect("decode error body");
        assert_eq!(body.error_code, "not_found");
        assert_eq!(body.message, None);
    }

    #[test]
    fn ids_encode_as_bare_integers() {
        assert_eq!(serde_json::to_string(&BotId(7)).expect("encode"), "7");
        assert_eq!(
            serde_json::to_string(&LeaderboardId::GLOBAL).expect("encode"),
            "0"
        );
    }
}
