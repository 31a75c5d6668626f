//! Arena roster state and the snapshot/mutation reconciler.
//!
//! # Design
//! - One owned state struct, one pure fold (`apply`) producing every
//!   transition; no implicit sharing with the view layer.
//! - Optimistic changes are tracked as sequence-tagged overlays so a stale
//!   snapshot can never revert a newer local mutation.
//! - Everything here is synchronous and testable on the native target.

use arena_api_models::{
    BotId, BotOverview, LeaderboardId, LeaderboardOverview, LeaderboardState, StatusResponse,
};

/// Sequence number ordering optimistic changes against snapshot requests.
pub type Seq = u64;

/// Connectivity of the background poll loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Connectivity {
    /// The most recent snapshot request succeeded.
    Connected,
    /// No snapshot has arrived yet, or the last request failed; the last
    /// good data keeps rendering while the poller retries.
    #[default]
    Connecting,
}

/// Authoritative client-side copy of the arena.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArenaState {
    /// Bot roster in server order, newest first.
    pub bots: Vec<BotOverview>,
    /// Leaderboard roster in server order, global first.
    pub leaderboards: Vec<LeaderboardOverview>,
    /// Whether the server currently schedules new matches.
    pub matchmaking_enabled: bool,
    /// Currently selected bot. The id is kept even while the bot is absent
    /// from the roster; derivations simply render no overview then.
    pub selected_bot_id: Option<BotId>,
    /// Poll-loop connectivity, rendered in the navbar.
    pub connectivity: Connectivity,
    /// Next sequence number handed to an overlay or snapshot token.
    next_seq: Seq,
    /// Optimistic changes not yet covered by a snapshot.
    pending: Vec<PendingChange>,
}

/// One optimistic change layered over incoming snapshots.
#[derive(Clone, Debug, PartialEq)]
struct PendingChange {
    /// Sequence at which the server confirmed the change, once known.
    /// `None` while the confirming call is still in flight.
    confirmed_seq: Option<Seq>,
    patch: Patch,
}

/// The field-level effect of an optimistic change, replayable over any
/// snapshot that predates its confirmation.
#[derive(Clone, Debug, PartialEq)]
enum Patch {
    BotCreated(Box<BotOverview>),
    BotRenamed { id: BotId, name: String },
    BotRemoved { id: BotId },
    LeaderboardCreated(Box<LeaderboardOverview>),
    LeaderboardPatched {
        id: LeaderboardId,
        name: String,
        filter: String,
        recompute: bool,
    },
    LeaderboardComputing { id: LeaderboardId },
    LeaderboardRemoved { id: LeaderboardId },
    MatchmakingSet { enabled: bool },
}

/// One reconciliation input: a poll result or a mutation milestone.
#[derive(Clone, Debug, PartialEq)]
pub enum ArenaEvent {
    /// A full server snapshot arrived. `issued_seq` is the token taken via
    /// [`snapshot_token`] when the request was issued.
    Snapshot {
        /// Sequence token captured at request time.
        issued_seq: Seq,
        /// The snapshot payload.
        status: StatusResponse,
    },
    /// The snapshot request failed; keep stale data, show reconnecting.
    PollFailed,
    /// The user picked a bot in a table or overview.
    BotSelected {
        /// Bot to select; recorded even if currently absent.
        id: BotId,
    },
    /// A bot creation call returned the server-assigned record.
    BotCreated {
        /// The confirmed record, prepended to the roster and selected.
        bot: BotOverview,
    },
    /// A rename call succeeded; patch the local name.
    BotRenamed {
        /// Bot that was renamed.
        id: BotId,
        /// The confirmed new name.
        name: String,
    },
    /// A delete call is about to be issued; remove the bot now.
    BotDeleteStarted {
        /// Bot being deleted.
        id: BotId,
    },
    /// The delete call resolved, successfully or not. Either way the local
    /// removal stands; the next snapshot is the source of truth.
    BotDeleteSettled {
        /// Bot whose delete call resolved.
        id: BotId,
    },
    /// A leaderboard creation call returned the server record.
    LeaderboardCreated {
        /// The confirmed record, appended to the roster.
        leaderboard: LeaderboardOverview,
    },
    /// A leaderboard patch call is about to be issued. When the new filter
    /// differs from the current one the board flips to `computing` now,
    /// before the server confirms.
    LeaderboardPatchStarted {
        /// Leaderboard being patched.
        id: LeaderboardId,
        /// The filter the patch will install.
        filter: String,
    },
    /// A leaderboard patch call succeeded; patch the local fields.
    LeaderboardPatched {
        /// Leaderboard that was patched.
        id: LeaderboardId,
        /// The confirmed name.
        name: String,
        /// The confirmed filter.
        filter: String,
    },
    /// A leaderboard patch call failed; the provisional `computing` flip is
    /// not rolled back, the next snapshot restores the server status.
    LeaderboardPatchFailed {
        /// Leaderboard whose patch call failed.
        id: LeaderboardId,
    },
    /// A leaderboard delete call is about to be issued; remove it now.
    LeaderboardDeleteStarted {
        /// Leaderboard being deleted.
        id: LeaderboardId,
    },
    /// The leaderboard delete call resolved, successfully or not.
    LeaderboardDeleteSettled {
        /// Leaderboard whose delete call resolved.
        id: LeaderboardId,
    },
    /// The matchmaking flag call succeeded; flip the local flag.
    MatchmakingSet {
        /// The confirmed flag value.
        enabled: bool,
    },
}

/// Token to capture immediately before issuing a snapshot request; passing
/// it back with [`ArenaEvent::Snapshot`] lets the fold decide which pending
/// overlays the response can and cannot overwrite.
#[must_use]
pub const fn snapshot_token(state: &ArenaState) -> Seq {
    state.next_seq
}

/// Fold one event into the state. This is the only way state transitions;
/// mutation and snapshot events may arrive in any interleaving.
pub fn apply(state: &mut ArenaState, event: ArenaEvent) {
    match event {
        ArenaEvent::Snapshot { issued_seq, status } => apply_snapshot(state, issued_seq, status),
        ArenaEvent::PollFailed => state.connectivity = Connectivity::Connecting,
        ArenaEvent::BotSelected { id } => state.selected_bot_id = Some(id),
        ArenaEvent::BotCreated { bot } => {
            let id = bot.id;
            let patch = Patch::BotCreated(Box::new(bot));
            apply_patch(state, &patch);
            state.selected_bot_id = Some(id);
            push_pending(state, patch, true);
        }
        ArenaEvent::BotRenamed { id, name } => {
            let patch = Patch::BotRenamed { id, name };
            apply_patch(state, &patch);
            push_pending(state, patch, true);
        }
        ArenaEvent::BotDeleteStarted { id } => {
            let patch = Patch::BotRemoved { id };
            apply_patch(state, &patch);
            if state.selected_bot_id == Some(id) {
                state.selected_bot_id = None;
            }
            push_pending(state, patch, false);
        }
        ArenaEvent::BotDeleteSettled { id } => {
            confirm(state, |patch| matches!(patch, Patch::BotRemoved { id: p } if *p == id));
        }
        ArenaEvent::LeaderboardCreated { leaderboard } => {
            let patch = Patch::LeaderboardCreated(Box::new(leaderboard));
            apply_patch(state, &patch);
            push_pending(state, patch, true);
        }
        ArenaEvent::LeaderboardPatchStarted { id, filter } => {
            let differs = state
                .leaderboards
                .iter()
                .any(|board| board.id == id && board.filter != filter);
            if differs {
                let patch = Patch::LeaderboardComputing { id };
                apply_patch(state, &patch);
                push_pending(state, patch, false);
            }
        }
        ArenaEvent::LeaderboardPatched { id, name, filter } => {
            let started = take_unconfirmed(state, |patch| {
                matches!(patch, Patch::LeaderboardComputing { id: p } if *p == id)
            });
            let recompute = started
                || state
                    .leaderboards
                    .iter()
                    .any(|board| board.id == id && board.filter != filter);
            let patch = Patch::LeaderboardPatched {
                id,
                name,
                filter,
                recompute,
            };
            apply_patch(state, &patch);
            push_pending(state, patch, true);
        }
        ArenaEvent::LeaderboardPatchFailed { id } => {
            confirm(state, |patch| {
                matches!(patch, Patch::LeaderboardComputing { id: p } if *p == id)
            });
        }
        ArenaEvent::LeaderboardDeleteStarted { id } => {
            let patch = Patch::LeaderboardRemoved { id };
            apply_patch(state, &patch);
            push_pending(state, patch, false);
        }
        ArenaEvent::LeaderboardDeleteSettled { id } => {
            confirm(state, |patch| {
                matches!(patch, Patch::LeaderboardRemoved { id: p } if *p == id)
            });
        }
        ArenaEvent::MatchmakingSet { enabled } => {
            let patch = Patch::MatchmakingSet { enabled };
            apply_patch(state, &patch);
            push_pending(state, patch, true);
        }
    }
}

/// Selection pass run after every snapshot reconciliation: drop a selection
/// whose bot vanished, then fall back to the first roster entry. Mutation
/// events never auto-reassign within the same operation.
pub fn reconcile_selection(state: &mut ArenaState) {
    if let Some(id) = state.selected_bot_id
        && !state.bots.iter().any(|bot| bot.id == id)
    {
        state.selected_bot_id = None;
    }
    if state.selected_bot_id.is_none()
        && let Some(first) = state.bots.first()
    {
        state.selected_bot_id = Some(first.id);
    }
}

/// Read the currently selected bot, if it is present in the roster.
#[must_use]
pub fn selected_bot(state: &ArenaState) -> Option<&BotOverview> {
    let id = state.selected_bot_id?;
    state.bots.iter().find(|bot| bot.id == id)
}

/// Read a bot's display name by id. Leaderboard rows referencing a bot that
/// has vanished from the roster render nothing.
#[must_use]
pub fn bot_name(state: &ArenaState, id: BotId) -> Option<&str> {
    state
        .bots
        .iter()
        .find(|bot| bot.id == id)
        .map(|bot| bot.name.as_str())
}

fn apply_snapshot(state: &mut ArenaState, issued_seq: Seq, status: StatusResponse) {
    state.bots = status.bots;
    state.leaderboards = status.leaderboards;
    state.matchmaking_enabled = status.matchmaking_enabled;
    // An overlay is covered once a snapshot was issued after its
    // confirmation; everything else replays over the fresh rosters.
    state
        .pending
        .retain(|change| change.confirmed_seq.is_none_or(|seq| issued_seq <= seq));
    let replay: Vec<Patch> = state.pending.iter().map(|change| change.patch.clone()).collect();
    for patch in &replay {
        apply_patch(state, patch);
    }
    state.connectivity = Connectivity::Connected;
    reconcile_selection(state);
}

/// Apply one overlay to the rosters. Used both for the initial optimistic
/// application and for replaying over a stale snapshot, so every arm must
/// tolerate the target already matching or being absent.
fn apply_patch(state: &mut ArenaState, patch: &Patch) {
    match patch {
        Patch::BotCreated(bot) => {
            if !state.bots.iter().any(|existing| existing.id == bot.id) {
                state.bots.insert(0, (**bot).clone());
            }
        }
        Patch::BotRenamed { id, name } => {
            if let Some(bot) = state.bots.iter_mut().find(|bot| bot.id == *id) {
                bot.name.clone_from(name);
            }
        }
        Patch::BotRemoved { id } => {
            state.bots.retain(|bot| bot.id != *id);
            // Ranking is stale until the server recomputes without the bot.
            for board in &mut state.leaderboards {
                board.status = LeaderboardState::Computing;
            }
        }
        Patch::LeaderboardCreated(board) => {
            if !state.leaderboards.iter().any(|existing| existing.id == board.id) {
                state.leaderboards.push((**board).clone());
            }
        }
        Patch::LeaderboardPatched {
            id,
            name,
            filter,
            recompute,
        } => {
            if let Some(board) = state.leaderboards.iter_mut().find(|board| board.id == *id) {
                board.name.clone_from(name);
                board.filter.clone_from(filter);
                if *recompute {
                    board.status = LeaderboardState::Computing;
                }
            }
        }
        Patch::LeaderboardComputing { id } => {
            if let Some(board) = state.leaderboards.iter_mut().find(|board| board.id == *id) {
                board.status = LeaderboardState::Computing;
            }
        }
        Patch::LeaderboardRemoved { id } => {
            state.leaderboards.retain(|board| board.id != *id);
        }
        Patch::MatchmakingSet { enabled } => state.matchmaking_enabled = *enabled,
    }
}

fn alloc_seq(state: &mut ArenaState) -> Seq {
    let seq = state.next_seq;
    state.next_seq += 1;
    seq
}

fn push_pending(state: &mut ArenaState, patch: Patch, confirmed: bool) {
    let confirmed_seq = confirmed.then(|| alloc_seq(state));
    if confirmed_seq.is_none() {
        // Unconfirmed overlays still advance the clock so a snapshot issued
        // after them can be told apart from one issued before.
        let _ = alloc_seq(state);
    }
    state.pending.push(PendingChange {
        confirmed_seq,
        patch,
    });
}

fn confirm(state: &mut ArenaState, matches: impl Fn(&Patch) -> bool) {
    let seq = alloc_seq(state);
    if let Some(change) = state
        .pending
        .iter_mut()
        .find(|change| change.confirmed_seq.is_none() && matches(&change.patch))
    {
        change.confirmed_seq = Some(seq);
    }
}

fn take_unconfirmed(state: &mut ArenaState, matches: impl Fn(&Patch) -> bool) -> bool {
    let position = state
        .pending
        .iter()
        .position(|change| change.confirmed_seq.is_none() && matches(&change.patch));
    if let Some(index) = position {
        state.pending.remove(index);
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_api_models::{BuildReport, BuildState};

    fn bot(id: i64, name: &str) -> BotOverview {
        BotOverview {
            id: BotId(id),
            name: name.to_string(),
            language: "rust".to_string(),
            matches_played: 0,
            matches_with_error: 0,
            builds: vec![BuildReport {
                worker_name: "w1".to_string(),
                status: BuildState::Finished,
                stderr: None,
            }],
            created_at: "01/02/2026 10:30".to_string(),
        }
    }

    fn board(id: i64, name: &str, filter: &str) -> LeaderboardOverview {
        LeaderboardOverview {
            id: LeaderboardId(id),
            name: name.to_string(),
            filter: filter.to_string(),
            status: LeaderboardState::Live,
            error: None,
            items: vec![],
            winrate_stats: vec![],
            total_matches: 0,
            example_seeds: vec![],
        }
    }

    fn snapshot(bots: Vec<BotOverview>, leaderboards: Vec<LeaderboardOverview>) -> StatusResponse {
        StatusResponse {
            bots,
            leaderboards,
            matchmaking_enabled: true,
        }
    }

    fn seeded(bots: Vec<BotOverview>, leaderboards: Vec<LeaderboardOverview>) -> ArenaState {
        let mut state = ArenaState::default();
        let token = snapshot_token(&state);
        apply(
            &mut state,
            ArenaEvent::Snapshot {
                issued_seq: token,
                status: snapshot(bots, leaderboards),
            },
        );
        state
    }

    #[test]
    fn snapshot_is_idempotent() {
        let mut state = seeded(vec![bot(1, "a"), bot(2, "b")], vec![board(0, "global", "")]);
        let first = state.clone();
        let token = snapshot_token(&state);
        apply(
            &mut state,
            ArenaEvent::Snapshot {
                issued_seq: token,
                status: snapshot(vec![bot(1, "a"), bot(2, "b")], vec![board(0, "global", "")]),
            },
        );
        assert_eq!(state, first);
    }

    #[test]
    fn snapshot_selects_first_bot_when_nothing_selected() {
        let state = seeded(vec![bot(5, "a"), bot(6, "b")], vec![]);
        assert_eq!(state.selected_bot_id, Some(BotId(5)));
        assert_eq!(state.connectivity, Connectivity::Connected);
    }

    #[test]
    fn snapshot_clears_selection_of_vanished_bot() {
        let mut state = seeded(vec![bot(1, "a"), bot(2, "b")], vec![]);
        apply(&mut state, ArenaEvent::BotSelected { id: BotId(2) });
        let token = snapshot_token(&state);
        apply(
            &mut state,
            ArenaEvent::Snapshot {
                issued_seq: token,
                status: snapshot(vec![bot(1, "a")], vec![]),
            },
        );
        // Bot 2 is gone; the pass clears and then falls back to the head.
        assert_eq!(state.selected_bot_id, Some(BotId(1)));
    }

    #[test]
    fn empty_roster_leaves_selection_empty() {
        let state = seeded(vec![], vec![]);
        assert_eq!(state.selected_bot_id, None);
    }

    #[test]
    fn selecting_an_absent_bot_is_recorded() {
        let mut state = seeded(vec![bot(1, "a")], vec![]);
        apply(&mut state, ArenaEvent::BotSelected { id: BotId(9) });
        assert_eq!(state.selected_bot_id, Some(BotId(9)));
        assert!(selected_bot(&state).is_none());
    }

    #[test]
    fn create_bot_prepends_and_selects() {
        let mut state = seeded(vec![bot(1, "a")], vec![]);
        apply(&mut state, ArenaEvent::BotCreated { bot: bot(2, "new") });
        assert_eq!(
            state.bots.iter().map(|b| b.id).collect::<Vec<_>>(),
            vec![BotId(2), BotId(1)]
        );
        assert_eq!(state.selected_bot_id, Some(BotId(2)));
    }

    #[test]
    fn delete_bot_removes_clears_selection_and_marks_boards() {
        let mut state = seeded(
            vec![bot(1, "a"), bot(2, "b"), bot(3, "c")],
            vec![board(0, "global", ""), board(4, "duels", "f")],
        );
        apply(&mut state, ArenaEvent::BotSelected { id: BotId(2) });

        apply(&mut state, ArenaEvent::BotDeleteStarted { id: BotId(2) });

        assert_eq!(
            state.bots.iter().map(|b| b.id).collect::<Vec<_>>(),
            vec![BotId(1), BotId(3)]
        );
        // Not auto-reassigned within the same operation.
        assert_eq!(state.selected_bot_id, None);
        assert!(
            state
                .leaderboards
                .iter()
                .all(|board| board.status == LeaderboardState::Computing)
        );
    }

    #[test]
    fn stale_snapshot_does_not_resurrect_deleted_bot() {
        let mut state = seeded(vec![bot(1, "a"), bot(2, "b")], vec![board(0, "global", "")]);
        // Poll request goes out before the delete is dispatched.
        let stale_token = snapshot_token(&state);
        apply(&mut state, ArenaEvent::BotDeleteStarted { id: BotId(2) });
        apply(
            &mut state,
            ArenaEvent::Snapshot {
                issued_seq: stale_token,
                status: snapshot(vec![bot(1, "a"), bot(2, "b")], vec![board(0, "global", "")]),
            },
        );
        assert!(state.bots.iter().all(|bot| bot.id != BotId(2)));
        assert_eq!(state.leaderboards[0].status, LeaderboardState::Computing);
    }

    #[test]
    fn post_settle_snapshot_is_authoritative_for_deletes() {
        let mut state = seeded(vec![bot(1, "a"), bot(2, "b")], vec![]);
        apply(&mut state, ArenaEvent::BotDeleteStarted { id: BotId(2) });
        apply(&mut state, ArenaEvent::BotDeleteSettled { id: BotId(2) });
        // The delete call failed server-side: the next snapshot still lists
        // bot 2, and nothing shields it any more.
        let token = snapshot_token(&state);
        apply(
            &mut state,
            ArenaEvent::Snapshot {
                issued_seq: token,
                status: snapshot(vec![bot(1, "a"), bot(2, "b")], vec![]),
            },
        );
        assert!(state.bots.iter().any(|bot| bot.id == BotId(2)));
    }

    #[test]
    fn failed_delete_is_not_rolled_back_locally() {
        let mut state = seeded(vec![bot(1, "a"), bot(2, "b")], vec![]);
        apply(&mut state, ArenaEvent::BotDeleteStarted { id: BotId(2) });
        apply(&mut state, ArenaEvent::BotDeleteSettled { id: BotId(2) });
        // No snapshot yet: the record stays deleted even though the call
        // failed; only a fresh snapshot may bring it back.
        assert!(state.bots.iter().all(|bot| bot.id != BotId(2)));
    }

    #[test]
    fn rename_survives_snapshot_issued_before_it() {
        let mut state = seeded(vec![bot(1, "old")], vec![]);
        let stale_token = snapshot_token(&state);
        apply(
            &mut state,
            ArenaEvent::BotRenamed {
                id: BotId(1),
                name: "foo".to_string(),
            },
        );
        apply(
            &mut state,
            ArenaEvent::Snapshot {
                issued_seq: stale_token,
                status: snapshot(vec![bot(1, "old")], vec![]),
            },
        );
        assert_eq!(state.bots[0].name, "foo");

        // A snapshot issued after the confirmation wins.
        let fresh_token = snapshot_token(&state);
        apply(
            &mut state,
            ArenaEvent::Snapshot {
                issued_seq: fresh_token,
                status: snapshot(vec![bot(1, "bar")], vec![]),
            },
        );
        assert_eq!(state.bots[0].name, "bar");
    }

    #[test]
    fn create_leaderboard_appends_at_the_end() {
        let mut state = seeded(vec![], vec![board(0, "global", "")]);
        let mut duels = board(7, "Duels", "match.player_count == 2");
        duels.items = vec![];
        apply(
            &mut state,
            ArenaEvent::LeaderboardCreated { leaderboard: duels },
        );
        assert_eq!(
            state.leaderboards.iter().map(|b| b.id).collect::<Vec<_>>(),
            vec![LeaderboardId(0), LeaderboardId(7)]
        );
        assert_eq!(state.leaderboards[1].name, "Duels");
    }

    #[test]
    fn created_leaderboard_survives_stale_snapshot() {
        let mut state = seeded(vec![], vec![board(0, "global", "")]);
        let stale_token = snapshot_token(&state);
        apply(
            &mut state,
            ArenaEvent::LeaderboardCreated {
                leaderboard: board(7, "Duels", "match.player_count == 2"),
            },
        );
        apply(
            &mut state,
            ArenaEvent::Snapshot {
                issued_seq: stale_token,
                status: snapshot(vec![], vec![board(0, "global", "")]),
            },
        );
        assert!(
            state
                .leaderboards
                .iter()
                .any(|board| board.id == LeaderboardId(7))
        );
    }

    #[test]
    fn filter_change_marks_computing_before_confirmation() {
        let mut state = seeded(vec![], vec![board(3, "duels", "old")]);
        apply(
            &mut state,
            ArenaEvent::LeaderboardPatchStarted {
                id: LeaderboardId(3),
                filter: "new".to_string(),
            },
        );
        assert_eq!(state.leaderboards[0].status, LeaderboardState::Computing);
        // Fields are untouched until the server confirms.
        assert_eq!(state.leaderboards[0].filter, "old");

        apply(
            &mut state,
            ArenaEvent::LeaderboardPatched {
                id: LeaderboardId(3),
                name: "duels".to_string(),
                filter: "new".to_string(),
            },
        );
        assert_eq!(state.leaderboards[0].filter, "new");
        assert_eq!(state.leaderboards[0].status, LeaderboardState::Computing);
    }

    #[test]
    fn name_only_patch_keeps_status_live() {
        let mut state = seeded(vec![], vec![board(3, "duels", "f")]);
        apply(
            &mut state,
            ArenaEvent::LeaderboardPatchStarted {
                id: LeaderboardId(3),
                filter: "f".to_string(),
            },
        );
        assert_eq!(state.leaderboards[0].status, LeaderboardState::Live);

        apply(
            &mut state,
            ArenaEvent::LeaderboardPatched {
                id: LeaderboardId(3),
                name: "renamed".to_string(),
                filter: "f".to_string(),
            },
        );
        assert_eq!(state.leaderboards[0].name, "renamed");
        assert_eq!(state.leaderboards[0].status, LeaderboardState::Live);
    }

    #[test]
    fn failed_patch_leaves_fields_untouched_until_next_snapshot() {
        let mut state = seeded(vec![], vec![board(3, "duels", "old")]);
        apply(
            &mut state,
            ArenaEvent::LeaderboardPatchStarted {
                id: LeaderboardId(3),
                filter: "new".to_string(),
            },
        );
        apply(
            &mut state,
            ArenaEvent::LeaderboardPatchFailed {
                id: LeaderboardId(3),
            },
        );
        assert_eq!(state.leaderboards[0].name, "duels");
        assert_eq!(state.leaderboards[0].filter, "old");
        // The provisional flip stays until fresh data arrives.
        assert_eq!(state.leaderboards[0].status, LeaderboardState::Computing);

        let token = snapshot_token(&state);
        apply(
            &mut state,
            ArenaEvent::Snapshot {
                issued_seq: token,
                status: snapshot(vec![], vec![board(3, "duels", "old")]),
            },
        );
        assert_eq!(state.leaderboards[0].status, LeaderboardState::Live);
    }

    #[test]
    fn leaderboard_delete_is_optimistic() {
        let mut state = seeded(vec![], vec![board(0, "global", ""), board(3, "duels", "f")]);
        let stale_token = snapshot_token(&state);
        apply(
            &mut state,
            ArenaEvent::LeaderboardDeleteStarted {
                id: LeaderboardId(3),
            },
        );
        assert_eq!(state.leaderboards.len(), 1);

        apply(
            &mut state,
            ArenaEvent::Snapshot {
                issued_seq: stale_token,
                status: snapshot(vec![], vec![board(0, "global", ""), board(3, "duels", "f")]),
            },
        );
        assert!(
            state
                .leaderboards
                .iter()
                .all(|board| board.id != LeaderboardId(3))
        );
    }

    #[test]
    fn matchmaking_flag_survives_stale_snapshot() {
        let mut state = seeded(vec![], vec![]);
        assert!(state.matchmaking_enabled);
        let stale_token = snapshot_token(&state);
        apply(&mut state, ArenaEvent::MatchmakingSet { enabled: false });
        apply(
            &mut state,
            ArenaEvent::Snapshot {
                issued_seq: stale_token,
                status: snapshot(vec![], vec![]),
            },
        );
        assert!(!state.matchmaking_enabled);
    }

    #[test]
    fn poll_failure_downgrades_connectivity_and_keeps_data() {
        let mut state = seeded(vec![bot(1, "a")], vec![]);
        apply(&mut state, ArenaEvent::PollFailed);
        assert_eq!(state.connectivity, Connectivity::Connecting);
        assert_eq!(state.bots.len(), 1);
    }

    #[test]
    fn rename_of_locally_deleted_bot_is_a_noop_patch() {
        let mut state = seeded(vec![bot(1, "a"), bot(2, "b")], vec![]);
        apply(&mut state, ArenaEvent::BotDeleteStarted { id: BotId(2) });
        apply(
            &mut state,
            ArenaEvent::BotRenamed {
                id: BotId(2),
                name: "ghost".to_string(),
            },
        );
        assert!(state.bots.iter().all(|bot| bot.id != BotId(2)));
    }

    #[test]
    fn bot_name_lookup_misses_vanished_bots() {
        let state = seeded(vec![bot(1, "a")], vec![]);
        assert_eq!(bot_name(&state, BotId(1)), Some("a"));
        assert_eq!(bot_name(&state, BotId(2)), None);
    }
}
