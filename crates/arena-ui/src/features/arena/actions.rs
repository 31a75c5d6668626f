//! The mutation executor: named operations the view layer invokes.
//!
//! # Design
//! - Each operation sequences its optimistic event, the gateway call, and
//!   the confirming event through the store dispatch.
//! - Failures come back to the caller (a dialog); nothing here renders.

use crate::core::store::AppStore;
use crate::features::arena::state::{ArenaEvent, apply, snapshot_token};
use crate::services::api::ApiClient;
use crate::services::error::ApiError;
use arena_api_models::{
    BotId, BotOverview, ChartOverview, ChartRequest, CreateBotRequest, CreateLeaderboardRequest,
    LeaderboardId, PatchLeaderboardRequest, RenameBotRequest, SourceCodeResponse,
};
use yewdux::prelude::Dispatch;

fn fold(dispatch: &Dispatch<AppStore>, event: ArenaEvent) {
    dispatch.reduce_mut(|store| apply(&mut store.arena, event));
}

/// Record a bot selection.
pub(crate) fn select_bot(dispatch: &Dispatch<AppStore>, id: BotId) {
    fold(dispatch, ArenaEvent::BotSelected { id });
}

/// Fetch one snapshot outside the poll loop, e.g. on boot while auto
/// refresh is switched off.
pub(crate) fn refresh_status(client: std::rc::Rc<ApiClient>, dispatch: Dispatch<AppStore>) {
    yew::platform::spawn_local(async move {
        let issued_seq = snapshot_token(&dispatch.get().arena);
        match client.fetch_status().await {
            Ok(status) => fold(&dispatch, ArenaEvent::Snapshot { issued_seq, status }),
            Err(_) => fold(&dispatch, ArenaEvent::PollFailed),
        }
    });
}

/// Submit a new bot. On success the server record lands at the front of the
/// roster and becomes selected.
pub(crate) async fn create_bot(
    client: &ApiClient,
    dispatch: &Dispatch<AppStore>,
    payload: CreateBotRequest,
) -> Result<(), ApiError> {
    let bot: BotOverview = client.create_bot(&payload).await?;
    fold(dispatch, ArenaEvent::BotCreated { bot });
    Ok(())
}

/// Rename a bot; the local copy is patched only after the server confirms.
pub(crate) async fn rename_bot(
    client: &ApiClient,
    dispatch: &Dispatch<AppStore>,
    id: BotId,
    name: String,
) -> Result<(), ApiError> {
    client
        .rename_bot(id, &RenameBotRequest { name: name.clone() })
        .await?;
    fold(dispatch, ArenaEvent::BotRenamed { id, name });
    Ok(())
}

/// Delete a bot. The removal is applied before the call goes out; a failed
/// call does not restore the record, the next snapshot decides.
pub(crate) async fn delete_bot(
    client: &ApiClient,
    dispatch: &Dispatch<AppStore>,
    id: BotId,
) -> Result<(), ApiError> {
    fold(dispatch, ArenaEvent::BotDeleteStarted { id });
    let result = client.delete_bot(id).await;
    fold(dispatch, ArenaEvent::BotDeleteSettled { id });
    result
}

/// Create a leaderboard; the confirmed record is appended to the roster.
pub(crate) async fn create_leaderboard(
    client: &ApiClient,
    dispatch: &Dispatch<AppStore>,
    payload: CreateLeaderboardRequest,
) -> Result<(), ApiError> {
    let leaderboard = client.create_leaderboard(&payload).await?;
    fold(dispatch, ArenaEvent::LeaderboardCreated { leaderboard });
    Ok(())
}

/// Patch a leaderboard's name and filter. A filter change flips the board
/// to `computing` immediately; the fields themselves follow confirmation.
pub(crate) async fn patch_leaderboard(
    client: &ApiClient,
    dispatch: &Dispatch<AppStore>,
    id: LeaderboardId,
    payload: PatchLeaderboardRequest,
) -> Result<(), ApiError> {
    fold(
        dispatch,
        ArenaEvent::LeaderboardPatchStarted {
            id,
            filter: payload.filter.clone(),
        },
    );
    match client.patch_leaderboard(id, &payload).await {
        Ok(()) => {
            fold(
                dispatch,
                ArenaEvent::LeaderboardPatched {
                    id,
                    name: payload.name,
                    filter: payload.filter,
                },
            );
            Ok(())
        }
        Err(err) => {
            fold(dispatch, ArenaEvent::LeaderboardPatchFailed { id });
            Err(err)
        }
    }
}

/// Delete a leaderboard, optimistically.
pub(crate) async fn delete_leaderboard(
    client: &ApiClient,
    dispatch: &Dispatch<AppStore>,
    id: LeaderboardId,
) -> Result<(), ApiError> {
    fold(dispatch, ArenaEvent::LeaderboardDeleteStarted { id });
    let result = client.delete_leaderboard(id).await;
    fold(dispatch, ArenaEvent::LeaderboardDeleteSettled { id });
    result
}

/// Enable or disable matchmaking; the flag flips after confirmation.
pub(crate) async fn set_matchmaking(
    client: &ApiClient,
    dispatch: &Dispatch<AppStore>,
    enabled: bool,
) -> Result<(), ApiError> {
    client.set_matchmaking(enabled).await?;
    fold(dispatch, ArenaEvent::MatchmakingSet { enabled });
    Ok(())
}

/// Fetch a bot's source code for the viewer dialog. Read-only, no state
/// change.
pub(crate) async fn fetch_bot_source(
    client: &ApiClient,
    id: BotId,
) -> Result<SourceCodeResponse, ApiError> {
    client.fetch_bot_source(id).await
}

/// Fetch chart series for the chart dialog. Read-only, no state change.
pub(crate) async fn fetch_chart(
    client: &ApiClient,
    payload: ChartRequest,
) -> Result<ChartOverview, ApiError> {
    client.fetch_chart(&payload).await
}
