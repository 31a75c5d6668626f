//! HTTP client for the arena REST API.
//!
//! # Design
//! - One method per server action, strongly typed both ways.
//! - No retries here; the poller owns retry cadence, dialogs own surfacing.

use crate::services::error::{ApiError, classify};
use arena_api_models::{
    BotId, BotOverview, ChartOverview, ChartRequest, CreateBotRequest, CreateLeaderboardRequest,
    ErrorBody, LeaderboardId, LeaderboardOverview, PatchLeaderboardRequest, RenameBotRequest,
    SetMatchmakingRequest, SourceCodeResponse, StatusResponse,
};
use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Client for the `/api` surface. Cheap to clone; holds no connection state.
#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a client. An empty `base_url` targets the serving origin.
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{path}", self.base_url.trim_end_matches('/'))
    }

    /// Fetch the full status snapshot.
    pub(crate) async fn fetch_status(&self) -> Result<StatusResponse, ApiError> {
        let response = send(Request::get(&self.url("/status"))).await?;
        decode(response).await
    }

    /// Submit a new bot; the server assigns the id.
    pub(crate) async fn create_bot(
        &self,
        payload: &CreateBotRequest,
    ) -> Result<BotOverview, ApiError> {
        let response = send_json(Request::post(&self.url("/bots")), payload).await?;
        decode(response).await
    }

    /// Rename an existing bot.
    pub(crate) async fn rename_bot(
        &self,
        id: BotId,
        payload: &RenameBotRequest,
    ) -> Result<(), ApiError> {
        let response = send_json(Request::patch(&self.url(&format!("/bots/{id}"))), payload).await?;
        expect_empty(response).await
    }

    /// Delete a bot.
    pub(crate) async fn delete_bot(&self, id: BotId) -> Result<(), ApiError> {
        let response = send(Request::delete(&self.url(&format!("/bots/{id}")))).await?;
        expect_empty(response).await
    }

    /// Fetch a bot's submitted source code.
    pub(crate) async fn fetch_bot_source(
        &self,
        id: BotId,
    ) -> Result<SourceCodeResponse, ApiError> {
        let response = send(Request::get(&self.url(&format!("/bots/{id}/source")))).await?;
        decode(response).await
    }

    /// Create a leaderboard; the server returns the full overview.
    pub(crate) async fn create_leaderboard(
        &self,
        payload: &CreateLeaderboardRequest,
    ) -> Result<LeaderboardOverview, ApiError> {
        let response = send_json(Request::post(&self.url("/leaderboards")), payload).await?;
        decode(response).await
    }

    /// Update a leaderboard's name and filter.
    pub(crate) async fn patch_leaderboard(
        &self,
        id: LeaderboardId,
        payload: &PatchLeaderboardRequest,
    ) -> Result<(), ApiError> {
        let response = send_json(
            Request::patch(&self.url(&format!("/leaderboards/{id}"))),
            payload,
        )
        .await?;
        expect_empty(response).await
    }

    /// Delete a leaderboard.
    pub(crate) async fn delete_leaderboard(&self, id: LeaderboardId) -> Result<(), ApiError> {
        let response = send(Request::delete(&self.url(&format!("/leaderboards/{id}")))).await?;
        expect_empty(response).await
    }

    /// Enable or disable server-side matchmaking.
    pub(crate) async fn set_matchmaking(&self, enabled: bool) -> Result<(), ApiError> {
        let response = send_json(
            Request::put(&self.url("/matchmaking")),
            &SetMatchmakingRequest { enabled },
        )
        .await?;
        expect_empty(response).await
    }

    /// Request per-turn aggregates of a match attribute.
    pub(crate) async fn fetch_chart(
        &self,
        payload: &ChartRequest,
    ) -> Result<ChartOverview, ApiError> {
        let response = send_json(Request::post(&self.url("/chart")), payload).await?;
        decode(response).await
    }
}

async fn send(request: Request) -> Result<Response, ApiError> {
    request
        .send()
        .await
        .map_err(|err| ApiError::NetworkFailure(err.to_string()))
}

async fn send_json<T: Serialize>(request: Request, payload: &T) -> Result<Response, ApiError> {
    request
        .json(payload)
        .map_err(|err| ApiError::NetworkFailure(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::NetworkFailure(err.to_string()))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(classify_response(response).await);
    }
    // A 2xx body that fails to decode gives us nothing usable to render.
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::NetworkFailure(err.to_string()))
}

async fn expect_empty(response: Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(classify_response(response).await)
    }
}

async fn classify_response(response: Response) -> ApiError {
    let status = response.status();
    let body = response.json::<ErrorBody>().await.ok();
    classify(status, body.as_ref())
}
