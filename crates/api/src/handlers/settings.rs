//! Handlers for the settings records.
//!
//! One generic pair of handlers serves every record; the route picks the
//! record type.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use summit_db::models::setting::{
    HeaderSettings, LandingPageSettings, SettingsRecord, SummitHomeContent, ViewSettings,
    VotingSettings,
};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::state::AppState;

/// GET /api/{record}
pub async fn get_record<T: SettingsRecord + 'static>(
    State(state): State<AppState>,
) -> AppResult<Json<T>> {
    Ok(Json(state.settings.get::<T>().await))
}

/// PUT /api/{record}
///
/// Partial update; omitted keys keep their values.
pub async fn update_record<T: SettingsRecord + 'static>(
    State(state): State<AppState>,
    AppJson(patch): AppJson<Value>,
) -> AppResult<Json<T>> {
    Ok(Json(state.settings.update::<T>(&patch).await?))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllSettings {
    pub voting: VotingSettings,
    pub header: HeaderSettings,
    pub view: ViewSettings,
    pub landing_page: LandingPageSettings,
    pub home_content: SummitHomeContent,
}

/// POST /api/settings/refresh
///
/// Reload the cache from the store and return what is now in effect.
pub async fn refresh(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    state.settings.refresh().await?;
    Ok(Json(AllSettings {
        voting: state.settings.get().await,
        header: state.settings.get().await,
        view: state.settings.get().await,
        landing_page: state.settings.get().await,
        home_content: state.settings.get().await,
    }))
}
