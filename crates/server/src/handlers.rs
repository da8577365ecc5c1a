use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::response::{IntoResponse, Response};

use hotentry::{ChannelMeta, DenyList};

use crate::error::AppResult;
use crate::state::AppState;

/// Relay the upstream hot-entry feed, minus denied entries, as RSS 2.0.
///
/// Request headers are logged for diagnostics only; nothing about the
/// request influences the output.
pub async fn relay_feed(State(state): State<AppState>, headers: HeaderMap) -> AppResult<Response> {
    tracing::debug!(?headers, "Relaying hot-entry feed");

    let body = state.upstream.fetch().await?;
    let deny = DenyList::from_env();
    let xml = hotentry::relay(&body, &deny, &ChannelMeta::default())?;

    Ok((
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        xml,
    )
        .into_response())
}
