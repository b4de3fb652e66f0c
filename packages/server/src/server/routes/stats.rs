use axum::{extract::Extension, Json};

use crate::domains::stats::activities::get_stats;
use crate::domains::stats::StatsData;
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;

/// `GET /stats`
pub async fn stats_handler(
    Extension(state): Extension<AxumAppState>,
) -> Result<Json<StatsData>, ApiError> {
    let stats = get_stats(&state.server_deps).await?;
    Ok(Json(stats.into()))
}
