use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Extension, Query},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::common::TeamName;
use crate::domains::team::activities::{create_team, get_team};
use crate::domains::team::TeamData;
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;

#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub team: TeamData,
}

#[derive(Debug, Deserialize)]
pub struct TeamQuery {
    pub team_name: Option<TeamName>,
}

/// `POST /team/add`
pub async fn add_team_handler(
    Extension(state): Extension<AxumAppState>,
    payload: Result<Json<TeamData>, JsonRejection>,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    let Json(body) = payload?;
    if body.team_name.is_blank() {
        return Err(ApiError::invalid("team_name is required"));
    }
    if body.members.iter().any(|m| m.user_id.is_blank()) {
        return Err(ApiError::invalid("member user_id is required"));
    }

    let team = create_team(body.into(), &state.server_deps).await?;

    Ok((
        StatusCode::CREATED,
        Json(TeamResponse { team: team.into() }),
    ))
}

/// `GET /team/get?team_name=`
pub async fn get_team_handler(
    Extension(state): Extension<AxumAppState>,
    query: Result<Query<TeamQuery>, QueryRejection>,
) -> Result<Json<TeamData>, ApiError> {
    let Query(query) = query?;
    let team_name = query
        .team_name
        .filter(|name| !name.is_blank())
        .ok_or_else(|| ApiError::invalid("team_name is required"))?;

    let team = get_team(&team_name, &state.server_deps).await?;
    Ok(Json(team.into()))
}
