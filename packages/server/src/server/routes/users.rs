use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Extension, Query},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::common::UserId;
use crate::domains::pull_request::PullRequestShortData;
use crate::domains::user::activities::{get_user_reviews, set_user_active};
use crate::domains::user::UserData;
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct SetIsActiveRequest {
    pub user_id: UserId,
    pub is_active: bool,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: UserData,
}

#[derive(Debug, Deserialize)]
pub struct UserQuery {
    pub user_id: Option<UserId>,
}

#[derive(Debug, Serialize)]
pub struct UserReviewsResponse {
    pub user_id: UserId,
    pub pull_requests: Vec<PullRequestShortData>,
}

/// `POST /users/setIsActive`
pub async fn set_is_active_handler(
    Extension(state): Extension<AxumAppState>,
    payload: Result<Json<SetIsActiveRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let Json(body) = payload?;
    if body.user_id.is_blank() {
        return Err(ApiError::invalid("user_id is required"));
    }

    let user = set_user_active(&body.user_id, body.is_active, &state.server_deps).await?;
    Ok(Json(UserResponse { user: user.into() }))
}

/// `GET /users/getReview?user_id=`
pub async fn get_review_handler(
    Extension(state): Extension<AxumAppState>,
    query: Result<Query<UserQuery>, QueryRejection>,
) -> Result<Json<UserReviewsResponse>, ApiError> {
    let Query(query) = query?;
    let user_id = query
        .user_id
        .filter(|id| !id.is_blank())
        .ok_or_else(|| ApiError::invalid("user_id is required"))?;

    let pull_requests = get_user_reviews(&user_id, &state.server_deps).await?;

    Ok(Json(UserReviewsResponse {
        user_id,
        pull_requests: pull_requests.into_iter().map(Into::into).collect(),
    }))
}
