use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Extension, Query},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::common::{PullRequestId, UserId};
use crate::domains::pull_request::activities::{
    create_pull_request, get_pull_request_reviewers, merge_pull_request, reassign_reviewer,
    CreatePullRequestInput, ReassignReviewerInput,
};
use crate::domains::pull_request::PullRequestData;
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct CreatePullRequestRequest {
    pub pull_request_id: PullRequestId,
    pub pull_request_name: String,
    pub author_id: UserId,
}

#[derive(Debug, Deserialize)]
pub struct MergePullRequestRequest {
    pub pull_request_id: PullRequestId,
}

#[derive(Debug, Deserialize)]
pub struct ReassignRequest {
    pub pull_request_id: PullRequestId,
    pub old_reviewer_id: UserId,
}

#[derive(Debug, Deserialize)]
pub struct PullRequestQuery {
    pub pull_request_id: Option<PullRequestId>,
}

#[derive(Debug, Serialize)]
pub struct PullRequestResponse {
    pub pr: PullRequestData,
}

#[derive(Debug, Serialize)]
pub struct ReassignResponse {
    pub pr: PullRequestData,
    pub replaced_by: UserId,
}

#[derive(Debug, Serialize)]
pub struct ReviewersResponse {
    pub pull_request_id: PullRequestId,
    pub reviewers: Vec<UserId>,
}

/// `POST /pullRequest/create`
pub async fn create_pull_request_handler(
    Extension(state): Extension<AxumAppState>,
    payload: Result<Json<CreatePullRequestRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PullRequestResponse>), ApiError> {
    let Json(body) = payload?;
    if body.pull_request_id.is_blank() || body.author_id.is_blank() {
        return Err(ApiError::invalid("pull_request_id and author_id are required"));
    }

    let input = CreatePullRequestInput {
        pull_request_id: body.pull_request_id,
        pull_request_name: body.pull_request_name,
        author_id: body.author_id,
    };
    let created = create_pull_request(input, &state.server_deps).await?;

    Ok((
        StatusCode::CREATED,
        Json(PullRequestResponse { pr: created.into() }),
    ))
}

/// `POST /pullRequest/merge`
pub async fn merge_pull_request_handler(
    Extension(state): Extension<AxumAppState>,
    payload: Result<Json<MergePullRequestRequest>, JsonRejection>,
) -> Result<Json<PullRequestResponse>, ApiError> {
    let Json(body) = payload?;
    if body.pull_request_id.is_blank() {
        return Err(ApiError::invalid("pull_request_id is required"));
    }

    let merged = merge_pull_request(&body.pull_request_id, &state.server_deps).await?;
    Ok(Json(PullRequestResponse { pr: merged.into() }))
}

/// `POST /pullRequest/reassign`
pub async fn reassign_handler(
    Extension(state): Extension<AxumAppState>,
    payload: Result<Json<ReassignRequest>, JsonRejection>,
) -> Result<Json<ReassignResponse>, ApiError> {
    let Json(body) = payload?;
    if body.pull_request_id.is_blank() || body.old_reviewer_id.is_blank() {
        return Err(ApiError::invalid(
            "pull_request_id and old_reviewer_id are required",
        ));
    }

    let input = ReassignReviewerInput {
        pull_request_id: body.pull_request_id,
        old_reviewer_id: body.old_reviewer_id,
    };
    let reassigned = reassign_reviewer(input, &state.server_deps).await?;

    Ok(Json(ReassignResponse {
        pr: reassigned.pull_request.into(),
        replaced_by: reassigned.replaced_by,
    }))
}

/// `GET /pullRequest/reviewers?pull_request_id=`
pub async fn reviewers_handler(
    Extension(state): Extension<AxumAppState>,
    query: Result<Query<PullRequestQuery>, QueryRejection>,
) -> Result<Json<ReviewersResponse>, ApiError> {
    let Query(query) = query?;
    let pull_request_id = query
        .pull_request_id
        .filter(|id| !id.is_blank())
        .ok_or_else(|| ApiError::invalid("pull_request_id is required"))?;

    let reviewers = get_pull_request_reviewers(&pull_request_id, &state.server_deps).await?;

    Ok(Json(ReviewersResponse {
        pull_request_id,
        reviewers,
    }))
}
