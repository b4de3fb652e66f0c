use serde::Serialize;
use thiserror::Error;

/// Machine-readable outcome code carried by every [`ReviewError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    TeamExists,
    PrExists,
    PrMerged,
    NotAssigned,
    NoCandidate,
    NotFound,
    Internal,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::TeamExists => "TEAM_EXISTS",
            ErrorCode::PrExists => "PR_EXISTS",
            ErrorCode::PrMerged => "PR_MERGED",
            ErrorCode::NotAssigned => "NOT_ASSIGNED",
            ErrorCode::NoCandidate => "NO_CANDIDATE",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcomes of team, user and pull request operations.
///
/// Every variant except `Internal` is an expected, caller-recoverable result.
/// `Internal` wraps storage failures the engine does not interpret.
#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("team {0} already exists")]
    TeamExists(String),

    #[error("pull request {0} already exists")]
    PrExists(String),

    #[error("cannot reassign reviewer for merged pull request {0}")]
    PrMerged(String),

    #[error("user {reviewer_id} is not assigned as reviewer for pull request {pr_id}")]
    NotAssigned { pr_id: String, reviewer_id: String },

    #[error("no active replacement candidate in team {0}")]
    NoCandidate(String),

    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ReviewError {
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    pub fn not_assigned(pr_id: impl Into<String>, reviewer_id: impl Into<String>) -> Self {
        Self::NotAssigned {
            pr_id: pr_id.into(),
            reviewer_id: reviewer_id.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ReviewError::TeamExists(_) => ErrorCode::TeamExists,
            ReviewError::PrExists(_) => ErrorCode::PrExists,
            ReviewError::PrMerged(_) => ErrorCode::PrMerged,
            ReviewError::NotAssigned { .. } => ErrorCode::NotAssigned,
            ReviewError::NoCandidate(_) => ErrorCode::NoCandidate,
            ReviewError::NotFound { .. } => ErrorCode::NotFound,
            ReviewError::Internal(_) => ErrorCode::Internal,
        }
    }
}

impl From<sqlx::Error> for ReviewError {
    fn from(err: sqlx::Error) -> Self {
        Self::Internal(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_serialize_screaming_snake_case() {
        let json = serde_json::to_string(&ErrorCode::NoCandidate).unwrap();
        assert_eq!(json, "\"NO_CANDIDATE\"");

        for code in [
            ErrorCode::TeamExists,
            ErrorCode::PrExists,
            ErrorCode::PrMerged,
            ErrorCode::NotAssigned,
            ErrorCode::NoCandidate,
            ErrorCode::NotFound,
            ErrorCode::Internal,
        ] {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
        }
    }

    #[test]
    fn test_error_maps_to_code() {
        assert_eq!(
            ReviewError::TeamExists("backend".into()).code(),
            ErrorCode::TeamExists
        );
        assert_eq!(
            ReviewError::not_assigned("PR-1", "bob").code(),
            ErrorCode::NotAssigned
        );
        assert_eq!(
            ReviewError::not_found("pull request", "PR-9").code(),
            ErrorCode::NotFound
        );
        assert_eq!(
            ReviewError::from(anyhow::anyhow!("connection reset")).code(),
            ErrorCode::Internal
        );
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ReviewError::not_found("author", "alice").to_string(),
            "author not found: alice"
        );
        assert_eq!(
            ReviewError::PrMerged("PR-1".into()).to_string(),
            "cannot reassign reviewer for merged pull request PR-1"
        );
    }
}
