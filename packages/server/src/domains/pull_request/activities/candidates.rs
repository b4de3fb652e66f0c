//! Reviewer candidate selection

use anyhow::Result;
use sqlx::PgExecutor;

use crate::common::{TeamName, UserId};
use crate::domains::user::models::User;
use crate::kernel::BaseRandomSource;

/// Reviewers assigned when a pull request is opened, at most.
pub const MAX_REVIEWERS: usize = 2;

/// Active members of `team_name` that are not in `excluded`, ordered by user id.
pub async fn select_candidates<'e, E>(
    team_name: &TeamName,
    excluded: &[UserId],
    executor: E,
) -> Result<Vec<User>>
where
    E: PgExecutor<'e>,
{
    User::find_active_in_team_except(team_name, excluded, executor).await
}

/// Pick up to `count` distinct candidates uniformly at random.
///
/// Returns every candidate (in random order) when there are fewer than `count`.
pub fn pick_random<T: Clone>(random: &dyn BaseRandomSource, candidates: &[T], count: usize) -> Vec<T> {
    let amount = count.min(candidates.len());
    if amount == 0 {
        return Vec::new();
    }

    random
        .sample_indices(candidates.len(), amount)
        .into_iter()
        .filter_map(|index| candidates.get(index).cloned())
        .collect()
}
