//! Integration tests for team registration and lookup.

mod common;

use crate::common::{Fixture, TestHarness};
use reviewer_core::common::{ErrorCode, ReviewError};
use reviewer_core::domains::team::activities::{create_team, get_team, CreateTeamInput, TeamMemberInput};
use reviewer_core::domains::user::models::User;
use test_context::test_context;

#[test_context(TestHarness)]
#[tokio::test]
async fn create_team_returns_members_ordered_by_id(ctx: &TestHarness) {
    let fx = Fixture::new();
    let deps = ctx.deps();

    let team = fx
        .seed_team(&deps, "backend", &[("dave", true), ("alice", true), ("carol", false)])
        .await
        .unwrap();

    assert_eq!(team.team.team_name, fx.team("backend"));
    let ids: Vec<_> = team.members.iter().map(|m| m.user_id.clone()).collect();
    assert_eq!(ids, vec![fx.user("alice"), fx.user("carol"), fx.user("dave")]);
    assert!(!team.members[1].is_active);
    assert!(team.members.iter().all(|m| m.team_name == fx.team("backend")));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn duplicate_team_fails_without_touching_members(ctx: &TestHarness) {
    let fx = Fixture::new();
    let deps = ctx.deps();

    fx.seed_team(&deps, "backend", &[("alice", true)]).await.unwrap();

    let input = CreateTeamInput {
        team_name: fx.team("backend"),
        members: vec![TeamMemberInput {
            user_id: fx.user("zed"),
            username: "zed".into(),
            is_active: true,
        }],
    };
    let err = create_team(input, &deps).await.unwrap_err();

    assert!(matches!(err, ReviewError::TeamExists(_)));
    assert_eq!(err.code(), ErrorCode::TeamExists);

    // The rolled back transaction left no trace of the new member
    let zed = User::find_by_id(&fx.user("zed"), &ctx.db_pool).await.unwrap();
    assert!(zed.is_none());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn existing_user_is_moved_into_new_team(ctx: &TestHarness) {
    let fx = Fixture::new();
    let deps = ctx.deps();

    fx.seed_team(&deps, "backend", &[("alice", true), ("bob", true)])
        .await
        .unwrap();

    let input = CreateTeamInput {
        team_name: fx.team("frontend"),
        members: vec![TeamMemberInput {
            user_id: fx.user("alice"),
            username: "Alice Renamed".into(),
            is_active: false,
        }],
    };
    let frontend = create_team(input, &deps).await.unwrap();

    assert_eq!(frontend.members.len(), 1);
    assert_eq!(frontend.members[0].username, "Alice Renamed");
    assert!(!frontend.members[0].is_active);

    let backend = get_team(&fx.team("backend"), &deps).await.unwrap();
    let ids: Vec<_> = backend.members.iter().map(|m| m.user_id.clone()).collect();
    assert_eq!(ids, vec![fx.user("bob")]);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn get_team_includes_inactive_members(ctx: &TestHarness) {
    let fx = Fixture::new();
    let deps = ctx.deps();

    fx.seed_team(&deps, "ops", &[("amy", false), ("ben", true)])
        .await
        .unwrap();

    let team = get_team(&fx.team("ops"), &deps).await.unwrap();
    assert_eq!(team.members.len(), 2);
    assert!(!team.members[0].is_active);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn get_unknown_team_is_not_found(ctx: &TestHarness) {
    let fx = Fixture::new();

    let err = get_team(&fx.team("missing"), &ctx.deps()).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn team_without_members_can_be_created(ctx: &TestHarness) {
    let fx = Fixture::new();

    let team = fx.seed_team(&ctx.deps(), "empty", &[]).await.unwrap();
    assert!(team.members.is_empty());
}
