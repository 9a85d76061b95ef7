//! Request preconditions. Each gate either hands back the entities it
//! resolved or short-circuits with the [`ApiError`] the endpoint reports.
//! Gates are plain functions over the store so they compose in handlers
//! and test without an HTTP layer.

use uuid::Uuid;

use crate::error::ApiError;
use crate::model::{Todo, User};
use crate::store::{TodoStore, FREE_TIER_TODO_LIMIT};

/// Resolves the account named by the `username` header.
pub async fn check_user_account(store: &TodoStore, username: &str) -> Result<User, ApiError> {
    store
        .user_by_username(username)
        .await
        .ok_or(ApiError::UserNotFound)
}

/// Quota gate: free-tier users hold at most [`FREE_TIER_TODO_LIMIT`] todos,
/// pro users are unlimited. Checked at creation time only.
pub fn check_todo_quota(user: &User) -> Result<(), ApiError> {
    if user.pro || user.todos.len() < FREE_TIER_TODO_LIMIT {
        Ok(())
    } else {
        Err(ApiError::QuotaExceeded)
    }
}

/// Resolves a todo by id within the account named by the `username` header.
///
/// The checks run in a fixed order that decides which error wins: user
/// lookup first, then UUID format validation of the raw id, then the todo
/// lookup. A malformed id under a nonexistent username reports the missing
/// user, not the bad id.
pub async fn check_todo_exists(
    store: &TodoStore,
    username: &str,
    raw_id: &str,
) -> Result<(User, Todo), ApiError> {
    let user = store
        .user_by_username(username)
        .await
        .ok_or(ApiError::UserNotFound)?;

    let id = Uuid::parse_str(raw_id).map_err(|_| ApiError::InvalidId)?;

    let todo = user
        .todos
        .iter()
        .find(|todo| todo.id == id)
        .cloned()
        .ok_or(ApiError::TaskNotFound)?;

    Ok((user, todo))
}

/// Resolves a user by the raw id path parameter. No separate format
/// validation here (asymmetric with the todo gate on purpose): an id that
/// does not even parse matches no user and reports "User not found!".
pub async fn find_user_by_id(store: &TodoStore, raw_id: &str) -> Result<User, ApiError> {
    let id = Uuid::parse_str(raw_id).map_err(|_| ApiError::UserNotFound)?;

    store.user_by_id(id).await.ok_or(ApiError::UserNotFound)
}
