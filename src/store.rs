use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::ApiError;
use crate::model::{Todo, User};

/// How many todos a free-tier user may hold. Pro users are unlimited.
pub const FREE_TIER_TODO_LIMIT: usize = 10;

/// In-memory resource store. Users are kept in insertion order; each user
/// owns its todo list. State lives for the lifetime of the process only.
///
/// Every method takes the lock exactly once, so a single operation is atomic,
/// but a gate check followed by a mutation are separate acquisitions. Nothing
/// stronger than the single-threaded reference behavior is promised across
/// that sequence.
pub struct TodoStore {
    users: RwLock<Vec<User>>,
}

impl TodoStore {
    pub fn new() -> Self {
        TodoStore {
            users: RwLock::new(Vec::new()),
        }
    }

    /// Creates a user with a fresh id, `pro = false` and an empty todo list.
    /// Usernames are unique across the store; this is the only place the
    /// uniqueness is enforced.
    pub async fn create_user(&self, name: &str, username: &str) -> Result<User, ApiError> {
        let mut users = self.users.write().await;

        if users.iter().any(|user| user.username == username) {
            return Err(ApiError::UsernameTaken);
        }

        let user = User::new(name.to_owned(), username.to_owned());
        users.push(user.clone());

        tracing::info!(user_id = %user.id, username, "user created");

        Ok(user)
    }

    /// Pure lookup by id; no side effects.
    pub async fn user_by_id(&self, id: Uuid) -> Option<User> {
        let users = self.users.read().await;
        users.iter().find(|user| user.id == id).cloned()
    }

    /// Pure lookup by username; no side effects.
    pub async fn user_by_username(&self, username: &str) -> Option<User> {
        let users = self.users.read().await;
        users.iter().find(|user| user.username == username).cloned()
    }

    /// Flips `pro` from false to true. Upgrading twice is a conflict.
    pub async fn upgrade_to_pro(&self, id: Uuid) -> Result<User, ApiError> {
        let mut users = self.users.write().await;
        let user = users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or(ApiError::UserNotFound)?;

        if user.pro {
            return Err(ApiError::AlreadyPro);
        }

        user.pro = true;

        tracing::info!(user_id = %user.id, "user upgraded to pro");

        Ok(user.clone())
    }

    /// Appends a new todo to the user's list. The quota gate must have
    /// passed already; this method does not re-check it.
    pub async fn create_todo(
        &self,
        username: &str,
        title: &str,
        deadline: DateTime<Utc>,
    ) -> Result<Todo, ApiError> {
        let mut users = self.users.write().await;
        let user = users
            .iter_mut()
            .find(|user| user.username == username)
            .ok_or(ApiError::UserNotFound)?;

        let todo = Todo::new(title.to_owned(), deadline);
        user.todos.push(todo.clone());

        tracing::info!(user_id = %user.id, todo_id = %todo.id, "todo created");

        Ok(todo)
    }

    /// Rewrites `title` and `deadline` of an existing todo; `id`, `done` and
    /// `created_at` are untouched. The todo-existence gate guarantees the
    /// lookup succeeds, so the not-found arm here is unreachable in practice.
    pub async fn update_todo(
        &self,
        username: &str,
        todo_id: Uuid,
        title: &str,
        deadline: DateTime<Utc>,
    ) -> Result<Todo, ApiError> {
        let mut users = self.users.write().await;
        let user = users
            .iter_mut()
            .find(|user| user.username == username)
            .ok_or(ApiError::UserNotFound)?;
        let todo = user
            .todos
            .iter_mut()
            .find(|todo| todo.id == todo_id)
            .ok_or(ApiError::TaskNotFound)?;

        todo.title = title.to_owned();
        todo.deadline = deadline;

        Ok(todo.clone())
    }

    /// Sets `done = true`. Marking an already-done todo is not an error.
    pub async fn mark_done(&self, username: &str, todo_id: Uuid) -> Result<Todo, ApiError> {
        let mut users = self.users.write().await;
        let user = users
            .iter_mut()
            .find(|user| user.username == username)
            .ok_or(ApiError::UserNotFound)?;
        let todo = user
            .todos
            .iter_mut()
            .find(|todo| todo.id == todo_id)
            .ok_or(ApiError::TaskNotFound)?;

        todo.done = true;

        Ok(todo.clone())
    }

    /// Removes exactly one todo from the user's list. The presence re-check
    /// mirrors the original delete handler: the gate already resolved the
    /// todo, but the list is inspected again at removal time.
    pub async fn delete_todo(&self, username: &str, todo_id: Uuid) -> Result<(), ApiError> {
        let mut users = self.users.write().await;
        let user = users
            .iter_mut()
            .find(|user| user.username == username)
            .ok_or(ApiError::UserNotFound)?;

        let index = user
            .todos
            .iter()
            .position(|todo| todo.id == todo_id)
            .ok_or(ApiError::TaskNotFound)?;
        user.todos.remove(index);

        tracing::info!(user_id = %user.id, %todo_id, "todo deleted");

        Ok(())
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}
