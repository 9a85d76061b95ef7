use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::ApiError,
    gate,
    identity::Identity,
    schema::{CreateTodoSchema, CreateUserSchema, UpdateTodoSchema},
    AppState,
};

// Handler for the health checker route
pub async fn health_checker_handler() -> impl IntoResponse {
    const MESSAGE: &str = "In-memory users and todos API with Rust and Axum";

    let json_response = serde_json::json!({
        "status": "success",
        "message": MESSAGE
    });

    Json(json_response)
}

// Handler for creating a new user
pub async fn create_user(
    State(data): State<Arc<AppState>>,
    Json(body): Json<CreateUserSchema>,
) -> Result<impl IntoResponse, ApiError> {
    let user = data.store.create_user(&body.name, &body.username).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

// Handler for getting a user by ID
pub async fn get_user(
    Path(id): Path<String>,
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let user = gate::find_user_by_id(&data.store, &id).await?;

    Ok(Json(user))
}

// Handler for upgrading a user to the pro plan
pub async fn upgrade_user(
    Path(id): Path<String>,
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let user = gate::find_user_by_id(&data.store, &id).await?;
    let user = data.store.upgrade_to_pro(user.id).await?;

    Ok(Json(user))
}

// Handler for getting all Todo items of the calling user
pub async fn get_todos(
    State(data): State<Arc<AppState>>,
    Identity(username): Identity,
) -> Result<impl IntoResponse, ApiError> {
    let user = gate::check_user_account(&data.store, &username).await?;

    Ok(Json(user.todos))
}

// Handler for creating a new Todo
pub async fn create_todo(
    State(data): State<Arc<AppState>>,
    Identity(username): Identity,
    Json(body): Json<CreateTodoSchema>,
) -> Result<impl IntoResponse, ApiError> {
    let user = gate::check_user_account(&data.store, &username).await?;
    gate::check_todo_quota(&user)?;

    let todo = data
        .store
        .create_todo(&user.username, &body.title, body.deadline)
        .await?;

    Ok((StatusCode::CREATED, Json(todo)))
}

// Handler for updating a Todo by ID
pub async fn update_todo(
    Path(id): Path<String>,
    State(data): State<Arc<AppState>>,
    Identity(username): Identity,
    Json(body): Json<UpdateTodoSchema>,
) -> Result<impl IntoResponse, ApiError> {
    let (user, todo) = gate::check_todo_exists(&data.store, &username, &id).await?;

    let todo = data
        .store
        .update_todo(&user.username, todo.id, &body.title, body.deadline)
        .await?;

    Ok(Json(todo))
}

// Handler for marking a Todo as done
pub async fn done_todo(
    Path(id): Path<String>,
    State(data): State<Arc<AppState>>,
    Identity(username): Identity,
) -> Result<impl IntoResponse, ApiError> {
    let (user, todo) = gate::check_todo_exists(&data.store, &username, &id).await?;

    let todo = data.store.mark_done(&user.username, todo.id).await?;

    Ok(Json(todo))
}

// Handler for deleting a Todo by ID. The account gate runs first and the
// todo gate re-resolves the user, matching the original middleware chain.
pub async fn delete_todo(
    Path(id): Path<String>,
    State(data): State<Arc<AppState>>,
    Identity(username): Identity,
) -> Result<impl IntoResponse, ApiError> {
    gate::check_user_account(&data.store, &username).await?;
    let (user, todo) = gate::check_todo_exists(&data.store, &username, &id).await?;

    data.store.delete_todo(&user.username, todo.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
