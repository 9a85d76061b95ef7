use chrono::{DateTime, Utc};

// Struct representing the request body for creating a new user
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct CreateUserSchema {
    pub name: String,
    pub username: String,
}

// Struct representing the request body for creating a new Todo
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct CreateTodoSchema {
    pub title: String,
    pub deadline: DateTime<Utc>,
}

// Struct representing the request body for updating a Todo
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct UpdateTodoSchema {
    pub title: String,
    pub deadline: DateTime<Utc>,
}
