// src/models/professor.rs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Professor {
    pub id_professor: i64, // SQLite INTEGER -> i64
    pub nome_completo: String,
    pub email: Option<String>,
    pub telefone: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProfessorPayload {
    pub nome_completo: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
}
