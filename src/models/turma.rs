// src/models/turma.rs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Turma com o nome do professor resolvido via LEFT JOIN
/// (null quando não há professor atribuído).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Turma {
    pub id_turma: i64,
    pub nome_turma: String,
    pub id_professor: Option<i64>,
    pub horario: Option<String>,
    pub nome_professor: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TurmaPayload {
    pub nome_turma: Option<String>,
    pub id_professor: Option<i64>,
    pub horario: Option<String>,
}
