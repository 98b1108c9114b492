// src/models/presenca.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Registro de presença: no máximo um por (id_aluno, data_presenca).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Presenca {
    pub id_presenca: i64,
    pub id_aluno: String,
    pub data_presenca: NaiveDate,
    pub presente: bool,
}

#[derive(Debug, Deserialize)]
pub struct PresencaPayload {
    pub id_aluno: Option<String>,
    pub data_presenca: Option<NaiveDate>,
    pub presente: Option<bool>,
}

/// Parâmetros de query reconhecidos em GET /presencas.
/// Chaves desconhecidas são simplesmente ignoradas pelo serde.
#[derive(Debug, Default, Deserialize)]
pub struct PresencaFiltros {
    pub id_aluno: Option<String>,
    pub data_inicio: Option<String>,
    pub data_fim: Option<String>,
    pub presente: Option<String>,
}
