// src/models/atividade.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// NaiveDate serializa como "YYYY-MM-DD", o formato de todas as datas da API.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Atividade {
    pub id_atividade: i64,
    pub descricao: String,
    pub data_realizacao: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct AtividadePayload {
    pub descricao: Option<String>,
    pub data_realizacao: Option<NaiveDate>,
}
