// src/models/pagamento.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Pagamento {
    pub id_pagamento: i64,
    pub id_aluno: String,
    pub data_pagamento: NaiveDate,
    pub valor_pago: f64,
    pub forma_pagamento: Option<String>,
    pub referencia: Option<String>,
    pub status: String, // 'Pendente' por omissão
}

#[derive(Debug, Deserialize)]
pub struct PagamentoPayload {
    pub id_aluno: Option<String>,
    pub data_pagamento: Option<NaiveDate>,
    pub valor_pago: Option<f64>,
    pub forma_pagamento: Option<String>,
    pub referencia: Option<String>,
    pub status: Option<String>,
}

/// Parâmetros de query reconhecidos em GET /pagamentos.
#[derive(Debug, Default, Deserialize)]
pub struct PagamentoFiltros {
    pub id_aluno: Option<String>,
    pub status: Option<String>,
    pub data_inicio: Option<String>,
    pub data_fim: Option<String>,
}
