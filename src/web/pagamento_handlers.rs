// src/web/pagamento_handlers.rs
use crate::{
    error::AppResult,
    models::pagamento::{PagamentoFiltros, PagamentoPayload},
    services::pagamento_service,
    state::AppState,
    web::Json,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

// POST /pagamentos
pub async fn criar_pagamento(
    State(state): State<AppState>,
    Json(dados): Json<PagamentoPayload>,
) -> AppResult<impl IntoResponse> {
    pagamento_service::criar_pagamento(&state.db_pool, &dados).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Pagamento criado com sucesso" })),
    ))
}

// GET /pagamentos/{id_pagamento}
pub async fn buscar_pagamento(
    State(state): State<AppState>,
    Path(id_pagamento): Path<i64>,
) -> AppResult<impl IntoResponse> {
    let pagamento = pagamento_service::buscar_pagamento(&state.db_pool, id_pagamento).await?;
    Ok(Json(pagamento))
}

// GET /pagamentos?id_aluno=&status=&data_inicio=&data_fim=
pub async fn listar_pagamentos(
    State(state): State<AppState>,
    Query(filtros): Query<PagamentoFiltros>,
) -> AppResult<impl IntoResponse> {
    let pagamentos = pagamento_service::listar_pagamentos(&state.db_pool, &filtros).await?;
    Ok(Json(pagamentos))
}

// PUT /pagamentos/{id_pagamento}
pub async fn atualizar_pagamento(
    State(state): State<AppState>,
    Path(id_pagamento): Path<i64>,
    Json(dados): Json<PagamentoPayload>,
) -> AppResult<impl IntoResponse> {
    pagamento_service::atualizar_pagamento(&state.db_pool, id_pagamento, &dados).await?;
    Ok(Json(json!({ "message": "Pagamento atualizado com sucesso" })))
}

// DELETE /pagamentos/{id_pagamento}
pub async fn apagar_pagamento(
    State(state): State<AppState>,
    Path(id_pagamento): Path<i64>,
) -> AppResult<impl IntoResponse> {
    pagamento_service::apagar_pagamento(&state.db_pool, id_pagamento).await?;
    Ok(Json(json!({ "message": "Pagamento deletado com sucesso" })))
}
