// src/web/presenca_handlers.rs
use crate::{
    error::AppResult,
    models::presenca::{PresencaFiltros, PresencaPayload},
    services::presenca_service,
    state::AppState,
    web::Json,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

// POST /presencas
pub async fn criar_presenca(
    State(state): State<AppState>,
    Json(dados): Json<PresencaPayload>,
) -> AppResult<impl IntoResponse> {
    presenca_service::criar_presenca(&state.db_pool, &dados).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Presença registrada com sucesso" })),
    ))
}

// GET /presencas/{id_presenca}
pub async fn buscar_presenca(
    State(state): State<AppState>,
    Path(id_presenca): Path<i64>,
) -> AppResult<impl IntoResponse> {
    let presenca = presenca_service::buscar_presenca(&state.db_pool, id_presenca).await?;
    Ok(Json(presenca))
}

// GET /presencas?id_aluno=&data_inicio=&data_fim=&presente=
pub async fn listar_presencas(
    State(state): State<AppState>,
    Query(filtros): Query<PresencaFiltros>,
) -> AppResult<impl IntoResponse> {
    let presencas = presenca_service::listar_presencas(&state.db_pool, &filtros).await?;
    Ok(Json(presencas))
}

// PUT /presencas/{id_presenca}
pub async fn atualizar_presenca(
    State(state): State<AppState>,
    Path(id_presenca): Path<i64>,
    Json(dados): Json<PresencaPayload>,
) -> AppResult<impl IntoResponse> {
    presenca_service::atualizar_presenca(&state.db_pool, id_presenca, &dados).await?;
    Ok(Json(json!({ "message": "Presença atualizada com sucesso" })))
}

// DELETE /presencas/{id_presenca}
pub async fn apagar_presenca(
    State(state): State<AppState>,
    Path(id_presenca): Path<i64>,
) -> AppResult<impl IntoResponse> {
    presenca_service::apagar_presenca(&state.db_pool, id_presenca).await?;
    Ok(Json(json!({ "message": "Presença deletada com sucesso" })))
}
