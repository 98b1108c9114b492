// src/web/turma_handlers.rs
use crate::{
    error::AppResult,
    models::turma::TurmaPayload,
    services::turma_service,
    state::AppState,
    web::Json,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

// POST /turmas (devolve o id gerado junto com a mensagem)
pub async fn criar_turma(
    State(state): State<AppState>,
    Json(dados): Json<TurmaPayload>,
) -> AppResult<impl IntoResponse> {
    let id_turma = turma_service::criar_turma(&state.db_pool, &dados).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Turma criada com sucesso", "id_turma": id_turma })),
    ))
}

// GET /turmas/{id_turma}
pub async fn buscar_turma(
    State(state): State<AppState>,
    Path(id_turma): Path<i64>,
) -> AppResult<impl IntoResponse> {
    let turma = turma_service::buscar_turma(&state.db_pool, id_turma).await?;
    Ok(Json(turma))
}

// GET /turmas
pub async fn listar_turmas(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let turmas = turma_service::listar_turmas(&state.db_pool).await?;
    Ok(Json(turmas))
}

// PUT /turmas/{id_turma}
pub async fn atualizar_turma(
    State(state): State<AppState>,
    Path(id_turma): Path<i64>,
    Json(dados): Json<TurmaPayload>,
) -> AppResult<impl IntoResponse> {
    turma_service::atualizar_turma(&state.db_pool, id_turma, &dados).await?;
    Ok(Json(json!({ "message": "Turma atualizada com sucesso" })))
}

// DELETE /turmas/{id_turma}
pub async fn apagar_turma(
    State(state): State<AppState>,
    Path(id_turma): Path<i64>,
) -> AppResult<impl IntoResponse> {
    turma_service::apagar_turma(&state.db_pool, id_turma).await?;
    Ok(Json(json!({ "message": "Turma deletada com sucesso" })))
}
