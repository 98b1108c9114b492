// src/web/atividade_handlers.rs
use crate::{
    error::AppResult,
    models::atividade::AtividadePayload,
    services::atividade_service,
    state::AppState,
    web::Json,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

// POST /atividades (devolve o id gerado junto com a mensagem)
pub async fn criar_atividade(
    State(state): State<AppState>,
    Json(dados): Json<AtividadePayload>,
) -> AppResult<impl IntoResponse> {
    let id_atividade = atividade_service::criar_atividade(&state.db_pool, &dados).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Atividade criada com sucesso", "id_atividade": id_atividade })),
    ))
}

// GET /atividades/{id_atividade}
pub async fn buscar_atividade(
    State(state): State<AppState>,
    Path(id_atividade): Path<i64>,
) -> AppResult<impl IntoResponse> {
    let atividade = atividade_service::buscar_atividade(&state.db_pool, id_atividade).await?;
    Ok(Json(atividade))
}

// GET /atividades
pub async fn listar_atividades(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let atividades = atividade_service::listar_atividades(&state.db_pool).await?;
    Ok(Json(atividades))
}

// PUT /atividades/{id_atividade}
pub async fn atualizar_atividade(
    State(state): State<AppState>,
    Path(id_atividade): Path<i64>,
    Json(dados): Json<AtividadePayload>,
) -> AppResult<impl IntoResponse> {
    atividade_service::atualizar_atividade(&state.db_pool, id_atividade, &dados).await?;
    Ok(Json(json!({ "message": "Atividade atualizada com sucesso" })))
}

// DELETE /atividades/{id_atividade}
pub async fn apagar_atividade(
    State(state): State<AppState>,
    Path(id_atividade): Path<i64>,
) -> AppResult<impl IntoResponse> {
    atividade_service::apagar_atividade(&state.db_pool, id_atividade).await?;
    Ok(Json(json!({ "message": "Atividade deletada com sucesso" })))
}
