// src/web/aluno_handlers.rs
use crate::{
    error::AppResult,
    models::aluno::AlunoPayload,
    services::aluno_service,
    state::AppState,
    web::Json,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

// POST /alunos
pub async fn criar_aluno(
    State(state): State<AppState>,
    Json(dados): Json<AlunoPayload>,
) -> AppResult<impl IntoResponse> {
    aluno_service::criar_aluno(&state.db_pool, &dados).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Aluno criado com sucesso" })),
    ))
}

// GET /alunos/{aluno_id}
pub async fn buscar_aluno(
    State(state): State<AppState>,
    Path(aluno_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let aluno = aluno_service::buscar_aluno(&state.db_pool, &aluno_id).await?;
    Ok(Json(aluno))
}

// GET /alunos
pub async fn listar_alunos(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let alunos = aluno_service::listar_alunos(&state.db_pool).await?;
    Ok(Json(alunos))
}

// PUT /alunos/{aluno_id}
pub async fn atualizar_aluno(
    State(state): State<AppState>,
    Path(aluno_id): Path<String>,
    Json(dados): Json<AlunoPayload>,
) -> AppResult<impl IntoResponse> {
    aluno_service::atualizar_aluno(&state.db_pool, &aluno_id, &dados).await?;
    Ok(Json(json!({ "message": "Aluno atualizado com sucesso" })))
}

// DELETE /alunos/{aluno_id}
pub async fn apagar_aluno(
    State(state): State<AppState>,
    Path(aluno_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    aluno_service::apagar_aluno(&state.db_pool, &aluno_id).await?;
    Ok(Json(json!({ "message": "Aluno deletado com sucesso" })))
}
