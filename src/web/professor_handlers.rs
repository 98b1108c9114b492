// src/web/professor_handlers.rs
use crate::{
    error::AppResult,
    models::professor::ProfessorPayload,
    services::professor_service,
    state::AppState,
    web::Json,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

// POST /professores
pub async fn criar_professor(
    State(state): State<AppState>,
    Json(dados): Json<ProfessorPayload>,
) -> AppResult<impl IntoResponse> {
    professor_service::criar_professor(&state.db_pool, &dados).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Professor criado com sucesso" })),
    ))
}

// GET /professores/{id_professor}
pub async fn buscar_professor(
    State(state): State<AppState>,
    Path(id_professor): Path<i64>,
) -> AppResult<impl IntoResponse> {
    let professor = professor_service::buscar_professor(&state.db_pool, id_professor).await?;
    Ok(Json(professor))
}

// GET /professores
pub async fn listar_professores(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let professores = professor_service::listar_professores(&state.db_pool).await?;
    Ok(Json(professores))
}

// PUT /professores/{id_professor}
pub async fn atualizar_professor(
    State(state): State<AppState>,
    Path(id_professor): Path<i64>,
    Json(dados): Json<ProfessorPayload>,
) -> AppResult<impl IntoResponse> {
    professor_service::atualizar_professor(&state.db_pool, id_professor, &dados).await?;
    Ok(Json(json!({ "message": "Professor atualizado com sucesso" })))
}

// DELETE /professores/{id_professor}
pub async fn apagar_professor(
    State(state): State<AppState>,
    Path(id_professor): Path<i64>,
) -> AppResult<impl IntoResponse> {
    professor_service::apagar_professor(&state.db_pool, id_professor).await?;
    Ok(Json(json!({ "message": "Professor deletado com sucesso" })))
}
