// src/web/usuario_handlers.rs
use crate::{
    error::AppResult,
    models::usuario::UsuarioPayload,
    services::usuario_service,
    state::AppState,
    web::Json,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

// POST /usuarios
pub async fn criar_usuario(
    State(state): State<AppState>,
    Json(dados): Json<UsuarioPayload>,
) -> AppResult<impl IntoResponse> {
    usuario_service::criar_usuario(&state.db_pool, &dados).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Usuário criado com sucesso" })),
    ))
}

// GET /usuarios/{id_usuario} (sem a coluna senha)
pub async fn buscar_usuario(
    State(state): State<AppState>,
    Path(id_usuario): Path<i64>,
) -> AppResult<impl IntoResponse> {
    let usuario = usuario_service::buscar_usuario(&state.db_pool, id_usuario).await?;
    Ok(Json(usuario))
}

// GET /usuarios
pub async fn listar_usuarios(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let usuarios = usuario_service::listar_usuarios(&state.db_pool).await?;
    Ok(Json(usuarios))
}

// PUT /usuarios/{id_usuario}
pub async fn atualizar_usuario(
    State(state): State<AppState>,
    Path(id_usuario): Path<i64>,
    Json(dados): Json<UsuarioPayload>,
) -> AppResult<impl IntoResponse> {
    usuario_service::atualizar_usuario(&state.db_pool, id_usuario, &dados).await?;
    Ok(Json(json!({ "message": "Usuário atualizado com sucesso" })))
}

// DELETE /usuarios/{id_usuario}
pub async fn apagar_usuario(
    State(state): State<AppState>,
    Path(id_usuario): Path<i64>,
) -> AppResult<impl IntoResponse> {
    usuario_service::apagar_usuario(&state.db_pool, id_usuario).await?;
    Ok(Json(json!({ "message": "Usuário deletado com sucesso" })))
}
