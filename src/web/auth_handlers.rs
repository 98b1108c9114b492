// src/web/auth_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::usuario::LoginPayload,
    services::usuario_service,
    state::AppState,
    web::Json,
};
use axum::{extract::State, response::IntoResponse};
use serde_json::json;

// POST /login (autenticação sem estado: nenhuma sessão é criada)
pub async fn handle_login(
    State(state): State<AppState>,
    Json(dados): Json<LoginPayload>,
) -> AppResult<impl IntoResponse> {
    let (login, senha) = match (&dados.login, &dados.senha) {
        (Some(login), Some(senha)) => (login, senha),
        _ => return Err(AppError::Validacao("Informe login e senha".to_string())),
    };

    tracing::info!("Tentativa de login para: {}", login);
    let usuario = usuario_service::autenticar(&state.db_pool, login, senha).await?;

    Ok(Json(json!({
        "id_usuario": usuario.id_usuario,
        "login": usuario.login,
        "nivel_acesso": usuario.nivel_acesso,
        "message": "Login bem-sucedido"
    })))
}
