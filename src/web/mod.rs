// src/web/mod.rs
pub mod aluno_handlers;
pub mod atividade_handlers;
pub mod auth_handlers;
pub mod pagamento_handlers;
pub mod presenca_handlers;
pub mod professor_handlers;
pub mod routes;
pub mod turma_handlers;
pub mod usuario_handlers;

use crate::error::AppError;
use axum::{extract::FromRequest, response::IntoResponse};

/// `axum::Json` com a rejeição convertida em `AppError`, para que corpos
/// malformados também respondam no formato {"error": ...}.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Json<T>(pub T);

impl<T: serde::Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> axum::response::Response {
        axum::Json(self.0).into_response()
    }
}
