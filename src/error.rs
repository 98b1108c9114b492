// src/error.rs
use axum::{extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // Pool esgotada/fechada ou falha de IO ao falar com o SQLite.
    #[error("Não foi possível conectar ao banco de dados")]
    ConexaoIndisponivel,

    // Campo obrigatório ausente ou corpo malformado.
    #[error("{0}")]
    Validacao(String),

    #[error("{0}")]
    NaoEncontrado(String),

    // Remoção bloqueada por dependentes, login duplicado, presença duplicada.
    #[error("{0}")]
    Conflito(String),

    // Mensagem única para login inexistente e senha errada.
    #[error("Usuário ou senha inválidos")]
    CredenciaisInvalidas,

    #[error("Erro ao processar credenciais")]
    Senha,

    // Qualquer outro erro do banco; a mensagem do driver vai na resposta.
    #[error(transparent)]
    Sqlx(sqlx::Error),
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                AppError::ConexaoIndisponivel
            }
            outro => AppError::Sqlx(outro),
        }
    }
}

// Corpos JSON rejeitados pelo extrator também respondem {"error": ...}.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Corpo JSON rejeitado: {}", rejection.body_text());
        AppError::Validacao("Dados inválidos".to_string())
    }
}

// Como converter AppError numa resposta HTTP
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::ConexaoIndisponivel | AppError::Senha => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validacao(_) | AppError::Conflito(_) | AppError::Sqlx(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NaoEncontrado(_) => StatusCode::NOT_FOUND,
            AppError::CredenciaisInvalidas => StatusCode::UNAUTHORIZED,
        };

        // Loga o detalhe no servidor; o cliente recebe só a mensagem.
        if status.is_server_error() {
            tracing::error!("Erro processado: {:?}", self);
        } else {
            tracing::warn!("Requisição rejeitada: {}", self);
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

// Tipo Result padrão para a aplicação
pub type AppResult<T = ()> = Result<T, AppError>;
