// src/models/usuario.rs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Linha completa de `usuarios`, incluindo o hash bcrypt.
/// Nunca derivamos Serialize aqui: o hash não sai em nenhuma resposta.
#[derive(Debug, Clone, FromRow)]
pub struct Usuario {
    pub id_usuario: i64,
    pub login: String,
    pub senha: String, // hash bcrypt, nunca o texto em claro
    pub nivel_acesso: String,
    pub id_professor: Option<i64>,
}

/// Projeção pública, sem a coluna `senha`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UsuarioPublico {
    pub id_usuario: i64,
    pub login: String,
    pub nivel_acesso: String,
    pub id_professor: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct UsuarioPayload {
    pub login: Option<String>,
    pub senha: Option<String>,
    pub nivel_acesso: Option<String>,
    pub id_professor: Option<i64>,
}

/// Corpo de POST /login.
#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    pub login: Option<String>,
    pub senha: Option<String>,
}
