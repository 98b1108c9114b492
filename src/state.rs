// src/state.rs
use sqlx::SqlitePool;

// Estado partilhado da aplicação. Cada requisição é independente: o pool é o
// único recurso partilhado, e a própria pool gere o empréstimo das conexões.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
}

// Permite extrair o pool da DB diretamente
impl axum::extract::FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> SqlitePool {
        state.db_pool.clone()
    }
}
