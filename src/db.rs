// src/db.rs
use crate::error::AppResult;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

pub async fn create_db_pool() -> AppResult<SqlitePool> {
    dotenvy::dotenv().ok(); // Carrega .env
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://escola.db".to_string());

    tracing::info!("Ligando à base de dados: {}", database_url);

    // Opções de conexão (criar se não existir, timeout)
    let options = SqliteConnectOptions::from_str(&database_url)?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(5));

    // Cria o pool (conjunto de conexões reutilizáveis)
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::info!("Executando migrações da base de dados...");
    // Executa automaticamente os ficheiros SQL em ./migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(sqlx::Error::from)?;
    tracing::info!("Migrações concluídas.");

    Ok(pool)
}

/// Pool em memória para os testes, com as migrações reais aplicadas.
/// Uma única conexão: cada `sqlite::memory:` aberta é um banco distinto.
#[cfg(test)]
pub async fn pool_teste() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("falha ao abrir o banco em memória");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("falha ao migrar o banco de teste");
    pool
}
