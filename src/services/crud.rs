// src/services/crud.rs
//! Acesso genérico partilhado pelos serviços de entidade.
//!
//! Cada entidade descreve a sua tabela num [`Tabela`] e reutiliza as sondas
//! de existência/contagem e a remoção por id. O SQL interpola apenas nomes
//! de tabela/coluna vindos de constantes; valores entram sempre como
//! placeholders.

use crate::error::{AppError, AppResult};
use sqlx::SqlitePool;

/// Descritor de uma tabela de entidade: nome, coluna do id e a mensagem
/// de "não encontrado" (o género varia por entidade).
pub struct Tabela {
    pub nome: &'static str,
    pub coluna_id: &'static str,
    pub nao_encontrado: &'static str,
}

impl Tabela {
    pub fn erro_nao_encontrado(&self) -> AppError {
        AppError::NaoEncontrado(self.nao_encontrado.to_string())
    }
}

/// Verifica se existe um registro com o id dado.
pub async fn existe<V>(pool: &SqlitePool, tabela: &Tabela, id: V) -> AppResult<bool>
where
    V: for<'q> sqlx::Encode<'q, sqlx::Sqlite> + sqlx::Type<sqlx::Sqlite> + Send + Sync + 'static,
{
    Ok(contar(pool, tabela.nome, tabela.coluna_id, id).await? > 0)
}

/// Conta as linhas de `tabela` cuja `coluna` tem o valor dado.
/// Usado tanto para existência quanto para dependências antes de remover.
pub async fn contar<V>(pool: &SqlitePool, tabela: &str, coluna: &str, valor: V) -> AppResult<i64>
where
    V: for<'q> sqlx::Encode<'q, sqlx::Sqlite> + sqlx::Type<sqlx::Sqlite> + Send + Sync + 'static,
{
    let sql = format!("SELECT COUNT(*) FROM {} WHERE {} = ?", tabela, coluna);
    let total: i64 = sqlx::query_scalar(&sql).bind(valor).fetch_one(pool).await?;
    Ok(total)
}

/// Remove por id; `NaoEncontrado` quando nenhuma linha foi afetada.
pub async fn apagar<V>(pool: &SqlitePool, tabela: &Tabela, id: V) -> AppResult<()>
where
    V: for<'q> sqlx::Encode<'q, sqlx::Sqlite> + sqlx::Type<sqlx::Sqlite> + Send + Sync + 'static,
{
    let sql = format!("DELETE FROM {} WHERE {} = ?", tabela.nome, tabela.coluna_id);
    let resultado = sqlx::query(&sql).bind(id).execute(pool).await?;
    if resultado.rows_affected() == 0 {
        return Err(tabela.erro_nao_encontrado());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    const ALUNOS: Tabela = Tabela {
        nome: "alunos",
        coluna_id: "aluno_id",
        nao_encontrado: "Aluno não encontrado",
    };

    #[tokio::test]
    async fn existe_e_contar_refletem_as_linhas() {
        let pool = db::pool_teste().await;
        sqlx::query("INSERT INTO alunos (aluno_id, nome) VALUES ('a1', 'Ana')")
            .execute(&pool)
            .await
            .unwrap();

        assert!(existe(&pool, &ALUNOS, "a1".to_string()).await.unwrap());
        assert!(!existe(&pool, &ALUNOS, "a2".to_string()).await.unwrap());
        assert_eq!(
            contar(&pool, "alunos", "nome", "Ana".to_string())
                .await
                .unwrap(),
            1
        );
    }

    #[tokio::test]
    async fn apagar_inexistente_da_nao_encontrado() {
        let pool = db::pool_teste().await;
        let erro = apagar(&pool, &ALUNOS, "fantasma".to_string())
            .await
            .unwrap_err();
        assert!(matches!(erro, AppError::NaoEncontrado(_)));
    }
}
