// src/services/professor_service.rs
use crate::{
    error::{AppError, AppResult},
    models::professor::{Professor, ProfessorPayload},
    services::crud::{self, Tabela},
};
use sqlx::SqlitePool;

pub const TABELA: Tabela = Tabela {
    nome: "professores",
    coluna_id: "id_professor",
    nao_encontrado: "Professor não encontrado",
};

const COLUNAS: &str = "id_professor, nome_completo, email, telefone";

pub async fn criar_professor(pool: &SqlitePool, dados: &ProfessorPayload) -> AppResult<()> {
    let nome_completo = dados
        .nome_completo
        .as_ref()
        .ok_or_else(|| AppError::Validacao("O campo nome_completo é obrigatório".to_string()))?;

    sqlx::query(
        r#"
        INSERT INTO professores (nome_completo, email, telefone)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(nome_completo)
    .bind(&dados.email)
    .bind(&dados.telefone)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn buscar_professor(pool: &SqlitePool, id_professor: i64) -> AppResult<Professor> {
    let sql = format!("SELECT {} FROM professores WHERE id_professor = ?", COLUNAS);
    sqlx::query_as::<_, Professor>(&sql)
        .bind(id_professor)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| TABELA.erro_nao_encontrado())
}

pub async fn listar_professores(pool: &SqlitePool) -> AppResult<Vec<Professor>> {
    let sql = format!("SELECT {} FROM professores ORDER BY nome_completo", COLUNAS);
    Ok(sqlx::query_as::<_, Professor>(&sql).fetch_all(pool).await?)
}

pub async fn atualizar_professor(
    pool: &SqlitePool,
    id_professor: i64,
    dados: &ProfessorPayload,
) -> AppResult<()> {
    let nome_completo = dados
        .nome_completo
        .as_ref()
        .ok_or_else(|| AppError::Validacao("O campo nome_completo é obrigatório".to_string()))?;

    let resultado = sqlx::query(
        r#"
        UPDATE professores
        SET nome_completo = ?, email = ?, telefone = ?
        WHERE id_professor = ?
        "#,
    )
    .bind(nome_completo)
    .bind(&dados.email)
    .bind(&dados.telefone)
    .bind(id_professor)
    .execute(pool)
    .await?;

    if resultado.rows_affected() == 0 {
        return Err(TABELA.erro_nao_encontrado());
    }
    Ok(())
}

pub async fn apagar_professor(pool: &SqlitePool, id_professor: i64) -> AppResult<()> {
    crud::apagar(pool, &TABELA, id_professor).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    fn payload(nome: &str) -> ProfessorPayload {
        ProfessorPayload {
            nome_completo: Some(nome.to_string()),
            email: Some(format!("{}@escola.br", nome.to_lowercase())),
            telefone: None,
        }
    }

    #[tokio::test]
    async fn ciclo_basico_de_crud() {
        let pool = db::pool_teste().await;
        criar_professor(&pool, &payload("Carla")).await.unwrap();

        let lista = listar_professores(&pool).await.unwrap();
        assert_eq!(lista.len(), 1);
        let id = lista[0].id_professor;

        atualizar_professor(&pool, id, &payload("Carla Silva"))
            .await
            .unwrap();
        assert_eq!(
            buscar_professor(&pool, id).await.unwrap().nome_completo,
            "Carla Silva"
        );

        apagar_professor(&pool, id).await.unwrap();
        assert!(buscar_professor(&pool, id).await.is_err());
    }

    #[tokio::test]
    async fn criar_sem_nome_e_rejeitado() {
        let pool = db::pool_teste().await;
        let dados = ProfessorPayload {
            nome_completo: None,
            email: None,
            telefone: None,
        };
        let erro = criar_professor(&pool, &dados).await.unwrap_err();
        assert!(matches!(erro, AppError::Validacao(_)));
    }
}
