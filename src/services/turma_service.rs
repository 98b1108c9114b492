// src/services/turma_service.rs
use crate::{
    error::{AppError, AppResult},
    models::turma::{Turma, TurmaPayload},
    services::{
        crud::{self, Tabela},
        professor_service,
    },
};
use sqlx::SqlitePool;

pub const TABELA: Tabela = Tabela {
    nome: "turmas",
    coluna_id: "id_turma",
    nao_encontrado: "Turma não encontrada",
};

// As leituras resolvem o nome do professor; turma sem professor fica null.
const SELECT_COM_PROFESSOR: &str = r#"
    SELECT t.id_turma, t.nome_turma, t.id_professor, t.horario,
           p.nome_completo AS nome_professor
    FROM turmas t
    LEFT JOIN professores p ON t.id_professor = p.id_professor
"#;

/// Cria a turma e devolve o id gerado.
pub async fn criar_turma(pool: &SqlitePool, dados: &TurmaPayload) -> AppResult<i64> {
    let nome_turma = dados
        .nome_turma
        .as_ref()
        .ok_or_else(|| AppError::Validacao("Nome da turma é obrigatório".to_string()))?;

    // Existência do professor, apenas quando informado.
    if let Some(id_professor) = dados.id_professor {
        if !crud::existe(pool, &professor_service::TABELA, id_professor).await? {
            return Err(professor_service::TABELA.erro_nao_encontrado());
        }
    }

    let resultado = sqlx::query(
        r#"
        INSERT INTO turmas (nome_turma, id_professor, horario)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(nome_turma)
    .bind(dados.id_professor)
    .bind(&dados.horario)
    .execute(pool)
    .await?;

    Ok(resultado.last_insert_rowid())
}

pub async fn buscar_turma(pool: &SqlitePool, id_turma: i64) -> AppResult<Turma> {
    let sql = format!("{} WHERE t.id_turma = ?", SELECT_COM_PROFESSOR);
    sqlx::query_as::<_, Turma>(&sql)
        .bind(id_turma)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| TABELA.erro_nao_encontrado())
}

pub async fn listar_turmas(pool: &SqlitePool) -> AppResult<Vec<Turma>> {
    let sql = format!("{} ORDER BY t.nome_turma", SELECT_COM_PROFESSOR);
    Ok(sqlx::query_as::<_, Turma>(&sql).fetch_all(pool).await?)
}

pub async fn atualizar_turma(
    pool: &SqlitePool,
    id_turma: i64,
    dados: &TurmaPayload,
) -> AppResult<()> {
    let nome_turma = dados
        .nome_turma
        .as_ref()
        .ok_or_else(|| AppError::Validacao("Nome da turma é obrigatório".to_string()))?;

    if !crud::existe(pool, &TABELA, id_turma).await? {
        return Err(TABELA.erro_nao_encontrado());
    }

    if let Some(id_professor) = dados.id_professor {
        if !crud::existe(pool, &professor_service::TABELA, id_professor).await? {
            return Err(professor_service::TABELA.erro_nao_encontrado());
        }
    }

    sqlx::query(
        r#"
        UPDATE turmas
        SET nome_turma = ?, id_professor = ?, horario = ?
        WHERE id_turma = ?
        "#,
    )
    .bind(nome_turma)
    .bind(dados.id_professor)
    .bind(&dados.horario)
    .bind(id_turma)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn apagar_turma(pool: &SqlitePool, id_turma: i64) -> AppResult<()> {
    if crud::contar(pool, "aluno_turma", "id_turma", id_turma).await? > 0 {
        return Err(AppError::Conflito(
            "Não é possível excluir a turma pois possui alunos associados".to_string(),
        ));
    }
    crud::apagar(pool, &TABELA, id_turma).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::models::professor::ProfessorPayload;

    fn payload(nome: &str, id_professor: Option<i64>) -> TurmaPayload {
        TurmaPayload {
            nome_turma: Some(nome.to_string()),
            id_professor,
            horario: Some("Seg 08:00".to_string()),
        }
    }

    #[tokio::test]
    async fn criar_com_professor_inexistente_da_nao_encontrado() {
        let pool = db::pool_teste().await;
        let erro = criar_turma(&pool, &payload("Turma A", Some(999)))
            .await
            .unwrap_err();
        match erro {
            AppError::NaoEncontrado(msg) => assert_eq!(msg, "Professor não encontrado"),
            outro => panic!("esperava NaoEncontrado, veio {:?}", outro),
        }
    }

    #[tokio::test]
    async fn leitura_resolve_o_nome_do_professor() {
        let pool = db::pool_teste().await;
        professor_service::criar_professor(
            &pool,
            &ProfessorPayload {
                nome_completo: Some("Carla".to_string()),
                email: None,
                telefone: None,
            },
        )
        .await
        .unwrap();
        let id_professor = professor_service::listar_professores(&pool).await.unwrap()[0]
            .id_professor;

        let id_turma = criar_turma(&pool, &payload("Turma A", Some(id_professor)))
            .await
            .unwrap();
        let turma = buscar_turma(&pool, id_turma).await.unwrap();
        assert_eq!(turma.nome_professor.as_deref(), Some("Carla"));

        // Sem professor, o campo vem null.
        let id_sem = criar_turma(&pool, &payload("Turma B", None)).await.unwrap();
        assert_eq!(buscar_turma(&pool, id_sem).await.unwrap().nome_professor, None);
    }

    #[tokio::test]
    async fn apagar_com_aluno_matriculado_da_conflito() {
        let pool = db::pool_teste().await;
        let id_turma = criar_turma(&pool, &payload("Turma A", None)).await.unwrap();
        sqlx::query("INSERT INTO aluno_turma (id_aluno, id_turma) VALUES ('123', ?)")
            .bind(id_turma)
            .execute(&pool)
            .await
            .unwrap();

        let erro = apagar_turma(&pool, id_turma).await.unwrap_err();
        assert!(matches!(erro, AppError::Conflito(_)));

        // Sem matrículas a remoção passa.
        sqlx::query("DELETE FROM aluno_turma WHERE id_turma = ?")
            .bind(id_turma)
            .execute(&pool)
            .await
            .unwrap();
        apagar_turma(&pool, id_turma).await.unwrap();
    }
}
