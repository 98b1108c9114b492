// src/services/atividade_service.rs
use crate::{
    error::{AppError, AppResult},
    models::atividade::{Atividade, AtividadePayload},
    services::crud::{self, Tabela},
};
use chrono::NaiveDate;
use sqlx::SqlitePool;

pub const TABELA: Tabela = Tabela {
    nome: "atividades",
    coluna_id: "id_atividade",
    nao_encontrado: "Atividade não encontrada",
};

const COLUNAS: &str = "id_atividade, descricao, data_realizacao";

fn campos_obrigatorios(dados: &AtividadePayload) -> AppResult<(&String, NaiveDate)> {
    match (&dados.descricao, dados.data_realizacao) {
        (Some(descricao), Some(data)) => Ok((descricao, data)),
        _ => Err(AppError::Validacao(
            "Dados incompletos. Descrição e data_realizacao são obrigatórios".to_string(),
        )),
    }
}

/// Cria a atividade e devolve o id gerado.
pub async fn criar_atividade(pool: &SqlitePool, dados: &AtividadePayload) -> AppResult<i64> {
    let (descricao, data_realizacao) = campos_obrigatorios(dados)?;

    let resultado = sqlx::query(
        r#"
        INSERT INTO atividades (descricao, data_realizacao)
        VALUES (?, ?)
        "#,
    )
    .bind(descricao)
    .bind(data_realizacao)
    .execute(pool)
    .await?;

    Ok(resultado.last_insert_rowid())
}

pub async fn buscar_atividade(pool: &SqlitePool, id_atividade: i64) -> AppResult<Atividade> {
    let sql = format!("SELECT {} FROM atividades WHERE id_atividade = ?", COLUNAS);
    sqlx::query_as::<_, Atividade>(&sql)
        .bind(id_atividade)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| TABELA.erro_nao_encontrado())
}

pub async fn listar_atividades(pool: &SqlitePool) -> AppResult<Vec<Atividade>> {
    let sql = format!("SELECT {} FROM atividades ORDER BY data_realizacao", COLUNAS);
    Ok(sqlx::query_as::<_, Atividade>(&sql).fetch_all(pool).await?)
}

pub async fn atualizar_atividade(
    pool: &SqlitePool,
    id_atividade: i64,
    dados: &AtividadePayload,
) -> AppResult<()> {
    let (descricao, data_realizacao) = campos_obrigatorios(dados)?;

    let resultado = sqlx::query(
        r#"
        UPDATE atividades
        SET descricao = ?, data_realizacao = ?
        WHERE id_atividade = ?
        "#,
    )
    .bind(descricao)
    .bind(data_realizacao)
    .bind(id_atividade)
    .execute(pool)
    .await?;

    if resultado.rows_affected() == 0 {
        return Err(TABELA.erro_nao_encontrado());
    }
    Ok(())
}

pub async fn apagar_atividade(pool: &SqlitePool, id_atividade: i64) -> AppResult<()> {
    if crud::contar(pool, "atividade_aluno", "id_atividade", id_atividade).await? > 0 {
        return Err(AppError::Conflito(
            "Não é possível excluir a atividade pois está associada a alunos".to_string(),
        ));
    }
    crud::apagar(pool, &TABELA, id_atividade).await
}
