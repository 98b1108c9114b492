// src/services/presenca_service.rs
use crate::{
    error::{AppError, AppResult},
    filtros::{Filtros, Valor},
    models::presenca::{Presenca, PresencaFiltros, PresencaPayload},
    services::{
        aluno_service,
        crud::{self, Tabela},
    },
};
use chrono::NaiveDate;
use sqlx::SqlitePool;

pub const TABELA: Tabela = Tabela {
    nome: "presencas",
    coluna_id: "id_presenca",
    nao_encontrado: "Presença não encontrada",
};

const COLUNAS: &str = "id_presenca, id_aluno, data_presenca, presente";

const MSG_DUPLICADA: &str = "Já existe um registro de presença para este aluno nesta data";

/// No máximo um registro por (id_aluno, data_presenca); na atualização o
/// próprio registro fica fora da colisão.
async fn duplicada(
    pool: &SqlitePool,
    id_aluno: &str,
    data_presenca: NaiveDate,
    excluir_id: Option<i64>,
) -> AppResult<bool> {
    let total: i64 = match excluir_id {
        Some(id_presenca) => {
            sqlx::query_scalar(
                r#"
                SELECT COUNT(*) FROM presencas
                WHERE id_aluno = ? AND data_presenca = ? AND id_presenca != ?
                "#,
            )
            .bind(id_aluno)
            .bind(data_presenca)
            .bind(id_presenca)
            .fetch_one(pool)
            .await?
        }
        None => {
            sqlx::query_scalar(
                r#"
                SELECT COUNT(*) FROM presencas
                WHERE id_aluno = ? AND data_presenca = ?
                "#,
            )
            .bind(id_aluno)
            .bind(data_presenca)
            .fetch_one(pool)
            .await?
        }
    };
    Ok(total > 0)
}

pub async fn criar_presenca(pool: &SqlitePool, dados: &PresencaPayload) -> AppResult<()> {
    // Ordem fixa: estrutural -> existência -> duplicidade.
    let (id_aluno, data_presenca, presente) =
        match (&dados.id_aluno, dados.data_presenca, dados.presente) {
            (Some(id), Some(data), Some(presente)) => (id, data, presente),
            _ => {
                return Err(AppError::Validacao(
                    "Os campos id_aluno, data_presenca e presente são obrigatórios".to_string(),
                ))
            }
        };

    if !crud::existe(pool, &aluno_service::TABELA, id_aluno.clone()).await? {
        return Err(aluno_service::TABELA.erro_nao_encontrado());
    }

    if duplicada(pool, id_aluno, data_presenca, None).await? {
        return Err(AppError::Conflito(MSG_DUPLICADA.to_string()));
    }

    sqlx::query(
        r#"
        INSERT INTO presencas (id_aluno, data_presenca, presente)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(id_aluno)
    .bind(data_presenca)
    .bind(presente)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn buscar_presenca(pool: &SqlitePool, id_presenca: i64) -> AppResult<Presenca> {
    let sql = format!("SELECT {} FROM presencas WHERE id_presenca = ?", COLUNAS);
    sqlx::query_as::<_, Presenca>(&sql)
        .bind(id_presenca)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| TABELA.erro_nao_encontrado())
}

pub async fn listar_presencas(
    pool: &SqlitePool,
    filtros: &PresencaFiltros,
) -> AppResult<Vec<Presenca>> {
    let conjunto = Filtros::novo()
        .igual("id_aluno", filtros.id_aluno.clone())
        .a_partir_de("data_presenca", filtros.data_inicio.clone())
        .ate("data_presenca", filtros.data_fim.clone())
        .igual_booleano("presente", filtros.presente.clone());

    let sql = format!(
        "SELECT {} FROM presencas{} ORDER BY data_presenca DESC",
        COLUNAS,
        conjunto.clausula_where()
    );

    let mut query = sqlx::query_as::<_, Presenca>(&sql);
    for valor in conjunto.valores() {
        query = match valor {
            Valor::Texto(texto) => query.bind(texto.clone()),
            Valor::Booleano(booleano) => query.bind(*booleano),
        };
    }

    Ok(query.fetch_all(pool).await?)
}

/// Atualização parcial: campo omitido mantém o valor atual do registro.
pub async fn atualizar_presenca(
    pool: &SqlitePool,
    id_presenca: i64,
    dados: &PresencaPayload,
) -> AppResult<()> {
    let atual = buscar_presenca(pool, id_presenca).await?;

    if let Some(id_aluno) = &dados.id_aluno {
        if !crud::existe(pool, &aluno_service::TABELA, id_aluno.clone()).await? {
            return Err(aluno_service::TABELA.erro_nao_encontrado());
        }
    }

    let id_aluno = dados.id_aluno.clone().unwrap_or(atual.id_aluno);
    let data_presenca = dados.data_presenca.unwrap_or(atual.data_presenca);

    // A colisão só precisa ser re-verificada se a chave (aluno, data) mudou.
    if (dados.id_aluno.is_some() || dados.data_presenca.is_some())
        && duplicada(pool, &id_aluno, data_presenca, Some(id_presenca)).await?
    {
        return Err(AppError::Conflito(MSG_DUPLICADA.to_string()));
    }

    let presente = dados.presente.unwrap_or(atual.presente);

    sqlx::query(
        r#"
        UPDATE presencas
        SET id_aluno = ?, data_presenca = ?, presente = ?
        WHERE id_presenca = ?
        "#,
    )
    .bind(&id_aluno)
    .bind(data_presenca)
    .bind(presente)
    .bind(id_presenca)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn apagar_presenca(pool: &SqlitePool, id_presenca: i64) -> AppResult<()> {
    crud::apagar(pool, &TABELA, id_presenca).await
}
