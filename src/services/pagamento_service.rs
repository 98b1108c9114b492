// src/services/pagamento_service.rs
use crate::{
    error::{AppError, AppResult},
    filtros::{Filtros, Valor},
    models::pagamento::{Pagamento, PagamentoFiltros, PagamentoPayload},
    services::{
        aluno_service,
        crud::{self, Tabela},
    },
};
use sqlx::SqlitePool;

pub const TABELA: Tabela = Tabela {
    nome: "pagamentos",
    coluna_id: "id_pagamento",
    nao_encontrado: "Pagamento não encontrado",
};

const COLUNAS: &str =
    "id_pagamento, id_aluno, data_pagamento, valor_pago, forma_pagamento, referencia, status";

pub async fn criar_pagamento(pool: &SqlitePool, dados: &PagamentoPayload) -> AppResult<()> {
    let (id_aluno, data_pagamento, valor_pago) =
        match (&dados.id_aluno, dados.data_pagamento, dados.valor_pago) {
            (Some(id), Some(data), Some(valor)) => (id, data, valor),
            _ => {
                return Err(AppError::Validacao(
                    "Os campos id_aluno, data_pagamento e valor_pago são obrigatórios".to_string(),
                ))
            }
        };

    if !crud::existe(pool, &aluno_service::TABELA, id_aluno.clone()).await? {
        return Err(aluno_service::TABELA.erro_nao_encontrado());
    }

    // Status entra como 'Pendente' quando não informado.
    let status = dados.status.as_deref().unwrap_or("Pendente");

    sqlx::query(
        r#"
        INSERT INTO pagamentos (id_aluno, data_pagamento, valor_pago, forma_pagamento, referencia, status)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(id_aluno)
    .bind(data_pagamento)
    .bind(valor_pago)
    .bind(&dados.forma_pagamento)
    .bind(&dados.referencia)
    .bind(status)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn buscar_pagamento(pool: &SqlitePool, id_pagamento: i64) -> AppResult<Pagamento> {
    let sql = format!("SELECT {} FROM pagamentos WHERE id_pagamento = ?", COLUNAS);
    sqlx::query_as::<_, Pagamento>(&sql)
        .bind(id_pagamento)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| TABELA.erro_nao_encontrado())
}

pub async fn listar_pagamentos(
    pool: &SqlitePool,
    filtros: &PagamentoFiltros,
) -> AppResult<Vec<Pagamento>> {
    let conjunto = Filtros::novo()
        .igual("id_aluno", filtros.id_aluno.clone())
        .igual("status", filtros.status.clone())
        .a_partir_de("data_pagamento", filtros.data_inicio.clone())
        .ate("data_pagamento", filtros.data_fim.clone());

    let sql = format!(
        "SELECT {} FROM pagamentos{} ORDER BY data_pagamento DESC",
        COLUNAS,
        conjunto.clausula_where()
    );

    let mut query = sqlx::query_as::<_, Pagamento>(&sql);
    for valor in conjunto.valores() {
        query = match valor {
            Valor::Texto(texto) => query.bind(texto.clone()),
            Valor::Booleano(booleano) => query.bind(*booleano),
        };
    }

    Ok(query.fetch_all(pool).await?)
}

/// Atualização parcial: campo omitido mantém o valor atual do registro.
pub async fn atualizar_pagamento(
    pool: &SqlitePool,
    id_pagamento: i64,
    dados: &PagamentoPayload,
) -> AppResult<()> {
    let atual = buscar_pagamento(pool, id_pagamento).await?;

    if let Some(id_aluno) = &dados.id_aluno {
        if !crud::existe(pool, &aluno_service::TABELA, id_aluno.clone()).await? {
            return Err(aluno_service::TABELA.erro_nao_encontrado());
        }
    }

    sqlx::query(
        r#"
        UPDATE pagamentos
        SET id_aluno = ?, data_pagamento = ?, valor_pago = ?, forma_pagamento = ?, referencia = ?, status = ?
        WHERE id_pagamento = ?
        "#,
    )
    .bind(dados.id_aluno.clone().unwrap_or(atual.id_aluno))
    .bind(dados.data_pagamento.unwrap_or(atual.data_pagamento))
    .bind(dados.valor_pago.unwrap_or(atual.valor_pago))
    .bind(dados.forma_pagamento.clone().or(atual.forma_pagamento))
    .bind(dados.referencia.clone().or(atual.referencia))
    .bind(dados.status.clone().unwrap_or(atual.status))
    .bind(id_pagamento)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn apagar_pagamento(pool: &SqlitePool, id_pagamento: i64) -> AppResult<()> {
    crud::apagar(pool, &TABELA, id_pagamento).await
}
