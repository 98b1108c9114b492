// src/services/aluno_service.rs
use crate::{
    error::{AppError, AppResult},
    models::aluno::{Aluno, AlunoPayload},
    services::crud::{self, Tabela},
};
use sqlx::SqlitePool;

pub const TABELA: Tabela = Tabela {
    nome: "alunos",
    coluna_id: "aluno_id",
    nao_encontrado: "Aluno não encontrado",
};

const COLUNAS: &str = "aluno_id, nome, endereco, cidade, estado, cep, pais, telefone";

pub async fn criar_aluno(pool: &SqlitePool, dados: &AlunoPayload) -> AppResult<()> {
    // Validação estrutural: id e nome são obrigatórios, o resto é opcional.
    let (aluno_id, nome) = match (&dados.aluno_id, &dados.nome) {
        (Some(id), Some(nome)) => (id, nome),
        _ => {
            return Err(AppError::Validacao(
                "Os campos aluno_id e nome são obrigatórios".to_string(),
            ))
        }
    };

    tracing::debug!("Criando aluno {}", aluno_id);
    sqlx::query(
        r#"
        INSERT INTO alunos (aluno_id, nome, endereco, cidade, estado, cep, pais, telefone)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(aluno_id)
    .bind(nome)
    .bind(&dados.endereco)
    .bind(&dados.cidade)
    .bind(&dados.estado)
    .bind(&dados.cep)
    .bind(&dados.pais)
    .bind(&dados.telefone)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn buscar_aluno(pool: &SqlitePool, aluno_id: &str) -> AppResult<Aluno> {
    let sql = format!("SELECT {} FROM alunos WHERE aluno_id = ?", COLUNAS);
    sqlx::query_as::<_, Aluno>(&sql)
        .bind(aluno_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| TABELA.erro_nao_encontrado())
}

pub async fn listar_alunos(pool: &SqlitePool) -> AppResult<Vec<Aluno>> {
    let sql = format!("SELECT {} FROM alunos ORDER BY nome", COLUNAS);
    Ok(sqlx::query_as::<_, Aluno>(&sql).fetch_all(pool).await?)
}

/// Atualização de registro completo: campos opcionais omitidos viram NULL.
pub async fn atualizar_aluno(
    pool: &SqlitePool,
    aluno_id: &str,
    dados: &AlunoPayload,
) -> AppResult<()> {
    let nome = dados
        .nome
        .as_ref()
        .ok_or_else(|| AppError::Validacao("O campo nome é obrigatório".to_string()))?;

    let resultado = sqlx::query(
        r#"
        UPDATE alunos
        SET nome = ?, endereco = ?, cidade = ?, estado = ?, cep = ?, pais = ?, telefone = ?
        WHERE aluno_id = ?
        "#,
    )
    .bind(nome)
    .bind(&dados.endereco)
    .bind(&dados.cidade)
    .bind(&dados.estado)
    .bind(&dados.cep)
    .bind(&dados.pais)
    .bind(&dados.telefone)
    .bind(aluno_id)
    .execute(pool)
    .await?;

    if resultado.rows_affected() == 0 {
        return Err(TABELA.erro_nao_encontrado());
    }
    Ok(())
}

/// Remove um aluno, desde que nada dependa dele.
/// A ordem das verificações determina qual mensagem o chamador vê.
pub async fn apagar_aluno(pool: &SqlitePool, aluno_id: &str) -> AppResult<()> {
    if crud::contar(pool, "pagamentos", "id_aluno", aluno_id.to_string()).await? > 0 {
        return Err(AppError::Conflito(
            "Não é possível excluir este aluno pois existem pagamentos associados a ele."
                .to_string(),
        ));
    }
    if crud::contar(pool, "presencas", "id_aluno", aluno_id.to_string()).await? > 0 {
        return Err(AppError::Conflito(
            "Não é possível excluir este aluno pois existem presenças associadas a ele."
                .to_string(),
        ));
    }

    crud::apagar(pool, &TABELA, aluno_id.to_string()).await
}
