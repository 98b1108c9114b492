// src/services/usuario_service.rs
use crate::{
    error::{AppError, AppResult},
    models::usuario::{Usuario, UsuarioPayload, UsuarioPublico},
    services::{
        auth_service,
        crud::{self, Tabela},
    },
};
use sqlx::SqlitePool;

pub const TABELA: Tabela = Tabela {
    nome: "usuarios",
    coluna_id: "id_usuario",
    nao_encontrado: "Usuário não encontrado",
};

// Projeção pública: a coluna senha nunca sai daqui.
const COLUNAS_PUBLICAS: &str = "id_usuario, login, nivel_acesso, id_professor";

const MSG_SENHA_FRACA: &str =
    "Senha deve ter pelo menos 8 caracteres, incluindo letras e números";

/// Unicidade de login verificada na aplicação (a tabela não tem UNIQUE);
/// na atualização o próprio registro fica fora da verificação.
async fn login_em_uso(pool: &SqlitePool, login: &str, excluir_id: Option<i64>) -> AppResult<bool> {
    let total: i64 = match excluir_id {
        Some(id_usuario) => {
            sqlx::query_scalar("SELECT COUNT(*) FROM usuarios WHERE login = ? AND id_usuario != ?")
                .bind(login)
                .bind(id_usuario)
                .fetch_one(pool)
                .await?
        }
        None => {
            sqlx::query_scalar("SELECT COUNT(*) FROM usuarios WHERE login = ?")
                .bind(login)
                .fetch_one(pool)
                .await?
        }
    };
    Ok(total > 0)
}

pub async fn criar_usuario(pool: &SqlitePool, dados: &UsuarioPayload) -> AppResult<()> {
    // Ordem fixa: estrutural -> formato da senha -> unicidade do login.
    let (login, senha) = match (&dados.login, &dados.senha) {
        (Some(login), Some(senha)) => (login, senha),
        _ => {
            return Err(AppError::Validacao(
                "Dados incompletos. Login e senha são obrigatórios".to_string(),
            ))
        }
    };

    if !auth_service::senha_valida(senha) {
        return Err(AppError::Validacao(MSG_SENHA_FRACA.to_string()));
    }

    if login_em_uso(pool, login, None).await? {
        return Err(AppError::Conflito("Login já existe".to_string()));
    }

    let hash = auth_service::hash_senha(senha).await?;
    let nivel_acesso = dados.nivel_acesso.as_deref().unwrap_or("usuario");

    sqlx::query(
        r#"
        INSERT INTO usuarios (login, senha, nivel_acesso, id_professor)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(login)
    .bind(&hash)
    .bind(nivel_acesso)
    .bind(dados.id_professor)
    .execute(pool)
    .await?;

    tracing::info!("Usuário '{}' criado.", login);
    Ok(())
}

pub async fn buscar_usuario(pool: &SqlitePool, id_usuario: i64) -> AppResult<UsuarioPublico> {
    let sql = format!(
        "SELECT {} FROM usuarios WHERE id_usuario = ?",
        COLUNAS_PUBLICAS
    );
    sqlx::query_as::<_, UsuarioPublico>(&sql)
        .bind(id_usuario)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| TABELA.erro_nao_encontrado())
}

pub async fn listar_usuarios(pool: &SqlitePool) -> AppResult<Vec<UsuarioPublico>> {
    let sql = format!("SELECT {} FROM usuarios ORDER BY login", COLUNAS_PUBLICAS);
    Ok(sqlx::query_as::<_, UsuarioPublico>(&sql)
        .fetch_all(pool)
        .await?)
}

/// Atualização parcial: campo omitido mantém o valor atual do registro.
/// Senha nova passa pela política e é re-hasheada; login novo re-verifica
/// a unicidade excluindo o próprio id.
pub async fn atualizar_usuario(
    pool: &SqlitePool,
    id_usuario: i64,
    dados: &UsuarioPayload,
) -> AppResult<()> {
    let atual = sqlx::query_as::<_, Usuario>(
        "SELECT id_usuario, login, senha, nivel_acesso, id_professor FROM usuarios WHERE id_usuario = ?",
    )
    .bind(id_usuario)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| TABELA.erro_nao_encontrado())?;

    let senha = match &dados.senha {
        Some(nova) => {
            if !auth_service::senha_valida(nova) {
                return Err(AppError::Validacao(MSG_SENHA_FRACA.to_string()));
            }
            auth_service::hash_senha(nova).await?
        }
        None => atual.senha,
    };

    let login = match &dados.login {
        Some(novo) => {
            if login_em_uso(pool, novo, Some(id_usuario)).await? {
                return Err(AppError::Conflito("Login já existe".to_string()));
            }
            novo.clone()
        }
        None => atual.login,
    };

    let nivel_acesso = dados.nivel_acesso.clone().unwrap_or(atual.nivel_acesso);
    let id_professor = dados.id_professor.or(atual.id_professor);

    sqlx::query(
        r#"
        UPDATE usuarios
        SET login = ?, senha = ?, nivel_acesso = ?, id_professor = ?
        WHERE id_usuario = ?
        "#,
    )
    .bind(&login)
    .bind(&senha)
    .bind(&nivel_acesso)
    .bind(id_professor)
    .bind(id_usuario)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn apagar_usuario(pool: &SqlitePool, id_usuario: i64) -> AppResult<()> {
    crud::apagar(pool, &TABELA, id_usuario).await
}

/// Autentica por login/senha. Login inexistente e senha errada produzem o
/// mesmo erro, para não revelar quais logins existem.
pub async fn autenticar(pool: &SqlitePool, login: &str, senha: &str) -> AppResult<UsuarioPublico> {
    let usuario = sqlx::query_as::<_, Usuario>(
        "SELECT id_usuario, login, senha, nivel_acesso, id_professor FROM usuarios WHERE login = ?",
    )
    .bind(login)
    .fetch_optional(pool)
    .await?;

    let usuario = match usuario {
        Some(u) => u,
        None => return Err(AppError::CredenciaisInvalidas),
    };

    if auth_service::verificar_senha(senha, &usuario.senha).await? {
        tracing::info!("Login bem-sucedido para '{}'.", login);
        Ok(UsuarioPublico {
            id_usuario: usuario.id_usuario,
            login: usuario.login,
            nivel_acesso: usuario.nivel_acesso,
            id_professor: usuario.id_professor,
        })
    } else {
        tracing::warn!("Senha incorreta para '{}'.", login);
        Err(AppError::CredenciaisInvalidas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    fn payload(login: &str, senha: &str) -> UsuarioPayload {
        UsuarioPayload {
            login: Some(login.to_string()),
            senha: Some(senha.to_string()),
            nivel_acesso: None,
            id_professor: None,
        }
    }

    #[tokio::test]
    async fn criar_e_autenticar_devolve_o_nivel_guardado() {
        let pool = db::pool_teste().await;
        let mut dados = payload("maria", "senha123");
        dados.nivel_acesso = Some("admin".to_string());
        criar_usuario(&pool, &dados).await.unwrap();

        let usuario = autenticar(&pool, "maria", "senha123").await.unwrap();
        assert_eq!(usuario.login, "maria");
        assert_eq!(usuario.nivel_acesso, "admin");
    }

    #[tokio::test]
    async fn senha_errada_e_login_inexistente_dao_o_mesmo_erro() {
        let pool = db::pool_teste().await;
        criar_usuario(&pool, &payload("maria", "senha123"))
            .await
            .unwrap();

        let errada = autenticar(&pool, "maria", "outra456").await.unwrap_err();
        let inexistente = autenticar(&pool, "fantasma", "senha123").await.unwrap_err();
        assert!(matches!(errada, AppError::CredenciaisInvalidas));
        assert!(matches!(inexistente, AppError::CredenciaisInvalidas));
    }

    #[tokio::test]
    async fn senha_fraca_e_rejeitada_antes_de_escrever() {
        let pool = db::pool_teste().await;
        let erro = criar_usuario(&pool, &payload("maria", "curta1"))
            .await
            .unwrap_err();
        assert!(matches!(erro, AppError::Validacao(_)));
        assert!(listar_usuarios(&pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn login_duplicado_da_conflito() {
        let pool = db::pool_teste().await;
        criar_usuario(&pool, &payload("maria", "senha123"))
            .await
            .unwrap();
        let erro = criar_usuario(&pool, &payload("maria", "senha456"))
            .await
            .unwrap_err();
        assert!(matches!(erro, AppError::Conflito(_)));
    }

    #[tokio::test]
    async fn nivel_omitido_entra_como_usuario() {
        let pool = db::pool_teste().await;
        criar_usuario(&pool, &payload("maria", "senha123"))
            .await
            .unwrap();
        let lista = listar_usuarios(&pool).await.unwrap();
        assert_eq!(lista[0].nivel_acesso, "usuario");
    }

    #[tokio::test]
    async fn atualizar_mantem_login_e_senha_quando_omitidos() {
        let pool = db::pool_teste().await;
        criar_usuario(&pool, &payload("maria", "senha123"))
            .await
            .unwrap();
        let id = listar_usuarios(&pool).await.unwrap()[0].id_usuario;

        // Só muda o nível de acesso.
        let so_nivel = UsuarioPayload {
            login: None,
            senha: None,
            nivel_acesso: Some("admin".to_string()),
            id_professor: None,
        };
        atualizar_usuario(&pool, id, &so_nivel).await.unwrap();

        // Login e senha antigos continuam a valer.
        let usuario = autenticar(&pool, "maria", "senha123").await.unwrap();
        assert_eq!(usuario.nivel_acesso, "admin");
    }

    #[tokio::test]
    async fn atualizar_login_nao_colide_com_o_proprio_registro() {
        let pool = db::pool_teste().await;
        criar_usuario(&pool, &payload("maria", "senha123"))
            .await
            .unwrap();
        let id = listar_usuarios(&pool).await.unwrap()[0].id_usuario;

        // Reenviar o mesmo login no update não é colisão.
        atualizar_usuario(&pool, id, &payload("maria", "senha123"))
            .await
            .unwrap();

        // Mas colidir com o login de outro usuário é.
        criar_usuario(&pool, &payload("ana", "senha123")).await.unwrap();
        let erro = atualizar_usuario(&pool, id, &payload("ana", "senha123"))
            .await
            .unwrap_err();
        assert!(matches!(erro, AppError::Conflito(_)));
    }
}
