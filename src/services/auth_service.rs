// src/services/auth_service.rs
use crate::error::{AppError, AppResult};

/// Política de senha: pelo menos 8 caracteres, com letras e números.
pub fn senha_valida(senha: &str) -> bool {
    senha.chars().count() >= 8
        && senha.chars().any(|c| c.is_ascii_alphabetic())
        && senha.chars().any(|c| c.is_ascii_digit())
}

/// Verifica se a senha fornecida corresponde ao hash guardado.
pub async fn verificar_senha(senha: &str, hash_guardado: &str) -> AppResult<bool> {
    let senha = senha.to_string();
    let hash_guardado = hash_guardado.to_string();
    tokio::task::spawn_blocking(move || {
        tracing::debug!("Verificando hash bcrypt...");
        bcrypt::verify(&senha, &hash_guardado)
    })
    .await
    .map_err(|e| {
        tracing::error!("Erro na task spawn_blocking (verificar_senha): {:?}", e);
        AppError::Senha
    })?
    .map_err(|e| {
        tracing::error!("Erro bcrypt ao verificar senha: {:?}", e);
        AppError::Senha
    })
}

/// Gera um hash bcrypt para uma senha. O salt é novo a cada chamada,
/// portanto a mesma senha produz digests diferentes.
pub async fn hash_senha(senha: &str) -> AppResult<String> {
    let senha = senha.to_string();
    tokio::task::spawn_blocking(move || {
        tracing::debug!("Gerando hash bcrypt...");
        bcrypt::hash(&senha, bcrypt::DEFAULT_COST)
    })
    .await
    .map_err(|e| {
        tracing::error!("Erro na task spawn_blocking (hash_senha): {:?}", e);
        AppError::Senha
    })?
    .map_err(|e| {
        tracing::error!("Erro bcrypt ao gerar hash: {:?}", e);
        AppError::Senha
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn politica_exige_tamanho_letras_e_digitos() {
        assert!(senha_valida("abcdef12"));
        assert!(senha_valida("X9abcdefg"));
        assert!(!senha_valida("abc12")); // curta demais
        assert!(!senha_valida("abcdefgh")); // sem dígito
        assert!(!senha_valida("12345678")); // sem letra
    }

    #[tokio::test]
    async fn hash_e_verificacao_fecham_o_ciclo() {
        let digest = hash_senha("segredo123").await.unwrap();
        assert!(verificar_senha("segredo123", &digest).await.unwrap());
        assert!(!verificar_senha("outra456", &digest).await.unwrap());
    }

    #[tokio::test]
    async fn mesmo_texto_gera_digests_diferentes() {
        // Salt novo por chamada: os digests nunca coincidem.
        let a = hash_senha("segredo123").await.unwrap();
        let b = hash_senha("segredo123").await.unwrap();
        assert_ne!(a, b);
        assert!(verificar_senha("segredo123", &a).await.unwrap());
        assert!(verificar_senha("segredo123", &b).await.unwrap());
    }
}
