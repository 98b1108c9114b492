// src/models/aluno.rs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Linha da tabela `alunos`. O id é fornecido pelo chamador (matrícula),
/// não é gerado pelo banco.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Aluno {
    pub aluno_id: String,
    pub nome: String,
    pub endereco: Option<String>,
    pub cidade: Option<String>,
    pub estado: Option<String>,
    pub cep: Option<String>,
    pub pais: Option<String>,
    pub telefone: Option<String>,
}

/// Corpo de criação/atualização. Todos os campos chegam opcionais;
/// os obrigatórios são verificados no serviço (chave ausente e null
/// contam como ausência).
#[derive(Debug, Deserialize)]
pub struct AlunoPayload {
    pub aluno_id: Option<String>,
    pub nome: Option<String>,
    pub endereco: Option<String>,
    pub cidade: Option<String>,
    pub estado: Option<String>,
    pub cep: Option<String>,
    pub pais: Option<String>,
    pub telefone: Option<String>,
}
