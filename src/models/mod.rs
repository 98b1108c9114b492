// src/models/mod.rs
pub mod aluno;
pub mod atividade;
pub mod pagamento;
pub mod presenca;
pub mod professor;
pub mod turma;
pub mod usuario;
