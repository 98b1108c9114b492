// src/services/mod.rs
pub mod aluno_service;
pub mod atividade_service;
pub mod auth_service;
pub mod crud;
pub mod pagamento_service;
pub mod presenca_service;
pub mod professor_service;
pub mod turma_service;
pub mod usuario_service;
