// src/web/routes.rs
use crate::{
    state::AppState,
    web::{
        aluno_handlers, atividade_handlers, auth_handlers, pagamento_handlers, presenca_handlers,
        professor_handlers, turma_handlers, usuario_handlers,
    },
};
use axum::{
    routing::{get, post},
    Router,
};

pub fn create_router(app_state: AppState) -> Router {
    // Cada entidade segue o mesmo desenho: coleção na raiz, registro em /{id}.
    let rotas_alunos = Router::new()
        .route(
            "/",
            post(aluno_handlers::criar_aluno).get(aluno_handlers::listar_alunos),
        )
        .route(
            "/{aluno_id}",
            get(aluno_handlers::buscar_aluno)
                .put(aluno_handlers::atualizar_aluno)
                .delete(aluno_handlers::apagar_aluno),
        );

    let rotas_professores = Router::new()
        .route(
            "/",
            post(professor_handlers::criar_professor).get(professor_handlers::listar_professores),
        )
        .route(
            "/{id_professor}",
            get(professor_handlers::buscar_professor)
                .put(professor_handlers::atualizar_professor)
                .delete(professor_handlers::apagar_professor),
        );

    let rotas_turmas = Router::new()
        .route(
            "/",
            post(turma_handlers::criar_turma).get(turma_handlers::listar_turmas),
        )
        .route(
            "/{id_turma}",
            get(turma_handlers::buscar_turma)
                .put(turma_handlers::atualizar_turma)
                .delete(turma_handlers::apagar_turma),
        );

    let rotas_atividades = Router::new()
        .route(
            "/",
            post(atividade_handlers::criar_atividade).get(atividade_handlers::listar_atividades),
        )
        .route(
            "/{id_atividade}",
            get(atividade_handlers::buscar_atividade)
                .put(atividade_handlers::atualizar_atividade)
                .delete(atividade_handlers::apagar_atividade),
        );

    let rotas_presencas = Router::new()
        .route(
            "/",
            post(presenca_handlers::criar_presenca).get(presenca_handlers::listar_presencas),
        )
        .route(
            "/{id_presenca}",
            get(presenca_handlers::buscar_presenca)
                .put(presenca_handlers::atualizar_presenca)
                .delete(presenca_handlers::apagar_presenca),
        );

    let rotas_pagamentos = Router::new()
        .route(
            "/",
            post(pagamento_handlers::criar_pagamento).get(pagamento_handlers::listar_pagamentos),
        )
        .route(
            "/{id_pagamento}",
            get(pagamento_handlers::buscar_pagamento)
                .put(pagamento_handlers::atualizar_pagamento)
                .delete(pagamento_handlers::apagar_pagamento),
        );

    let rotas_usuarios = Router::new()
        .route(
            "/",
            post(usuario_handlers::criar_usuario).get(usuario_handlers::listar_usuarios),
        )
        .route(
            "/{id_usuario}",
            get(usuario_handlers::buscar_usuario)
                .put(usuario_handlers::atualizar_usuario)
                .delete(usuario_handlers::apagar_usuario),
        );

    Router::new()
        .route("/login", post(auth_handlers::handle_login))
        .nest("/alunos", rotas_alunos)
        .nest("/professores", rotas_professores)
        .nest("/turmas", rotas_turmas)
        .nest("/atividades", rotas_atividades)
        .nest("/presencas", rotas_presencas)
        .nest("/pagamentos", rotas_pagamentos)
        .nest("/usuarios", rotas_usuarios)
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn app() -> Router {
        let db_pool = db::pool_teste().await;
        create_router(AppState { db_pool })
    }

    fn requisicao(metodo: &str, uri: &str, corpo: Value) -> Request<Body> {
        Request::builder()
            .method(metodo)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(corpo.to_string()))
            .unwrap()
    }

    async fn corpo_json(resposta: axum::response::Response) -> Value {
        let bytes = to_bytes(resposta.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn ciclo_de_vida_de_um_aluno_pela_api() {
        let app = app().await;

        let resposta = app
            .clone()
            .oneshot(requisicao(
                "POST",
                "/alunos",
                json!({ "aluno_id": "123", "nome": "João" }),
            ))
            .await
            .unwrap();
        assert_eq!(resposta.status(), StatusCode::CREATED);

        let resposta = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/alunos/123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resposta.status(), StatusCode::OK);
        let corpo = corpo_json(resposta).await;
        assert_eq!(corpo["nome"], "João");
        assert_eq!(corpo["endereco"], Value::Null);

        let resposta = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/alunos/123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resposta.status(), StatusCode::OK);

        // Depois da remoção, a leitura responde 404 com o corpo de erro padrão.
        let resposta = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/alunos/123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resposta.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            corpo_json(resposta).await["error"],
            "Aluno não encontrado"
        );
    }

    #[tokio::test]
    async fn criar_aluno_sem_campos_obrigatorios_responde_400() {
        let app = app().await;
        let resposta = app
            .oneshot(requisicao("POST", "/alunos", json!({ "nome": "João" })))
            .await
            .unwrap();
        assert_eq!(resposta.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            corpo_json(resposta).await["error"],
            "Os campos aluno_id e nome são obrigatórios"
        );
    }

    #[tokio::test]
    async fn apagar_aluno_com_pagamento_responde_400_com_conflito() {
        let app = app().await;
        app.clone()
            .oneshot(requisicao(
                "POST",
                "/alunos",
                json!({ "aluno_id": "123", "nome": "João" }),
            ))
            .await
            .unwrap();
        app.clone()
            .oneshot(requisicao(
                "POST",
                "/pagamentos",
                json!({ "id_aluno": "123", "data_pagamento": "2024-03-01", "valor_pago": 150.0 }),
            ))
            .await
            .unwrap();

        let resposta = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/alunos/123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resposta.status(), StatusCode::BAD_REQUEST);
        let corpo = corpo_json(resposta).await;
        assert!(corpo["error"].as_str().unwrap().contains("pagamentos"));
    }

    #[tokio::test]
    async fn login_devolve_o_nivel_e_nunca_vaza_existencia() {
        let app = app().await;
        app.clone()
            .oneshot(requisicao(
                "POST",
                "/usuarios",
                json!({ "login": "maria", "senha": "senha123", "nivel_acesso": "admin" }),
            ))
            .await
            .unwrap();

        let resposta = app
            .clone()
            .oneshot(requisicao(
                "POST",
                "/login",
                json!({ "login": "maria", "senha": "senha123" }),
            ))
            .await
            .unwrap();
        assert_eq!(resposta.status(), StatusCode::OK);
        let corpo = corpo_json(resposta).await;
        assert_eq!(corpo["nivel_acesso"], "admin");
        assert_eq!(corpo["message"], "Login bem-sucedido");

        // Senha errada e login inexistente: ambos 401, nunca 404.
        let errada = app
            .clone()
            .oneshot(requisicao(
                "POST",
                "/login",
                json!({ "login": "maria", "senha": "errada99" }),
            ))
            .await
            .unwrap();
        assert_eq!(errada.status(), StatusCode::UNAUTHORIZED);

        let inexistente = app
            .clone()
            .oneshot(requisicao(
                "POST",
                "/login",
                json!({ "login": "fantasma", "senha": "senha123" }),
            ))
            .await
            .unwrap();
        assert_eq!(inexistente.status(), StatusCode::UNAUTHORIZED);

        // Campos ausentes: 400.
        let incompleto = app
            .oneshot(requisicao("POST", "/login", json!({ "login": "maria" })))
            .await
            .unwrap();
        assert_eq!(incompleto.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            corpo_json(incompleto).await["error"],
            "Informe login e senha"
        );
    }

    #[tokio::test]
    async fn respostas_de_usuario_nao_incluem_a_senha() {
        let app = app().await;
        app.clone()
            .oneshot(requisicao(
                "POST",
                "/usuarios",
                json!({ "login": "maria", "senha": "senha123" }),
            ))
            .await
            .unwrap();

        let resposta = app
            .oneshot(
                Request::builder()
                    .uri("/usuarios")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let corpo = corpo_json(resposta).await;
        let usuario = &corpo.as_array().unwrap()[0];
        assert_eq!(usuario["login"], "maria");
        assert!(usuario.get("senha").is_none());
    }
}
