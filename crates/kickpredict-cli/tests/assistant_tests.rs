//! Chat assistant tests against a mocked prediction service.

use kickpredict_cli::render;
use kickpredict_cli::{Assistant, SessionContext};
use kickpredict_domain::ChatRole;
use kickpredict_extractor::ExtractorConfig;
use kickpredict_llm::MockProvider;
use kickpredict_sdk::{CategoryCatalog, PredictorClient};
use wiremock::{
    matchers::{body_partial_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

const PROJECT: &str = "Analise meu projeto: Nome: power Categoria: Games Meta: $10,000 \
                       País: US Início: 2025-07-03 Fim: 2025-08-02";

fn assistant(server: &MockServer, llm: Option<MockProvider>) -> Assistant<MockProvider> {
    let client = PredictorClient::new(&server.uri()).expect("Failed to create client");
    Assistant::new(llm, ExtractorConfig::default(), CategoryCatalog::new(client))
}

async fn mount_prediction(server: &MockServer, probability: f64) {
    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(body_partial_json(serde_json::json!({
            "name": "power",
            "main_category": "Games",
            "country": "US",
            "launched": "2025-07-03",
            "deadline": "2025-08-02"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success_probability": probability,
            "prediction": "Sucesso",
            "confidence": "Alta",
            "threshold_used": 0.5,
            "recommendations": ["Adicione um vídeo de apresentação"]
        })))
        .mount(server)
        .await;
}

async fn mount_categories(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/info/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "categories": [
                {"value": "Games", "description": "Jogos", "avg_success": "47%"},
                {"value": "Dance", "description": "Dança", "avg_success": "72%"}
            ]
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn prediction_report_for_structured_message() {
    let server = MockServer::start().await;
    mount_prediction(&server, 0.62).await;
    mount_categories(&server).await;

    let assistant = assistant(&server, None);
    let mut session = SessionContext::default();

    let reply = assistant.respond(&mut session, PROJECT).await;

    assert!(reply.starts_with("🟢 ALTA CHANCE DE SUCESSO!"));
    assert!(reply.contains("📊 TAXA DE SUCESSO: 62.0%"));
    assert!(reply.contains("(Taxa média de sucesso: 47%)"));
    assert!(reply.contains("- Adicione um vídeo de apresentação"));
    assert!(reply.contains("Regex (local/gratuito)"));
    assert!(!reply.contains("Análise Personalizada"));

    let analysis = session.analysis().expect("analysis stored");
    assert_eq!(analysis.record.name(), "power");
    assert_eq!(session.history().count(), 2);
}

#[tokio::test]
async fn unparseable_project_gets_format_help() {
    let server = MockServer::start().await;
    let assistant = assistant(&server, None);
    let mut session = SessionContext::default();

    let reply = assistant.respond(&mut session, "pode prever isto?").await;

    assert_eq!(reply, render::EXTRACTION_HELP);
    assert!(session.analysis().is_none());
}

#[tokio::test]
async fn service_error_is_reported_in_chat() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Modelo não carregado"))
        .mount(&server)
        .await;

    let assistant = assistant(&server, None);
    let mut session = SessionContext::default();

    let reply = assistant.respond(&mut session, PROJECT).await;

    assert!(reply.starts_with("❌ Erro ao fazer predição"));
    assert!(session.analysis().is_none());
}

#[tokio::test]
async fn canned_replies_without_llm() {
    let server = MockServer::start().await;
    mount_categories(&server).await;

    let assistant = assistant(&server, None);
    let mut session = SessionContext::default();

    assert_eq!(assistant.respond(&mut session, "Olá!").await, render::GREETING);

    let categories = assistant.respond(&mut session, "quais categorias existem?").await;
    assert!(categories.contains("- Dance (72% sucesso)"));

    assert_eq!(
        assistant.respond(&mut session, "qual o sentido da vida").await,
        render::NOT_UNDERSTOOD
    );
}

#[tokio::test]
async fn llm_chat_carries_history() {
    let server = MockServer::start().await;
    let llm = MockProvider::new("Foque em um bom vídeo.");
    let assistant = assistant(&server, Some(llm.clone()));
    let mut session = SessionContext::default();

    let first = assistant.respond(&mut session, "como melhorar minha campanha?").await;
    assert_eq!(first, "Foque em um bom vídeo.");

    assistant.respond(&mut session, "e as recompensas?").await;

    let request = llm.last_request().expect("request recorded");
    assert_eq!(request.temperature, 0.7);
    assert_eq!(request.max_tokens, Some(1000));
    assert_eq!(request.messages.len(), 4);
    assert_eq!(request.messages[0].role, ChatRole::System);
    assert_eq!(request.messages[1].content, "como melhorar minha campanha?");
    assert_eq!(request.messages[2].role, ChatRole::Assistant);
    assert_eq!(request.messages[3].content, "e as recompensas?");
    assert_eq!(llm.call_count(), 2);
}

#[tokio::test]
async fn llm_error_becomes_apology() {
    let server = MockServer::start().await;
    let assistant = assistant(&server, Some(MockProvider::failing()));
    let mut session = SessionContext::default();

    let reply = assistant.respond(&mut session, "me dê dicas").await;

    assert!(reply.starts_with("Desculpe, houve um erro ao processar sua mensagem"));
}

#[tokio::test]
async fn advisory_commands_need_a_project() {
    let server = MockServer::start().await;
    let llm = MockProvider::new("Títulos");
    let assistant = assistant(&server, Some(llm.clone()));
    let mut session = SessionContext::default();

    assert_eq!(assistant.titles(&mut session).await, render::NO_PROJECT);
    assert_eq!(assistant.strategy(&mut session).await, render::NO_PROJECT);
    assert_eq!(assistant.analyze(&mut session).await, render::NO_PROJECT);
    assert_eq!(llm.call_count(), 0);
}

#[tokio::test]
async fn advisory_commands_use_project_context() {
    let server = MockServer::start().await;
    mount_prediction(&server, 0.45).await;
    mount_categories(&server).await;

    let llm = MockProvider::new("1. Power Up");
    let assistant = assistant(&server, Some(llm.clone()));
    let mut session = SessionContext::default();

    assistant.respond(&mut session, PROJECT).await;
    assert_eq!(llm.call_count(), 0);

    let titles = assistant.titles(&mut session).await;
    assert_eq!(titles, "1. Power Up");

    let request = llm.last_request().expect("request recorded");
    assert!(request.messages[1].content.contains("Contexto atual do projeto"));
    assert!(request.messages[1].content.contains("- Nome: power"));
}

#[tokio::test]
async fn advisory_templates_without_llm() {
    let server = MockServer::start().await;
    mount_prediction(&server, 0.45).await;
    mount_categories(&server).await;

    let assistant = assistant(&server, None);
    let mut session = SessionContext::default();
    assistant.respond(&mut session, PROJECT).await;

    assert_eq!(assistant.titles(&mut session).await, render::TITLE_TEMPLATE);
    assert!(assistant
        .strategy(&mut session)
        .await
        .starts_with("Estratégia de Campanha para 30 dias"));
    assert_eq!(assistant.analyze(&mut session).await, render::NO_LLM);
}

#[tokio::test]
async fn logged_in_user_gets_personal_analysis() {
    let server = MockServer::start().await;
    mount_prediction(&server, 0.75).await;
    mount_categories(&server).await;

    let assistant = assistant(&server, None);
    let mut session = SessionContext::default();
    session.login("Maria@Example.com").unwrap();

    let reply = assistant.respond(&mut session, PROJECT).await;

    assert!(reply.contains("📊 Análise Personalizada para Maria Santos"));
    assert!(reply.contains("10.0% mais chance que sua média histórica (65%)"));
}
