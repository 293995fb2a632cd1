//! Chat replies: prediction intent, canned answers, LLM chat and advice.

use crate::config::Config;
use crate::error::Result;
use crate::prompts;
use crate::render;
use crate::session::{Analysis, SessionContext};
use kickpredict_domain::{ChatMessage, ChatRequest, LlmProvider};
use kickpredict_extractor::{Extractor, ExtractorConfig};
use kickpredict_llm::ConfiguredProvider;
use kickpredict_sdk::{CategoryCatalog, PredictorClient};
use tracing::{info, warn};

/// Words that ask for a prediction
pub const PREDICTION_KEYWORDS: [&str; 7] = [
    "predict",
    "prever",
    "chance",
    "probabilidade",
    "analisar projeto",
    "analyze",
    "analise",
];

const GREETING_WORDS: [&str; 7] = ["oi", "olá", "ola", "hello", "hi", "início", "inicio"];
const GREETING_STEMS: [&str; 3] = ["começ", "comec", "ajud"];

/// Temperature of free chat and advisory calls
pub const CHAT_TEMPERATURE: f32 = 0.7;

/// Completion budget of free chat and advisory calls
pub const CHAT_MAX_TOKENS: u32 = 1000;

/// Whether the message asks for a prediction
pub fn wants_prediction(message: &str) -> bool {
    let lower = message.to_lowercase();
    PREDICTION_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

fn is_greeting(lower: &str) -> bool {
    lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .any(|word| {
            GREETING_WORDS.contains(&word) || GREETING_STEMS.iter().any(|stem| word.starts_with(stem))
        })
}

fn asks_for_categories(lower: &str) -> bool {
    lower.contains("categoria") || lower.contains("categories")
}

/// Answers chat messages
///
/// Every public method returns display text; failures are turned into
/// messages rather than errors.
pub struct Assistant<L: LlmProvider + Clone> {
    extractor: Extractor<L>,
    catalog: CategoryCatalog,
    llm: Option<L>,
}

impl Assistant<ConfiguredProvider> {
    /// Build the assistant described by the configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let profile = config.get_active_profile()?;
        let client = PredictorClient::new(&profile.api_url)?;
        let llm = ConfiguredProvider::from_config(&config.llm)?;

        Ok(Self::new(llm, config.extractor.clone(), CategoryCatalog::new(client)))
    }
}

impl<L: LlmProvider + Clone> Assistant<L> {
    /// Create an assistant; `llm` serves both extraction fallback and chat
    pub fn new(llm: Option<L>, extractor_config: ExtractorConfig, catalog: CategoryCatalog) -> Self {
        Self {
            extractor: Extractor::new(llm.clone(), extractor_config),
            catalog,
            llm,
        }
    }

    /// The project extractor
    pub fn extractor(&self) -> &Extractor<L> {
        &self.extractor
    }

    /// The cached service front
    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    /// Whether an LLM is configured
    pub fn has_llm(&self) -> bool {
        self.llm.is_some()
    }

    /// Reply to one chat message and record the exchange
    pub async fn respond(&self, session: &mut SessionContext, message: &str) -> String {
        let reply = if wants_prediction(message) {
            self.predict(session, message).await
        } else if self.llm.is_some() {
            self.chat(session, message).await
        } else {
            self.canned_reply(message).await
        };

        session.record_turn(message, &reply);
        reply
    }

    async fn predict(&self, session: &mut SessionContext, message: &str) -> String {
        let extraction = match self.extractor.extract(message).await {
            Ok(extraction) => extraction,
            Err(failure) => {
                info!(%failure, "No project data extracted");
                return render::EXTRACTION_HELP.to_string();
            }
        };

        let prediction = match self.catalog.client().predict(&extraction.record).await {
            Ok(prediction) => prediction,
            Err(error) => {
                warn!(%error, "Prediction request failed");
                return format!("❌ Erro ao fazer predição: {}", error);
            }
        };

        let analysis = Analysis {
            record: extraction.record,
            prediction,
            method: extraction.method,
        };
        let avg_success = self.catalog.avg_success(analysis.record.category()).await;
        let reply = render::report(&analysis, &avg_success, session.creator());
        session.set_analysis(analysis);
        reply
    }

    async fn canned_reply(&self, message: &str) -> String {
        let lower = message.to_lowercase();
        if is_greeting(&lower) {
            render::GREETING.to_string()
        } else if asks_for_categories(&lower) {
            render::category_list(&self.catalog.categories().await)
        } else {
            render::NOT_UNDERSTOOD.to_string()
        }
    }

    async fn chat(&self, session: &SessionContext, message: &str) -> String {
        let mut messages = vec![ChatMessage::system(prompts::CONSULTANT)];
        if let Some(analysis) = session.analysis() {
            messages.push(ChatMessage::system(prompts::project_context(analysis)));
        }
        if let Some(profile) = session.creator() {
            messages.push(ChatMessage::system(prompts::user_context(profile)));
        }
        messages.extend(session.history().cloned());
        messages.push(ChatMessage::user(message));

        self.complete(messages).await
    }

    async fn complete(&self, messages: Vec<ChatMessage>) -> String {
        let Some(llm) = &self.llm else {
            return render::NO_LLM.to_string();
        };

        let request = ChatRequest::new(messages)
            .with_temperature(CHAT_TEMPERATURE)
            .with_max_tokens(CHAT_MAX_TOKENS);

        match llm.chat(&request).await {
            Ok(reply) => reply,
            Err(error) => {
                warn!(%error, model = llm.model(), "Chat completion failed");
                format!("Desculpe, houve um erro ao processar sua mensagem: {}", error)
            }
        }
    }

    // Advisory prompts go straight to the LLM; they contain prediction keywords.

    /// Title suggestions for the last analyzed project
    pub async fn titles(&self, session: &mut SessionContext) -> String {
        let reply = match session.analysis() {
            None => render::NO_PROJECT.to_string(),
            Some(_) if self.llm.is_none() => render::TITLE_TEMPLATE.to_string(),
            Some(analysis) => self.chat(session, &prompts::titles(analysis)).await,
        };
        session.record_turn("/titles", &reply);
        reply
    }

    /// Campaign plan for the last analyzed project
    pub async fn strategy(&self, session: &mut SessionContext) -> String {
        let reply = match session.analysis() {
            None => render::NO_PROJECT.to_string(),
            Some(analysis) if self.llm.is_none() => {
                render::strategy_template(analysis.record.duration_days())
            }
            Some(analysis) => {
                let prompt = prompts::strategy(analysis, session.creator());
                self.chat(session, &prompt).await
            }
        };
        session.record_turn("/strategy", &reply);
        reply
    }

    /// In-depth analysis of the last project; needs an LLM
    pub async fn analyze(&self, session: &mut SessionContext) -> String {
        let reply = match session.analysis() {
            None => render::NO_PROJECT.to_string(),
            Some(_) if self.llm.is_none() => render::NO_LLM.to_string(),
            Some(analysis) => {
                let prompt = prompts::analysis(analysis, session.creator());
                self.chat(session, &prompt).await
            }
        };
        session.record_turn("/analyze", &reply);
        reply
    }
}
