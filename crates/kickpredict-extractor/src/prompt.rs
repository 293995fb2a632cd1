//! LLM prompt for project extraction

use kickpredict_domain::{Category, ChatMessage, ChatRequest};

/// Builds the chat request that asks the LLM for a project JSON object
pub struct PromptBuilder<'a> {
    message: &'a str,
    temperature: f32,
}

impl<'a> PromptBuilder<'a> {
    /// Create a new prompt builder for a user message
    pub fn new(message: &'a str) -> Self {
        Self {
            message,
            temperature: 0.1,
        }
    }

    /// Override the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Build the complete request: instructions, then the raw message
    pub fn build(&self) -> ChatRequest {
        ChatRequest::new(vec![
            ChatMessage::system(instructions()),
            ChatMessage::user(self.message),
        ])
        .with_temperature(self.temperature)
    }
}

fn instructions() -> String {
    let categories = Category::ALL
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Extraia as informações do projeto Kickstarter da mensagem do usuário.\n\
         Retorne APENAS um JSON válido com os campos:\n\
         - name: nome do projeto\n\
         - main_category: categoria (deve ser uma das válidas: {categories})\n\
         - country: código do país (2 letras)\n\
         - usd_goal_real: meta em dólares (número)\n\
         - launched: data de início (YYYY-MM-DD)\n\
         - deadline: data fim (YYYY-MM-DD)\n\n\
         Se algum campo não for mencionado, omita-o."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use kickpredict_domain::ChatRole;

    #[test]
    fn test_request_shape() {
        let request = PromptBuilder::new("quero lançar um jogo").build();
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, ChatRole::System);
        assert_eq!(request.messages[1].content, "quero lançar um jogo");
        assert_eq!(request.temperature, 0.1);
        assert!(request.max_tokens.is_none());
    }

    #[test]
    fn test_instructions_list_every_category() {
        let request = PromptBuilder::new("x").with_temperature(0.0).build();
        let system = &request.messages[0].content;
        for category in Category::ALL {
            assert!(system.contains(category.as_str()));
        }
        assert!(system.contains("usd_goal_real"));
        assert_eq!(request.temperature, 0.0);
    }
}
