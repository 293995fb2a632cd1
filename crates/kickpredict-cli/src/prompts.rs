//! Prompts for the free-chat and advisory LLM calls.

use crate::render::{percent, thousands};
use crate::session::Analysis;
use kickpredict_domain::CreatorProfile;

/// System instructions of the crowdfunding consultant
pub const CONSULTANT: &str = "\
Você é um consultor especialista em crowdfunding do Kickstarter com 10 anos de experiência.

REGRA CRÍTICA: Você NUNCA deve inventar taxas de sucesso ou probabilidades.
Se o usuário pedir uma predição, oriente-o a enviar os dados do projeto para que o modelo real calcule a probabilidade exata.
NUNCA diga coisas como \"aproximadamente 75%\" ou invente números.

Você tem acesso a:
- Um modelo preditivo treinado com mais de 300.000 projetos
- Dados estatísticos sobre taxas de sucesso por categoria
- Histórico de projetos do usuário, quando disponível

Ao comentar uma predição, SEMPRE:
1. Use os dados REAIS retornados pela API
2. Mostre a taxa EXATA de sucesso
3. Considere o histórico do usuário se disponível
4. Seja direto e objetivo";

fn categories_of(profile: &CreatorProfile) -> String {
    profile
        .categories
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Current project and its prediction, as system context
pub fn project_context(analysis: &Analysis) -> String {
    let record = &analysis.record;
    let prediction =
        serde_json::to_string_pretty(&analysis.prediction).unwrap_or_else(|_| "{}".to_string());

    format!(
        "Contexto atual do projeto:\n\
         - Nome: {}\n\
         - Categoria: {}\n\
         - Meta: ${}\n\
         - País: {}\n\
         - Duração: {} dias\n\n\
         Resultados da predição:\n{}",
        record.name(),
        record.category(),
        thousands(record.goal(), 2),
        record.country(),
        record.duration_days(),
        prediction
    )
}

/// Creator background, as system context
pub fn user_context(profile: &CreatorProfile) -> String {
    format!(
        "Informações do usuário atual:\n\
         - Nome: {}\n\
         - Cargo: {}\n\
         - Experiência: {} anos\n\
         - Projetos anteriores: {}\n\
         - Taxa de sucesso pessoal: {}\n\
         - Experiência em categorias: {}\n\n\
         Use essas informações para personalizar suas recomendações.",
        profile.name,
        profile.role,
        profile.years_experience,
        profile.project_count,
        percent(profile.success_rate, 0),
        categories_of(profile)
    )
}

/// Request for better project titles
pub fn titles(analysis: &Analysis) -> String {
    format!(
        "O título atual do projeto é: \"{}\"\n\
         Categoria: {}\n\n\
         Sugira 3 títulos melhores que:\n\
         1. Sejam mais atrativos e descritivos\n\
         2. Incluam palavras-chave relevantes para SEO\n\
         3. Tenham entre 4-7 palavras\n\
         4. Comuniquem claramente o valor do projeto\n\n\
         Para cada sugestão, explique brevemente por que é melhor.",
        analysis.record.name(),
        analysis.record.category()
    )
}

/// Request for a campaign plan
pub fn strategy(analysis: &Analysis, creator: Option<&CreatorProfile>) -> String {
    let record = &analysis.record;
    let mut prompt = format!(
        "Crie um plano estratégico de {} dias para maximizar o sucesso desta campanha:\n\n\
         Projeto: {}\n\
         Categoria: {}\n\
         Meta: ${}\n\
         Probabilidade atual: {}\n",
        record.duration_days(),
        record.name(),
        record.category(),
        thousands(record.goal(), 2),
        percent(analysis.prediction.success_probability, 1)
    );

    if let Some(profile) = creator {
        prompt.push_str(&format!(
            "\nConsidere o perfil do usuário:\n\
             - {} tem {} anos de experiência\n\
             - Taxa de sucesso histórica: {}\n\
             - Já trabalhou com: {}\n",
            profile.name,
            profile.years_experience,
            percent(profile.success_rate, 0),
            categories_of(profile)
        ));
    }

    prompt.push_str(
        "\nInclua:\n\
         1. Cronograma detalhado (pré-lançamento, lançamento, meio, final)\n\
         2. Metas de arrecadação por semana\n\
         3. Estratégias de marketing específicas\n\
         4. Momentos-chave para atualizações\n\
         5. Táticas para manter momentum\n\n\
         Seja prático e específico, considerando a experiência do usuário.",
    );
    prompt
}

/// Request for an in-depth analysis
pub fn analysis(analysis: &Analysis, creator: Option<&CreatorProfile>) -> String {
    let record =
        serde_json::to_string_pretty(&analysis.record).unwrap_or_else(|_| "{}".to_string());
    let prediction =
        serde_json::to_string_pretty(&analysis.prediction).unwrap_or_else(|_| "{}".to_string());

    let mut prompt = format!(
        "Analise este projeto Kickstarter e forneça insights detalhados:\n\n\
         Dados do Projeto:\n{}\n\n\
         Resultado da Predição:\n{}\n",
        record, prediction
    );

    if let Some(profile) = creator {
        prompt.push_str(&format!(
            "\nConsidere também o perfil do usuário:\n\
             - {} ({})\n\
             - {} anos de experiência\n\
             - Taxa de sucesso histórica: {}\n\
             - Experiência em: {}\n",
            profile.name,
            profile.role,
            profile.years_experience,
            percent(profile.success_rate, 0),
            categories_of(profile)
        ));
    }

    prompt.push_str(
        "\nPor favor, forneça:\n\
         1. Análise dos pontos fortes e fracos\n\
         2. 3 sugestões específicas para melhorar as chances\n\
         3. Comparação com projetos bem-sucedidos na mesma categoria\n\
         4. Estratégia de lançamento recomendada personalizada para este usuário\n\n\
         Seja específico e prático.",
    );
    prompt
}
