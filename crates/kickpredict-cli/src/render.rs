//! User-facing chat texts.

use crate::session::Analysis;
use kickpredict_domain::{CategoryInfo, CreatorProfile, SuccessBand};

/// Reply to greetings
pub const GREETING: &str = "Como posso ajudar com seu projeto hoje?";

/// Reply when no project data could be extracted
pub const EXTRACTION_HELP: &str = "\
❌ Não consegui entender os dados do seu projeto.

📝 Por favor, use um destes formatos:

Formato completo (recomendado):
    Analise meu projeto:
    Nome: [nome do projeto]
    Categoria: [categoria]
    Meta: $[valor]
    País: [código de 2 letras]
    Início: YYYY-MM-DD
    Fim: YYYY-MM-DD

Formato simplificado:
    Nome: [projeto] Categoria: [categoria] Meta: $[valor]

Exemplos que funcionam:
- Analise meu projeto: Nome: SmartHome Categoria: Technology Meta: $15,000 País: US
- Nome: BoardGame Fun Categoria: Games Meta: $8,000
- projeto EcoBottle design 5000 dolares

Categorias válidas:
- Tecnologia: Technology
- Jogos: Games
- Arte: Art
- Música: Music
- Filme/Vídeo: Film & Video
- Design: Design
- Outras: Comics, Theater, Food, Photography, Fashion, Dance, Journalism, Crafts, Publishing

💡 Dicas:
- Valores como $10,000, 10.000, 5k ou 20 mil são aceitos
- Use códigos de país: US, BR, GB, etc.
- Posso entender português: \"jogos\" → Games

Tente novamente! Estou aqui para ajudar 😊";

/// Reply when nothing matched and no LLM is configured
pub const NOT_UNDERSTOOD: &str = "\
Desculpe, não entendi sua pergunta.

Posso ajudar com:
- Prever sucesso do seu projeto
- Listar categorias disponíveis
- Dar dicas para melhorar suas chances

Para fazer uma predição, envie os dados do projeto no formato estruturado.";

/// Reply to advisory requests before any project was analyzed
pub const NO_PROJECT: &str =
    "📭 Nenhum projeto analisado ainda. Envie os dados do seu projeto para uma predição primeiro.";

/// Reply to `/analyze` without an LLM
pub const NO_LLM: &str =
    "⚠️ Nenhum LLM configurado. Configure OPENAI_API_KEY no arquivo .env para usar esta funcionalidade.";

/// Notice shown while the prediction model is not loaded
pub const MODEL_NOT_LOADED: &str = "\
🚨 O modelo ainda não foi treinado na API. É necessário treinar o modelo antes de usar o sistema.
Use /train para iniciar o treinamento (leva cerca de 2-5 minutos) e /health para verificar o status.";

/// Title advice used without an LLM
pub const TITLE_TEMPLATE: &str = "\
Sugestões de títulos baseadas em padrões de sucesso:

1. [Adjetivo] + [Produto] + [Benefício]
   - Ex: \"Revolutionary Solar Charger for Travelers\"

2. [Problema] + [Solução] + [Diferencial]
   - Ex: \"Never Lose Keys Again - Smart Bluetooth Tracker\"

3. [Público] + [Necessidade] + [Inovação]
   - Ex: \"Gamers Ultimate Wireless Controller Experience\"

Dicas:
- Use 4-7 palavras
- Seja específico sobre o que faz
- Inclua um diferencial claro
- Evite jargões técnicos";

/// Campaign plan used without an LLM
pub fn strategy_template(duration_days: i64) -> String {
    format!(
        "\
Estratégia de Campanha para {duration_days} dias:

🚀 Pré-Lançamento (7 dias antes):
- Criar lista de e-mail com interessados
- Preparar conteúdo visual (vídeo + imagens)
- Engajar comunidade nas redes sociais
- Definir recompensas early bird (25% desconto)

📈 Semana 1 - Momentum Inicial:
- Objetivo: 30% da meta
- Ativar lista de e-mail no dia 1
- Postar em grupos relevantes
- Atualização diária nas primeiras 48h

🎯 Semanas 2-3 - Manutenção:
- Objetivo: 70% da meta
- Atualizações 2x por semana
- Adicionar stretch goals se > 50%
- Engajar apoiadores como embaixadores

🏁 Última Semana - Sprint Final:
- Objetivo: 100%+ da meta
- Campanha \"últimas horas\"
- Oferecer bônus limitados
- Live/AMA com criadores

📊 Métricas para acompanhar:
- Taxa de conversão de visitantes
- Ticket médio por apoiador
- Origem do tráfego
- Engajamento nas atualizações"
    )
}

/// Category list with success rates
pub fn category_list(categories: &[CategoryInfo]) -> String {
    let lines = categories
        .iter()
        .map(|info| format!("- {} ({} sucesso)", info.value, info.avg_success))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Categorias disponíveis no Kickstarter:\n\n{}\n\n\
         As categorias com maior taxa de sucesso são Dance, Theater e Comics!",
        lines
    )
}

/// Greeting shown after `/login`
pub fn welcome_back(profile: &CreatorProfile) -> String {
    let categories = profile
        .categories
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "👋 Bem-vindo de volta, {}!\n{} | {} anos de experiência | {} projetos | Taxa de sucesso: {}\nEspecialista em: {}",
        profile.name,
        profile.role,
        profile.years_experience,
        profile.project_count,
        percent(profile.success_rate, 0),
        categories
    )
}

fn band_header(band: SuccessBand) -> (&'static str, &'static str) {
    match band {
        SuccessBand::High => ("🟢", "ALTA CHANCE DE SUCESSO!"),
        SuccessBand::Moderate => ("🟡", "CHANCE MODERADA"),
        SuccessBand::Low => ("🟠", "CHANCE BAIXA - PRECISA MELHORAR"),
        SuccessBand::HighRisk => ("🔴", "ALTO RISCO DE FRACASSO!"),
    }
}

/// Personal comparison against the creator's history
pub fn personal_analysis(profile: &CreatorProfile, analysis: &Analysis) -> String {
    let mut text = String::new();
    let category = analysis.record.category();

    if profile.success_rate > 0.0 {
        let delta = profile.delta_from(analysis.prediction.success_probability);
        text.push_str(&format!("📊 Análise Personalizada para {}:\n", profile.name));
        if delta > 0.0 {
            text.push_str(&format!(
                "✅ Este projeto tem {:.1}% mais chance que sua média histórica ({})!",
                delta * 100.0,
                percent(profile.success_rate, 0)
            ));
        } else {
            text.push_str(&format!(
                "⚠️ Este projeto está {:.1}% abaixo da sua média histórica ({})",
                delta.abs() * 100.0,
                percent(profile.success_rate, 0)
            ));
        }
        text.push('\n');
    }

    if profile.has_experience_in(category) {
        text.push_str(&format!(
            "✅ Você tem experiência em {}. Isso é um diferencial!",
            category
        ));
    } else {
        text.push_str(&format!(
            "💡 Primeira vez em {}? Considere buscar mentoria nesta área.",
            category
        ));
    }

    text
}

/// Full prediction report
pub fn report(analysis: &Analysis, avg_success: &str, creator: Option<&CreatorProfile>) -> String {
    let record = &analysis.record;
    let prediction = &analysis.prediction;
    let (emoji, status) = band_header(prediction.band());
    let position = if prediction.success_probability > prediction.threshold_used {
        "acima"
    } else {
        "abaixo"
    };

    let mut text = format!(
        "{emoji} {status}\n\n\
         🎯 Análise do Projeto: {name}\n\n\
         📊 TAXA DE SUCESSO: {probability}\n\
         🔮 PREDIÇÃO: {label}\n\
         💪 CONFIANÇA: {confidence}\n\n\
         📋 Detalhes do Projeto:\n\
         - 🎬 Categoria: {category} (Taxa média de sucesso: {avg_success})\n\
         - 💰 Meta: ${goal}\n\
         - 🌍 País: {country}\n\
         - 📅 Duração: {days} dias\n\
         - 🚀 Período: {launched} até {deadline}\n\n\
         🎲 Threshold do modelo: {threshold}\n\
         Sua probabilidade está {margin:.1}% {position} do threshold.\n",
        name = record.name(),
        probability = percent(prediction.success_probability, 1),
        label = prediction.prediction.to_uppercase(),
        confidence = prediction.confidence,
        category = record.category(),
        goal = thousands(record.goal(), 0),
        country = record.country(),
        days = record.duration_days(),
        launched = record.launched(),
        deadline = record.deadline(),
        threshold = percent(prediction.threshold_used, 1),
        margin = prediction.margin() * 100.0,
    );

    if !prediction.recommendations.is_empty() {
        text.push_str("\n💡 Recomendações Personalizadas:\n");
        for recommendation in &prediction.recommendations {
            text.push_str(&format!("- {}\n", recommendation));
        }
    }

    if let Some(profile) = creator {
        text.push('\n');
        text.push_str(&personal_analysis(profile, analysis));
        text.push('\n');
    }

    text.push_str("\n📈 Próximos Passos:\n");
    text.push_str(if prediction.success_probability >= 0.5 {
        "✅ Você está no caminho certo! Foque na execução e marketing.\n"
    } else {
        "⚠️ Recomendo ajustar alguns aspectos antes de lançar.\n"
    });

    text.push_str(
        "\nQuer que eu:\n\
         - 📝 Sugira títulos melhores? (/titles)\n\
         - 📅 Crie um cronograma de campanha? (/strategy)\n\
         - 🔍 Faça uma análise detalhada? (/analyze)\n",
    );

    text.push_str(&format!("\n📝 Dados extraídos via: {}", analysis.method));
    text
}

/// Format a ratio as a percentage, e.g. `0.625` with 1 decimal as "62.5%"
pub fn percent(ratio: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, ratio * 100.0)
}

/// Format a number with comma thousands separators
pub fn thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match formatted.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    match fraction {
        Some(fraction) => format!("{}{}.{}", sign, grouped, fraction),
        None => format!("{}{}", sign, grouped),
    }
}
