//! Demo creator profiles available through `/login`.

use kickpredict_domain::{Category, CreatorProfile, PastProject};
use once_cell::sync::Lazy;

/// A demo account: login email and creator history
#[derive(Debug, Clone)]
pub struct DemoUser {
    /// Login email
    pub email: &'static str,
    /// Creator history shown in personalized analyses
    pub profile: CreatorProfile,
}

fn past(name: &str, category: Category, succeeded: bool, goal: f64) -> PastProject {
    PastProject {
        name: name.to_string(),
        category,
        succeeded,
        goal,
    }
}

/// All demo accounts
pub static DEMO_USERS: Lazy<Vec<DemoUser>> = Lazy::new(|| {
    vec![
        DemoUser {
            email: "joao@example.com",
            profile: CreatorProfile {
                name: "João Silva".to_string(),
                role: "Gerente de Projetos".to_string(),
                years_experience: 5,
                project_count: 15,
                success_rate: 0.80,
                categories: vec![Category::Technology, Category::Design],
                past_projects: vec![
                    past("Smart Home App", Category::Technology, true, 25_000.0),
                    past("Eco Design Kit", Category::Design, true, 15_000.0),
                    past("AI Assistant", Category::Technology, false, 50_000.0),
                ],
            },
        },
        DemoUser {
            email: "maria@example.com",
            profile: CreatorProfile {
                name: "Maria Santos".to_string(),
                role: "Analista de Projetos".to_string(),
                years_experience: 3,
                project_count: 10,
                success_rate: 0.65,
                categories: vec![Category::Games, Category::Art],
                past_projects: vec![
                    past("Board Game Adventure", Category::Games, true, 10_000.0),
                    past("Digital Art Gallery", Category::Art, true, 8_000.0),
                    past("Mobile Game RPG", Category::Games, false, 30_000.0),
                ],
            },
        },
        DemoUser {
            email: "pedro@example.com",
            profile: CreatorProfile {
                name: "Pedro Oliveira".to_string(),
                role: "Coordenador de Projetos".to_string(),
                years_experience: 8,
                project_count: 25,
                success_rate: 0.90,
                categories: vec![Category::FilmVideo, Category::Music, Category::Publishing],
                past_projects: vec![
                    past("Documentary Series", Category::FilmVideo, true, 40_000.0),
                    past("Music Album", Category::Music, true, 12_000.0),
                ],
            },
        },
    ]
});

/// Look up a demo account by email, ignoring case and surrounding spaces
pub fn find_user(email: &str) -> Option<&'static DemoUser> {
    let email = email.trim();
    DEMO_USERS
        .iter()
        .find(|user| user.email.eq_ignore_ascii_case(email))
}
