//! Creator module - project creator history used to personalize replies

use crate::Category;
use serde::{Deserialize, Serialize};

/// A project the creator ran before
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PastProject {
    /// Project title
    pub name: String,
    /// Main category
    pub category: Category,
    /// Whether the campaign reached its goal
    pub succeeded: bool,
    /// Funding goal
    pub goal: f64,
}

/// History and background of a project creator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatorProfile {
    /// Display name
    pub name: String,
    /// Job title
    pub role: String,
    /// Years of experience
    pub years_experience: u32,
    /// Number of projects launched historically
    pub project_count: u32,
    /// Personal success rate in `[0, 1]`
    pub success_rate: f64,
    /// Categories the creator has worked in
    pub categories: Vec<Category>,
    /// Detailed past projects
    pub past_projects: Vec<PastProject>,
}

impl CreatorProfile {
    /// Whether the creator has any track record
    pub fn has_history(&self) -> bool {
        self.project_count > 0
    }

    /// Whether the creator has worked in the given category
    pub fn has_experience_in(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    /// Signed difference between a predicted probability and the personal rate
    pub fn delta_from(&self, probability: f64) -> f64 {
        probability - self.success_rate
    }

    /// Past projects in the given category
    pub fn projects_in(&self, category: Category) -> impl Iterator<Item = &PastProject> {
        self.past_projects
            .iter()
            .filter(move |p| p.category == category)
    }
}

impl Default for CreatorProfile {
    fn default() -> Self {
        Self {
            name: "Novo Usuário".to_string(),
            role: "Criador de Projetos".to_string(),
            years_experience: 0,
            project_count: 0,
            success_rate: 0.0,
            categories: Vec::new(),
            past_projects: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> CreatorProfile {
        CreatorProfile {
            name: "Ana".to_string(),
            role: "Designer".to_string(),
            years_experience: 2,
            project_count: 2,
            success_rate: 0.5,
            categories: vec![Category::Design],
            past_projects: vec![
                PastProject {
                    name: "Lamp".to_string(),
                    category: Category::Design,
                    succeeded: true,
                    goal: 5_000.0,
                },
                PastProject {
                    name: "Zine".to_string(),
                    category: Category::Publishing,
                    succeeded: false,
                    goal: 1_000.0,
                },
            ],
        }
    }

    #[test]
    fn test_default_has_no_history() {
        let default = CreatorProfile::default();
        assert!(!default.has_history());
        assert!(default.categories.is_empty());
    }

    #[test]
    fn test_experience_and_delta() {
        let p = profile();
        assert!(p.has_history());
        assert!(p.has_experience_in(Category::Design));
        assert!(!p.has_experience_in(Category::Games));
        assert!((p.delta_from(0.7) - 0.2).abs() < 1e-9);
        assert_eq!(p.projects_in(Category::Design).count(), 1);
    }
}
