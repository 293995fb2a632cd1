//! Category module - the closed set of Kickstarter main categories

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kickstarter main category
///
/// The prediction model only knows these 15 labels. Free text is mapped onto
/// them with [`Category::normalize`], which never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    /// Films, documentaries, videos
    FilmVideo,
    /// Albums, concerts, instruments
    Music,
    /// Books, magazines, e-books
    Publishing,
    /// Board games, card games, RPGs, video games
    Games,
    /// Gadgets, apps, hardware
    Technology,
    /// Products, furniture, accessories
    Design,
    /// Paintings, sculptures, installations
    Art,
    /// Comics, graphic novels, manga
    Comics,
    /// Plays, musicals, performances
    Theater,
    /// Restaurants, food products
    Food,
    /// Photo projects and photo books
    Photography,
    /// Clothing, footwear, accessories
    Fashion,
    /// Shows, workshops, dance videos
    Dance,
    /// Reporting, journalistic documentaries
    Journalism,
    /// Handicraft, DIY, kits
    Crafts,
}

/// Aliases consulted by [`Category::normalize`], in priority order.
///
/// Only these keys take part in the substring pass. Canonical labels in
/// any letter case are matched exactly and never by containment.
pub const CATEGORY_ALIASES: &[(&str, Category)] = &[
    ("filme", Category::FilmVideo),
    ("vídeo", Category::FilmVideo),
    ("video", Category::FilmVideo),
    ("música", Category::Music),
    ("musica", Category::Music),
    ("publicação", Category::Publishing),
    ("publicacao", Category::Publishing),
    ("livro", Category::Publishing),
    ("jogos", Category::Games),
    ("jogo", Category::Games),
    ("game", Category::Games),
    ("tecnologia", Category::Technology),
    ("tech", Category::Technology),
    ("design", Category::Design),
    ("arte", Category::Art),
    ("quadrinhos", Category::Comics),
    ("hq", Category::Comics),
    ("teatro", Category::Theater),
    ("comida", Category::Food),
    ("alimentação", Category::Food),
    ("fotografia", Category::Photography),
    ("foto", Category::Photography),
    ("moda", Category::Fashion),
    ("dança", Category::Dance),
    ("danca", Category::Dance),
    ("jornalismo", Category::Journalism),
    ("artesanato", Category::Crafts),
];

impl Category {
    /// Every category, in the order the service documents them
    pub const ALL: [Category; 15] = [
        Category::FilmVideo,
        Category::Music,
        Category::Publishing,
        Category::Games,
        Category::Technology,
        Category::Design,
        Category::Art,
        Category::Comics,
        Category::Theater,
        Category::Food,
        Category::Photography,
        Category::Fashion,
        Category::Dance,
        Category::Journalism,
        Category::Crafts,
    ];

    /// Category used when nothing else matches
    pub const FALLBACK: Category = Category::Technology;

    /// Canonical label understood by the prediction service
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::FilmVideo => "Film & Video",
            Category::Music => "Music",
            Category::Publishing => "Publishing",
            Category::Games => "Games",
            Category::Technology => "Technology",
            Category::Design => "Design",
            Category::Art => "Art",
            Category::Comics => "Comics",
            Category::Theater => "Theater",
            Category::Food => "Food",
            Category::Photography => "Photography",
            Category::Fashion => "Fashion",
            Category::Dance => "Dance",
            Category::Journalism => "Journalism",
            Category::Crafts => "Crafts",
        }
    }

    /// Exact, case-sensitive match against the canonical labels
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == label)
    }

    /// Map arbitrary text onto a category.
    ///
    /// Tries, in order: exact canonical label, canonical label ignoring
    /// case, exact alias (lowercased, trimmed), substring containment in
    /// either direction against the alias keys, and finally
    /// [`Category::FALLBACK`].
    ///
    /// # Examples
    ///
    /// ```
    /// use kickpredict_domain::Category;
    ///
    /// assert_eq!(Category::normalize("Games"), Category::Games);
    /// assert_eq!(Category::normalize("jogos"), Category::Games);
    /// assert_eq!(Category::normalize("jogos de tabuleiro"), Category::Games);
    /// assert_eq!(Category::normalize("???"), Category::Technology);
    /// ```
    pub fn normalize(raw: &str) -> Self {
        if let Some(category) = Self::from_label(raw) {
            return category;
        }

        let lowered = raw.trim().to_lowercase();
        if lowered.is_empty() {
            return Self::FALLBACK;
        }

        if let Some(category) = Self::ALL
            .into_iter()
            .find(|c| c.as_str().to_lowercase() == lowered)
        {
            return category;
        }

        if let Some((_, category)) = CATEGORY_ALIASES.iter().find(|(key, _)| *key == lowered) {
            return *category;
        }

        CATEGORY_ALIASES
            .iter()
            .find(|(key, _)| lowered.contains(key) || key.contains(lowered.as_str()))
            .map(|(_, category)| *category)
            .unwrap_or(Self::FALLBACK)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| format!("Invalid category: {}", s))
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Self::normalize(&value)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}
