use serde::Serialize;

/// A single baking recipe. Defined statically and never mutated.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    /// Total time in minutes.
    pub time: u32,
    pub difficulty: &'static str,
    pub image: Option<&'static str>,
    pub ingredients: &'static [&'static str],
    /// Execution order matters.
    pub steps: &'static [&'static str],
}

impl Recipe {
    /// "Cookies • 30 mins • Easy"
    pub fn meta_line(&self) -> String {
        format!("{} • {} mins • {}", self.category, self.time, self.difficulty)
    }

    /// Case-insensitive substring match against the title or any ingredient.
    /// `needle` must already be lowercased.
    pub(crate) fn mentions(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self
                .ingredients
                .iter()
                .any(|ingredient| ingredient.to_lowercase().contains(needle))
    }
}
