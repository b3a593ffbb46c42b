use serde::{Deserialize, Serialize};

/// Minimal recipe record shown in list results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: u64,
    pub title: String,
    pub image: String,
    /// Only present for ingredient-match searches; favorites never carry it.
    pub missed_ingredient_count: Option<u32>,
}

/// Full recipe record fetched on demand for the detail view.
/// Not cached across views.
#[derive(Debug, Clone)]
pub struct RecipeDetail {
    pub id: u64,
    pub title: String,
    pub image: String,
    pub ingredient_lines: Vec<String>,
    pub instructions_text: String,
    pub steps: Vec<Step>,
}

/// One instruction step. `number` is 1-based and matches the step's
/// position in the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub number: u32,
    pub text: String,
}

/// A user-pinned recipe, persisted across sessions. Unique by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub id: u64,
    pub title: String,
    pub image: String,
}

impl From<&RecipeSummary> for FavoriteEntry {
    fn from(summary: &RecipeSummary) -> Self {
        FavoriteEntry {
            id: summary.id,
            title: summary.title.clone(),
            image: summary.image.clone(),
        }
    }
}

/// Search criteria, built fresh for every search. Free-text ingredients
/// take priority over the structured filters.
#[derive(Debug, Clone, Default)]
pub struct QueryFilters {
    pub ingredients: String,
    pub diets: Vec<String>,
    pub meals: Vec<String>,
    pub cuisines: Vec<String>,
    pub max_time: Option<u32>,
}

impl QueryFilters {
    /// True when there is nothing to search on.
    pub fn is_empty(&self) -> bool {
        self.ingredients.trim().is_empty()
            && self.diets.is_empty()
            && self.meals.is_empty()
            && self.cuisines.is_empty()
            && self.max_time.is_none()
    }
}

/// Which result set is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Search,
    Favorites,
}
