use std::time::Duration;

use log::debug;
use reqwest::{Client, StatusCode};

use crate::config::FinderConfig;
use crate::error::{DetailError, SearchError, SetupError};
use crate::model::{QueryFilters, RecipeDetail, RecipeSummary};

mod wire;

pub use wire::NO_INSTRUCTIONS;

use wire::{DetailPayload, SearchResponse};

/// Client for the recipe API.
///
/// Requests are independent one-shots: issuing a new search does not cancel
/// an earlier one still in flight, so a late response can still reach the
/// caller after a newer one. Callers that care must guard for it themselves.
pub struct RecipeClient {
    client: Client,
    base_url: String,
    api_key: String,
    result_limit: u32,
}

impl RecipeClient {
    /// Create a client against the production API with default limits.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, "https://api.spoonacular.com")
    }

    /// Create a client from loaded configuration.
    ///
    /// The API key is taken from the config, falling back to the
    /// SPOONACULAR_API_KEY environment variable.
    pub fn from_config(config: &FinderConfig) -> Result<Self, SetupError> {
        let api_key = config.resolved_api_key().ok_or(SetupError::MissingApiKey)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(concat!("recipe-finder/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        Ok(RecipeClient {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            result_limit: config.result_limit,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        RecipeClient {
            client: Client::builder()
                .user_agent(concat!("recipe-finder/", env!("CARGO_PKG_VERSION")))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            result_limit: 8,
        }
    }

    /// Search for recipes.
    ///
    /// Free-text ingredients take priority: when `filters.ingredients` is
    /// non-empty the structured filters (diets, meals, cuisines, max time)
    /// are ignored and an ingredient-match query is issued instead. An empty
    /// result list is a successful outcome, not an error.
    pub async fn search(
        &self,
        filters: &QueryFilters,
    ) -> Result<Vec<RecipeSummary>, SearchError> {
        if filters.is_empty() {
            return Err(SearchError::NoCriteria);
        }

        let ingredients = filters.ingredients.trim();
        let request = if !ingredients.is_empty() {
            debug!("ingredient search: {ingredients}");
            self.client
                .get(format!("{}/recipes/findByIngredients", self.base_url))
                .query(&[("ingredients", ingredients)])
                .query(&[("number", self.result_limit)])
        } else {
            debug!(
                "complex search: diets={:?} meals={:?} cuisines={:?} max_time={:?}",
                filters.diets, filters.meals, filters.cuisines, filters.max_time
            );
            let mut request = self
                .client
                .get(format!("{}/recipes/complexSearch", self.base_url))
                .query(&[("number", self.result_limit)]);
            if !filters.diets.is_empty() {
                request = request.query(&[("diet", filters.diets.join(","))]);
            }
            if !filters.meals.is_empty() {
                request = request.query(&[("type", filters.meals.join(","))]);
            }
            if let Some(max_time) = filters.max_time {
                request = request.query(&[("maxReadyTime", max_time)]);
            }
            if !filters.cuisines.is_empty() {
                request = request.query(&[("cuisine", filters.cuisines.join(","))]);
            }
            request
        };

        let response = request
            .query(&[("apiKey", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?;

        let payload: SearchResponse = response.json().await?;
        let summaries = payload.into_summaries();
        debug!("search returned {} recipes", summaries.len());
        Ok(summaries)
    }

    /// Fetch full detail for one recipe.
    ///
    /// Missing instruction text becomes the documented placeholder and a
    /// missing step list becomes an empty sequence; neither is an error.
    pub async fn detail(&self, id: u64) -> Result<RecipeDetail, DetailError> {
        let response = self
            .client
            .get(format!("{}/recipes/{}/information", self.base_url, id))
            .query(&[("apiKey", self.api_key.as_str())])
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(DetailError::NotFound(id));
        }

        let payload: DetailPayload = response.error_for_status()?.json().await?;
        let detail = RecipeDetail::from(payload);
        debug!(
            "loaded detail for recipe {} ({} steps)",
            detail.id,
            detail.steps.len()
        );
        Ok(detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn filters_with_ingredients(ingredients: &str) -> QueryFilters {
        QueryFilters {
            ingredients: ingredients.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_ingredient_search_ignores_structured_filters() {
        let mut server = Server::new_async().await;
        let by_ingredients = server
            .mock("GET", "/recipes/findByIngredients")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("ingredients".into(), "tomato,cheese".into()),
                Matcher::UrlEncoded("number".into(), "8".into()),
                Matcher::UrlEncoded("apiKey".into(), "fake_api_key".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"id": 11, "title": "Caprese", "image": "c.jpg", "missedIngredientCount": 1}]"#)
            .create();
        let complex = server
            .mock("GET", "/recipes/complexSearch")
            .expect(0)
            .create();

        let client = RecipeClient::with_base_url("fake_api_key", server.url());
        let filters = QueryFilters {
            ingredients: "tomato,cheese".to_string(),
            diets: vec!["vegan".to_string()],
            meals: vec!["dinner".to_string()],
            cuisines: vec!["italian".to_string()],
            max_time: Some(20),
        };

        let results = client.search(&filters).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, 11);
        assert_eq!(results[0].missed_ingredient_count, Some(1));
        by_ingredients.assert();
        complex.assert();
    }

    #[tokio::test]
    async fn test_complex_search_sends_only_non_empty_filters() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/recipes/complexSearch")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("diet".into(), "vegan,vegetarian".into()),
                Matcher::UrlEncoded("maxReadyTime".into(), "30".into()),
                Matcher::UrlEncoded("number".into(), "8".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"results": [{"id": 2, "title": "Salad", "image": "s.jpg"}]}"#)
            .create();

        let client = RecipeClient::with_base_url("fake_api_key", server.url());
        let filters = QueryFilters {
            diets: vec!["vegan".to_string(), "vegetarian".to_string()],
            max_time: Some(30),
            ..Default::default()
        };

        let results = client.search(&filters).await.unwrap();
        assert_eq!(results.len(), 1);
        assert!(results[0].missed_ingredient_count.is_none());
        mock.assert();
    }

    #[tokio::test]
    async fn test_empty_filters_do_not_issue_a_request() {
        let mut server = Server::new_async().await;
        let ingredient_mock = server
            .mock("GET", "/recipes/findByIngredients")
            .expect(0)
            .create();
        let complex_mock = server
            .mock("GET", "/recipes/complexSearch")
            .expect(0)
            .create();

        let client = RecipeClient::with_base_url("fake_api_key", server.url());
        let result = client.search(&QueryFilters::default()).await;

        assert!(matches!(result, Err(SearchError::NoCriteria)));
        ingredient_mock.assert();
        complex_mock.assert();
    }

    #[tokio::test]
    async fn test_zero_results_is_ok_not_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/recipes/findByIngredients")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create();

        let client = RecipeClient::with_base_url("fake_api_key", server.url());
        let results = client
            .search(&filters_with_ingredients("durian"))
            .await
            .unwrap();
        assert!(results.is_empty());
        mock.assert();
    }

    #[tokio::test]
    async fn test_server_error_is_network_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/recipes/findByIngredients")
            .match_query(Matcher::Any)
            .with_status(402)
            .with_body(r#"{"message": "quota exhausted"}"#)
            .create();

        let client = RecipeClient::with_base_url("fake_api_key", server.url());
        let result = client.search(&filters_with_ingredients("tomato")).await;
        assert!(matches!(result, Err(SearchError::Network(_))));
        mock.assert();
    }

    #[tokio::test]
    async fn test_detail_not_found() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/recipes/99/information")
            .match_query(Matcher::Any)
            .with_status(404)
            .create();

        let client = RecipeClient::with_base_url("fake_api_key", server.url());
        let result = client.detail(99).await;
        assert!(matches!(result, Err(DetailError::NotFound(99))));
        mock.assert();
    }

    #[tokio::test]
    async fn test_detail_without_analyzed_instructions() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/recipes/7/information")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "id": 7,
                    "title": "Mystery Stew",
                    "image": "m.jpg",
                    "extendedIngredients": [{"original": "1 cup of mystery"}]
                }"#,
            )
            .create();

        let client = RecipeClient::with_base_url("fake_api_key", server.url());
        let detail = client.detail(7).await.unwrap();
        assert_eq!(detail.instructions_text, NO_INSTRUCTIONS);
        assert!(detail.steps.is_empty());
        assert_eq!(detail.ingredient_lines, vec!["1 cup of mystery"]);
        mock.assert();
    }

    #[tokio::test]
    async fn test_detail_with_steps() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/recipes/7/information")
            .match_query(Matcher::UrlEncoded(
                "apiKey".into(),
                "fake_api_key".into(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "id": 7,
                    "title": "Pasta",
                    "image": "p.jpg",
                    "instructions": "Boil. Drain. Serve.",
                    "extendedIngredients": [{"original": "500g pasta"}],
                    "analyzedInstructions": [{
                        "steps": [
                            {"number": 1, "step": "Boil the pasta."},
                            {"number": 2, "step": "Drain and serve."}
                        ]
                    }]
                }"#,
            )
            .create();

        let client = RecipeClient::with_base_url("fake_api_key", server.url());
        let detail = client.detail(7).await.unwrap();
        assert_eq!(detail.title, "Pasta");
        assert_eq!(detail.steps.len(), 2);
        assert_eq!(detail.steps[1].number, 2);
        assert_eq!(detail.instructions_text, "Boil. Drain. Serve.");
        mock.assert();
    }
}
