use serde::Deserialize;

use crate::model::{RecipeDetail, RecipeSummary, Step};

/// Placeholder shown when a recipe carries no instruction text.
pub const NO_INSTRUCTIONS: &str = "No instructions available.";

/// The two search endpoints disagree on shape: complexSearch wraps the
/// list in a results object, findByIngredients returns a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum SearchResponse {
    Paged { results: Vec<SummaryPayload> },
    Plain(Vec<SummaryPayload>),
}

impl SearchResponse {
    pub(crate) fn into_summaries(self) -> Vec<RecipeSummary> {
        let payloads = match self {
            SearchResponse::Paged { results } => results,
            SearchResponse::Plain(payloads) => payloads,
        };
        payloads.into_iter().map(RecipeSummary::from).collect()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SummaryPayload {
    id: u64,
    title: String,
    #[serde(default)]
    image: String,
    #[serde(rename = "missedIngredientCount")]
    missed_ingredient_count: Option<u32>,
}

impl From<SummaryPayload> for RecipeSummary {
    fn from(payload: SummaryPayload) -> Self {
        RecipeSummary {
            id: payload.id,
            title: payload.title,
            image: payload.image,
            missed_ingredient_count: payload.missed_ingredient_count,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct DetailPayload {
    id: u64,
    title: String,
    #[serde(default)]
    image: String,
    instructions: Option<String>,
    #[serde(rename = "extendedIngredients", default)]
    extended_ingredients: Vec<IngredientPayload>,
    #[serde(rename = "analyzedInstructions", default)]
    analyzed_instructions: Vec<InstructionBlock>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IngredientPayload {
    original: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct InstructionBlock {
    #[serde(default)]
    steps: Vec<StepPayload>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StepPayload {
    number: u32,
    step: String,
}

impl From<StepPayload> for Step {
    fn from(payload: StepPayload) -> Self {
        Step {
            number: payload.number,
            text: payload.step,
        }
    }
}

impl From<DetailPayload> for RecipeDetail {
    fn from(payload: DetailPayload) -> Self {
        let instructions_text = match payload.instructions {
            Some(text) if !text.trim().is_empty() => text,
            _ => NO_INSTRUCTIONS.to_string(),
        };

        // Step lists live under the first analyzed-instruction block;
        // recipes without one yield an empty sequence.
        let steps = payload
            .analyzed_instructions
            .into_iter()
            .next()
            .map(|block| block.steps.into_iter().map(Step::from).collect())
            .unwrap_or_default();

        RecipeDetail {
            id: payload.id,
            title: payload.title,
            image: payload.image,
            ingredient_lines: payload
                .extended_ingredients
                .into_iter()
                .map(|ingredient| ingredient.original)
                .collect(),
            instructions_text,
            steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paged_and_plain_responses_normalize_the_same() {
        let paged: SearchResponse =
            serde_json::from_str(r#"{"results": [{"id": 1, "title": "Soup", "image": "s.jpg"}]}"#)
                .unwrap();
        let plain: SearchResponse =
            serde_json::from_str(r#"[{"id": 1, "title": "Soup", "image": "s.jpg"}]"#).unwrap();

        let paged = paged.into_summaries();
        let plain = plain.into_summaries();
        assert_eq!(paged.len(), 1);
        assert_eq!(plain.len(), 1);
        assert_eq!(paged[0].id, plain[0].id);
        assert_eq!(paged[0].title, "Soup");
    }

    #[test]
    fn test_missing_image_defaults_to_empty() {
        let response: SearchResponse =
            serde_json::from_str(r#"[{"id": 3, "title": "Stew"}]"#).unwrap();
        let summaries = response.into_summaries();
        assert_eq!(summaries[0].image, "");
        assert!(summaries[0].missed_ingredient_count.is_none());
    }

    #[test]
    fn test_blank_instructions_get_placeholder() {
        let payload: DetailPayload =
            serde_json::from_str(r#"{"id": 5, "title": "Toast", "instructions": "  "}"#).unwrap();
        let detail = RecipeDetail::from(payload);
        assert_eq!(detail.instructions_text, NO_INSTRUCTIONS);
        assert!(detail.steps.is_empty());
        assert!(detail.ingredient_lines.is_empty());
    }

    #[test]
    fn test_steps_come_from_first_block() {
        let payload: DetailPayload = serde_json::from_str(
            r#"{
                "id": 5,
                "title": "Toast",
                "instructions": "Toast the bread.",
                "analyzedInstructions": [
                    {"steps": [{"number": 1, "step": "Toast the bread."}]},
                    {"steps": [{"number": 1, "step": "From a second block."}]}
                ]
            }"#,
        )
        .unwrap();
        let detail = RecipeDetail::from(payload);
        assert_eq!(detail.steps.len(), 1);
        assert_eq!(detail.steps[0].text, "Toast the bread.");
    }
}
