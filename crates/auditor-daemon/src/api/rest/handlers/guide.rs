//! Decision-tree guide handlers

use crate::api::rest::state::AppState;
use crate::error::ApiResult;
use auditor_guide::{Answer, DecisionTree, Position, Suggestion};
use auditor_types::{AISystemInput, AnalysisResult, Language};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

/// Get the full decision tree
pub async fn get_tree(State(state): State<AppState>) -> Json<DecisionTree> {
    Json(DecisionTree::clone(&state.tree))
}

/// Walk request: answers given so far, from the root
#[derive(Debug, Deserialize)]
pub struct WalkRequest {
    #[serde(default)]
    pub answers: Vec<Answer>,
    #[serde(default)]
    pub language: String,
    /// Questionnaire answers to merge the pre-fill into
    #[serde(default)]
    pub input: Option<AISystemInput>,
}

/// Question waiting for an answer
#[derive(Debug, Serialize)]
pub struct PendingQuestion {
    pub id: &'static str,
    pub text: &'static str,
}

/// Walk response
#[derive(Debug, Serialize)]
pub struct WalkResponse {
    pub position: Position,
    pub answered: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<PendingQuestion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<Suggestion>,
    /// Engine result for the pre-filled input once the walk is finished
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<AnalysisResult>,
}

/// Replay answers through the tree
///
/// A finished walk is confirmed by classifying the pre-filled input; the
/// tree's outcome is only a suggestion.
pub async fn walk_tree(
    State(state): State<AppState>,
    Json(request): Json<WalkRequest>,
) -> ApiResult<Json<WalkResponse>> {
    let walk = state.tree.replay(&request.answers)?;
    let lang = Language::resolve(&request.language);

    let question = walk.current().map(|node| PendingQuestion {
        id: node.id,
        text: node.question(lang),
    });

    let suggestion = walk.suggestion();
    let result = suggestion.as_ref().map(|suggestion| {
        let mut input = request.input.unwrap_or_default();
        if input.language.is_empty() {
            input.language = lang.code().to_string();
        }
        suggestion.apply(&mut input);
        state.classifier.classify(&input)
    });

    Ok(Json(WalkResponse {
        position: walk.position(),
        answered: walk.history().len(),
        question,
        suggestion,
        result,
    }))
}
