use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::question::Question;

/// Category filter sent by the quiz frontend. Id 0 means "all categories";
/// the label rides along but only the id drives selection.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizCategory {
    pub id: i32,
    #[serde(rename = "type")]
    pub category_type: Option<String>,
}

/// Both fields are mandatory, but they arrive as options so a missing key
/// surfaces as a 400 rather than a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, ToSchema)]
#[serde(default)]
pub struct QuizPayload {
    pub quiz_category: Option<QuizCategory>,
    pub previous_questions: Option<Vec<i32>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}
