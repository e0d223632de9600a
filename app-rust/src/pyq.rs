//! Exam-question prediction from previous year questions.

use crate::{
    config::require_model,
    history::to_parts,
    store::{JsonStore, PYQ_HISTORY_KEY},
    types::{new_id, now_millis, Attachment, PredictedQuestion, PyqAnalysis, TopicInsight},
    ScholarError, ScholarResult,
};
use cognipath_sdk::{
    LanguageModel, LanguageModelInput, Message, ResponseFormatOption, UserMessage,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::Instrument;

/// Shape the model is asked to return.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisReply {
    #[serde(default)]
    topics: Vec<TopicInsight>,
    #[serde(default)]
    predicted_questions: Vec<PredictedQuestion>,
}

pub(crate) fn analysis_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "topics": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "topic": { "type": "string" },
                        "importance": { "type": "string", "enum": ["High", "Medium", "Low"] },
                        "description": { "type": "string" }
                    },
                    "required": ["topic", "importance", "description"]
                }
            },
            "predictedQuestions": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "question": { "type": "string" },
                        "answer": { "type": "string" },
                        "explanation": { "type": "string" },
                        "probabilityScore": {
                            "type": "number",
                            "description": "A number between 0 and 100"
                        }
                    },
                    "required": ["question", "answer", "explanation", "probabilityScore"]
                }
            }
        },
        "required": ["topics", "predictedQuestions"]
    })
}

pub(crate) fn analysis_prompt(subject: &str, text: &str) -> String {
    format!(
        "Analyze the following past year questions (provided as text or image) for the subject: {subject}.
Identify recurring themes and high-yield topics.
Predict the most important questions for the upcoming exam based on patterns.
Provide the answer and a detailed explanation for each predicted question.

Past Questions Text/Context:
{text}"
    )
}

pub struct PyqAnalyzer {
    model: Option<Arc<dyn LanguageModel>>,
    store: JsonStore,
}

impl PyqAnalyzer {
    pub fn new(model: Option<Arc<dyn LanguageModel>>, store: JsonStore) -> Self {
        Self { model, store }
    }

    /// Ask the model for high-yield topics and likely questions, then record
    /// the result at the front of the history.
    pub async fn analyze(
        &self,
        subject: &str,
        text: &str,
        attachment: Option<Attachment>,
    ) -> ScholarResult<PyqAnalysis> {
        let subject = subject.trim();
        if subject.is_empty() {
            return Err(ScholarError::InvalidInput("a subject is required".to_string()));
        }
        if text.trim().is_empty() && attachment.is_none() {
            return Err(ScholarError::InvalidInput(
                "paste past questions or attach a question paper".to_string(),
            ));
        }

        let model = require_model(self.model.as_ref())?;

        let span = tracing::info_span!("pyq.analyze", subject);
        async move {
            let prompt = analysis_prompt(subject, text);
            let input = LanguageModelInput {
                messages: vec![Message::User(UserMessage {
                    content: to_parts(&prompt, attachment.as_ref()),
                })],
                response_format: Some(ResponseFormatOption::json(
                    "pyq_analysis",
                    analysis_schema(),
                )),
                ..Default::default()
            };

            let response = model.generate(input).await.map_err(|error| {
                tracing::error!(%error, "analysis request failed");
                ScholarError::from(error)
            })?;
            let raw = response.text().ok_or(ScholarError::EmptyResponse)?;
            let reply: AnalysisReply = serde_json::from_str(&raw).map_err(|error| {
                tracing::error!(%error, "analysis reply is not the requested JSON");
                ScholarError::from(error)
            })?;

            let analysis = PyqAnalysis {
                id: new_id(),
                subject: subject.to_string(),
                topics: reply.topics,
                predicted_questions: reply.predicted_questions,
                timestamp: now_millis(),
            };

            let mut history: Vec<PyqAnalysis> = self.store.load_list(PYQ_HISTORY_KEY)?;
            history.insert(0, analysis.clone());
            self.store.save(PYQ_HISTORY_KEY, &history)?;

            tracing::info!(
                topics = analysis.topics.len(),
                questions = analysis.predicted_questions.len(),
                "analysis stored"
            );
            Ok(analysis)
        }
        .instrument(span)
        .await
    }

    /// Past analyses, newest first.
    pub fn history(&self) -> ScholarResult<Vec<PyqAnalysis>> {
        self.store.load_list(PYQ_HISTORY_KEY)
    }

    pub fn get(&self, id: &str) -> ScholarResult<PyqAnalysis> {
        self.history()?
            .into_iter()
            .find(|analysis| analysis.id == id)
            .ok_or_else(|| ScholarError::NotFound(format!("analysis '{id}'")))
    }
}
