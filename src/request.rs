//! Wire-level request body and the normalized result

use serde::{Deserialize, Serialize};

/// Instructional framing placed around the user's text.
/// The raw text is always embedded verbatim after "Task:".
const TASK_PREAMBLE: &str
  = "Carry out the task described below exactly as asked. \
     Do not remove any code the task already contains.";

/// Embed the user's raw text in the task framing
pub fn wrap_task(prompt_text: &str) -> String
{   format!("{}\nTask: {}", TASK_PREAMBLE, prompt_text)
}

/// JSON body of one outbound generation call.
/// Immutable, constructed per call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptRequest
{   pub model: String
  , pub prompt: String
  , pub max_tokens: usize
  , pub temperature: f32
  , #[serde(rename = "p")]
    pub top_p: f32
  , #[serde(rename = "k", skip_serializing_if = "Option::is_none")]
    pub top_k: Option<usize>
}

impl PromptRequest
{   /// Build the body from non-empty prompt text and the
    /// generation parameters. The text is wrapped in the
    /// task framing before it goes on the wire.
    pub fn new(
      prompt_text: &str
    , config: &crate::config::GenerationConfig
    ) -> Self
    {   PromptRequest
        {   model: config.model_id.clone()
          , prompt: wrap_task(prompt_text)
          , max_tokens: config.max_tokens
          , temperature: config.temperature
          , top_p: config.top_p
          , top_k: config.top_k
        }
    }
}

/// Normalized generation result: always a plain non-empty
/// string once construction succeeds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedText
{   pub content: String
}
