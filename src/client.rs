use log::{debug, trace, error};
use serde_json::Value;

use crate::config::{Credential, GenerationConfig};
use crate::error::GenerationError;
use crate::request::{GeneratedText, PromptRequest};
use crate::shapes;

const DEFAULT_API_BASE: &str
  = "https://api.cohere.ai/v1";

/// Single-shot generation client.
///
/// Holds nothing but the endpoint and a connection pool;
/// every call is a pure function of its inputs plus the
/// remote service's response. Concurrent calls on one
/// client are independent and uncoordinated.
pub struct GenerationClient
{   api_base: String
  , http_client: reqwest::Client
}

impl GenerationClient
{   /// Client against the default generation endpoint
    pub fn new() -> Self
    {   Self::with_api_base(DEFAULT_API_BASE)
    }

    /// Client against a custom endpoint base URL
    pub fn with_api_base(api_base: impl Into<String>) -> Self
    {   debug!("Creating GenerationClient");
        GenerationClient
        {   api_base: api_base.into()
          , http_client: reqwest::Client::new()
        }
    }

    /// Send one prompt and return the normalized generated
    /// text, or a classified failure. Exactly one outbound
    /// call per invocation; no retries, no caching, no
    /// timeout of its own (the caller may impose one).
    pub async fn generate(
      &self
    , prompt_text: &str
    , config: &GenerationConfig
    , credential: &Credential
    ) -> Result<GeneratedText, GenerationError>
    {   if prompt_text.trim().is_empty()
        {   error!("Rejecting empty prompt text");
            return Err(GenerationError::LocalFailure(
              "Prompt text is empty".to_string()
            ));
        }

        if let Err(msg) = config.validate()
        {   error!("Invalid configuration: {}", msg);
            return Err(GenerationError::LocalFailure(msg));
        }

        let request = PromptRequest::new(prompt_text, config);
        trace!("Generation request: {:?}", request);

        let response = self.http_client
          .post(format!("{}/generate", self.api_base))
          .header(
            "Authorization",
            format!("Bearer {}", credential.reveal())
          )
          .header("Content-Type", "application/json")
          .json(&request)
          .send()
          .await
          .map_err(classify_transport_error)?;

        let status = response.status();
        trace!("Generation response status: {}", status);

        if !status.is_success()
        {   let body = response.text().await
              .unwrap_or_else(|_| String::new());
            let message = rejection_message(status, &body);
            error!(
              "Endpoint rejected request ({}): {}",
              status.as_u16(),
              message
            );
            return Err(GenerationError::RequestRejected
            {   status_code: status.as_u16()
              , message
            });
        }

        let body = response.text().await
          .map_err(|e| {
            error!("Response body never arrived: {}", e);
            GenerationError::NoResponse
          })?;

        let raw: Value = match serde_json::from_str(&body)
        {   Ok(value) => value
          , Err(e) => {
              error!("Response body is not JSON: {}", e);
              return Err(GenerationError::MalformedPayload
              {   raw: Value::String(body)
              });
            }
        };

        match shapes::extract_generated_text(&raw)
        {   Some(content) => {
              debug!(
                "Extracted {} generated characters",
                content.len()
              );
              Ok(GeneratedText { content })
            }
          , None => {
              error!("Unrecognized response payload: {}", raw);
              Err(GenerationError::MalformedPayload { raw })
            }
        }
    }
}

impl Default for GenerationClient
{   fn default() -> Self
    {   Self::new()
    }
}

/// Errors raised before the request leaves the process are
/// local defects; everything else means the endpoint was
/// never heard from
fn classify_transport_error(e: reqwest::Error)
  -> GenerationError
{   if e.is_builder()
    {   error!("Request construction failed: {}", e);
        GenerationError::LocalFailure(e.to_string())
    } else
    {   error!("No response from endpoint: {}", e);
        GenerationError::NoResponse
    }
}

/// Pull the most specific error message available out of a
/// rejection body: an embedded "error" or "message" field,
/// failing that the raw body, failing that the status reason
fn rejection_message(
  status: reqwest::StatusCode
, body: &str
) -> String
{   if let Ok(value) = serde_json::from_str::<Value>(body)
    {   for field in ["error", "message"]
        {   if let Some(msg) = value
              .get(field)
              .and_then(Value::as_str)
            {   return msg.to_string();
            }
        }
    }
    if !body.trim().is_empty()
    {   return body.trim().to_string();
    }
    status.canonical_reason()
      .unwrap_or("Unknown error")
      .to_string()
}
