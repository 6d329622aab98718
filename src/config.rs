//! Generation parameters and the bearer credential

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed parameters for one generation call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig
{   /// Remote model identifier
    pub model_id: String
  , /// Cap on generated length, in tokens
    pub max_tokens: usize
  , /// Sampling randomness, in [0, 1]
    pub temperature: f32
  , /// Nucleus sampling probability, in [0, 1]
    pub top_p: f32
  , /// Top-k sampling cutoff, omitted from the wire when None
    pub top_k: Option<usize>
}

impl Default for GenerationConfig
{   fn default() -> Self
    {   GenerationConfig
        {   model_id: "command-r-08-2024".to_string()
          , max_tokens: 1000
          , temperature: 0.5
          , top_p: 0.7
          , top_k: Some(5)
        }
    }
}

impl GenerationConfig
{   /// Check the parameter ranges before anything is sent.
    /// Returns a description of the first violation found.
    pub fn validate(&self) -> Result<(), String>
    {   if self.model_id.trim().is_empty()
        {   return Err("model_id is empty".to_string());
        }
        if self.max_tokens == 0
        {   return Err(
              "max_tokens must be greater than zero"
                .to_string()
            );
        }
        if !(0.0..=1.0).contains(&self.temperature)
        {   return Err(format!(
              "temperature {} outside [0, 1]",
              self.temperature
            ));
        }
        if !(0.0..=1.0).contains(&self.top_p)
        {   return Err(format!(
              "top_p {} outside [0, 1]",
              self.top_p
            ));
        }
        Ok(())
    }
}

/// Opaque bearer token, supplied by the caller at call time.
/// Never persisted, never transformed, and never printed:
/// the Debug impl redacts the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential
{   pub fn new(token: impl Into<String>) -> Self
    {   Credential(token.into())
    }

    /// Read the token from an environment variable
    pub fn from_env(var: &str) -> Result<Self, String>
    {   std::env::var(var)
          .map(Credential)
          .map_err(|_| format!(
            "Environment variable {} not set",
            var
          ))
    }

    /// The token value, for attaching to the outbound call
    pub(crate) fn reveal(&self) -> &str
    {   &self.0
    }
}

impl fmt::Debug for Credential
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   write!(f, "Credential(***)")
    }
}
