use std::fmt;

/// Classified failure of one generation call.
/// Every variant is terminal for the invocation;
/// the client never retries on its own.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationError
{   /// The remote service actively refused or failed the request
    RequestRejected
    {   status_code: u16
      , message: String
    }
  , /// Transport failure with no response received at all
    NoResponse
  , /// The response parsed but matched no known shape
    MalformedPayload
    {   raw: serde_json::Value
    }
  , /// Caller-side defect or misconfiguration before any
    /// network activity completed
    LocalFailure(String)
}

impl fmt::Display for GenerationError
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   GenerationError::RequestRejected
            {   status_code, message
            } => {
              write!(f,
                "Request rejected ({}): {}",
                status_code,
                message
              )
            }
          , GenerationError::NoResponse => {
              write!(f, "No response received from endpoint")
            }
          , GenerationError::MalformedPayload { .. } => {
              write!(f,
                "Response matched no recognized shape"
              )
            }
          , GenerationError::LocalFailure(msg) => {
              write!(f, "Local failure: {}", msg)
            }
        }
    }
}

impl std::error::Error for GenerationError {}

impl From<String> for GenerationError
{   fn from(s: String) -> Self
    {   GenerationError::LocalFailure(s)
    }
}

impl From<&str> for GenerationError
{   fn from(s: &str) -> Self
    {   GenerationError::LocalFailure(s.to_string())
    }
}
