//! Ordered shape recognizers for provider response payloads.
//!
//! Providers disagree on where the generated text lives in
//! the response body. Each recognizer inspects the raw JSON
//! and, on a match, extracts the text. They are tried in a
//! fixed order and the first match wins; supporting another
//! provider means appending one recognizer here, not touching
//! the call site.

use log::trace;
use serde_json::Value;

type Recognizer = fn(&Value) -> Option<String>;

/// Recognizers in match order
const RECOGNIZERS: &[(&str, Recognizer)] = &[
    ("generations_array", generations_array)
  , ("generated_text_object", generated_text_object)
  , ("generated_text_array", generated_text_array)
  , ("bare_string", bare_string)
];

/// Run the raw payload through the ordered recognizers.
/// Returns the trimmed generated text, or None when no
/// recognizer matched or the match was empty after trimming.
pub fn extract_generated_text(raw: &Value) -> Option<String>
{   for (name, recognize) in RECOGNIZERS
    {   if let Some(text) = recognize(raw)
        {   trace!("Payload matched shape: {}", name);
            return Some(text);
        }
    }
    trace!("Payload matched no recognized shape");
    None
}

/// Reject whitespace-only extractions; an empty result must
/// never be reported as successful generation
fn non_empty_trimmed(text: &str) -> Option<String>
{   let trimmed = text.trim();
    if trimmed.is_empty()
    {   None
    } else
    {   Some(trimmed.to_string())
    }
}

// ===== Recognizers =====

/// {"generations": [{"text": "..."}]}
fn generations_array(raw: &Value) -> Option<String>
{   raw.get("generations")?
      .as_array()?
      .first()?
      .get("text")?
      .as_str()
      .and_then(non_empty_trimmed)
}

/// {"generated_text": "..."}
fn generated_text_object(raw: &Value) -> Option<String>
{   raw.get("generated_text")?
      .as_str()
      .and_then(non_empty_trimmed)
}

/// [{"generated_text": "..."}]
fn generated_text_array(raw: &Value) -> Option<String>
{   raw.as_array()?
      .first()?
      .get("generated_text")?
      .as_str()
      .and_then(non_empty_trimmed)
}

/// "..."
fn bare_string(raw: &Value) -> Option<String>
{   raw.as_str().and_then(non_empty_trimmed)
}
