//! onegen — resilient single-shot text-generation client.
//!
//! One prompt in, one HTTPS call out, and either normalized
//! generated text or a classified failure back. No retries,
//! no streaming, no conversation state: the hosting side
//! (editor glue, CLI, whatever) owns presentation and
//! re-invocation, this crate owns request construction,
//! response-shape normalization, and error classification.
//!
//! ```no_run
//! use onegen::{Credential, GenerationClient, GenerationConfig};
//!
//! # async fn run() -> Result<(), onegen::GenerationError> {
//! let client = GenerationClient::new();
//! let credential = Credential::from_env("GENERATION_API_KEY")?;
//! let generated = client
//!   .generate(
//!     "write a function that adds two numbers",
//!     &GenerationConfig::default(),
//!     &credential,
//!   )
//!   .await?;
//! println!("{}", generated.content);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod config;
pub mod request;
pub mod shapes;
pub mod client;

pub use client::GenerationClient;
pub use config::{Credential, GenerationConfig};
pub use error::GenerationError;
pub use request::{GeneratedText, PromptRequest};
