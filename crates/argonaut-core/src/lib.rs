//! # argonaut-core - Argo chat client
//!
//! A chat-completion client for the Argo gateway, built around a reusable
//! backend abstraction with per-instance usage accounting.
//!
//! ## Features
//!
//! - **Backend contract** - [`ChatBackend`] is the seam every provider
//!   adapter satisfies: send a conversation, get text, track usage
//! - **Usage accounting** - running token and cost counters per instance
//! - **Typed failures** - non-200 replies and network faults come back as
//!   [`BackendError`] values carrying the status code and raw body, never
//!   as strings masquerading as model output
//! - **Table-driven quirks** - per-model-family request rewrites (e.g. the
//!   reasoning preview family's system-role restriction) live in one table
//! - **Injectable collaborators** - credentials and HTTP transport are
//!   traits, so tests run without a network or environment mutation
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use argonaut_core::{ArgoBackend, ChatBackend, ConversationTurn, ModelArguments};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let args = ModelArguments::new("argo-default").with_temperature(0.2);
//!     let mut backend = ArgoBackend::new(args)?;
//!
//!     let history = vec![
//!         ConversationTurn::system("You are a concise assistant."),
//!         ConversationTurn::user("What is the capital of France?"),
//!     ];
//!     let reply = backend.query(&history).await?;
//!     println!("{reply}");
//!     println!("input tokens so far: {}", backend.usage().total_input_tokens());
//!     Ok(())
//! }
//! ```
//!
//! ## Token estimates
//!
//! Token counts are a byte-length/4 heuristic, not a tokenizer. They are
//! deterministic and monotonic but approximate; treat them as a budget
//! signal, not a billing source.

pub mod config;
pub mod error;
pub mod providers;
pub mod registry;
pub mod transform;
pub mod transport;
pub mod types;
pub mod usage;


pub use config::{CredentialSource, EnvCredentials, ModelArguments};
pub use error::BackendError;
pub use providers::{ArgoBackend, ARGO_API_ENDPOINT};
pub use registry::{ModelFamily, ModelSpec};
pub use transport::{ChatTransport, ReqwestTransport, TransportReply};
pub use types::{ChatBackend, ChatRole, ConversationTurn};
pub use usage::{estimate_tokens, UsageTracker};
