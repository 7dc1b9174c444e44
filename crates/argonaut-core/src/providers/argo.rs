use crate::config::{resolve_api_key, resolve_username, CredentialSource, EnvCredentials, ModelArguments};
use crate::error::BackendError;
use crate::registry::{self, ModelSpec};
use crate::transform;
use crate::transport::{ChatTransport, ReqwestTransport};
use crate::types::{ChatBackend, ConversationTurn};
use crate::usage::{estimate_tokens, UsageTracker};

/// Default chat endpoint of the Argo gateway.
pub const ARGO_API_ENDPOINT: &str = "https://apps-dev.inside.anl.gov/argoapi/api/v1/resource/chat/";

/// Chat backend for the Argo gateway.
///
/// Follows the Argo input/output standard: one JSON POST per query, reply
/// text in the `response` field. Each instance targets exactly one resolved
/// model for its lifetime and owns its [`UsageTracker`].
pub struct ArgoBackend {
    args: ModelArguments,
    model: &'static str,
    spec: &'static ModelSpec,
    endpoint: String,
    api_key: Option<String>,
    username: Option<String>,
    usage: UsageTracker,
    transport: Box<dyn ChatTransport>,
}

impl std::fmt::Debug for ArgoBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArgoBackend")
            .field("args", &self.args)
            .field("model", &self.model)
            .field("spec", &self.spec)
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key)
            .field("username", &self.username)
            .field("usage", &self.usage)
            .finish_non_exhaustive()
    }
}

impl ArgoBackend {
    /// Build a backend using the process environment for credentials and a
    /// reqwest transport. Fails fast on an unknown model name or alias;
    /// missing credentials only warn.
    pub fn new(args: ModelArguments) -> Result<Self, BackendError> {
        Self::with_collaborators(args, &EnvCredentials, Box::<ReqwestTransport>::default())
    }

    /// Build a backend with injected collaborators. This is the seam tests
    /// use to supply fake credentials and a capturing transport.
    pub fn with_collaborators(
        args: ModelArguments,
        credentials: &dyn CredentialSource,
        transport: Box<dyn ChatTransport>,
    ) -> Result<Self, BackendError> {
        let (model, spec) = registry::resolve(&args.model_name)?;
        let api_key = resolve_api_key(&args, credentials);
        let username = resolve_username(credentials);

        Ok(Self {
            args,
            model,
            spec,
            endpoint: ARGO_API_ENDPOINT.to_string(),
            api_key,
            username,
            usage: UsageTracker::new(),
            transport,
        })
    }

    /// Override the gateway endpoint (e.g. a staging deployment).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// API key resolved at construction, if any. The gateway identifies
    /// callers by the `user` payload field; the key is not attached to
    /// requests by this client.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Assemble the outbound payload per the Argo input standard, applying
    /// the model family's message transform.
    pub(crate) fn build_payload(&self, history: &[ConversationTurn]) -> serde_json::Value {
        let mut turns = history.to_vec();
        transform::apply(self.spec.family, &mut turns);

        let mut payload = serde_json::json!({
            "user": self.username,
            "model": self.model,
            "messages": turns,
            "stop": self.args.stop,
            "temperature": self.args.temperature,
            "top_p": self.args.top_p,
        });

        // Provider-specific extras merge at the top level and win on key
        // collisions; the gateway ignores fields it does not support.
        for (key, value) in &self.args.completion_kwargs {
            payload[key.as_str()] = value.clone();
        }

        payload
    }
}

#[async_trait::async_trait]
impl ChatBackend for ArgoBackend {
    fn provider_name(&self) -> &'static str {
        "argo"
    }

    fn model_name(&self) -> &str {
        self.model
    }

    /// Send the conversation history and return the generated text.
    ///
    /// One synchronous round trip, no retry. Input tokens are counted for
    /// every attempt that produced a request, failed calls included; output
    /// tokens and their cost only for successful replies. A missing
    /// `response` field is tolerated as an empty reply so upstream schema
    /// drift does not break callers.
    async fn query(&mut self, history: &[ConversationTurn]) -> Result<String, BackendError> {
        let spec = self.spec;
        let input_text = serde_json::to_string(history)?;
        let input_tokens = estimate_tokens(&input_text);
        let payload = self.build_payload(history);

        log::info!("Sending request to Argo API with {} messages", history.len());
        let start = std::time::Instant::now();
        let reply = match self.transport.post_json(&self.endpoint, &payload).await {
            Ok(reply) => reply,
            Err(e) => {
                self.usage.record_attempt(input_tokens, spec);
                return Err(e);
            }
        };

        if !reply.is_success() {
            log::error!("Error from Argo API: {} {}", reply.status, reply.body);
            self.usage.record_attempt(input_tokens, spec);
            return Err(BackendError::transport(reply.status, reply.body));
        }

        let data: serde_json::Value = match serde_json::from_str(&reply.body) {
            Ok(data) => data,
            Err(e) => {
                self.usage.record_attempt(input_tokens, spec);
                return Err(BackendError::malformed_response_with_source(
                    "Argo reply was not valid JSON",
                    e,
                ));
            }
        };

        let response_text = data
            .get("response")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();

        let output_tokens = estimate_tokens(&response_text);
        self.usage.record_success(input_tokens, output_tokens, spec);
        log::info!(
            "Request completed in {:?}, ~{} tokens",
            start.elapsed(),
            input_tokens + output_tokens
        );

        Ok(response_text)
    }

    fn usage(&self) -> &UsageTracker {
        &self.usage
    }
}
