use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Environment variable holding the gateway API key fallback.
pub const API_KEY_ENV: &str = "ARGO_API_KEY";
/// Environment variables tried, in order, for the caller identity.
pub const USERNAME_ENVS: &[&str] = &["ANL_USER", "USER"];

/// Configuration value object for one backend instance.
///
/// Immutable for the adapter's lifetime once passed in. `completion_kwargs`
/// are provider-specific extras merged verbatim into the request payload;
/// the only requirement is JSON-serializability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArguments {
    pub model_name: String,
    pub api_key: Option<String>,
    pub temperature: f32,
    pub top_p: f32,
    pub stop: Vec<String>,
    pub completion_kwargs: HashMap<String, serde_json::Value>,
}

impl ModelArguments {
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            api_key: None,
            temperature: 0.0,
            top_p: 1.0,
            stop: Vec::new(),
            completion_kwargs: HashMap::new(),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = top_p;
        self
    }

    pub fn with_stop(mut self, stop: Vec<String>) -> Self {
        self.stop = stop;
        self
    }

    pub fn with_completion_kwarg(
        mut self,
        key: impl Into<String>,
        value: serde_json::Value,
    ) -> Self {
        self.completion_kwargs.insert(key.into(), value);
        self
    }
}

/// Capability for reading credentials and identity, so tests can supply
/// fakes without mutating the process environment.
pub trait CredentialSource: Send + Sync {
    fn get(&self, name: &str) -> Option<String>;
}

/// Production credential source backed by process environment variables.
/// Empty values are treated as unset.
#[derive(Debug, Default, Clone)]
pub struct EnvCredentials;

impl CredentialSource for EnvCredentials {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|v| !v.is_empty())
    }
}

/// Resolve the API key: explicit configuration first, environment fallback
/// second. Absence is soft: the gateway, not this client, decides whether a
/// missing key is fatal.
pub fn resolve_api_key(args: &ModelArguments, source: &dyn CredentialSource) -> Option<String> {
    let key = args.api_key.clone().or_else(|| source.get(API_KEY_ENV));
    if key.is_none() {
        log::warn!(
            "No API key configured; set {API_KEY_ENV} or pass api_key if the gateway requires one"
        );
    }
    key
}

/// Resolve the caller identity from the first non-empty identity variable.
pub fn resolve_username(source: &dyn CredentialSource) -> Option<String> {
    let username = USERNAME_ENVS.iter().find_map(|name| source.get(name));
    if username.is_none() {
        log::warn!("No username found; set ANL_USER for proper identification");
    }
    username
}
