use crate::error::BackendError;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Model family, driving per-family request quirks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFamily {
    /// Standard chat models, full role set allowed
    Chat,
    /// Reasoning preview models; the gateway rejects the system role for these
    ReasoningPreview,
}

/// Static registry entry for one supported model.
#[derive(Debug, Clone)]
pub struct ModelSpec {
    pub context_length: u32,
    pub cost_per_input_token: f64,
    pub cost_per_output_token: f64,
    pub family: ModelFamily,
}

// The gateway publishes no per-token pricing, so all rates are 0.0.
static MODELS: Lazy<HashMap<&'static str, ModelSpec>> = Lazy::new(|| {
    HashMap::from([
        (
            "argo",
            ModelSpec {
                context_length: 128_000,
                cost_per_input_token: 0.0,
                cost_per_output_token: 0.0,
                family: ModelFamily::Chat,
            },
        ),
        (
            "gpt4o",
            ModelSpec {
                context_length: 128_000,
                cost_per_input_token: 0.0,
                cost_per_output_token: 0.0,
                family: ModelFamily::Chat,
            },
        ),
        (
            "gpto1preview",
            ModelSpec {
                context_length: 128_000,
                cost_per_input_token: 0.0,
                cost_per_output_token: 0.0,
                family: ModelFamily::ReasoningPreview,
            },
        ),
    ])
});

static SHORTCUTS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("argo-default", "argo"),
        ("gpt-4o", "gpt4o"),
        ("o1-preview", "gpto1preview"),
    ])
});

/// Resolve a model name or human-friendly alias to its canonical registry
/// entry. Pure lookup, no side effects; fails before any network activity.
pub fn resolve(name: &str) -> Result<(&'static str, &'static ModelSpec), BackendError> {
    if let Some((canonical, spec)) = MODELS.get_key_value(name) {
        return Ok((*canonical, spec));
    }
    if let Some(target) = SHORTCUTS.get(name) {
        if let Some((canonical, spec)) = MODELS.get_key_value(*target) {
            return Ok((*canonical, spec));
        }
    }
    Err(BackendError::unknown_model(name))
}

/// All canonical model names known to the registry.
pub fn canonical_models() -> Vec<&'static str> {
    let mut names: Vec<_> = MODELS.keys().copied().collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_name_resolves_to_itself() {
        let (name, spec) = resolve("argo").unwrap();
        assert_eq!(name, "argo");
        assert_eq!(spec.context_length, 128_000);
        assert_eq!(spec.family, ModelFamily::Chat);
    }

    #[test]
    fn shortcut_resolves_to_canonical_name() {
        let (name, _) = resolve("argo-default").unwrap();
        assert_eq!(name, "argo");

        let (name, spec) = resolve("o1-preview").unwrap();
        assert_eq!(name, "gpto1preview");
        assert_eq!(spec.family, ModelFamily::ReasoningPreview);
    }

    #[test]
    fn unknown_name_fails() {
        let err = resolve("gpt-7").unwrap_err();
        assert!(matches!(err, BackendError::UnknownModel { name } if name == "gpt-7"));
    }

    #[test]
    fn registry_lists_canonical_models() {
        let models = canonical_models();
        assert!(models.contains(&"argo"));
        assert!(models.contains(&"gpto1preview"));
    }
}
