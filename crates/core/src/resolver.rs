use serde_json::json;

use crate::connector_core::error::ConfigError;
use crate::connector_core::metadata::NormalizedMetadata;
use crate::connector_types::options::{
    DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_MS, FREQUENCY_PENALTY_RANGE, MAX_TOKENS_CEILING,
    PRESENCE_PENALTY_RANGE, TEMPERATURE_RANGE, TOP_P_RANGE,
};
use crate::connector_types::{
    ChatOptions, Credentials, ModelKwargs, ModelSelector, ResolveWarning, ResolvedChatConfig,
    DEFAULT_BASE_URL,
};

/// Reconcile credentials, the option bag, the model selector and the
/// normalized metadata into the final chat-client configuration.
///
/// Only an empty model name or a missing API key fail; everything else
/// degrades into warnings. Base-URL precedence is explicit option, then
/// credential default, then the provider default, for every schema version.
pub fn resolve(
    credentials: &Credentials,
    options: &ChatOptions,
    selector: &ModelSelector,
    metadata: &NormalizedMetadata,
) -> Result<(ResolvedChatConfig, Vec<ResolveWarning>), ConfigError> {
    if !credentials.has_api_key() {
        return Err(ConfigError::MissingApiKey);
    }
    let model = selector.model_name().trim();
    if model.is_empty() {
        return Err(ConfigError::EmptyModel);
    }

    let mut warnings = Vec::new();
    if let Some(preserved_bytes) = metadata.raw_fallback_bytes() {
        warnings.push(ResolveWarning::MetadataParseFallback { preserved_bytes });
    }

    let base_url = resolve_base_url(options, credentials);

    let temperature = clamp_option(
        "temperature",
        options.temperature,
        TEMPERATURE_RANGE,
        &mut warnings,
    );
    let top_p = clamp_option("topP", options.top_p, TOP_P_RANGE, &mut warnings);
    let frequency_penalty = clamp_option(
        "frequencyPenalty",
        options.frequency_penalty,
        FREQUENCY_PENALTY_RANGE,
        &mut warnings,
    );
    let presence_penalty = clamp_option(
        "presencePenalty",
        options.presence_penalty,
        PRESENCE_PENALTY_RANGE,
        &mut warnings,
    );
    let max_tokens = clamp_max_tokens(options.max_tokens, &mut warnings);

    let mut model_kwargs = ModelKwargs::default();
    if let Some(format) = options.response_format {
        if !format.is_text() {
            model_kwargs.response_format = Some(json!({ "type": format }));
        }
    }
    if let Some(effort) = options.reasoning_effort {
        if supports_reasoning_effort(model) {
            model_kwargs.reasoning_effort = Some(effort);
        } else {
            tracing::debug!(model, "model does not take reasoning effort; dropping option");
        }
    }

    let mut config = ResolvedChatConfig {
        api_key: credentials.api_key.clone(),
        organization_id: credentials
            .organization_id
            .as_deref()
            .filter(|org| !org.is_empty())
            .map(str::to_string),
        base_url,
        model: model.to_string(),
        metadata: metadata.entries().clone(),
        extra_body: None,
        temperature,
        top_p,
        frequency_penalty,
        presence_penalty,
        max_tokens,
        timeout: options.timeout.unwrap_or(DEFAULT_TIMEOUT_MS),
        max_retries: options.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
        model_kwargs,
    };
    attach_extra_body(&mut config, metadata);

    tracing::debug!(
        model = %config.model,
        base_url = %config.base_url,
        metadata_keys = config.metadata.len(),
        warnings = warnings.len(),
        "resolved chat request configuration"
    );

    Ok((config, warnings))
}

fn resolve_base_url(options: &ChatOptions, credentials: &Credentials) -> String {
    if let Some(url) = options.base_url.as_deref() {
        if !url.is_empty() {
            return url.to_string();
        }
    }
    if !credentials.url.is_empty() {
        return credentials.url.clone();
    }
    DEFAULT_BASE_URL.to_string()
}

fn clamp_option(
    setting: &str,
    value: Option<f64>,
    (min, max): (f64, f64),
    warnings: &mut Vec<ResolveWarning>,
) -> Option<f64> {
    value.map(|requested| {
        let clamped = requested.clamp(min, max);
        if clamped != requested {
            tracing::warn!(setting, requested, clamped, "option outside supported range");
            warnings.push(ResolveWarning::OptionClamped {
                setting: setting.to_string(),
                requested,
                clamped,
            });
        }
        clamped
    })
}

fn clamp_max_tokens(value: Option<u32>, warnings: &mut Vec<ResolveWarning>) -> Option<u32> {
    value.map(|requested| {
        if requested > MAX_TOKENS_CEILING {
            tracing::warn!(
                setting = "maxTokens",
                requested,
                clamped = MAX_TOKENS_CEILING,
                "option outside supported range"
            );
            warnings.push(ResolveWarning::OptionClamped {
                setting: "maxTokens".to_string(),
                requested: requested as f64,
                clamped: MAX_TOKENS_CEILING as f64,
            });
            MAX_TOKENS_CEILING
        } else {
            requested
        }
    })
}

/// Whether the model accepts `reasoning_effort`: `o1` with an optional
/// digits-and-hyphens suffix, `o` followed by a digit of 3 or more, or any
/// `gpt-5` model. `o1-mini` and non-reasoning GPT models do not.
pub fn supports_reasoning_effort(model: &str) -> bool {
    if let Some(rest) = model.strip_prefix("o1") {
        return rest.chars().all(|c| c.is_ascii_digit() || c == '-');
    }
    if let Some(rest) = model.strip_prefix('o') {
        return rest
            .chars()
            .next()
            .is_some_and(|c| ('3'..='9').contains(&c));
    }
    model.starts_with("gpt-5")
}

/// LiteLLM-style gateways differ in where they read the metadata envelope:
/// some take the top-level `extra_body`, some only see what reaches the
/// request body via `modelKwargs`. Write both locations so trace metadata
/// survives either path. Keep this in one place; drop one write here if the
/// gateway contract is ever pinned down.
fn attach_extra_body(config: &mut ResolvedChatConfig, metadata: &NormalizedMetadata) {
    if let Some(extra_body) = metadata.extra_body() {
        config.model_kwargs.extra_body = Some(extra_body.clone());
        config.extra_body = Some(extra_body);
    }
}
