use url::Url;

use crate::connector_core::error::{map_transport_error, ConnectorError};
use crate::connector_models::transport::HttpTransport;
use crate::connector_types::{Credentials, ModelEntry, ModelsPage};

/// Listing endpoint under a resolved base URL.
pub fn models_endpoint(base_url: &str) -> String {
    format!("{}/models", base_url.trim_end_matches('/'))
}

fn is_default_openai_base(base_url: &str) -> bool {
    Url::parse(base_url)
        .ok()
        .and_then(|url| url.host_str().map(|host| host == "api.openai.com"))
        .unwrap_or(false)
}

/// Whether a listed model id belongs in the node's selection list.
///
/// Against the first-party OpenAI API only chat-capable families are
/// offered: fine-tunes, `o1`/`o3` reasoning models, and non-instruct GPT
/// models. Any other base URL is a gateway with its own routing table, so
/// every id passes.
pub fn is_selectable_chat_model(id: &str, custom_base_url: bool) -> bool {
    if custom_base_url {
        return true;
    }
    id.starts_with("ft:")
        || id.starts_with("o1")
        || id.starts_with("o3")
        || (id.starts_with("gpt-") && !id.contains("instruct"))
}

/// Filter a listing page down to selectable entries, optionally narrowed by
/// a case-insensitive substring query, sorted by id.
pub fn filter_models(
    entries: Vec<ModelEntry>,
    custom_base_url: bool,
    query: Option<&str>,
) -> Vec<ModelEntry> {
    let needle = query.map(str::to_lowercase).filter(|q| !q.is_empty());
    let mut selectable: Vec<ModelEntry> = entries
        .into_iter()
        .filter(|entry| is_selectable_chat_model(&entry.id, custom_base_url))
        .filter(|entry| match &needle {
            Some(needle) => entry.id.to_lowercase().contains(needle),
            None => true,
        })
        .collect();
    selectable.sort();
    selectable
}

async fn fetch_filtered<T: HttpTransport>(
    transport: &T,
    credentials: &Credentials,
    base_url_override: Option<&str>,
    query: Option<&str>,
) -> Result<Vec<ModelEntry>, ConnectorError> {
    let base_url = base_url_override
        .filter(|url| !url.is_empty())
        .unwrap_or(&credentials.url);
    let endpoint = models_endpoint(base_url);
    let headers = credentials.authorization_headers();

    tracing::debug!(endpoint = %endpoint, "listing models");
    let body = transport
        .get_json(&endpoint, &headers)
        .await
        .map_err(map_transport_error)?;
    let page: ModelsPage = serde_json::from_value(body)?;

    Ok(filter_models(
        page.data,
        !is_default_openai_base(base_url),
        query,
    ))
}

/// List the models selectable under the given credential, honoring a
/// base-URL override from the node options.
pub async fn list_models<T: HttpTransport>(
    transport: &T,
    credentials: &Credentials,
    base_url_override: Option<&str>,
) -> Result<Vec<ModelEntry>, ConnectorError> {
    fetch_filtered(transport, credentials, base_url_override, None).await
}

/// Searchable variant backing the locator's list mode.
pub async fn search_models<T: HttpTransport>(
    transport: &T,
    credentials: &Credentials,
    base_url_override: Option<&str>,
    query: &str,
) -> Result<Vec<ModelEntry>, ConnectorError> {
    fetch_filtered(transport, credentials, base_url_override, Some(query)).await
}

/// Credential check used by the host's credential test: the listing call
/// succeeds iff the key is accepted by the endpoint.
pub async fn verify_credentials<T: HttpTransport>(
    transport: &T,
    credentials: &Credentials,
) -> Result<(), ConnectorError> {
    list_models(transport, credentials, None).await.map(|_| ())
}
