//! URL and body construction for RPC requests.
//!
//! Pure functions only: nothing here touches the network.

use serde_json::Value;
use url::Url;
use url::form_urlencoded;

use crate::error::ClientResult;
use crate::request::RpcRequest;
use crate::routing::Verb;

/// Build `{base}/{namespace}/{method}[/{args}][?{kwargs}]`.
///
/// Positional args are percent-encoded one by one and joined with `,`. For
/// `GET` requests every keyword value is sent as its compact JSON encoding.
pub fn build_url(base: &Url, request: &RpcRequest) -> ClientResult<Url> {
    request.validate()?;
    let route = request.route();

    let mut url = base.clone();
    let mut path = format!(
        "{}/{}/{}",
        url.path().trim_end_matches('/'),
        route.namespace,
        request.method()
    );
    if !request.positional().is_empty() {
        let joined = request
            .positional()
            .iter()
            .map(|arg| urlencoding::encode(arg))
            .collect::<Vec<_>>()
            .join(",");
        path.push('/');
        path.push_str(&joined);
    }
    url.set_path(&path);
    url.set_query(None);

    if route.verb == Verb::Get && !request.keywords().is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in request.keywords() {
            pairs.append_pair(key, &value.to_string());
        }
    }
    Ok(url)
}

/// Form body for `POST` requests.
///
/// Strings go out as-is so credentials reach the server unquoted; other
/// values are sent as compact JSON.
pub fn build_form(request: &RpcRequest) -> String {
    let mut form = form_urlencoded::Serializer::new(String::new());
    for (key, value) in request.keywords() {
        match value {
            Value::String(s) => form.append_pair(key, s),
            other => form.append_pair(key, &other.to_string()),
        };
    }
    form.finish()
}
