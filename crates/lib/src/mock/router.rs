use futures_util::{future::BoxFuture, TryStreamExt};
use http::{header, Method, Request, Response, StatusCode};
use jsonrpsee::server::logger::Body;
use std::{
    collections::HashMap,
    sync::Arc,
    task::{Context, Poll},
};
use tower::{Layer, Service};

use crate::{
    constant::{FORM_URLENCODED, NOT_FOUND_SUFFIX, TEXT_PLAIN_UTF8},
    mock::route::{RequestBody, Route, RouteTable},
};

/// Collect the whole body, keeping the read error instead of swallowing it
pub async fn read_body_bytes(body: Body) -> Result<Vec<u8>, String> {
    body.try_fold(Vec::new(), |mut acc, chunk| async move {
        acc.extend_from_slice(&chunk);
        Ok(acc)
    })
    .await
    .map_err(|e| e.to_string())
}

pub fn build_text_response(status_code: StatusCode, text: String) -> Response<Body> {
    Response::builder()
        .status(status_code)
        .header(header::CONTENT_TYPE, TEXT_PLAIN_UTF8)
        .body(Body::from(text))
        .unwrap_or_else(|e| {
            log::error!("Failed to build response, error: {e:?}");
            let mut response = Response::new(Body::empty());
            *response.status_mut() = status_code;
            response
        })
}

fn is_form_request(parts: &http::request::Parts) -> bool {
    let has_body_method = matches!(parts.method, Method::POST | Method::PUT | Method::PATCH);
    let is_form = parts
        .headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case(FORM_URLENCODED));
    has_body_method && is_form
}

/// First value per key; form body values win over query values
fn collect_form_values(query: Option<&str>, form_body: Option<&[u8]>) -> HashMap<String, String> {
    let mut values = HashMap::new();
    let body_pairs = form_body.into_iter().flat_map(url::form_urlencoded::parse);
    let query_pairs = query.into_iter().flat_map(|q| url::form_urlencoded::parse(q.as_bytes()));

    for (key, value) in body_pairs.chain(query_pairs) {
        values.entry(key.into_owned()).or_insert_with(|| value.into_owned());
    }
    values
}

/// Validate `request` against `route` and produce the canned or error response
pub async fn respond(route: &Route, request: Request<Body>) -> Response<Body> {
    let (parts, body) = request.into_parts();
    let form_body = is_form_request(&parts);

    let read = if route.needs_body() || form_body {
        Some(read_body_bytes(body).await)
    } else {
        None
    };

    let body_state = match &read {
        None => RequestBody::NotRead,
        Some(Ok(bytes)) => RequestBody::Bytes(bytes),
        Some(Err(e)) => {
            log::warn!("Failed to read body for {}: {e}", parts.uri.path());
            RequestBody::Unreadable
        }
    };

    let form_bytes = match (&read, form_body) {
        (Some(Ok(bytes)), true) => Some(bytes.as_slice()),
        _ => None,
    };
    let form = collect_form_values(parts.uri.query(), form_bytes);

    let outcome = route.check_params(body_state, |key| form.get(key).map(String::as_str));

    match outcome.error_text() {
        Some(text) => {
            log::debug!("{} {} rejected: {text}", parts.method, parts.uri);
            build_text_response(StatusCode::BAD_REQUEST, text)
        }
        None => build_text_response(StatusCode::OK, route.response.clone()),
    }
}

/// Route `request` through `routes`, falling back to 404 for unknown paths
pub async fn dispatch(routes: &RouteTable, request: Request<Body>) -> Response<Body> {
    match routes.lookup(request.uri().path()) {
        Some(route) => respond(route, request).await,
        None => {
            let target = request
                .uri()
                .path_and_query()
                .map(|pq| pq.as_str().to_string())
                .unwrap_or_else(|| request.uri().path().to_string());
            log::warn!("{target} {NOT_FOUND_SUFFIX}");
            build_text_response(StatusCode::NOT_FOUND, format!("{target} {NOT_FOUND_SUFFIX}"))
        }
    }
}

/// Layer that answers every request from an immutable route table
#[derive(Clone)]
pub struct MockRouterLayer {
    routes: Arc<RouteTable>,
}

impl MockRouterLayer {
    pub fn new(routes: Arc<RouteTable>) -> Self {
        Self { routes }
    }
}

impl<S> Layer<S> for MockRouterLayer {
    type Service = MockRouterService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockRouterService { inner, routes: Arc::clone(&self.routes) }
    }
}

#[derive(Clone)]
pub struct MockRouterService<S> {
    inner: S,
    routes: Arc<RouteTable>,
}

impl<S> Service<Request<Body>> for MockRouterService<S>
where
    S: Service<Request<Body>, Response = Response<Body>> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = Response<Body>;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        // The inner jsonrpsee service never sees mock traffic
        let routes = Arc::clone(&self.routes);
        Box::pin(async move { Ok(dispatch(&routes, req).await) })
    }
}
