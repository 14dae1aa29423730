//! Auth-aware HTTP transport.
//!
//! Every request is described by a [`RequestDescriptor`] and passed through
//! an ordered chain of [`RequestInterceptor`]s before dispatch. The chain
//! receives the construction outcome as a `Result`: interceptors enrich
//! `Ok` descriptors and hand `Err` failures back as they arrived.
//!
//! Client-side (csr): dispatch via `gloo-net`.
//! Server rendering and native tests: dispatch returns
//! [`RequestError::Unavailable`]; preparation is identical on both sides.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::RequestError;
use crate::config::PortalConfig;
use crate::state::session::Session;

pub const AUTHORIZATION_HEADER: &str = "Authorization";
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// Mutable description of one outgoing call, owned by the transport until dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: Option<String>,
}

impl RequestDescriptor {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self { method, url: url.into(), headers: BTreeMap::new(), body: None }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::Post, url)
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Encode`] if `body` cannot be serialized.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, RequestError> {
        let raw = serde_json::to_string(body).map_err(|e| RequestError::Encode(e.to_string()))?;
        self.set_header(CONTENT_TYPE_HEADER, "application/json");
        self.body = Some(raw);
        Ok(self)
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Set a header, replacing any existing value regardless of name casing.
    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        self.headers.retain(|k, _| !k.eq_ignore_ascii_case(name));
        self.headers.insert(name.to_owned(), value.into());
    }
}

/// Raw response handed back by [`Transport::send`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResponseData {
    pub status: u16,
    pub body: String,
}

impl ResponseData {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode a successful JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Status`] for non-2xx responses and
    /// [`RequestError::Decode`] if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, RequestError> {
        if !self.ok() {
            return Err(RequestError::Status { status: self.status });
        }
        serde_json::from_str(&self.body).map_err(|e| RequestError::Decode(e.to_string()))
    }
}

/// Request-construction hook with a success path and a failure path.
pub trait RequestInterceptor: Send + Sync {
    /// Runs on every request before dispatch.
    ///
    /// # Errors
    ///
    /// Implementations return the incoming failure, or one of their own.
    fn intercept(
        &self,
        request: Result<RequestDescriptor, RequestError>,
    ) -> Result<RequestDescriptor, RequestError>;
}

/// Adds `Authorization: Bearer <token>` when the session holds a non-empty token.
#[derive(Clone, Debug)]
pub struct BearerAuth {
    session: Session,
}

impl BearerAuth {
    pub fn new(session: Session) -> Self {
        Self { session }
    }
}

impl RequestInterceptor for BearerAuth {
    fn intercept(
        &self,
        request: Result<RequestDescriptor, RequestError>,
    ) -> Result<RequestDescriptor, RequestError> {
        let mut request = request?;
        if let Some(token) = self.session.bearer_token() {
            request.set_header(AUTHORIZATION_HEADER, format!("Bearer {token}"));
        }
        Ok(request)
    }
}

/// HTTP client bound to a single API base address.
#[derive(Clone)]
pub struct Transport {
    base_url: String,
    interceptors: Vec<Arc<dyn RequestInterceptor>>,
}

impl fmt::Debug for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.base_url)
            .field("interceptors", &self.interceptors.len())
            .finish()
    }
}

impl Transport {
    /// Transport with [`BearerAuth`] registered against `session`.
    pub fn new(config: &PortalConfig, session: Session) -> Self {
        Self::bare(config).with_interceptor(BearerAuth::new(session))
    }

    /// Transport with no interceptors.
    pub fn bare(config: &PortalConfig) -> Self {
        Self { base_url: config.api_base_url.trim_end_matches('/').to_owned(), interceptors: Vec::new() }
    }

    /// Register an interceptor after the existing ones.
    #[must_use]
    pub fn with_interceptor(mut self, interceptor: impl RequestInterceptor + 'static) -> Self {
        self.interceptors.push(Arc::new(interceptor));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join `url` onto the base address. Absolute URLs pass through.
    pub fn resolve_url(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            return url.to_owned();
        }
        let path = url.trim_start_matches('/');
        if path.is_empty() {
            return self.base_url.clone();
        }
        format!("{}/{path}", self.base_url)
    }

    /// Run the interceptor chain in registration order.
    ///
    /// # Errors
    ///
    /// Returns the construction failure, or the first failure an interceptor produces.
    pub fn prepare(
        &self,
        request: Result<RequestDescriptor, RequestError>,
    ) -> Result<RequestDescriptor, RequestError> {
        self.interceptors
            .iter()
            .fold(request, |acc, interceptor| interceptor.intercept(acc))
    }

    /// Prepare and dispatch a request.
    ///
    /// # Errors
    ///
    /// Returns the construction failure unchanged, [`RequestError::Network`] if
    /// the fetch fails, or [`RequestError::Unavailable`] outside the browser.
    pub async fn send(
        &self,
        request: Result<RequestDescriptor, RequestError>,
    ) -> Result<ResponseData, RequestError> {
        let request = self.prepare(request)?;
        let url = self.resolve_url(&request.url);
        log::debug!("{} {url}", request.method.as_str());

        #[cfg(feature = "csr")]
        {
            dispatch(&url, request).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = url;
            Err(RequestError::Unavailable)
        }
    }

    /// `POST` a JSON body and decode a JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Encode`] if `body` cannot be serialized, then
    /// see [`Transport::send`] and [`ResponseData::json`].
    pub async fn post_json<B, T>(&self, url: &str, body: &B) -> Result<T, RequestError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(RequestDescriptor::post(url).json(body)).await?.json()
    }
}

#[cfg(feature = "csr")]
async fn dispatch(url: &str, request: RequestDescriptor) -> Result<ResponseData, RequestError> {
    use gloo_net::http::{Method as HttpMethod, RequestBuilder};

    let method = match request.method {
        Method::Get => HttpMethod::GET,
        Method::Post => HttpMethod::POST,
    };

    let mut builder = RequestBuilder::new(url).method(method);
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }
    let built = match request.body {
        Some(body) => builder.body(body),
        None => builder.build(),
    }
    .map_err(|e| RequestError::Encode(e.to_string()))?;

    let resp = built.send().await.map_err(|e| RequestError::Network(e.to_string()))?;
    let status = resp.status();
    let body = resp.text().await.map_err(|e| RequestError::Network(e.to_string()))?;
    Ok(ResponseData { status, body })
}
