//! HTTP transport abstraction
//!
//! Providers never own an HTTP client. A transport is injected when the
//! provider is constructed, so any client that can send a GET with headers
//! and a POST with a form body can be plugged in. Timeouts and cancellation
//! are the transport's concern.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// HTTP method supported by the transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
	Get,
	Post,
}

/// Outgoing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
	pub method: Method,
	pub url: String,
	pub headers: Vec<(String, String)>,
	/// Form body, sent as `application/x-www-form-urlencoded`
	pub form: Option<Vec<(String, String)>>,
}

impl HttpRequest {
	/// Creates a GET request
	pub fn get(url: impl Into<String>) -> Self {
		Self {
			method: Method::Get,
			url: url.into(),
			headers: Vec::new(),
			form: None,
		}
	}

	/// Creates a POST request with a form-encoded body
	pub fn post_form(url: impl Into<String>, form: Vec<(String, String)>) -> Self {
		Self {
			method: Method::Post,
			url: url.into(),
			headers: Vec::new(),
			form: Some(form),
		}
	}

	/// Adds a header
	pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.headers.push((name.into(), value.into()));
		self
	}

	/// Adds several headers
	pub fn headers<I>(mut self, headers: I) -> Self
	where
		I: IntoIterator<Item = (String, String)>,
	{
		self.headers.extend(headers);
		self
	}

	/// Header value by case-insensitive name
	pub fn header_value(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(key, _)| key.eq_ignore_ascii_case(name))
			.map(|(_, value)| value.as_str())
	}

	/// Form field by name
	pub fn form_value(&self, name: &str) -> Option<&str> {
		self.form
			.as_ref()?
			.iter()
			.rev()
			.find(|(key, _)| key == name)
			.map(|(_, value)| value.as_str())
	}
}

/// Response returned by the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
	pub status: u16,
	pub body: Bytes,
}

impl HttpResponse {
	pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
		Self {
			status,
			body: body.into(),
		}
	}

	/// Whether the status is 2xx
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	/// Body decoded as UTF-8, lossily
	pub fn text(&self) -> String {
		String::from_utf8_lossy(&self.body).into_owned()
	}
}

/// Transport-level failure (connection, TLS, timeout, ...)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Capability to send HTTP requests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
	/// Sends a request and returns the raw response
	///
	/// Non-2xx statuses are returned as responses, not errors.
	async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Transport backed by `reqwest`
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
	client: reqwest::Client,
}

impl ReqwestTransport {
	/// Creates a transport with a default client
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a transport around a configured client (timeouts, proxies)
	pub fn with_client(client: reqwest::Client) -> Self {
		Self { client }
	}
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
	async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
		let mut builder = match request.method {
			Method::Get => self.client.get(&request.url),
			Method::Post => self.client.post(&request.url),
		};

		for (name, value) in &request.headers {
			builder = builder.header(name.as_str(), value.as_str());
		}

		if let Some(form) = &request.form {
			builder = builder.form(form);
		}

		let response = builder
			.send()
			.await
			.map_err(|e| TransportError(e.to_string()))?;

		let status = response.status().as_u16();
		let body = response
			.bytes()
			.await
			.map_err(|e| TransportError(e.to_string()))?;

		Ok(HttpResponse { status, body })
	}
}
