//! Authenticated profile API calls

use crate::core::{FailureCause, HttpRequest, HttpTransport, RawPayload, SocialAuthError};

/// Client for authenticated JSON GET requests against a profile API
pub struct UserInfoClient<'a> {
	transport: &'a dyn HttpTransport,
}

impl<'a> UserInfoClient<'a> {
	/// Creates a new client over the injected transport
	pub fn new(transport: &'a dyn HttpTransport) -> Self {
		Self { transport }
	}

	/// Fetches a JSON document
	///
	/// Any transport failure, non-2xx status or undecodable body becomes a
	/// `ProfileFetch` error naming `url`.
	pub async fn get_json(
		&self,
		url: &str,
		headers: Vec<(String, String)>,
	) -> Result<RawPayload, SocialAuthError> {
		tracing::debug!(endpoint = url, "fetching profile data");

		let request = HttpRequest::get(url).headers(headers);

		let response = self.transport.send(request).await.map_err(|e| {
			tracing::warn!(endpoint = url, error = %e, "profile request failed");
			SocialAuthError::profile_fetch(url, FailureCause::Transport(e.to_string()))
		})?;

		if !response.is_success() {
			tracing::warn!(
				endpoint = url,
				status = response.status,
				"profile endpoint returned an error status"
			);
			return Err(SocialAuthError::profile_fetch(
				url,
				FailureCause::Status {
					status: response.status,
					body: response.text(),
				},
			));
		}

		RawPayload::from_slice(&response.body)
			.map_err(|e| SocialAuthError::profile_fetch(url, FailureCause::Decode(e.to_string())))
	}
}
