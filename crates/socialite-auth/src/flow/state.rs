//! CSRF state generation and verification

use rand::Rng;
use rand::distributions::Alphanumeric;
use subtle::ConstantTimeEq;

use crate::core::SocialAuthError;

/// Length of generated state values
pub const STATE_LENGTH: usize = 40;

/// Generates a random alphanumeric state value
pub fn generate_state() -> String {
	rand::thread_rng()
		.sample_iter(&Alphanumeric)
		.take(STATE_LENGTH)
		.map(char::from)
		.collect()
}

/// Verifies the state returned on callback against the one issued
///
/// Both values must be present and equal. The comparison does not
/// short-circuit on the first differing byte.
pub fn verify_state(expected: Option<&str>, returned: Option<&str>) -> Result<(), SocialAuthError> {
	let expected = expected
		.filter(|s| !s.is_empty())
		.ok_or_else(|| SocialAuthError::StateValidation("No state was issued".into()))?;
	let returned = returned
		.filter(|s| !s.is_empty())
		.ok_or_else(|| SocialAuthError::StateValidation("Callback carries no state".into()))?;

	if bool::from(expected.as_bytes().ct_eq(returned.as_bytes())) {
		Ok(())
	} else {
		Err(SocialAuthError::StateValidation("State mismatch".into()))
	}
}
