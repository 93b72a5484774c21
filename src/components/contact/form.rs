//! Contact form state, validation and submission.
//!
//! The form posts `{name, email, message}` as JSON to `{backend}/api/contact`
//! and expects `{success, error?}` back. The HTTP call goes through the
//! [`ContactTransport`] trait so the whole flow runs without a browser.

use std::time::Duration;

use log::{info, warn};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

/// How long an outcome stays on the submit button before it resets.
pub const RESET_DELAY: Duration = Duration::from_millis(2500);

/// Label of the submit button when nothing is in flight.
pub const IDLE_LABEL: &str = "Send Message";

#[derive(Debug, Error)]
pub enum ContactError {
	/// The request could not be sent or no response arrived.
	#[error("network error: {0}")]
	Network(String),
}

/// What the user typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
	pub name: String,
	pub email: String,
	pub message: String,
}

impl ContactFields {
	/// Request body with surrounding whitespace removed, or `None` if any
	/// field is blank.
	pub fn to_request(&self) -> Option<ContactRequest> {
		let (name, email, message) = (self.name.trim(), self.email.trim(), self.message.trim());
		if name.is_empty() || email.is_empty() || message.is_empty() {
			return None;
		}
		Some(ContactRequest {
			name: name.to_string(),
			email: email.to_string(),
			message: message.to_string(),
		})
	}

	pub fn is_complete(&self) -> bool {
		self.to_request().is_some()
	}
}

/// JSON body sent to the contact endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactRequest {
	pub name: String,
	pub email: String,
	pub message: String,
}

impl ContactRequest {
	pub fn to_json(&self) -> String {
		json!({
			"name": self.name,
			"email": self.email,
			"message": self.message,
		})
		.to_string()
	}
}

/// JSON body returned by the contact endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ContactResponse {
	pub success: bool,
	#[serde(default)]
	pub error: Option<String>,
}

/// Status code and undecoded body of an HTTP response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
	pub status: u16,
	pub body: String,
}

impl RawResponse {
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Where a submission stands, as shown to the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
	#[default]
	Idle,
	/// A field was blank; nothing was sent.
	Invalid,
	Sending,
	Sent,
	/// The backend answered but refused the message.
	Rejected(Option<String>),
	/// The backend answered with something that is not JSON.
	ServerError,
	NetworkError,
}

impl SubmitStatus {
	pub fn label(&self) -> String {
		match self {
			Self::Idle => IDLE_LABEL.to_string(),
			Self::Invalid => "Please fill all the fields.".to_string(),
			Self::Sending => "Sending...".to_string(),
			Self::Sent => "✓ Message Sent!".to_string(),
			Self::Rejected(Some(error)) => format!("Error: {error}, Try Again"),
			Self::Rejected(None) => "Error, Try Again".to_string(),
			Self::ServerError => "Server Error".to_string(),
			Self::NetworkError => "Network Error".to_string(),
		}
	}

	/// Whether the submit control should be disabled.
	pub fn is_busy(&self) -> bool {
		!matches!(self, Self::Idle | Self::Invalid)
	}

	pub fn is_error(&self) -> bool {
		matches!(
			self,
			Self::Invalid | Self::Rejected(_) | Self::ServerError | Self::NetworkError
		)
	}
}

/// Numbers submissions so a delayed reset only touches the attempt that
/// armed it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Attempts {
	current: u32,
}

impl Attempts {
	/// Starts a new attempt, superseding every earlier one.
	pub fn begin(&mut self) -> u32 {
		self.current = self.current.wrapping_add(1);
		self.current
	}

	pub fn is_current(&self, attempt: u32) -> bool {
		self.current == attempt
	}
}

/// Contact URL for a backend base URL, tolerating a trailing slash.
pub fn contact_endpoint(base_url: &str) -> String {
	format!("{}/api/contact", base_url.trim_end_matches('/'))
}

/// Maps an endpoint response to the status shown to the user.
pub fn interpret_response(response: &RawResponse) -> SubmitStatus {
	let parsed: ContactResponse = match serde_json::from_str(&response.body) {
		Ok(parsed) => parsed,
		Err(e) => {
			warn!("portfolio: contact endpoint did not return valid JSON: {}", e);
			return SubmitStatus::ServerError;
		}
	};

	if response.is_success() && parsed.success {
		SubmitStatus::Sent
	} else {
		warn!(
			"portfolio: contact endpoint refused message (status {}): {:?}",
			response.status, parsed.error
		);
		SubmitStatus::Rejected(parsed.error)
	}
}

/// Sends a JSON body to a URL and hands back the raw response.
#[allow(
	async_fn_in_trait,
	reason = "single-threaded wasm executor, futures never cross threads"
)]
pub trait ContactTransport {
	async fn post_json(&self, url: &str, body: String) -> Result<RawResponse, ContactError>;
}

/// Field values plus the status of the last submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
	pub fields: ContactFields,
	pub status: SubmitStatus,
}

impl ContactForm {
	pub fn new(fields: ContactFields) -> Self {
		Self {
			fields,
			status: SubmitStatus::Idle,
		}
	}

	/// Validates and sends the form. Blank fields short-circuit before any
	/// request; a successful send clears the fields, every other outcome
	/// keeps them so the user can retry.
	pub async fn submit<T: ContactTransport>(
		&mut self,
		transport: &T,
		endpoint: &str,
	) -> &SubmitStatus {
		let Some(request) = self.fields.to_request() else {
			self.status = SubmitStatus::Invalid;
			return &self.status;
		};

		self.status = SubmitStatus::Sending;
		self.status = match transport.post_json(endpoint, request.to_json()).await {
			Ok(response) => interpret_response(&response),
			Err(e) => {
				warn!("portfolio: contact submission failed: {}", e);
				SubmitStatus::NetworkError
			}
		};

		if self.status == SubmitStatus::Sent {
			info!("portfolio: contact message sent");
			self.fields = ContactFields::default();
		}
		&self.status
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use super::*;

	/// Records every request and replays a canned reply.
	struct MockTransport {
		reply: RefCell<Option<Result<RawResponse, ContactError>>>,
		requests: RefCell<Vec<(String, String)>>,
	}

	impl MockTransport {
		fn replying(reply: Result<RawResponse, ContactError>) -> Self {
			Self {
				reply: RefCell::new(Some(reply)),
				requests: RefCell::new(Vec::new()),
			}
		}

		fn json(status: u16, body: &str) -> Self {
			Self::replying(Ok(RawResponse {
				status,
				body: body.to_string(),
			}))
		}
	}

	impl ContactTransport for MockTransport {
		async fn post_json(&self, url: &str, body: String) -> Result<RawResponse, ContactError> {
			self.requests.borrow_mut().push((url.to_string(), body));
			self.reply
				.borrow_mut()
				.take()
				.unwrap_or_else(|| Err(ContactError::Network("no reply queued".into())))
		}
	}

	fn filled() -> ContactForm {
		ContactForm::new(ContactFields {
			name: "  Ada ".into(),
			email: "ada@example.com".into(),
			message: "Hello there".into(),
		})
	}

	const ENDPOINT: &str = "https://backend.example/api/contact";

	#[test]
	fn test_success_clears_form() {
		let transport = MockTransport::json(200, r#"{"success": true}"#);
		let mut form = filled();

		let status = pollster::block_on(form.submit(&transport, ENDPOINT)).clone();

		assert_eq!(status, SubmitStatus::Sent);
		assert_eq!(form.fields, ContactFields::default());
		let requests = transport.requests.borrow();
		assert_eq!(requests.len(), 1);
		assert_eq!(requests[0].0, ENDPOINT);
		let sent: serde_json::Value = serde_json::from_str(&requests[0].1).unwrap();
		assert_eq!(
			sent,
			json!({"name": "Ada", "email": "ada@example.com", "message": "Hello there"})
		);
	}

	#[test]
	fn test_rejection_keeps_form_and_shows_error() {
		let transport = MockTransport::json(200, r#"{"success": false, "error": "x"}"#);
		let mut form = filled();

		pollster::block_on(form.submit(&transport, ENDPOINT));

		assert_eq!(form.status, SubmitStatus::Rejected(Some("x".into())));
		assert!(form.status.label().contains('x'));
		assert!(form.status.is_error());
		assert_eq!(form.fields, filled().fields);
	}

	#[test]
	fn test_blank_field_never_hits_network() {
		for fields in [
			ContactFields {
				name: "".into(),
				email: "a@b.c".into(),
				message: "hi".into(),
			},
			ContactFields {
				name: "Ada".into(),
				email: "   ".into(),
				message: "hi".into(),
			},
			ContactFields {
				name: "Ada".into(),
				email: "a@b.c".into(),
				message: "\n".into(),
			},
		] {
			let transport = MockTransport::json(200, r#"{"success": true}"#);
			let mut form = ContactForm::new(fields.clone());

			pollster::block_on(form.submit(&transport, ENDPOINT));

			assert_eq!(form.status, SubmitStatus::Invalid);
			assert_eq!(form.status.label(), "Please fill all the fields.");
			assert!(transport.requests.borrow().is_empty());
			assert_eq!(form.fields, fields);
		}
	}

	#[test]
	fn test_malformed_body_is_server_error() {
		let transport = MockTransport::json(200, "<html>502 Bad Gateway</html>");
		let mut form = filled();
		pollster::block_on(form.submit(&transport, ENDPOINT));
		assert_eq!(form.status, SubmitStatus::ServerError);
		assert_eq!(form.fields, filled().fields);
	}

	#[test]
	fn test_network_failure() {
		let transport = MockTransport::replying(Err(ContactError::Network("offline".into())));
		let mut form = filled();
		pollster::block_on(form.submit(&transport, ENDPOINT));
		assert_eq!(form.status, SubmitStatus::NetworkError);
		assert_eq!(form.status.label(), "Network Error");
	}

	#[test]
	fn test_non_2xx_with_success_flag_is_rejected() {
		let response = RawResponse {
			status: 500,
			body: r#"{"success": true}"#.into(),
		};
		assert_eq!(interpret_response(&response), SubmitStatus::Rejected(None));
	}

	#[test]
	fn test_request_body_escapes_text() {
		let request = ContactRequest {
			name: "O\"Neil".into(),
			email: "o@n.ie".into(),
			message: "line one\nline two".into(),
		};
		let parsed: serde_json::Value = serde_json::from_str(&request.to_json()).unwrap();
		assert_eq!(parsed["name"], "O\"Neil");
		assert_eq!(parsed["message"], "line one\nline two");
	}

	#[test]
	fn test_contact_endpoint_trims_slash() {
		assert_eq!(
			contact_endpoint("https://backend.example/"),
			"https://backend.example/api/contact"
		);
		assert_eq!(
			contact_endpoint("https://backend.example"),
			"https://backend.example/api/contact"
		);
	}

	#[test]
	fn test_reset_from_earlier_attempt_is_stale() {
		let mut attempts = Attempts::default();
		let invalid = attempts.begin();
		assert!(attempts.is_current(invalid));

		// A second submit while the first outcome is still on screen
		let sending = attempts.begin();
		assert!(!attempts.is_current(invalid));
		assert!(attempts.is_current(sending));
	}

	#[test]
	fn test_busy_states() {
		assert!(!SubmitStatus::Idle.is_busy());
		assert!(!SubmitStatus::Invalid.is_busy());
		assert!(SubmitStatus::Sending.is_busy());
		assert!(SubmitStatus::Sent.is_busy());
		assert!(SubmitStatus::NetworkError.is_busy());
	}
}
