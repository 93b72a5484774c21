//! Contact form and its connection to the backend endpoint.

mod component;
mod fetch;
pub mod form;

pub use component::ContactSection;
pub use fetch::FetchTransport;
pub use form::{
	ContactError, ContactFields, ContactForm, ContactRequest, ContactResponse, ContactTransport,
	RawResponse, SubmitStatus, contact_endpoint, interpret_response,
};
