//! Leptos contact section.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, warn};

use super::fetch::FetchTransport;
use super::form::{Attempts, ContactFields, ContactForm, RESET_DELAY, SubmitStatus};

/// Contact form posting to `endpoint`. The submit button shows the outcome
/// and is re-enabled [`RESET_DELAY`] after every attempt. A new submit cancels
/// the pending reset of the previous one.
#[component]
pub fn ContactSection(#[prop(into)] endpoint: String) -> impl IntoView {
	let name = RwSignal::new(String::new());
	let email = RwSignal::new(String::new());
	let message = RwSignal::new(String::new());
	let status = RwSignal::new(SubmitStatus::Idle);
	let attempts = StoredValue::new(Attempts::default());
	let pending_reset = StoredValue::new(None::<TimeoutHandle>);

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		if status.get_untracked().is_busy() {
			return;
		}

		if let Some(handle) = pending_reset.try_update_value(Option::take).flatten() {
			handle.clear();
		}
		let attempt = attempts.try_update_value(|a| a.begin()).unwrap_or_default();

		let mut form = ContactForm::new(ContactFields {
			name: name.get_untracked(),
			email: email.get_untracked(),
			message: message.get_untracked(),
		});
		if form.fields.is_complete() {
			status.set(SubmitStatus::Sending);
		}

		let endpoint = endpoint.clone();
		spawn_local(async move {
			let outcome = form.submit(&FetchTransport, &endpoint).await.clone();
			debug!("portfolio: contact outcome {:?}", outcome);
			if !attempts.with_value(|a| a.is_current(attempt)) {
				return;
			}

			if outcome == SubmitStatus::Sent {
				name.set(String::new());
				email.set(String::new());
				message.set(String::new());
			}
			status.set(outcome);
			let reset = move || {
				if attempts.with_value(|a| a.is_current(attempt)) {
					status.set(SubmitStatus::Idle);
				}
			};
			match set_timeout_with_handle(reset, RESET_DELAY) {
				Ok(handle) => pending_reset.set_value(Some(handle)),
				Err(e) => warn!("portfolio: could not schedule form reset: {:?}", e),
			}
		});
	};

	view! {
		<section id="contact" class="section contact">
			<h2 class="section-title">"Get In Touch"</h2>
			<form id="contactForm" class="contact-form" on:submit=on_submit>
				<input type="text" id="formName" placeholder="Your Name" bind:value=name />
				<input type="email" id="formEmail" placeholder="Your Email" bind:value=email />
				<textarea id="formMessage" placeholder="Your Message" rows="5" bind:value=message />
				<button type="submit" class="btn btn-primary" disabled=move || status.get().is_busy()>
					{move || status.get().label()}
				</button>
				<p
					class="form-status"
					class:error=move || status.get().is_error()
					aria-live="polite"
				>
					{move || match status.get() {
						SubmitStatus::Idle => String::new(),
						other => other.label(),
					}}
				</p>
			</form>
		</section>
	}
}
