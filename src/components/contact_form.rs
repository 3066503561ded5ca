use std::fmt;

use gloo_timers::callback::Timeout;
use log::info;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, SubmitEvent};
use yew::prelude::*;

use crate::config::{ContactConfig, SiteConfig};

const MIN_MESSAGE_LEN: usize = 10;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FormError {
    MissingName,
    InvalidEmail,
    MessageTooShort,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::MissingName => write!(f, "Please tell us your name."),
            FormError::InvalidEmail => write!(f, "That email address doesn't look right."),
            FormError::MessageTooShort => {
                write!(f, "Your message needs at least {} characters.", MIN_MESSAGE_LEN)
            }
        }
    }
}

fn looks_like_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && !email.contains(char::is_whitespace)
        && domain.split('.').count() >= 2
        && domain.split('.').all(|label| !label.is_empty())
}

impl ContactForm {
    /// Reports the first problem, checking fields top to bottom.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingName);
        }
        if !looks_like_email(self.email.trim()) {
            return Err(FormError::InvalidEmail);
        }
        if self.message.trim().chars().count() < MIN_MESSAGE_LEN {
            return Err(FormError::MessageTooShort);
        }
        Ok(())
    }
}

/// Delay from submit until the form is back to `Idle`.
fn reset_after_ms(config: &ContactConfig) -> u32 {
    config.sending_ms.saturating_add(config.feedback_ms)
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormStatus {
    Idle,
    Invalid(FormError),
    Sending,
    Sent,
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default().contact;
    let form = use_state(ContactForm::default);
    let status = use_state(|| FormStatus::Idle);
    // Pending feedback timers; replaced on every submit, dropped on unmount.
    let timers = use_mut_ref(Vec::<Timeout>::new);

    {
        let timers = timers.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    timers.borrow_mut().clear();
                }
            },
            (),
        );
    }

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ContactForm {
                name: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ContactForm {
                email: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.set(ContactForm {
                message: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_submit = {
        let form = form.clone();
        let status = status.clone();
        let timers = timers.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status == FormStatus::Sending {
                return;
            }
            if let Err(err) = form.validate() {
                status.set(FormStatus::Invalid(err));
                return;
            }

            info!("Contact form submitted");
            status.set(FormStatus::Sending);

            let mut pending = timers.borrow_mut();
            pending.clear();
            let sent = {
                let form = form.clone();
                let status = status.clone();
                Timeout::new(config.sending_ms, move || {
                    form.set(ContactForm::default());
                    status.set(FormStatus::Sent);
                })
            };
            let reset = {
                let status = status.clone();
                Timeout::new(reset_after_ms(&config), move || {
                    status.set(FormStatus::Idle);
                })
            };
            pending.push(sent);
            pending.push(reset);
        })
    };

    let sending = *status == FormStatus::Sending;
    let feedback = match &*status {
        FormStatus::Idle => html! {},
        FormStatus::Invalid(err) => html! {
            <p class="form-feedback error" role="alert">{err.to_string()}</p>
        },
        FormStatus::Sending => html! {
            <p class="form-feedback pending">{"Sending..."}</p>
        },
        FormStatus::Sent => html! {
            <p class="form-feedback success" role="status">{"Thanks! We'll get back to you within one business day."}</p>
        },
    };

    html! {
        <section class="contact" id="contact">
            <h2>{"Talk to us"}</h2>
            <p class="section-subtitle">{"Tell us a little about your books and we'll set up a walkthrough."}</p>
            <form class="contact-form" onsubmit={on_submit} novalidate={true}>
                <label>
                    <span>{"Name"}</span>
                    <input type="text" name="name" value={form.name.clone()} oninput={on_name} />
                </label>
                <label>
                    <span>{"Email"}</span>
                    <input type="email" name="email" value={form.email.clone()} oninput={on_email} />
                </label>
                <label>
                    <span>{"Message"}</span>
                    <textarea name="message" rows="5" value={form.message.clone()} oninput={on_message} />
                </label>
                <button type="submit" class="form-submit" disabled={sending}>
                    {if sending { "Sending..." } else { "Send message" }}
                </button>
                {feedback}
            </form>
            <style>
                {r#"
                .contact {
                    max-width: 640px;
                    margin: 0 auto;
                }
                .section-subtitle {
                    text-align: center;
                    color: #9aa3b5;
                    margin-bottom: 2rem;
                }
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.25rem;
                }
                .contact-form label {
                    display: flex;
                    flex-direction: column;
                    gap: 0.4rem;
                    color: #cfd6e6;
                }
                .contact-form input, .contact-form textarea {
                    padding: 0.8rem 1rem;
                    border-radius: 8px;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    background: rgba(255, 255, 255, 0.04);
                    color: #fff;
                    font: inherit;
                }
                .form-submit {
                    align-self: flex-start;
                    padding: 0.9rem 2rem;
                    border-radius: 999px;
                    border: none;
                    background: #f5b942;
                    color: #121621;
                    font-weight: 600;
                    cursor: pointer;
                }
                .form-submit:disabled { opacity: 0.6; cursor: wait; }
                .form-feedback { margin: 0; }
                .form-feedback.error { color: #ff7b7b; }
                .form-feedback.pending { color: #9aa3b5; }
                .form-feedback.success { color: #7ee0a1; }
                "#}
            </style>
        </section>
    }
}
