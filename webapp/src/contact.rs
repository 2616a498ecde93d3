use dioxus::prelude::*;
use dioxus_router::prelude::*;
use std::time::Duration;

use gloo_timers::future::sleep;
use tracing::{debug, info};

use site::{
    contact::{ContactFields, ContactForm, Subject, delivery_notification},
    content::{QUICK_LINKS, SOCIAL_LINKS},
    page_title,
};

use crate::CONFIG;
use crate::components::toaster::toast;

// simulated delivery
//
// there is no backend behind the form; the message is "sent" once the configured delay
// elapses.  a real transport would return its error here and the form would move to
// Failed instead of Idle
async fn deliver(fields: ContactFields, delay: Duration) -> Result<(), String> {
    debug!({ subject = ?fields.subject, delay = ?delay }, "delivering contact message");

    sleep(delay).await;

    Ok(())
}

#[derive(Clone, PartialEq, Props)]
struct ContactFormBoxProps {
    form: Signal<ContactForm>,
}

#[component]
fn ContactFormBox(props: ContactFormBoxProps) -> Element {
    let mut form = props.form;

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        // the required attributes stop the browser from getting here with blank fields;
        // begin_submit enforces the same rule and rejects duplicates
        let fields = match form.write().begin_submit() {
            Ok(fields) => fields,
            Err(err) => {
                debug!("contact submission blocked: {err}");
                return;
            }
        };

        info!("contact form submitted");

        // delivery is not tied to this component; leaving the page mid-submit still
        // ends in a toast
        spawn_forever(async move {
            let outcome = deliver(fields, CONFIG.contact.submit_delay()).await;

            let notification = match form.try_write() {
                Ok(mut form) => form.finish(outcome),
                Err(_) => {
                    debug!("contact page left before delivery completed");
                    Some(delivery_notification(&outcome))
                }
            };

            if let Some(notification) = notification {
                toast(notification);
            }
        });
    };

    let busy = form.read().is_busy();
    let subject = form.read().fields.subject;

    rsx! {
        div { class: "box",
            h2 { class: "theme-h3", style: "margin-bottom: var(--space-6);", "Send us a Message" }
            form { onsubmit: handle_submit,
                div { class: "form-group",
                    label { class: "form-label", r#for: "name", "Name *" }
                    input {
                        class: "form-input",
                        id: "name",
                        name: "name",
                        placeholder: "John Doe",
                        required: true,
                        disabled: busy,
                        value: "{form.read().fields.name}",
                        oninput: move |evt| form.write().fields.name = evt.value(),
                    }
                }

                div { class: "form-group",
                    label { class: "form-label", r#for: "email", "Email *" }
                    input {
                        class: "form-input",
                        id: "email",
                        name: "email",
                        r#type: "email",
                        placeholder: "john@example.com",
                        required: true,
                        disabled: busy,
                        value: "{form.read().fields.email}",
                        oninput: move |evt| form.write().fields.email = evt.value(),
                    }
                }

                div { class: "form-group",
                    label { class: "form-label", r#for: "subject", "Subject *" }
                    select {
                        class: "form-select",
                        id: "subject",
                        name: "subject",
                        required: true,
                        disabled: busy,
                        onchange: move |evt| form.write().fields.subject = Subject::from_value(&evt.value()),
                        option {
                            value: "",
                            disabled: true,
                            selected: subject.is_none(),
                            "Select a subject"
                        }
                        for choice in Subject::all() {
                            option {
                                key: "{choice.value()}",
                                value: choice.value(),
                                selected: subject == Some(choice),
                                "{choice.label()}"
                            }
                        }
                    }
                }

                div { class: "form-group",
                    label { class: "form-label", r#for: "message", "Message *" }
                    textarea {
                        class: "form-textarea",
                        id: "message",
                        name: "message",
                        placeholder: "Tell us more about your inquiry...",
                        rows: "5",
                        required: true,
                        disabled: busy,
                        value: "{form.read().fields.message}",
                        oninput: move |evt| form.write().fields.message = evt.value(),
                    }
                }

                button {
                    class: "btn btn-primary btn-block",
                    r#type: "submit",
                    disabled: busy,
                    "{form.read().submit_label()}"
                }
            }
        }
    }
}

#[component]
fn ContactSidebar() -> Element {
    rsx! {
        div { class: "sidebar-stack",
            div { class: "box",
                h3 { class: "theme-h4", style: "margin-bottom: var(--space-4);",
                    "Contact Information"
                }
                ul { class: "contact-details",
                    li {
                        span { class: "icon icon-mail", aria_hidden: "true" }
                        div {
                            p { class: "swatch-name", "Email" }
                            p { class: "muted", "{CONFIG.contact.email}" }
                        }
                    }
                    li {
                        span { class: "icon icon-pin", aria_hidden: "true" }
                        div {
                            p { class: "swatch-name", "Location" }
                            p { class: "muted", "{CONFIG.contact.location}" }
                        }
                    }
                    li {
                        span { class: "icon icon-clock", aria_hidden: "true" }
                        div {
                            p { class: "swatch-name", "Response Time" }
                            p { class: "muted", "{CONFIG.contact.response_time}" }
                        }
                    }
                }
            }

            div { class: "box bg-primary-05",
                h3 { class: "theme-h4", style: "margin-bottom: var(--space-4);", "Quick Links" }
                ul {
                    for link in QUICK_LINKS.iter() {
                        li { key: "{link.label}",
                            if link.href.starts_with("http") {
                                a {
                                    class: "quick-link",
                                    href: link.href,
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    span { class: "icon icon-external", aria_hidden: "true" }
                                    "{link.label}"
                                }
                            } else {
                                Link { to: link.href, class: "quick-link",
                                    span { class: "icon icon-chevron", aria_hidden: "true" }
                                    "{link.label}"
                                }
                            }
                        }
                    }
                }
            }

            div { class: "box",
                h3 { class: "theme-h4", style: "margin-bottom: var(--space-4);", "Follow Us" }
                div { class: "social-row",
                    for link in SOCIAL_LINKS.iter() {
                        a {
                            key: "{link.label}",
                            class: "social-link",
                            href: link.href,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{link.label}"
                        }
                    }
                }
            }
        }
    }
}

// contact page
//
// the form state lives here rather than in the form box so it survives the box
// re-rendering while a submission is in flight
#[component]
pub fn Contact() -> Element {
    let form = use_signal(ContactForm::new);
    let title = page_title(Some("Contact"), &CONFIG.site_name);

    rsx! {
        document::Title { "{title}" }

        div { class: "theme-bg-color page-section",
            div { class: "container-max-md",
                div { class: "centered", style: "margin-bottom: var(--space-12);",
                    h1 { class: "theme-h1 hero-title", "Get in Touch" }
                    p { class: "hero-subtitle",
                        "Have questions about the framework? We'd love to hear from you."
                    }
                }

                div { class: "contact-grid",
                    ContactFormBox { form }
                    ContactSidebar {}
                }
            }
        }
    }
}
