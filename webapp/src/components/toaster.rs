use dioxus::prelude::*;
use gloo_timers::callback::Timeout;
use tracing::debug;

use site::notify::{Notification, NotificationQueue, ToastId, Variant};

use crate::CONFIG;

pub static TOASTS: GlobalSignal<NotificationQueue> =
    Signal::global(|| NotificationQueue::new(CONFIG.notifications.limit));

// raise a notification
//
// the toast dismisses itself after the configured duration.  the timer is a browser
// callback rather than a task, so it keeps running after the calling component unmounts
pub fn toast(notification: Notification) -> ToastId {
    debug!({ title = notification.title.as_str() }, "raising notification");

    let id = TOASTS.write().push(notification);

    let timeout = Timeout::new(CONFIG.notifications.duration_ms, move || {
        TOASTS.with_mut(|queue| queue.dismiss(id));
    });
    timeout.forget();

    id
}

#[component]
pub fn Toaster() -> Element {
    if TOASTS.read().is_empty() {
        return rsx! {};
    }

    rsx! {
        ol { class: "toaster", aria_live: "polite",
            for toast in TOASTS.read().toasts().iter().cloned() {
                li {
                    key: "{toast.id}",
                    class: if toast.notification.variant == Variant::Error { "toast error" } else { "toast" },
                    role: "status",
                    div {
                        div { class: "toast-title", "{toast.notification.title}" }
                        div { class: "toast-description", "{toast.notification.description}" }
                    }
                    button {
                        class: "btn btn-ghost btn-icon",
                        aria_label: "Dismiss notification",
                        onclick: move |_| TOASTS.write().dismiss(toast.id),
                        "×"
                    }
                }
            }
        }
    }
}
