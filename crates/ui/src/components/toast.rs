use std::time::Duration;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use mastery_core::model::Notification;

use crate::platform;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Fire-and-forget notification sink shared through context.
///
/// Every toast removes itself after `ttl`. The expiry task runs on the root scope so a
/// dialog that notifies and then closes does not cancel it.
#[derive(Clone, Copy, PartialEq)]
pub struct ToastQueue {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
    ttl: Duration,
}

impl ToastQueue {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: Signal::new(Vec::new()),
            next_id: Signal::new(1),
            ttl,
        }
    }

    pub fn notify(&mut self, notification: Notification) {
        let id = *self.next_id.peek();
        self.next_id.set(id + 1);
        tracing::debug!(id, title = notification.title(), "toast queued");
        self.toasts.write().push(Toast { id, notification });

        let mut toasts = self.toasts;
        let ttl = self.ttl;
        let _ = spawn_forever(async move {
            platform::sleep(ttl).await;
            toasts.write().retain(|toast| toast.id != id);
        });
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.write().retain(|toast| toast.id != id);
    }

    #[must_use]
    pub fn visible(&self) -> Vec<Toast> {
        self.toasts.read().clone()
    }
}

/// Installs a `ToastQueue` in context for every descendant.
pub fn use_toast_provider(ttl: Duration) -> ToastQueue {
    use_context_provider(|| ToastQueue::new(ttl))
}

#[component]
pub fn Toaster() -> Element {
    let queue = use_context::<ToastQueue>();
    let toasts = queue.visible();

    rsx! {
        div { class: "toaster", role: "status", "aria-live": "polite",
            for toast in toasts {
                div { key: "{toast.id}", class: "toast",
                    div { class: "toast-body",
                        p { class: "toast-title", "{toast.notification.title()}" }
                        p { class: "toast-description", "{toast.notification.description()}" }
                    }
                    button {
                        class: "toast-close",
                        r#type: "button",
                        "aria-label": "Dismiss",
                        onclick: move |_| {
                            let mut queue = queue;
                            queue.dismiss(toast.id);
                        },
                        "×"
                    }
                }
            }
        }
    }
}
