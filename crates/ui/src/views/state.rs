use dioxus::prelude::*;
use services::ContentError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unavailable,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::Unavailable => "Content is unavailable right now. Please try again.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<ContentError> for ViewError {
    fn from(err: ContentError) -> Self {
        tracing::warn!(error = %err, "content load failed");
        match err {
            ContentError::Storage(_) => ViewError::Unavailable,
            _ => ViewError::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}

#[component]
pub fn LoadingState() -> Element {
    rsx! {
        div { class: "view-status", p { "Loading..." } }
    }
}

#[component]
pub fn ErrorState(error: ViewError, on_retry: Callback<()>) -> Element {
    rsx! {
        div { class: "view-status view-status--error", role: "alert",
            p { "{error.message()}" }
            button {
                class: "button button--ghost",
                r#type: "button",
                onclick: move |_| on_retry.call(()),
                "Retry"
            }
        }
    }
}
