use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use dioxus::document::eval;
use dioxus::prelude::*;
use serde::de::DeserializeOwned;

use crate::platform::{self, scripts};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// A per-instance id, stable across re-renders, for DOM anchors and listener keys.
pub fn use_unique_id(prefix: &'static str) -> String {
    use_hook(|| format!("{prefix}-{}", NEXT_ID.fetch_add(1, Ordering::Relaxed)))
}

/// Attaches a webview listener for the lifetime of the calling component.
///
/// `attach` is evaluated once; every value it sends is decoded as `T` and handed to
/// `on_message`. The listener registered under `key` is detached on unmount.
pub fn use_dom_listener<T>(key: String, attach: impl FnOnce() -> String, on_message: Callback<T>)
where
    T: DeserializeOwned + 'static,
{
    let script = use_hook(attach);
    let listener_key = key.clone();
    use_future(move || {
        let script = script.clone();
        let key = listener_key.clone();
        async move {
            tracing::debug!(%key, "attach dom listener");
            let mut channel = eval(&script);
            loop {
                match channel.recv::<T>().await {
                    Ok(value) => on_message.call(value),
                    Err(err) => {
                        tracing::debug!(%key, ?err, "dom listener channel closed");
                        break;
                    }
                }
            }
        }
    });
    use_drop(move || {
        tracing::debug!(%key, "detach dom listener");
        let _ = eval(&scripts::detach_listener(&key));
    });
}

/// Runs `on_tick` every `period` until the calling component unmounts.
pub fn use_interval(period: Duration, on_tick: Callback<()>) {
    use_future(move || async move {
        tracing::debug!(?period, "interval started");
        platform::run_interval(period, move || on_tick.call(())).await;
    });
    use_drop(move || tracing::debug!(?period, "interval stopped"));
}
