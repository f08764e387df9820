use std::time::Duration;

pub mod scripts;

/// Suspends the current task for `duration`.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

/// Calls `on_tick` once per `period`, forever.
///
/// Run it inside a component-scoped task; dropping the task is the only way to stop it.
pub async fn run_interval<F: FnMut()>(period: Duration, mut on_tick: F) {
    loop {
        sleep(period).await;
        on_tick();
    }
}
