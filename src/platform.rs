//! Timer primitives shared by browser and host builds.

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(millis: u32) {
    gloo_timers::future::TimeoutFuture::new(millis).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(millis: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(millis))).await;
}
