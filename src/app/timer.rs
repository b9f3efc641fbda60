//! Async sleep usable from component tasks.

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

#[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
pub async fn sleep_ms(ms: i32) {
    tokio::time::sleep(std::time::Duration::from_millis(ms.max(0) as u64)).await;
}

#[cfg(all(not(target_arch = "wasm32"), not(feature = "server")))]
pub async fn sleep_ms(_ms: i32) {}
