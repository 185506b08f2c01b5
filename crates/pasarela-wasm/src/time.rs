//! Browser-backed delay primitive

use std::time::Duration;

use async_trait::async_trait;
use pasarela_core::Sleeper;
use wasm_bindgen_futures::JsFuture;

/// [`Sleeper`] over the host's `setTimeout`.
pub struct BrowserSleeper;

#[async_trait(?Send)]
impl Sleeper for BrowserSleeper {
    async fn sleep(&self, duration: Duration) {
        let millis = duration.as_millis() as i32;
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            let window = web_sys::window().expect("no window in this environment");
            window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
                .expect("setTimeout failed");
        });
        // The timer promise only ever resolves.
        let _ = JsFuture::from(promise).await;
    }
}
