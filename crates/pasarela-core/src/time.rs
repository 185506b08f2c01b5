//! Injectable delay primitive

use std::time::Duration;

use async_trait::async_trait;

/// Clock seam behind the timed demonstration operations.
///
/// Injected so tests can observe the requested duration instead of
/// waiting it out; the wasm crate backs this with `setTimeout`.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait Sleeper {
    async fn sleep(&self, duration: Duration);
}
