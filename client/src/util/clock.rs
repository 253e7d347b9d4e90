//! Wall clock for session bookkeeping in the browser.

use access::clock::Clock;

/// `Date.now()` in the browser; `std::time` on the server.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn now_ms(&self) -> u64 {
        #[cfg(feature = "hydrate")]
        {
            js_sys::Date::now() as u64
        }
        #[cfg(not(feature = "hydrate"))]
        {
            access::clock::SystemClock.now_ms()
        }
    }
}
