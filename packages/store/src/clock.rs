//! Time source for record ids and timestamps.
//!
//! [`SystemClock`] reads `js_sys::Date::now()` on WASM and `SystemTime` on
//! native. [`ManualClock`] is a settable clock for tests.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, SecondsFormat};

/// Milliseconds since the Unix epoch.
pub trait Clock {
    fn now_millis(&self) -> i64;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now() as i64
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as i64)
                .unwrap_or(0)
        }
    }
}

/// A clock that only moves when told to. Clones share the same time.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    millis: Arc<AtomicI64>,
}

impl ManualClock {
    pub fn at(millis: i64) -> Self {
        Self {
            millis: Arc::new(AtomicI64::new(millis)),
        }
    }

    pub fn set(&self, millis: i64) {
        self.millis.store(millis, Ordering::SeqCst);
    }

    pub fn advance(&self, millis: i64) {
        self.millis.fetch_add(millis, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.millis.load(Ordering::SeqCst)
    }
}

/// The instant a record is created at. Its millisecond value doubles as the id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stamp {
    millis: i64,
}

impl Stamp {
    pub fn new(millis: i64) -> Self {
        Self { millis }
    }

    pub fn id(&self) -> String {
        self.millis.to_string()
    }

    /// RFC 3339 in UTC, e.g. `"2024-05-01T09:30:00Z"`.
    pub fn timestamp(&self) -> String {
        DateTime::from_timestamp_millis(self.millis)
            .unwrap_or_default()
            .to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    pub fn placeholder_image(&self, width: u32, height: u32) -> String {
        format!(
            "https://picsum.photos/{width}/{height}?random={}",
            self.millis
        )
    }
}
