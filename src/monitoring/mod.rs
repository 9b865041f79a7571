//! Client-side monitoring for the app
//!
//! Provides leveled, timestamped console logging with a small in-memory
//! buffer that can be exported as JSON.

pub mod logger;

pub use logger::Logger;

/// Initialize monitoring. Call once at app startup, before launch.
pub fn init() {
    Logger::init();
}
