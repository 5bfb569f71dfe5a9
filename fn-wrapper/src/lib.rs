//! Function Wrapper Library
//!
//! Wraps a zero-argument callable so that every invocation emits a line,
//! runs the callable once, and emits a second line.
//!
//! # Architecture
//!
//! - `wrapper`: the [`Wrapped`] object and the [`wrap`] / [`try_wrap`] factories
//! - `config`: the before/after messages ([`WrapperConfig`])
//! - `types`: message constants, [`WrapError`], and output [`Sink`]s
//! - `demo`: the greeter call site used by the `fn-wrapper` binary
//!
//! The wrapper keeps no state between calls. If the wrapped callable fails,
//! the after-message is skipped and the failure reaches the caller unchanged.
//!
//! # Example Usage
//!
//! ```no_run
//! use fn_wrapper::wrap;
//!
//! fn say_hello() {
//!     println!("Hello!");
//! }
//!
//! let say_hello = wrap(say_hello);
//! say_hello().unwrap();
//! // Something is happening before the function is called
//! // Hello!
//! // Something is happening after the func is called.
//! ```

// Public modules
pub mod config;
pub mod demo;
pub mod types;
pub mod wrapper;

// Re-export main types for convenience
pub use config::WrapperConfig;
pub use types::{
    Result, Sink, Stdout, Transcript, WrapError, AFTER_MESSAGE, BEFORE_MESSAGE,
};
pub use wrapper::{try_wrap, wrap, Wrap, Wrapped};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_basics() {
        // Smoke test: a wrapped no-op emits exactly the two messages
        let transcript = Transcript::new();
        Wrapped::new(|| {})
            .with_sink(transcript.clone())
            .call()
            .unwrap();
        assert_eq!(transcript.lines(), vec![BEFORE_MESSAGE, AFTER_MESSAGE]);
    }
}
