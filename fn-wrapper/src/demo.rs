//! Demonstration call site
//!
//! A greeter that prints `Hello!`, decorated with the wrapper and invoked.

use crate::config::WrapperConfig;
use crate::types::{Result, Sink};
use crate::wrapper::Wrapped;

/// Line printed by the demonstration callable
pub const GREETING: &str = "Hello!";

/// Zero-argument callable that emits `greeting` to `sink`
///
/// The callable has no way to report a failed write, so a write error is
/// logged and otherwise ignored.
pub fn greeter<S: Sink>(sink: S, greeting: impl Into<String>) -> impl Fn() {
    let greeting = greeting.into();
    move || {
        if let Err(e) = sink.emit(&greeting) {
            log::error!("Failed to print greeting: {}", e);
        }
    }
}

/// Wrap the greeter and invoke it `times` times
///
/// With the default config, `Hello!` as the greeting and `times == 1`, the
/// sink receives exactly three lines.
pub fn run<S>(sink: S, config: &WrapperConfig, greeting: &str, times: usize) -> Result<()>
where
    S: Sink + Clone,
{
    config.validate()?;

    let say_hello = Wrapped::new(greeter(sink.clone(), greeting))
        .with_sink(sink)
        .with_config(config.clone());

    for round in 1..=times {
        log::debug!("Demo invocation {}/{}", round, times);
        say_hello.call()?;
    }

    log::info!("Demo finished after {} invocation(s)", times);
    Ok(())
}
