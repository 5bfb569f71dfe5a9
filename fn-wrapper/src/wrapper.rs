//! Function wrapper
//!
//! [`Wrapped`] owns a zero-argument callable and runs it between two emitted
//! lines. [`wrap`] and [`try_wrap`] are the closure-returning factories built
//! on top of it.
//!
//! A failing callable (a panic, or an `Err` through [`Wrapped::try_call`])
//! cuts the sequence short: the after-message is not emitted and the failure
//! reaches the caller unchanged.

use crate::config::WrapperConfig;
use crate::types::{Result, Sink, Stdout, WrapError};
use std::fmt;

/// A callable bundled with the lines emitted around it
pub struct Wrapped<F, S = Stdout> {
    f: F,
    sink: S,
    config: WrapperConfig,
}

impl<F> Wrapped<F> {
    /// Wrap `f`, writing the default messages to standard output
    pub fn new(f: F) -> Self {
        Self {
            f,
            sink: Stdout,
            config: WrapperConfig::default(),
        }
    }
}

impl<F, S> Wrapped<F, S> {
    /// Builder method: redirect emitted lines to another sink
    pub fn with_sink<T: Sink>(self, sink: T) -> Wrapped<F, T> {
        Wrapped {
            f: self.f,
            sink,
            config: self.config,
        }
    }

    /// Builder method: replace the before/after messages
    pub fn with_config(mut self, config: WrapperConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &WrapperConfig {
        &self.config
    }
}

impl<F, S> Wrapped<F, S>
where
    F: Fn(),
    S: Sink,
{
    /// Emit the before-message, invoke the callable once, emit the after-message
    ///
    /// # Example
    /// ```
    /// use fn_wrapper::{Transcript, Wrapped};
    ///
    /// let transcript = Transcript::new();
    /// let wrapped = Wrapped::new(|| {}).with_sink(transcript.clone());
    /// wrapped.call().unwrap();
    ///
    /// assert_eq!(transcript.len(), 2);
    /// ```
    pub fn call(&self) -> Result<()> {
        log::debug!("Invoking wrapped callable");
        self.sink.emit(&self.config.before)?;
        (self.f)();
        self.sink.emit(&self.config.after)?;
        log::trace!("Wrapped callable returned");
        Ok(())
    }

    /// Turn the wrapper into a plain closure with the same sequence
    pub fn into_fn(self) -> impl Fn() -> Result<()> {
        move || self.call()
    }
}

impl<F, S, E> Wrapped<F, S>
where
    F: Fn() -> std::result::Result<(), E>,
    S: Sink,
    E: From<WrapError>,
{
    /// Like [`Wrapped::call`] for callables that report failure with `Err`
    ///
    /// On `Err` the after-message is skipped and the error is returned as is.
    /// Sink failures are converted into `E`.
    pub fn try_call(&self) -> std::result::Result<(), E> {
        log::debug!("Invoking fallible wrapped callable");
        self.sink.emit(&self.config.before).map_err(WrapError::from)?;
        if let Err(err) = (self.f)() {
            log::warn!("Wrapped callable failed, skipping after-message");
            return Err(err);
        }
        self.sink.emit(&self.config.after).map_err(WrapError::from)?;
        log::trace!("Fallible wrapped callable returned");
        Ok(())
    }

    /// Turn the wrapper into a plain closure running [`Wrapped::try_call`]
    pub fn into_try_fn(self) -> impl Fn() -> std::result::Result<(), E> {
        move || self.try_call()
    }
}

impl<F, S: fmt::Debug> fmt::Debug for Wrapped<F, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wrapped")
            .field("callable", &std::any::type_name::<F>())
            .field("sink", &self.sink)
            .field("config", &self.config)
            .finish()
    }
}

/// Wrap `f` so each call prints the default before/after lines to stdout
///
/// # Example
/// ```no_run
/// use fn_wrapper::wrap;
///
/// let say_hello = wrap(|| println!("Hello!"));
/// say_hello().unwrap();
/// ```
pub fn wrap<F>(f: F) -> impl Fn() -> Result<()>
where
    F: Fn(),
{
    Wrapped::new(f).into_fn()
}

/// Wrap a fallible `f`; an `Err` from `f` skips the after-message
///
/// Wrappers nest through this function, since a wrapped callable is itself
/// fallible:
///
/// ```no_run
/// use fn_wrapper::{try_wrap, wrap, WrapError};
///
/// let twice = try_wrap::<_, WrapError>(wrap(|| println!("Hello!")));
/// twice().unwrap();
/// ```
pub fn try_wrap<F, E>(f: F) -> impl Fn() -> std::result::Result<(), E>
where
    F: Fn() -> std::result::Result<(), E>,
    E: From<WrapError>,
{
    Wrapped::new(f).into_try_fn()
}

/// Decorate a closure in place: `(|| ..).wrapped()`
pub trait Wrap: Fn() + Sized {
    fn wrapped(self) -> Wrapped<Self> {
        Wrapped::new(self)
    }
}

impl<F: Fn()> Wrap for F {}
