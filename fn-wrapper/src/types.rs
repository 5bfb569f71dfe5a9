//! Core types for the wrapper library
//!
//! Message constants, the error type, and the output sinks the wrapper
//! writes its before/after lines to.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// Line emitted before the wrapped callable runs
pub const BEFORE_MESSAGE: &str = "Something is happening before the function is called";

/// Line emitted after the wrapped callable returns
pub const AFTER_MESSAGE: &str = "Something is happening after the func is called.";

/// Result type for wrapper operations
pub type Result<T> = std::result::Result<T, WrapError>;

/// Errors raised by the wrapper itself (never by the wrapped callable)
#[derive(Debug, thiserror::Error)]
pub enum WrapError {
    #[error("Failed to emit message: {0}")]
    Emit(#[from] io::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Destination for emitted lines
///
/// Each call to [`Sink::emit`] writes exactly one line.
pub trait Sink {
    fn emit(&self, line: &str) -> io::Result<()>;
}

impl<S: Sink + ?Sized> Sink for &S {
    fn emit(&self, line: &str) -> io::Result<()> {
        (**self).emit(line)
    }
}

/// Writes lines to standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct Stdout;

impl Sink for Stdout {
    fn emit(&self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")
    }
}

/// Records lines in memory
///
/// Clones share the same buffer, so a wrapper and the callable it wraps can
/// write to one transcript and the interleaving is preserved.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Rc<RefCell<Vec<String>>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line recorded so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl Sink for Transcript {
    fn emit(&self, line: &str) -> io::Result<()> {
        self.lines.borrow_mut().push(line.to_string());
        Ok(())
    }
}
