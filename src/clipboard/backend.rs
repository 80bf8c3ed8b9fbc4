//! Clipboard backends and the event data carrier
//!
//! Copy prefers the backend and falls back to the carrier that came with the
//! copy event. Paste prefers the carrier and falls back to a backend read.

use std::fmt;

/// Errors from a clipboard backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    Unavailable(String),
    Read(String),
    Write(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Unavailable(e) => write!(f, "Clipboard unavailable: {}", e),
            ClipboardError::Read(e) => write!(f, "Clipboard read failed: {}", e),
            ClipboardError::Write(e) => write!(f, "Clipboard write failed: {}", e),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// A clipboard the runtime can read and write text through
pub trait ClipboardBackend {
    fn name(&self) -> &'static str;

    fn get_text(&mut self) -> Result<String, ClipboardError>;

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The operating system clipboard
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        arboard::Clipboard::new()
            .map(|inner| Self { inner })
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))
    }
}

impl fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemClipboard").finish_non_exhaustive()
    }
}

impl ClipboardBackend for SystemClipboard {
    fn name(&self) -> &'static str {
        "system"
    }

    fn get_text(&mut self) -> Result<String, ClipboardError> {
        self.inner
            .get_text()
            .map_err(|e| ClipboardError::Read(e.to_string()))
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner
            .set_text(text)
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

/// In-process clipboard for headless runs and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    text: Option<String>,
    broken: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            broken: false,
        }
    }

    /// A clipboard whose reads and writes always fail
    pub fn broken() -> Self {
        Self {
            text: None,
            broken: true,
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl ClipboardBackend for MemoryClipboard {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn get_text(&mut self) -> Result<String, ClipboardError> {
        if self.broken {
            return Err(ClipboardError::Read("clipboard is broken".into()));
        }
        self.text
            .clone()
            .ok_or_else(|| ClipboardError::Read("clipboard is empty".into()))
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.broken {
            return Err(ClipboardError::Write("clipboard is broken".into()));
        }
        self.text = Some(text.to_string());
        Ok(())
    }
}

/// Clipboard data attached to a single copy or paste event
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventCarrier {
    text: Option<String>,
}

impl EventCarrier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = Some(text.to_string());
    }
}

/// Where copied text ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyDelivery {
    Backend,
    EventCarrier,
    Dropped,
}

/// Put copied text on the backend, else on the event carrier, else nowhere
pub fn deliver_copy(
    text: &str,
    backend: Option<&mut dyn ClipboardBackend>,
    carrier: Option<&mut EventCarrier>,
) -> CopyDelivery {
    if let Some(backend) = backend {
        match backend.set_text(text) {
            Ok(()) => return CopyDelivery::Backend,
            Err(e) => tracing::warn!("{} clipboard: {}", backend.name(), e),
        }
    }
    if let Some(carrier) = carrier {
        carrier.set_text(text);
        return CopyDelivery::EventCarrier;
    }
    tracing::warn!("No clipboard available, copy dropped");
    CopyDelivery::Dropped
}
