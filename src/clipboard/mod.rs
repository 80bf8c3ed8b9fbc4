//! Clipboard transfer for the grid
//!
//! - [`codec`]: selection ⇄ tab-separated text
//! - [`paste`]: broadcast/block paste with clipping and read-only skipping
//! - [`backend`]: system and in-memory clipboards, event data carriers

pub mod backend;
pub mod codec;
pub mod paste;

pub use backend::{
    deliver_copy, ClipboardBackend, ClipboardError, CopyDelivery, EventCarrier, MemoryClipboard,
    SystemClipboard,
};
pub use codec::{serialize, ClipboardPayload};
pub use paste::{apply, PasteReport};
