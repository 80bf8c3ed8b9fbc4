//! Event loop glue: messages in, commands out
//!
//! Every event runs to completion through `update` and its commands before
//! the next one. Messages produced by commands (the asynchronous clipboard
//! read) are queued on a channel and drained after the current event.

use std::sync::mpsc::{self, Receiver, Sender};

use crate::clipboard::{deliver_copy, ClipboardBackend, CopyDelivery, EventCarrier};
use crate::commands::Cmd;
use crate::messages::{ClipboardMsg, Msg};
use crate::model::{CellLookup, GridModel};
use crate::update::update;

use super::shell::GridShell;

pub struct GridRuntime<S: GridShell> {
    model: GridModel,
    shell: S,
    clipboard: Option<Box<dyn ClipboardBackend>>,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    last_copy: Option<CopyDelivery>,
}

impl<S: GridShell> GridRuntime<S> {
    pub fn new(model: GridModel, mut shell: S) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        shell.rebuild(model.rows(), model.cols());
        Self {
            model,
            shell,
            clipboard: None,
            msg_tx,
            msg_rx,
            last_copy: None,
        }
    }

    /// Use `backend` for clipboard writes and asynchronous reads
    pub fn with_clipboard(mut self, backend: Box<dyn ClipboardBackend>) -> Self {
        tracing::debug!("Using {} clipboard", backend.name());
        self.clipboard = Some(backend);
        self
    }

    pub fn model(&self) -> &GridModel {
        &self.model
    }

    pub fn shell(&self) -> &S {
        &self.shell
    }

    /// Current text of the clipboard backend, if there is one and it reads
    pub fn clipboard_text(&mut self) -> Option<String> {
        self.clipboard.as_mut()?.get_text().ok()
    }

    /// Put text on the clipboard backend from outside the grid
    pub fn set_clipboard_text(&mut self, text: &str) -> bool {
        match self.clipboard.as_mut() {
            Some(backend) => match backend.set_text(text) {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!("{} clipboard: {}", backend.name(), e);
                    false
                }
            },
            None => false,
        }
    }

    /// A sender for messages that should be processed after the current event
    pub fn sender(&self) -> Sender<Msg> {
        self.msg_tx.clone()
    }

    /// Process one event and everything it queues
    pub fn dispatch(&mut self, msg: Msg) {
        self.dispatch_with(msg, None);
        self.drain();
    }

    /// Deliver a copy event with its clipboard data carrier
    pub fn copy_event(&mut self, carrier: &mut EventCarrier) -> Option<CopyDelivery> {
        self.last_copy = None;
        self.dispatch_with(Msg::Clipboard(ClipboardMsg::Copy), Some(carrier));
        self.drain();
        self.last_copy
    }

    /// Deliver a paste event; the carrier's text is used when present
    pub fn paste_event(&mut self, carrier: Option<&EventCarrier>) {
        let text = carrier.and_then(EventCarrier::text).map(str::to_string);
        self.dispatch(Msg::Clipboard(ClipboardMsg::Paste { text }));
    }

    fn dispatch_with(&mut self, msg: Msg, carrier: Option<&mut EventCarrier>) {
        if let Some(cmd) = update(&mut self.model, msg) {
            self.process_cmd(cmd, carrier);
        }
    }

    /// Process queued messages until the channel is empty
    fn drain(&mut self) {
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.dispatch_with(msg, None);
        }
    }

    fn process_cmd(&mut self, cmd: Cmd, mut carrier: Option<&mut EventCarrier>) {
        match cmd {
            Cmd::None => {}
            Cmd::Repaint(range) => self.shell.repaint(range),
            Cmd::RefreshCell(addr) => {
                if let Some(cell) = self.model.grid.cell(addr) {
                    self.shell.refresh_cell(addr, cell.read());
                }
            }
            Cmd::Focus(addr) => self.shell.focus_cell(addr),
            Cmd::Rebuild => self.shell.rebuild(self.model.rows(), self.model.cols()),
            Cmd::WriteClipboard { text } => {
                let backend: Option<&mut dyn ClipboardBackend> = match self.clipboard.as_mut() {
                    Some(backend) => Some(&mut **backend),
                    None => None,
                };
                self.last_copy = Some(deliver_copy(&text, backend, carrier));
            }
            Cmd::ReadClipboard => {
                let Some(backend) = self.clipboard.as_mut() else {
                    tracing::warn!("No clipboard to read from, paste ignored");
                    return;
                };
                match backend.get_text() {
                    Ok(text) => {
                        let _ = self
                            .msg_tx
                            .send(Msg::Clipboard(ClipboardMsg::ReadCompleted(text)));
                    }
                    Err(e) => tracing::warn!("{} clipboard: {}", backend.name(), e),
                }
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd, carrier.as_deref_mut());
                }
            }
        }
    }
}
