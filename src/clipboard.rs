use ::clipboard::ClipboardContext;
use ::clipboard::ClipboardProvider;
use log::{debug, warn};

use crate::error::ClipboardError;

pub trait Clipboard {
    fn write_text(&mut self, value: &str) -> Result<(), ClipboardError>;
}

/// The platform clipboard. The context is opened on the first write and kept
/// for later ones. If opening or writing fails only that copy fails, and the
/// next write opens a fresh context.
pub struct SystemClipboard<P: ClipboardProvider = ClipboardContext> {
    ctx: Option<P>,
}

impl SystemClipboard {
    pub fn new() -> SystemClipboard {
        SystemClipboard { ctx: None }
    }
}

impl<P: ClipboardProvider> SystemClipboard<P> {
    fn context(&mut self) -> Result<&mut P, ClipboardError> {
        if self.ctx.is_none() {
            debug!("opening clipboard context");
            let ctx = P::new().map_err(|e| ClipboardError::new(&e.to_string()))?;
            self.ctx = Some(ctx);
        }
        self.ctx
            .as_mut()
            .ok_or_else(|| ClipboardError::new("clipboard is not available"))
    }
}

impl<P: ClipboardProvider> Clipboard for SystemClipboard<P> {
    fn write_text(&mut self, value: &str) -> Result<(), ClipboardError> {
        let result = self.context()?.set_contents(String::from(value));
        if let Err(e) = result {
            warn!("dropping clipboard context after failed write");
            self.ctx = None;
            return Err(ClipboardError::new(&e.to_string()));
        }
        debug!("wrote {} characters to the clipboard", value.chars().count());
        Ok(())
    }
}
