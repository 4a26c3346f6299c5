use crate::core::leaf::LeafPrinter;
use crate::utils::error::Result;
use std::io::{self, Write};

/// Intermediary that owns its own `LeafPrinter` and forwards to it.
#[derive(Debug, Default)]
pub struct Relay {
    printer: LeafPrinter,
}

impl Relay {
    pub fn new() -> Self {
        Self {
            printer: LeafPrinter::new(),
        }
    }

    pub fn forward(&self) -> Result<()> {
        let mut out = io::stdout().lock();
        self.forward_to(&mut out)?;
        out.flush()?;
        Ok(())
    }

    /// Writes nothing of its own.
    pub fn forward_to<W: Write>(&self, out: &mut W) -> Result<()> {
        tracing::trace!("relay forwarding to its leaf printer");
        self.printer.print_sequence_to(out)
    }
}
