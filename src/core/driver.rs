use crate::core::leaf::LeafPrinter;
use crate::core::relay::Relay;
use crate::domain::model::CallMode;
use crate::utils::error::Result;
use std::io::{self, Write};

pub const HEAD_LINES: [&str; 3] = ["1", "2", "3"];

/// Reaches a leaf printer two ways: through the one it owns, or through
/// its `Relay`, which owns a separate one.
#[derive(Debug, Default)]
pub struct Driver {
    printer: LeafPrinter,
    relay: Relay,
}

impl Driver {
    pub fn new() -> Self {
        Self {
            printer: LeafPrinter::new(),
            relay: Relay::new(),
        }
    }

    pub fn direct_call(&self) -> Result<()> {
        self.call(CallMode::Direct)
    }

    pub fn indirect_call(&self) -> Result<()> {
        self.call(CallMode::Indirect)
    }

    pub fn direct_call_to<W: Write>(&self, out: &mut W) -> Result<()> {
        write_head(out)?;
        self.printer.print_sequence_to(out)
    }

    pub fn indirect_call_to<W: Write>(&self, out: &mut W) -> Result<()> {
        write_head(out)?;
        self.relay.forward_to(out)
    }

    pub fn call(&self, mode: CallMode) -> Result<()> {
        let mut out = io::stdout().lock();
        self.call_to(mode, &mut out)?;
        out.flush()?;
        Ok(())
    }

    pub fn call_to<W: Write>(&self, mode: CallMode, out: &mut W) -> Result<()> {
        tracing::debug!("driver {} call", mode);
        match mode {
            CallMode::Direct => self.direct_call_to(out),
            CallMode::Indirect => self.indirect_call_to(out),
        }
    }
}

fn write_head<W: Write>(out: &mut W) -> Result<()> {
    for line in HEAD_LINES {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
