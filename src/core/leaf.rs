use crate::utils::error::Result;
use std::io::{self, Write};

pub const LEAF_LINES: [&str; 3] = ["4", "5", "6"];

/// The end of both call chains. Holds nothing and prints three fixed lines.
#[derive(Debug, Default)]
pub struct LeafPrinter;

impl LeafPrinter {
    pub fn new() -> Self {
        Self
    }

    pub fn print_sequence(&self) -> Result<()> {
        let mut out = io::stdout().lock();
        self.print_sequence_to(&mut out)?;
        out.flush()?;
        Ok(())
    }

    pub fn print_sequence_to<W: Write>(&self, out: &mut W) -> Result<()> {
        for line in LEAF_LINES {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_sequence_writes_four_five_six() {
        let mut buf = Vec::new();
        LeafPrinter::new().print_sequence_to(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "4\n5\n6\n");
    }

    #[test]
    fn test_print_sequence_repeats_identically() {
        let printer = LeafPrinter::new();
        let mut buf = Vec::new();
        printer.print_sequence_to(&mut buf).unwrap();
        printer.print_sequence_to(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "4\n5\n6\n4\n5\n6\n");
    }
}
