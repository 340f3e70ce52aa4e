//! Console output for the greeting sequence
//!
//! The whole observable behavior of the program lives here: exactly three
//! lines, in program order, written to the stream the caller hands in.
//! Taking `impl Write` instead of printing directly keeps the sequence
//! testable against an in-memory buffer.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::debug;

use crate::constants::{GREETING, HELLO_LINE, LHS_ADDEND, RHS_ADDEND, SUM_LABEL};
use crate::math::add;

/// Write the three-line greeting to `out`.
///
/// Line 1 is the hello banner, line 2 the typed greeting constant, line 3 the
/// sum label followed by both addends and their sum in the space-separated
/// multi-argument console format. Each write completes before the next
/// begins; a failed write propagates to the caller.
pub fn write_greeting<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", HELLO_LINE).context("failed to write hello line")?;
    writeln!(out, "{}", GREETING).context("failed to write greeting line")?;

    let sum = add(LHS_ADDEND, RHS_ADDEND);
    debug!(a = LHS_ADDEND, b = RHS_ADDEND, sum, "computed demo sum");
    writeln!(out, "{} {} {} {}", SUM_LABEL, LHS_ADDEND, RHS_ADDEND, sum)
        .context("failed to write sum line")?;

    Ok(())
}
