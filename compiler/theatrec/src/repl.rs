//! Interactive line-at-a-time execution.

use std::io::{self, BufRead, Write};

use theatre_vm::{SharedOutput, VirtualMachine};

use crate::script::{parse_line, ScriptError, SCRIPT_VM_NAME};

/// Words that end a session, matched case-insensitively.
const EXIT_WORDS: [&str; 3] = ["exit", "quit", "q"];

/// A REPL session over one persistent VM.
///
/// Each line is parsed and executed on its own. A failing line is reported
/// to the diagnostic writer and leaves the VM as it was.
pub struct Repl<W> {
    vm: VirtualMachine,
    diagnostics: W,
}

impl<W: Write> Repl<W> {
    pub fn new(out: SharedOutput, diagnostics: W) -> Self {
        Repl {
            vm: VirtualMachine::new(SCRIPT_VM_NAME, out).with_builtins(),
            diagnostics,
        }
    }

    /// Current VM snapshot.
    pub fn vm(&self) -> &VirtualMachine {
        &self.vm
    }

    /// Run one line. Returns `Ok(false)` when the line ends the session.
    pub fn feed(&mut self, line: &str) -> Result<bool, ScriptError> {
        let trimmed = line.trim();
        if EXIT_WORDS
            .iter()
            .any(|word| word.eq_ignore_ascii_case(trimmed))
        {
            return Ok(false);
        }
        if let Some(command) = parse_line(line)? {
            self.vm = self.vm.execute(&command)?;
        }
        Ok(true)
    }

    /// Read lines until an exit word or end of input.
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            match self.feed(&line) {
                Ok(true) => {}
                Ok(false) => break,
                Err(err) => writeln!(self.diagnostics, "{err}")?,
            }
        }
        Ok(())
    }

    pub fn into_diagnostics(self) -> W {
        self.diagnostics
    }
}
