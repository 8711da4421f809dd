//! The assembled OCR command line.

use std::fmt;

use tokio::process::Command;

use crate::prelude::*;

/// An ordered OCR tool command line, built one flag at a time.
///
/// Token order is fixed by construction: interpreter and script first, then
/// the input source, then any optional flags in the order the wizard asks
/// about them.
#[derive(Debug)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
}

impl Invocation {
    /// Start a new command line for `script`, run via `interpreter`.
    pub fn new(interpreter: &str, script: &Path) -> Self {
        Self {
            program: interpreter.to_owned(),
            args: vec![script.display().to_string()],
        }
    }

    /// Append a presence-only flag like `--open-browser`.
    pub fn push_flag(&mut self, flag: &str) {
        self.args.push(flag.to_owned());
    }

    /// Append a flag which takes a value, like `--file <path>`.
    pub fn push_option(&mut self, flag: &str, value: &str) {
        self.args.push(flag.to_owned());
        self.args.push(value.to_owned());
    }

    /// All tokens in order, program first.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
    }

    /// Run the assembled command, inheriting our standard streams, and wait
    /// for it to finish.
    ///
    /// The tool's exit status is logged but never treated as our own
    /// failure; it has already reported any OCR errors on the inherited
    /// streams. Only a failure to launch is an error here.
    #[instrument(level = "debug", skip_all, fields(program = %self.program))]
    pub async fn launch(self) -> Result<()> {
        let program = which::which(&self.program)
            .with_context(|| format!("cannot find `{}` on PATH", self.program))?;
        let status = Command::new(program)
            .args(&self.args)
            .status()
            .await
            .with_context(|| format!("cannot run `{}`", self.program))?;
        debug!(%status, "OCR tool exited");
        Ok(())
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
