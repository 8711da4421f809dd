//! Checks that run before the first prompt.

use crate::prelude::*;

/// Verify that the OCR tool script exists.
///
/// Runs before any prompting, so a misplaced launcher fails immediately
/// instead of after the user has answered every question.
pub fn check_tool_script(script: &Path) -> Result<()> {
    if !script.exists() {
        bail!(
            "OCR tool script not found: {} (pass --script to point at it)",
            script.display()
        );
    }
    Ok(())
}
