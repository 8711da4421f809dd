//! The interactive prompt flow.
//!
//! Prompts are plain line reads rather than a prompt-widget library: the
//! menu must accept arbitrary input (and fail on anything but `1` or `2`),
//! the yes/no questions treat exactly `y` as yes, and a bad image count is
//! absorbed rather than re-asked. All I/O goes through generic handles so
//! the whole flow can be driven from buffers in tests.

use std::io::{BufRead, Write};

use crate::{invocation::Invocation, prelude::*, ui::FAIL_MARKER};

/// Walk the user through the OCR options and build the command to run.
///
/// Fatal answers (an unknown menu choice, a local file that does not exist)
/// return an error. A non-numeric image limit is reported and skipped.
#[instrument(level = "debug", skip_all)]
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    interpreter: &str,
    script: &Path,
) -> Result<Invocation> {
    let mut invocation = Invocation::new(interpreter, script);

    // Exactly one input source: a local file or a URL.
    writeln!(output, "\nChoose an option:")?;
    writeln!(output, "1. Process a local PDF file")?;
    writeln!(output, "2. Process a PDF from a URL")?;
    let choice = prompt(input, output, "Enter your choice (1 or 2): ")?;
    match choice.as_str() {
        "1" => {
            let path = prompt(input, output, "Enter the path to your PDF file: ")?;
            if !Path::new(&path).exists() {
                bail!("file not found: {path}");
            }
            invocation.push_option("--file", &path);
        }
        "2" => {
            // Left unvalidated; the OCR tool reports unreachable URLs itself.
            let url = prompt(input, output, "Enter the URL of the PDF file: ")?;
            invocation.push_option("--url", &url);
        }
        other => bail!("invalid choice (expected 1 or 2, got {other:?})"),
    }

    let wants_output = prompt_yes_no(
        input,
        output,
        "Do you want to specify a custom output file name? (y/n): ",
    )?;
    if wants_output {
        let name =
            prompt(input, output, "Enter the output file name (e.g., result.html): ")?;
        invocation.push_option("--output", &name);
    }

    let wants_limit = prompt_yes_no(
        input,
        output,
        "Do you want to limit the number of images processed? (y/n): ",
    )?;
    if wants_limit {
        let count = prompt(
            input,
            output,
            "Enter the maximum number of images to process: ",
        )?;
        match count.parse::<i64>() {
            Ok(n) => invocation.push_option("--max-images", &n.to_string()),
            Err(_) => {
                warn!(input = %count, "not an integer, skipping --max-images");
                writeln!(output, "{FAIL_MARKER} Invalid number, not limiting images")?;
            }
        }
    }

    let wants_browser = prompt_yes_no(
        input,
        output,
        "Open the result in browser after processing? (y/n): ",
    )?;
    if wants_browser {
        invocation.push_flag("--open-browser");
    }

    Ok(invocation)
}

/// Show a prompt and read one trimmed line of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> Result<String> {
    write!(output, "{text}")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line).context("cannot read from stdin")?;
    Ok(line.trim().to_owned())
}

/// Ask a yes/no question. Only a (case-insensitive) `y` counts as yes.
fn prompt_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> Result<bool> {
    Ok(prompt(input, output, text)?.eq_ignore_ascii_case("y"))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn run_wizard(input: &str) -> (Result<Invocation>, String) {
        let mut output = Vec::new();
        let result = run(
            &mut Cursor::new(input),
            &mut output,
            "python",
            Path::new("mistral_ocr.py"),
        );
        (result, String::from_utf8(output).unwrap())
    }

    fn tokens(invocation: &Invocation) -> Vec<String> {
        invocation.tokens().map(str::to_owned).collect()
    }

    #[test]
    fn file_mode_with_all_options() {
        let doc = tempfile::NamedTempFile::new().unwrap();
        let doc_path = doc.path().display().to_string();
        let (result, _) = run_wizard(&format!("1\n{doc_path}\ny\nresult.html\ny\n10\ny\n"));
        assert_eq!(
            tokens(&result.unwrap()),
            [
                "python",
                "mistral_ocr.py",
                "--file",
                doc_path.as_str(),
                "--output",
                "result.html",
                "--max-images",
                "10",
                "--open-browser",
            ]
        );
    }

    #[test]
    fn url_mode_with_no_options() {
        let (result, _) = run_wizard("2\nhttps://example.com/doc.pdf\nn\nn\nn\n");
        assert_eq!(
            tokens(&result.unwrap()),
            ["python", "mistral_ocr.py", "--url", "https://example.com/doc.pdf"]
        );
    }

    #[test]
    fn unknown_menu_choice_is_fatal() {
        let (result, _) = run_wizard("3\n");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("invalid choice"));
    }

    #[test]
    fn missing_local_file_is_fatal() {
        let (result, output) = run_wizard("1\n/no/such/doc.pdf\ny\nresult.html\n");
        assert!(result.unwrap_err().to_string().contains("file not found"));
        // The flow stops at the bad path; the optional prompts never run.
        assert!(!output.contains("custom output file name"));
    }

    #[test]
    fn bad_image_limit_is_skipped_not_fatal() {
        let doc = tempfile::NamedTempFile::new().unwrap();
        let doc_path = doc.path().display().to_string();
        let (result, output) = run_wizard(&format!("1\n{doc_path}\nn\ny\nabc\ny\n"));
        let invocation = result.unwrap();
        let tokens = tokens(&invocation);
        assert!(!tokens.contains(&"--max-images".to_owned()));
        // The browser prompt still ran after the bad number.
        assert!(tokens.contains(&"--open-browser".to_owned()));
        assert!(output.contains("Invalid number, not limiting images"));
    }

    #[test]
    fn uppercase_y_counts_as_yes() {
        let (result, _) = run_wizard("2\nhttps://example.com/doc.pdf\nY\nout.html\nn\nn\n");
        let tokens = tokens(&result.unwrap());
        assert!(tokens.contains(&"--output".to_owned()));
        assert!(tokens.contains(&"out.html".to_owned()));
    }

    #[test]
    fn only_the_bare_letter_counts_as_yes() {
        let (result, _) = run_wizard("2\nhttps://example.com/doc.pdf\nyes\nn\nn\n");
        let tokens = tokens(&result.unwrap());
        assert!(!tokens.contains(&"--output".to_owned()));
    }

    #[test]
    fn end_of_input_reads_as_no() {
        // Input ends right after the URL; every optional prompt sees EOF.
        let (result, _) = run_wizard("2\nhttps://example.com/doc.pdf\n");
        assert_eq!(
            tokens(&result.unwrap()),
            ["python", "mistral_ocr.py", "--url", "https://example.com/doc.pdf"]
        );
    }
}
