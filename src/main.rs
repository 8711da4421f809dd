use std::str::FromStr;

use clap::Parser;
use tracing_subscriber::{
    EnvFilter, Layer as _, filter::Directive, fmt::format::FmtSpan, layer::SubscriberExt,
    util::SubscriberInitExt as _,
};

use self::prelude::*;

mod invocation;
mod preflight;
mod prelude;
mod ui;
mod wizard;

/// Interactively assemble and launch Mistral OCR command lines.
#[derive(Debug, Parser)]
#[clap(
    version,
    after_help = r#"
Environment Variables:
  - MISTRAL_API_KEY: The API key used by the OCR tool itself. This
    launcher never reads it, but the tool will fail without it.

  These variables may be set in a standard `.env` file.
"#
)]
struct Opts {
    /// Path to the OCR tool script to launch.
    #[clap(long, default_value = "mistral_ocr.py")]
    script: PathBuf,

    /// Interpreter used to run the OCR tool script.
    #[clap(long, default_value = "python")]
    interpreter: String,

    /// Print the assembled command without running it.
    #[clap(long)]
    dry_run: bool,
}

/// Our entry point. Fatal errors are reported with the failure marker and
/// exit status 1.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing.
    let directive =
        Directive::from_str("info").expect("built-in directive should be valid");
    let env_filter = EnvFilter::builder()
        .with_default_directive(directive)
        .from_env_lossy();

    let subscriber = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .with_filter(env_filter);

    // We can stack multiple layers here if we need to.
    tracing_subscriber::registry().with(subscriber).init();

    // Call our real `main` function now that logging is set up.
    if let Err(err) = real_main().await {
        ui::report_failure(&err);
        std::process::exit(1);
    }
}

/// Our real entry point.
#[instrument(level = "debug", name = "main", skip_all)]
async fn real_main() -> Result<()> {
    // Load environment variables from a `.env` file, if it exists. The OCR
    // tool reads its API key from the environment; we only load the file.
    dotenvy::dotenv().ok();

    // Parse command-line arguments.
    let opts = Opts::parse();
    debug!("Parsed options: {:?}", opts);

    // The tool script must be present before we ask the user anything.
    preflight::check_tool_script(&opts.script)?;

    ui::print_banner();
    let stdin = std::io::stdin();
    let invocation = wizard::run(
        &mut stdin.lock(),
        &mut std::io::stdout(),
        &opts.interpreter,
        &opts.script,
    )?;

    ui::print_command(&invocation);
    if opts.dry_run {
        return Ok(());
    }
    invocation.launch().await
}
