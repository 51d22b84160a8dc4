use cshell::error::ShellError;
use cshell::flags::Flags;
use cshell::highlight::SyntaxHighlighter;
use cshell::shell::Shell;
use std::env;
use std::process;
use tracing_subscriber::EnvFilter;

fn init_logging(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if debug { "debug" } else { "warn" }));

    // A second subscriber (e.g. under a test harness) is not an error worth stopping for.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}

fn run(flags: Flags) -> Result<(), ShellError> {
    let mut shell = Shell::new(flags)?;
    shell.run()
}

fn main() {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    let highlighter = SyntaxHighlighter::new();

    if let Err(e) = flags.parse(&args) {
        eprintln!("{}", highlighter.highlight_error(&format!("cshell: {}", e)));
        flags.print_help();
        process::exit(e.exit_code());
    }

    if flags.is_set("help") {
        flags.print_help();
        return;
    }

    if flags.is_set("version") {
        println!("cshell {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    init_logging(flags.is_set("debug"));

    if let Err(e) = run(flags) {
        tracing::debug!(error = ?e, "shell stopped");
        eprintln!("{}", highlighter.highlight_error(&format!("cshell: {}", e)));
        process::exit(e.exit_code());
    }
}
