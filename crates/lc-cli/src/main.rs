use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod launcher;
mod output;
mod picker;
mod ui;

fn main() {
    if let Err(error) = run() {
        eprintln!("lc error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(flags.quiet, flags.verbose)?;
    ui::init(&flags);

    let project_root = context::resolve_project_root(flags.root.as_deref())?;
    let config = bootstrap::load_config(&project_root)?;
    tracing::debug!(root = %project_root.display(), "resolved project root");

    let mut ctx = context::AppContext::init(project_root, config);
    commands::dispatch::dispatch(cli.command, &mut ctx, &flags)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("LEETCODE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
