use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Create a problem file and open it in the editor.
    Add(AddArgs),
    /// Pick a problem and run its tests.
    Test(TestArgs),
    /// Generate a test skeleton from a problem's exported functions.
    Gentest(GentestArgs),
    /// List problems with their test status.
    History,
}

#[derive(Clone, Debug, Args)]
pub struct AddArgs {
    /// Problem slug, e.g. two_sum.
    pub name: String,
    /// Problem number, e.g. 1.
    pub number: String,
}

#[derive(Clone, Debug, Args)]
pub struct TestArgs {
    /// Narrow the candidates; a single match is picked without prompting.
    pub query: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct GentestArgs {
    /// Narrow the candidates; a single match is picked without prompting.
    pub query: Option<String>,

    /// Overwrite an existing test file.
    #[arg(long)]
    pub force: bool,

    /// Print the generated file instead of writing it.
    #[arg(long)]
    pub stdout: bool,
}
