use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Add(args) => commands::add::handle(&args, ctx),
        Commands::Test(args) => commands::test::handle(&args, ctx),
        Commands::Gentest(args) => commands::gentest::handle(&args, ctx),
        Commands::History => commands::history::handle(ctx, flags),
    }
}
