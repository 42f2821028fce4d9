use anyhow::Context;
use lc_gentest::{GenTestError, RenderOptions, WriteMode, generate_for_problem};

use crate::cli::root_commands::GentestArgs;
use crate::commands::shared::{Selection, open_in_editor, select_problem};
use crate::context::AppContext;
use crate::output::message;

/// Handle `lc gentest`.
pub fn handle(args: &GentestArgs, ctx: &mut AppContext) -> anyhow::Result<()> {
    let Selection::Picked(problem) = select_problem(ctx, args.query.as_deref(), "gentest")? else {
        return Ok(());
    };

    let options = RenderOptions::from(&ctx.config.gentest);
    let generated = generate_for_problem(&problem, &ctx.tests_dir(), &options)
        .with_context(|| format!("failed to generate tests for {}", ctx.display_path(&problem)))?;

    if args.stdout {
        print!("{}", generated.contents);
        return Ok(());
    }

    let mode = if args.force {
        WriteMode::Overwrite
    } else {
        WriteMode::CreateNew
    };
    match generated.write(mode) {
        Ok(()) => {}
        Err(GenTestError::AlreadyExists(path)) => anyhow::bail!(
            "test file already exists: {} (use --force to overwrite)",
            ctx.display_path(&path)
        ),
        Err(error) => return Err(error.into()),
    }

    message(format!(
        "Test file created: {}",
        ctx.display_path(&generated.target)
    ));
    if generated.tests.is_empty() {
        message("No exported functions found; the file only has the header.");
    }
    open_in_editor(ctx, &generated.target);
    Ok(())
}
