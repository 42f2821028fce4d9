use std::path::PathBuf;

use anyhow::Context;
use lc_gentest::{CreateOutcome, ProblemId, create_problem_file};

use crate::cli::root_commands::AddArgs;
use crate::commands::shared::open_in_editor;
use crate::context::AppContext;
use crate::output::message;

/// Handle `lc add`.
pub fn handle(args: &AddArgs, ctx: &mut AppContext) -> anyhow::Result<()> {
    let (path, outcome) = create(args, ctx)?;
    let shown = ctx.display_path(&path);
    match outcome {
        CreateOutcome::Created => message(format!("Created file: {shown}")),
        CreateOutcome::AlreadyExists => message(format!("File already exists: {shown}")),
    }
    open_in_editor(ctx, &path);
    Ok(())
}

fn create(args: &AddArgs, ctx: &AppContext) -> anyhow::Result<(PathBuf, CreateOutcome)> {
    let problem = ProblemId::new(&args.number, &args.name)?;
    let path = ctx
        .problems_dir()
        .join(problem.file_name(&ctx.config.paths.extension));

    let contents = if ctx.config.gentest.problem_template {
        format!("package {}\n\n", ctx.config.gentest.package_name())
    } else {
        String::new()
    };

    let outcome = create_problem_file(&path, &contents)
        .with_context(|| format!("failed to create problem file {}", path.display()))?;
    if outcome == CreateOutcome::Created {
        tracing::info!(path = %path.display(), "created problem file");
    }
    Ok((path, outcome))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use lc_config::LcConfig;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;
    use crate::commands::testing::{TestHarness, snapshot};
    use crate::launcher::RunStatus;

    fn args(name: &str, number: &str) -> AddArgs {
        AddArgs {
            name: name.to_string(),
            number: number.to_string(),
        }
    }

    #[test]
    fn creates_empty_file_and_opens_editor() {
        let temp = TempDir::new().expect("tempdir should create");
        let mut harness = TestHarness::new(temp.path());

        handle(&args("two_sum", "1"), &mut harness.ctx).expect("add succeeds");

        let path = temp.path().join("problems/1_two_sum.go");
        assert_eq!(fs::read_to_string(&path).expect("file exists"), "");
        assert_eq!(harness.edited(), vec![path]);
    }

    #[test]
    fn existing_file_is_left_alone_but_still_opened() {
        let temp = TempDir::new().expect("tempdir should create");
        let mut harness = TestHarness::new(temp.path());
        handle(&args("two_sum", "1"), &mut harness.ctx).expect("first add succeeds");
        let path = temp.path().join("problems/1_two_sum.go");
        fs::write(&path, "package problems\n// my work\n").expect("edit file");

        handle(&args("two_sum", "1"), &mut harness.ctx).expect("second add succeeds");

        assert_eq!(
            fs::read_to_string(&path).expect("file exists"),
            "package problems\n// my work\n"
        );
        assert_eq!(harness.edited().len(), 2);
    }

    #[test]
    fn template_option_writes_package_clause() {
        let temp = TempDir::new().expect("tempdir should create");
        let mut config = LcConfig::default();
        config.gentest.problem_template = true;
        let mut harness = TestHarness::with_config(temp.path(), config);

        handle(&args("two_sum", "1"), &mut harness.ctx).expect("add succeeds");

        assert_eq!(
            fs::read_to_string(temp.path().join("problems/1_two_sum.go")).expect("file exists"),
            "package problems\n\n"
        );
    }

    #[test]
    fn invalid_number_touches_nothing() {
        let temp = TempDir::new().expect("tempdir should create");
        let mut harness = TestHarness::new(temp.path());

        let err = handle(&args("two_sum", "one"), &mut harness.ctx).expect_err("must reject");

        assert!(err.to_string().contains("number"), "{err:#}");
        assert!(snapshot(temp.path()).is_empty());
        assert!(harness.edited().is_empty());
    }

    #[test]
    fn editor_failure_is_not_fatal() {
        let temp = TempDir::new().expect("tempdir should create");
        let mut harness = TestHarness::new(temp.path()).with_launcher(
            true,
            RunStatus {
                success: true,
                code: Some(0),
            },
        );

        handle(&args("two_sum", "1"), &mut harness.ctx).expect("editor failure is reported only");
        assert!(temp.path().join("problems/1_two_sum.go").is_file());
    }
}
