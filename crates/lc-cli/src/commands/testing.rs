//! Scripted picker and recording launcher for command tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use lc_config::LcConfig;

use crate::context::AppContext;
use crate::launcher::{Launcher, RunStatus};
use crate::picker::{PickError, Picker};

/// Write `contents` to `<root>/problems/<file_name>`.
pub fn write_problem(root: &Path, file_name: &str, contents: &str) -> PathBuf {
    let dir = root.join("problems");
    fs::create_dir_all(&dir).expect("problems dir should create");
    let path = dir.join(file_name);
    fs::write(&path, contents).expect("problem file should write");
    path
}

/// Every file under `root`, relative and sorted.
pub fn snapshot(root: &Path) -> Vec<String> {
    fn walk(root: &Path, dir: &Path, out: &mut Vec<String>) {
        let Ok(entries) = fs::read_dir(dir) else {
            return;
        };
        for entry in entries.filter_map(Result::ok) {
            let path = entry.path();
            if path.is_dir() {
                walk(root, &path, out);
            } else {
                let contents = fs::read_to_string(&path).unwrap_or_default();
                let rel = path.strip_prefix(root).unwrap_or(&path).display().to_string();
                out.push(format!("{rel}:{contents}"));
            }
        }
    }
    let mut out = Vec::new();
    walk(root, root, &mut out);
    out.sort();
    out
}

#[derive(Default)]
struct Recorded {
    prompts: Vec<Vec<String>>,
    edited: Vec<PathBuf>,
    ran: Vec<PathBuf>,
}

struct ScriptedPicker {
    picks: VecDeque<Result<usize, PickError>>,
    recorded: Rc<RefCell<Recorded>>,
}

impl Picker for ScriptedPicker {
    fn pick(&mut self, _prompt: &str, items: &[String]) -> Result<usize, PickError> {
        self.recorded.borrow_mut().prompts.push(items.to_vec());
        self.picks.pop_front().unwrap_or(Err(PickError::Cancelled))
    }
}

struct RecordingLauncher {
    edit_fails: bool,
    run_status: RunStatus,
    recorded: Rc<RefCell<Recorded>>,
}

impl Launcher for RecordingLauncher {
    fn edit(&mut self, path: &Path) -> anyhow::Result<()> {
        self.recorded.borrow_mut().edited.push(path.to_path_buf());
        if self.edit_fails {
            anyhow::bail!("editor exited with status: 1");
        }
        Ok(())
    }

    fn run_tests(&mut self, test_file: &Path) -> anyhow::Result<RunStatus> {
        self.recorded.borrow_mut().ran.push(test_file.to_path_buf());
        Ok(self.run_status)
    }
}

/// An [`AppContext`] rooted at a temp dir with fakes wired in.
pub struct TestHarness {
    pub ctx: AppContext,
    recorded: Rc<RefCell<Recorded>>,
}

impl TestHarness {
    pub fn new(root: &Path) -> Self {
        Self::with_config(root, LcConfig::default())
    }

    pub fn with_config(root: &Path, config: LcConfig) -> Self {
        let recorded = Rc::new(RefCell::new(Recorded::default()));
        let ctx = AppContext {
            project_root: root.to_path_buf(),
            config,
            picker: Box::new(ScriptedPicker {
                picks: VecDeque::new(),
                recorded: Rc::clone(&recorded),
            }),
            launcher: Box::new(RecordingLauncher {
                edit_fails: false,
                run_status: RunStatus {
                    success: true,
                    code: Some(0),
                },
                recorded: Rc::clone(&recorded),
            }),
        };
        Self { ctx, recorded }
    }

    pub fn with_picks(mut self, picks: impl IntoIterator<Item = Result<usize, PickError>>) -> Self {
        self.ctx.picker = Box::new(ScriptedPicker {
            picks: picks.into_iter().collect(),
            recorded: Rc::clone(&self.recorded),
        });
        self
    }

    pub fn with_launcher(mut self, edit_fails: bool, run_status: RunStatus) -> Self {
        self.ctx.launcher = Box::new(RecordingLauncher {
            edit_fails,
            run_status,
            recorded: Rc::clone(&self.recorded),
        });
        self
    }

    pub fn picker_prompts(&self) -> Vec<Vec<String>> {
        self.recorded.borrow().prompts.clone()
    }

    pub fn edited(&self) -> Vec<PathBuf> {
        self.recorded.borrow().edited.clone()
    }

    pub fn ran(&self) -> Vec<PathBuf> {
        self.recorded.borrow().ran.clone()
    }
}
