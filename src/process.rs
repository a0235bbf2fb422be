use crate::error::Result;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

/// Locale variables stripped from the child so tools print in the C locale.
const LOCALE_VARS: &[&str] = &[
    "LANG",
    "LC_CTYPE",
    "LC_NUMERIC",
    "LC_TIME",
    "LC_COLLATE",
    "LC_MONETARY",
    "LC_MESSAGES",
    "LC_ALL",
];

/// Everything captured from one finished command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was killed by a signal.
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Runs an external program to completion.
pub trait CommandRunner {
    fn run(&self, program: &Path, args: &[String]) -> Result<CommandOutput>;
}

/// Runs commands on the local system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &Path, args: &[String]) -> Result<CommandOutput> {
        let mut cmd = build_cmd(program, args);
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        let output = cmd.output()?;
        Ok(CommandOutput {
            status: output.status.code(),
            stdout: String::from_utf8(output.stdout)?,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

fn build_cmd(program: &Path, args: &[String]) -> Command {
    let mut cmd = Command::new(program);
    for var in LOCALE_VARS {
        cmd.env_remove(var);
    }
    cmd.args(args);
    debug!("exec: {} {:?}", program.display(), args);
    cmd
}

/// Look `name` up on `$PATH` followed by `extra_dirs`.
///
/// Returns the resolved path, or the full list of directories that were
/// searched so the caller can report it.
pub fn find_program(name: &str, extra_dirs: &[PathBuf]) -> std::result::Result<PathBuf, Vec<PathBuf>> {
    let mut dirs: Vec<PathBuf> = std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default();
    for dir in extra_dirs {
        if !dirs.contains(dir) {
            dirs.push(dir.clone());
        }
    }

    let search = match std::env::join_paths(&dirs) {
        Ok(search) => search,
        Err(_) => return Err(dirs),
    };
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));
    match which::which_in(name, Some(search), cwd) {
        Ok(path) => {
            debug!("found {} at {}", name, path.display());
            Ok(path)
        }
        Err(_) => Err(dirs),
    }
}
