/*!
A solver binary, run as a child process.

On each call to [solve](MaxSatBackend::solve):
- The instance is written to a fresh temporary file, which is removed when the call returns.
- The solver is run as `<program> [args…] <file>`, with stdout and stderr captured on helper threads.
- If the solver has not exited within the time limit, the child is killed and reaped, and a [Timeout](SolverError::Timeout) is returned.
  The same holds if waiting on the child fails.

```rust,no_run
# use std::time::Duration;
# use mrsort_sat::solver::{ExternalSolver, MaxSatBackend};
# use mrsort_sat::encoding::{clauses::ClauseSet, wcnf::WcnfInstance};
let solver = ExternalSolver::new("/usr/local/bin/maxsat");
let instance = WcnfInstance::new(1, ClauseSet::default(), 100, 1);
let outcome = solver.solve(&instance, Duration::from_secs(10));
```
*/

use std::{
    ffi::OsString,
    io::{BufWriter, Read},
    path::{Path, PathBuf},
    process::{Child, Command, Stdio},
    thread::{self, JoinHandle},
    time::Duration,
};

use wait_timeout::ChildExt;

use crate::{
    encoding::wcnf::WcnfInstance,
    misc::log::targets::{self},
    solver::{output::parse_output, MaxSatBackend, SolverOutcome},
    types::err::SolverError,
};

/// The most characters of stderr kept with a failure.
const STDERR_EXCERPT: usize = 2048;

/// A solver binary and any arguments to pass before the instance file.
#[derive(Clone, Debug)]
pub struct ExternalSolver {
    program: PathBuf,
    args: Vec<OsString>,
}

impl ExternalSolver {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        ExternalSolver {
            program: program.into(),
            args: Vec::default(),
        }
    }

    /// Arguments to pass to the solver, ahead of the path to the instance.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn run(&self, instance_path: &Path, time_limit: Duration) -> Result<String, SolverError> {
        log::debug!(target: targets::SOLVER, "Running {:?} on {instance_path:?}", self.program);

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(instance_path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| SolverError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let status = match child.wait_timeout(time_limit) {
            Ok(Some(status)) => status,
            Ok(None) => {
                reap(&mut child);
                log::warn!(target: targets::SOLVER, "Killed {:?} after {time_limit:?}", self.program);
                return Err(SolverError::Timeout(time_limit));
            }
            Err(e) => {
                reap(&mut child);
                log::warn!(target: targets::SOLVER, "Killed {:?} on failing to wait: {e}", self.program);
                return Err(SolverError::Io(e));
            }
        };

        let stdout = collect(stdout)?;
        let stderr = collect(stderr)?;

        if !status.success() {
            log::warn!(target: targets::SOLVER, "{:?} exited with {status}", self.program);
            return Err(SolverError::ProcessFailure {
                code: status.code(),
                stderr: excerpt(&stderr),
            });
        }

        Ok(stdout)
    }
}

impl MaxSatBackend for ExternalSolver {
    fn solve(
        &self,
        instance: &WcnfInstance,
        time_limit: Duration,
    ) -> Result<SolverOutcome, SolverError> {
        let mut file = tempfile::Builder::new()
            .prefix("mrsort-")
            .suffix(".wcnf")
            .tempfile()?;
        {
            let mut writer = BufWriter::new(file.as_file_mut());
            instance.write(&mut writer)?;
        }

        let stdout = self.run(file.path(), time_limit)?;
        file.close()?;

        Ok(parse_output(&stdout, instance.variable_count())?)
    }
}

// Kills a child which may still be running, and waits on it so no process is left behind.
fn reap(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

// Reads a pipe to its end on a fresh thread.
fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> JoinHandle<std::io::Result<String>> {
    thread::spawn(move || {
        let mut bytes = Vec::default();
        if let Some(mut pipe) = pipe {
            pipe.read_to_end(&mut bytes)?;
        }
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    })
}

fn collect(handle: JoinHandle<std::io::Result<String>>) -> Result<String, SolverError> {
    match handle.join() {
        Ok(result) => Ok(result?),
        Err(_) => Err(SolverError::Io(std::io::Error::other(
            "a pipe reader panicked",
        ))),
    }
}

// The tail of some text, trimmed.
fn excerpt(text: &str) -> String {
    let text = text.trim();
    let count = text.chars().count();
    text.chars().skip(count.saturating_sub(STDERR_EXCERPT)).collect()
}
