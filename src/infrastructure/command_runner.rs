use async_trait::async_trait;
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    io::{self, ErrorKind},
    process::{ExitStatus, Stdio},
    time::Duration,
};
use tokio::{
    io::{AsyncRead, AsyncReadExt},
    process::{Child, ChildStderr, ChildStdout, Command},
    time::timeout,
};

/// How a child process ended.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Termination {
    Exited(i32),
    Signaled(i32),
    TimedOut,
}

impl From<ExitStatus> for Termination {
    fn from(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return Self::Exited(code);
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;

            if let Some(signal) = status.signal() {
                return Self::Signaled(signal);
            }
        }

        Self::Exited(-1)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommandOutput {
    termination: Termination,
    stdout: Vec<u8>,
    stderr: Vec<u8>,
}

impl CommandOutput {
    pub fn new(termination: Termination, stdout: Vec<u8>, stderr: Vec<u8>) -> Self {
        Self {
            termination,
            stdout,
            stderr,
        }
    }

    pub fn termination(&self) -> Termination {
        self.termination
    }

    pub fn stdout(&self) -> &[u8] {
        &self.stdout
    }

    pub fn stderr(&self) -> &[u8] {
        &self.stderr
    }
}

#[derive(Debug)]
pub enum CommandError {
    /// The process could not be started.
    Spawn(io::Error),
    /// The process started but waiting for it or reading its output failed.
    Wait(io::Error),
}

impl CommandError {
    pub fn io_error(&self) -> &io::Error {
        match self {
            Self::Spawn(error) | Self::Wait(error) => error,
        }
    }
}

impl Error for CommandError {}

impl Display for CommandError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::Spawn(error) => write!(formatter, "failed to spawn process: {}", error),
            Self::Wait(error) => write!(formatter, "failed to wait for process: {}", error),
        }
    }
}

#[async_trait]
pub trait CommandRunner {
    /// Runs a program with arguments and waits for it to end.
    ///
    /// The first argument is the program looked up in `PATH`.
    async fn run(
        &self,
        arguments: &[&str],
        timeout: Option<Duration>,
    ) -> Result<CommandOutput, CommandError>;
}

#[derive(Debug, Default)]
pub struct OsCommandRunner {}

impl OsCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CommandRunner for OsCommandRunner {
    async fn run(
        &self,
        arguments: &[&str],
        duration: Option<Duration>,
    ) -> Result<CommandOutput, CommandError> {
        let (program, arguments) = arguments.split_first().ok_or_else(|| {
            CommandError::Spawn(io::Error::new(
                ErrorKind::InvalidInput,
                "empty argument vector",
            ))
        })?;

        let mut child = Command::new(program)
            .args(arguments)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(CommandError::Spawn)?;

        let Some(duration) = duration else {
            return Ok(child
                .wait_with_output()
                .await
                .map_err(CommandError::Wait)?
                .into());
        };

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        let result = timeout(duration, read_output(&mut child, stdout, stderr)).await;

        match result {
            Ok(output) => output.map_err(CommandError::Wait),
            Err(_) => {
                child.kill().await.map_err(CommandError::Wait)?;

                Ok(CommandOutput::new(Termination::TimedOut, vec![], vec![]))
            }
        }
    }
}

impl From<std::process::Output> for CommandOutput {
    fn from(output: std::process::Output) -> Self {
        Self::new(output.status.into(), output.stdout, output.stderr)
    }
}

async fn read_output(
    child: &mut Child,
    stdout: Option<ChildStdout>,
    stderr: Option<ChildStderr>,
) -> Result<CommandOutput, io::Error> {
    let (status, stdout, stderr) =
        tokio::try_join!(child.wait(), read_pipe(stdout), read_pipe(stderr))?;

    Ok(CommandOutput::new(status.into(), stdout, stderr))
}

async fn read_pipe(pipe: Option<impl AsyncRead + Unpin>) -> Result<Vec<u8>, io::Error> {
    let mut buffer = vec![];

    if let Some(mut pipe) = pipe {
        pipe.read_to_end(&mut buffer).await?;
    }

    Ok(buffer)
}
