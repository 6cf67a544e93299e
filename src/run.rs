mod argument_vector;
mod error;
mod options;

pub use self::{
    argument_vector::{argument_count, argument_vector, render_command_line},
    error::RunError,
    options::Options,
};
use crate::{
    context::Context,
    debug,
    infrastructure::{CommandError, Termination},
    ir::BuildRule,
};

/// Runs a rule's command as a single child process.
///
/// No process is spawned if the rule is incomplete.
pub async fn run(context: &Context, rule: &BuildRule) -> Result<(), RunError> {
    let arguments = argument_vector(rule)?;

    debug!(context, "{}", render_command_line(&arguments));

    let output = context
        .command_runner()
        .run(&arguments, context.options().timeout)
        .await
        .map_err(|error| {
            let program = arguments[0].into();
            let message = error.io_error().to_string();

            match error {
                CommandError::Spawn(_) => RunError::SpawnFailed { program, message },
                CommandError::Wait(_) => RunError::WaitFailed { program, message },
            }
        })?;

    {
        let mut console = context.console().lock().await;

        if !output.stdout().is_empty() {
            let _ = console.write_stdout(output.stdout()).await;
        }

        if !output.stderr().is_empty() {
            let _ = console.write_stderr(output.stderr()).await;
        }
    }

    match output.termination() {
        Termination::Exited(0) => Ok(()),
        Termination::Exited(code) => Err(RunError::NonZeroExit(code)),
        Termination::Signaled(signal) => Err(RunError::KilledBySignal(signal)),
        Termination::TimedOut => Err(RunError::TimedOut(
            context.options().timeout.unwrap_or_default(),
        )),
    }
}

/// Runs a rule and reports `0` on success and `-1` on any failure.
pub async fn build(context: &Context, rule: &BuildRule) -> i16 {
    match run(context, rule).await {
        Ok(()) => 0,
        Err(error) => {
            debug!(context, "{}", error);

            -1
        }
    }
}
