mod arguments;

use arguments::Arguments;
use clap::Parser;
use nobuild::{
    context::Context,
    error::ApplicationError,
    infrastructure::{OsCommandRunner, OsConsole},
    ir::{BuildRule, Compiler, Token, TokenList},
    run::{self, Options},
};
use std::{env::set_current_dir, process::exit, time::Duration};
use tokio::{io::AsyncWriteExt, time::sleep};

#[tokio::main]
async fn main() {
    let arguments = Arguments::parse();

    if let Err(error) = execute(&arguments).await {
        if !(arguments.quiet && error.is_execution_error()) {
            let _ = tokio::io::stderr()
                .write_all(
                    format!(
                        "{}{}\n",
                        arguments.log_prefix.as_deref().unwrap_or_default(),
                        error
                    )
                    .as_bytes(),
                )
                .await;
        }

        // Delay for the error message to be written completely hopefully.
        sleep(Duration::from_millis(1)).await;

        exit(1)
    }
}

async fn execute(arguments: &Arguments) -> Result<(), ApplicationError> {
    if let Some(directory) = &arguments.directory {
        set_current_dir(directory)?;
    }

    let context = Context::new(
        OsCommandRunner::new(),
        OsConsole::new(),
        Options {
            debug: arguments.debug,
            timeout: arguments
                .timeout
                .map(Duration::try_from_secs_f64)
                .transpose()
                .map_err(|error| ApplicationError::Other(error.to_string()))?,
        },
    );

    let rule = BuildRule::make(
        Some(Compiler::new(&arguments.compiler)?),
        TokenList::try_from_iter(&arguments.flags)?,
        Some(Token::object(&arguments.target)?),
        Some(TokenList::try_from_iter(&arguments.dependencies)?),
        &arguments.output,
    )?;

    run::run(&context, &rule).await?;

    rule.cleanup();

    Ok(())
}
