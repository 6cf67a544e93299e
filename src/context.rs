use crate::{
    infrastructure::{CommandRunner, Console},
    run::Options,
};
use tokio::sync::Mutex;

pub struct Context {
    command_runner: Box<dyn CommandRunner + Send + Sync + 'static>,
    console: Mutex<Box<dyn Console + Send + Sync + 'static>>,
    options: Options,
}

impl Context {
    pub fn new(
        command_runner: impl CommandRunner + Send + Sync + 'static,
        console: impl Console + Send + Sync + 'static,
        options: Options,
    ) -> Self {
        Self {
            command_runner: Box::new(command_runner),
            console: Mutex::new(Box::new(console)),
            options,
        }
    }

    pub fn command_runner(&self) -> &(dyn CommandRunner + Send + Sync) {
        &*self.command_runner
    }

    pub fn console(&self) -> &Mutex<Box<dyn Console + Send + Sync>> {
        &self.console
    }

    pub fn options(&self) -> &Options {
        &self.options
    }
}
