use std::time::Duration;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Options {
    pub debug: bool,
    pub timeout: Option<Duration>,
}
