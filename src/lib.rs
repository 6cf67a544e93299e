//! A build rule descriptor and executor.
//!
//! A [`BuildRule`](ir::BuildRule) describes one compiler invocation: a
//! compiler with flags, a target, dependencies and an output path.
//! [`run::run`] turns it into an argument vector and runs it as a single
//! child process.

pub mod context;
pub mod error;
pub mod infrastructure;
pub mod ir;
mod log;
pub mod run;
pub mod validation;
