mod build_rule;
mod compiler;
mod error;
mod token;
mod token_list;

pub use build_rule::*;
pub use compiler::*;
pub use error::*;
pub use token::*;
pub use token_list::*;
