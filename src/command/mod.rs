mod arg;
mod catalog;
mod history;
mod interpreter;

use thiserror::Error;

use crate::error::TurtleError;

pub use arg::Arg;
pub use catalog::{Operation, OperationTable, Thunk};
pub use history::CommandHistory;
pub use interpreter::{Interpretation, Interpreter};

/// Problems found while interpreting a command line. None of them end the session.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterpretError {
    /// The token doesn't name any operation; the rest of the line is skipped
    #[error("{0} is not a valid turtle command, suspending.")]
    UnknownCommand(String),

    /// The line ended before the operation got all of its arguments
    #[error("{operation} takes {expected} argument(s) but {given} were given.")]
    ArityShortfall {
        operation: String,
        expected: usize,
        given: usize,
    },

    /// An operation name showed up where an argument was expected
    #[error("{operation} takes {expected} argument(s), found command {token} instead.")]
    ArgumentIsCommand {
        operation: String,
        expected: usize,
        token: String,
    },

    /// The turtle refused the call; interpretation moves on to the next token
    #[error("{operation}: {source}")]
    EngineRejection {
        operation: String,
        source: TurtleError,
    },
}
