use std::collections::VecDeque;

use super::{Arg, InterpretError, Operation, OperationTable};

/// What happened while interpreting one command line
#[derive(Debug, Default)]
pub struct Interpretation {
    /// Canonical names of the operations invoked, in order (rejected calls included)
    pub invoked: Vec<&'static str>,
    pub errors: Vec<InterpretError>,
    /// Tokens left unconsumed when interpretation stopped early
    pub remaining: Vec<String>,
    /// Lines meant for the user: trace, returned values and diagnostics
    pub transcript: Vec<String>,
    halted: bool,
}

impl Interpretation {
    /// True when the line was abandoned before its last token
    pub fn halted(&self) -> bool {
        self.halted
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    fn report(&mut self, error: InterpretError) {
        log::warn!("{error}");
        self.transcript.push(error.to_string());
        self.errors.push(error);
    }
}

/// Turns whitespace-separated command lines into operation calls on a target
#[derive(Debug)]
pub struct Interpreter<T> {
    table: OperationTable<T>,
}

impl<T> Interpreter<T> {
    pub fn new(table: OperationTable<T>) -> Self {
        Self { table }
    }

    /// Interpret a single line against `target`.
    ///
    /// Tokens are consumed left to right. Each token must name an operation; the
    /// following tokens are taken as its arguments. An unknown operation, running out
    /// of tokens, or finding an operation name where an argument belongs all stop the
    /// line. A failing operation only skips itself.
    pub fn run(&self, line: &str, target: &mut T) -> Interpretation {
        let mut tokens: VecDeque<String> = line.split_whitespace().map(str::to_owned).collect();
        let mut outcome = Interpretation::default();

        if tokens.is_empty() {
            return outcome;
        }
        outcome
            .transcript
            .push(format!("Running command list: {:?}", tokens));

        while let Some(token) = tokens.pop_front() {
            log::debug!("Processing token: {token}");

            let Some(operation) = self.table.get(&token) else {
                outcome.report(InterpretError::UnknownCommand(token));
                outcome.halted = true;
                break;
            };

            match self.collect_args(&token, operation, &mut tokens) {
                Ok(args) => self.call(&token, operation, &args, target, &mut outcome),
                Err(error) => {
                    outcome.report(error);
                    outcome.halted = true;
                    break;
                }
            }
        }

        outcome.remaining = tokens.into();
        outcome
    }

    /// Invoke a single operation by name with already-built arguments
    pub fn invoke(
        &self,
        name: &str,
        args: &[Arg],
        target: &mut T,
    ) -> Result<Option<String>, InterpretError> {
        let operation = self
            .table
            .get(name)
            .ok_or_else(|| InterpretError::UnknownCommand(name.to_owned()))?;

        if args.len() < operation.arity() {
            return Err(InterpretError::ArityShortfall {
                operation: name.to_owned(),
                expected: operation.arity(),
                given: args.len(),
            });
        }

        operation
            .invoke(target, args)
            .map_err(|source| InterpretError::EngineRejection {
                operation: name.to_owned(),
                source,
            })
    }

    fn collect_args(
        &self,
        token: &str,
        operation: &Operation<T>,
        tokens: &mut VecDeque<String>,
    ) -> Result<Vec<Arg>, InterpretError> {
        let expected = operation.arity();
        let mut args = Vec::with_capacity(expected);

        while args.len() < expected {
            let Some(candidate) = tokens.pop_front() else {
                return Err(InterpretError::ArityShortfall {
                    operation: token.to_owned(),
                    expected,
                    given: args.len(),
                });
            };

            if self.table.contains(&candidate) {
                tokens.push_front(candidate.clone());
                return Err(InterpretError::ArgumentIsCommand {
                    operation: token.to_owned(),
                    expected,
                    token: candidate,
                });
            }

            args.push(Arg::parse(&candidate));
        }

        Ok(args)
    }

    fn call(
        &self,
        token: &str,
        operation: &Operation<T>,
        args: &[Arg],
        target: &mut T,
        outcome: &mut Interpretation,
    ) {
        let rendered: Vec<String> = args.iter().map(Arg::to_string).collect();
        let call = format!("{token}({})", rendered.join(", "));
        log::info!("Calling {call}");
        outcome.transcript.push(format!("Calling {call}"));
        outcome.invoked.push(operation.name());

        match operation.invoke(target, args) {
            Ok(Some(value)) if !value.is_empty() => {
                outcome.transcript.push(format!("{token}: {value}"));
            }
            Ok(_) => {}
            Err(source) => outcome.report(InterpretError::EngineRejection {
                operation: token.to_owned(),
                source,
            }),
        }
    }
}
