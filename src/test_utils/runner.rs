//! A process runner that records instead of executing.

use anyhow::Result;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::core::ArkitectError;
use crate::process::{CommandOutput, CommandRunner, ToolCommand};

#[derive(Debug, Clone)]
enum Response {
    Output(CommandOutput),
    Unavailable,
}

/// Records every command and answers with canned responses keyed by program.
///
/// Programs without a configured response succeed with empty output.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    responses: HashMap<String, Response>,
    invocations: Mutex<Vec<ToolCommand>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer runs of `program` with `output`.
    pub fn respond_to(mut self, program: &str, output: CommandOutput) -> Self {
        self.responses.insert(program.to_string(), Response::Output(output));
        self
    }

    /// Make `program` fail to start.
    pub fn unavailable(mut self, program: &str) -> Self {
        self.responses.insert(program.to_string(), Response::Unavailable);
        self
    }

    /// Commands run so far, in order.
    pub fn invocations(&self) -> Vec<ToolCommand> {
        self.invocations.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Commands run so far for `program`.
    pub fn invocations_of(&self, program: &str) -> Vec<ToolCommand> {
        self.invocations().into_iter().filter(|cmd| cmd.program() == program).collect()
    }
}

impl CommandRunner for RecordingRunner {
    async fn run(&self, command: &ToolCommand) -> Result<CommandOutput> {
        self.invocations.lock().unwrap_or_else(PoisonError::into_inner).push(command.clone());

        match self.responses.get(command.program()) {
            Some(Response::Output(output)) => Ok(output.clone()),
            Some(Response::Unavailable) => Err(ArkitectError::CommandFailed {
                command: command.display_command(),
                reason: format!("{} could not be located", command.program()),
            }
            .into()),
            None => Ok(CommandOutput::succeeded()),
        }
    }
}
