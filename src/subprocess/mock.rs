use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::error::ProcessError;
use super::runner::{ExitStatus, ProcessCommand, ProcessOutput, ProcessRunner};

/// Scripted stand-in for [`TokioProcessRunner`](super::TokioProcessRunner).
///
/// Expectations are matched by program name (plus an optional argument
/// matcher) in registration order and can respond with output or with a
/// forced failure, so callers can exercise the timeout and missing-binary
/// paths without real processes.
#[derive(Clone)]
pub struct MockProcessRunner {
    expectations: Arc<Mutex<Vec<MockExpectation>>>,
    call_history: Arc<Mutex<Vec<ProcessCommand>>>,
}

/// Failure a mock expectation can force instead of producing output.
#[derive(Debug, Clone)]
enum MockFailure {
    NotFound,
    Timeout(Duration),
}

struct MockExpectation {
    program: String,
    #[allow(clippy::type_complexity)]
    args_matcher: Option<Box<dyn Fn(&[String]) -> bool + Send + Sync>>,
    response: Result<ProcessOutput, MockFailure>,
}

pub struct MockCommandConfig {
    runner: MockProcessRunner,
    expectation: MockExpectation,
}

impl MockProcessRunner {
    pub fn new() -> Self {
        Self {
            expectations: Arc::new(Mutex::new(Vec::new())),
            call_history: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn expect_command(&self, program: &str) -> MockCommandConfig {
        MockCommandConfig {
            runner: self.clone(),
            expectation: MockExpectation {
                program: program.to_string(),
                args_matcher: None,
                response: Ok(ProcessOutput {
                    status: ExitStatus::Success,
                    stdout: String::new(),
                    stderr: String::new(),
                    duration: Duration::from_millis(10),
                }),
            },
        }
    }

    pub fn call_count(&self, program: &str) -> usize {
        self.call_history
            .lock()
            .unwrap()
            .iter()
            .filter(|cmd| cmd.program == program)
            .count()
    }

    pub fn call_history(&self) -> Vec<ProcessCommand> {
        self.call_history.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProcessRunner for MockProcessRunner {
    async fn run(&self, command: ProcessCommand) -> Result<ProcessOutput, ProcessError> {
        self.call_history.lock().unwrap().push(command.clone());

        let expectations = self.expectations.lock().unwrap();
        for expectation in expectations.iter() {
            if expectation.program != command.program {
                continue;
            }

            if let Some(ref args_matcher) = expectation.args_matcher {
                if !(args_matcher)(&command.args) {
                    continue;
                }
            }

            return match &expectation.response {
                Ok(output) => Ok(output.clone()),
                Err(MockFailure::NotFound) => {
                    Err(ProcessError::CommandNotFound(command.program.clone()))
                }
                Err(MockFailure::Timeout(duration)) => Err(ProcessError::Timeout(*duration)),
            };
        }

        Err(ProcessError::MockExpectationNotMet(format!(
            "No expectation found for command: {} {:?}",
            command.program, command.args
        )))
    }
}

impl MockCommandConfig {
    pub fn with_args<F>(mut self, matcher: F) -> Self
    where
        F: Fn(&[String]) -> bool + Send + Sync + 'static,
    {
        self.expectation.args_matcher = Some(Box::new(matcher));
        self
    }

    pub fn returns_stdout(mut self, stdout: &str) -> Self {
        if let Ok(output) = &mut self.expectation.response {
            output.stdout = stdout.to_string();
        }
        self
    }

    pub fn returns_stderr(mut self, stderr: &str) -> Self {
        if let Ok(output) = &mut self.expectation.response {
            output.stderr = stderr.to_string();
        }
        self
    }

    pub fn returns_exit_code(mut self, code: i32) -> Self {
        if let Ok(output) = &mut self.expectation.response {
            output.status = if code == 0 {
                ExitStatus::Success
            } else {
                ExitStatus::Error(code)
            };
        }
        self
    }

    pub fn returns_success(mut self) -> Self {
        if let Ok(output) = &mut self.expectation.response {
            output.status = ExitStatus::Success;
        }
        self
    }

    pub fn fails_not_found(mut self) -> Self {
        self.expectation.response = Err(MockFailure::NotFound);
        self
    }

    pub fn fails_with_timeout(mut self, duration: Duration) -> Self {
        self.expectation.response = Err(MockFailure::Timeout(duration));
        self
    }

    pub fn finish(self) {
        self.runner
            .expectations
            .lock()
            .unwrap()
            .push(self.expectation);
    }
}

impl Default for MockProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}
