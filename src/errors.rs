use crate::tool::PipelineStep;

/// Failure to build a job command
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CommandError {
    /// A required path or parameter of the step is missing or empty
    InvalidRequest {
        step: PipelineStep,
        field: &'static str,
    },
}

impl std::error::Error for CommandError {}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequest { step, field } => {
                write!(
                    f,
                    "Invalid {step} request: required parameter '{field}' is missing or empty"
                )
            }
        }
    }
}
