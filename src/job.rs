//! Job requests and the structured job descriptors built from them
//!

use std::fmt;

use serde::Serialize;

use crate::errors::CommandError;
use crate::resources::{ResourceProfile, ResourceTable};
use crate::tool::{PipelineStep, Tool};

/// Prefix shared by the scheduler job names of one pipeline run
///
/// Sample ids are frequently numeric, so integers convert directly.
///
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct JobPrefix(String);

impl JobPrefix {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for JobPrefix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for JobPrefix {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for JobPrefix {
    fn from(s: String) -> Self {
        Self(s)
    }
}

macro_rules! job_prefix_from_int {
    ($($t:ty),+) => {
        $(impl From<$t> for JobPrefix {
            fn from(x: $t) -> Self {
                Self(x.to_string())
            }
        })+
    };
}

job_prefix_from_int!(u32, u64, i32, i64, usize);

/// Scheduler submission settings shared by every step of a pipeline run
#[derive(Clone, Debug, Default)]
pub struct SubmitSettings {
    pub job_prefix: JobPrefix,

    /// Scheduler account (project) charged for the job
    pub account: String,
}

impl SubmitSettings {
    pub fn new(job_prefix: impl Into<JobPrefix>, account: &str) -> Self {
        Self {
            job_prefix: job_prefix.into(),
            account: account.to_string(),
        }
    }
}

/// A path or parameter value together with the name used to report it
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct LabeledValue {
    pub label: &'static str,
    pub value: String,
}

/// Everything needed to submit one pipeline step, before validation
///
#[derive(Clone, Debug)]
pub struct JobRequest {
    pub step: PipelineStep,
    pub tool_path: String,
    pub inputs: Vec<LabeledValue>,
    pub outputs: Vec<LabeledValue>,
    pub extras: Vec<LabeledValue>,
    pub log_path: String,
    pub job_prefix: JobPrefix,
    pub account: String,

    /// Job name pattern this job waits on before it is scheduled
    pub hold_pattern: Option<String>,
}

fn labeled(label: &'static str, value: &str) -> LabeledValue {
    LabeledValue {
        label,
        value: value.to_string(),
    }
}

impl JobRequest {
    pub fn new(
        step: PipelineStep,
        submit: &SubmitSettings,
        tool_path: &str,
        log_path: &str,
    ) -> Self {
        Self {
            step,
            tool_path: tool_path.to_string(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            extras: Vec::new(),
            log_path: log_path.to_string(),
            job_prefix: submit.job_prefix.clone(),
            account: submit.account.clone(),
            hold_pattern: None,
        }
    }

    pub fn input(mut self, label: &'static str, path: &str) -> Self {
        self.inputs.push(labeled(label, path));
        self
    }

    pub fn output(mut self, label: &'static str, path: &str) -> Self {
        self.outputs.push(labeled(label, path));
        self
    }

    /// Add a step-specific parameter, such as a reference or a sample name
    pub fn extra(mut self, label: &'static str, value: &str) -> Self {
        self.extras.push(labeled(label, value));
        self
    }

    pub fn hold(mut self, pattern: &str) -> Self {
        self.hold_pattern = Some(pattern.to_string());
        self
    }

    pub fn tool(&self) -> Tool {
        self.step.tool()
    }

    /// Check that every required value is non-empty
    ///
    /// File existence is not checked, that is left to the external tool.
    ///
    pub fn validate(&self) -> Result<(), CommandError> {
        let invalid = |field| CommandError::InvalidRequest {
            step: self.step,
            field,
        };

        for x in self
            .inputs
            .iter()
            .chain(self.outputs.iter())
            .chain(self.extras.iter())
        {
            if x.value.is_empty() {
                return Err(invalid(x.label));
            }
        }
        if self.tool_path.is_empty() {
            return Err(invalid("tool path"));
        }
        if self.log_path.is_empty() {
            return Err(invalid("log"));
        }
        if self.job_prefix.is_empty() {
            return Err(invalid("job prefix"));
        }
        if self.account.is_empty() {
            return Err(invalid("account"));
        }
        if let Some(pattern) = &self.hold_pattern {
            if pattern.is_empty() {
                return Err(invalid("hold pattern"));
            }
        }
        Ok(())
    }

    /// Look up the resource request for this step's tool class
    pub fn resources(&self, table: &ResourceTable) -> ResourceProfile {
        table.effective_profile(self.tool())
    }

    pub fn job_name(&self) -> String {
        format!("{}_{}", self.job_prefix, self.step)
    }

    /// Consume the request into a descriptor ready to render for the scheduler
    pub fn into_descriptor(self, resources: ResourceProfile, argv: Vec<String>) -> JobDescriptor {
        JobDescriptor {
            job_name: self.job_name(),
            step: self.step,
            tool: self.tool(),
            account: self.account,
            log_path: self.log_path,
            hold_pattern: self.hold_pattern,
            resources,
            inputs: self.inputs,
            outputs: self.outputs,
            argv,
        }
    }
}

/// Structured form of one scheduler submission
///
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct JobDescriptor {
    pub step: PipelineStep,
    pub tool: Tool,
    pub job_name: String,
    pub account: String,
    pub log_path: String,
    pub hold_pattern: Option<String>,
    pub resources: ResourceProfile,
    pub inputs: Vec<LabeledValue>,
    pub outputs: Vec<LabeledValue>,

    /// Tool invocation, program first
    pub argv: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_test_request() -> JobRequest {
        JobRequest::new(
            PipelineStep::Convert,
            &SubmitSettings::new(12345, "kim"),
            "~/Documents/picard_tools",
            "log_file",
        )
        .input("SAM", "sam_file")
        .output("BAM", "bam_file")
    }

    #[test]
    fn test_job_prefix_from() {
        assert_eq!(JobPrefix::from(12345).to_string(), "12345");
        assert_eq!(JobPrefix::from("run7").to_string(), "run7");
        assert!(JobPrefix::default().is_empty());
    }

    #[test]
    fn test_validate() {
        assert_eq!(get_test_request().validate(), Ok(()));

        let request = get_test_request().output("metrics", "");
        assert_eq!(
            request.validate(),
            Err(CommandError::InvalidRequest {
                step: PipelineStep::Convert,
                field: "metrics"
            })
        );

        let mut request = get_test_request();
        request.account.clear();
        assert_eq!(
            request.validate(),
            Err(CommandError::InvalidRequest {
                step: PipelineStep::Convert,
                field: "account"
            })
        );

        let request = get_test_request().hold("");
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_into_descriptor() {
        let request = get_test_request();
        let resources = request.resources(&ResourceTable::default());
        let descriptor = request.into_descriptor(resources, vec!["java".to_string()]);
        assert_eq!(descriptor.job_name, "12345_convert");
        assert_eq!(descriptor.tool, Tool::Sort);
        assert_eq!(descriptor.account, "kim");
        assert_eq!(descriptor.inputs[0].value, "sam_file");
        assert_eq!(descriptor.hold_pattern, None);
    }
}
