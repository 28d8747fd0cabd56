//! Command builders for each external tool of the pipeline
//!
//! Every builder takes the step settings, the run's submission settings and the resource table, and
//! returns a structured job descriptor. Nothing is executed or submitted here.
//!

pub mod bwa;
pub mod gatk;
pub mod picard;
pub mod samtools;

use crate::resources::ResourceProfile;

/// Java heap size for a job, leaving headroom under the scheduler's virtual memory limit
///
pub fn java_heap_gb(resources: &ResourceProfile) -> u32 {
    let total = u64::from(resources.effective_memory_gb());
    // Three quarters of a u32 always fits back into a u32
    std::cmp::max(1, (total * 3 / 4) as u32)
}

/// Start of the argv for any jar-packaged tool
fn java_jar_argv(resources: &ResourceProfile, jar: String) -> Vec<String> {
    vec![
        "java".to_string(),
        format!("-Xmx{}g", java_heap_gb(resources)),
        "-jar".to_string(),
        jar,
    ]
}

/// Greeting used to check that the program is installed and runs
pub fn hi() -> &'static str {
    "Hello World!"
}
