//! Rendering of job descriptors into qsub command text, and recovery of the resource directives
//! from rendered text
//!

use std::sync::LazyLock;

use regex::Regex;
use simple_error::{SimpleResult, bail, map_err_with};

use crate::job::JobDescriptor;

pub const SUBMIT_PROGRAM: &str = "qsub";

/// Parallel environment holding the job's slots
pub const PARALLEL_ENVIRONMENT: &str = "DJ";

/// Render the descriptor as a single qsub command line
///
/// All paths are embedded verbatim, without quoting. The scheduler directives always come first, in
/// the order: slots, memory, job name, account, log, optional hold.
///
pub fn render_qsub(job: &JobDescriptor) -> String {
    let mut tokens = vec![
        SUBMIT_PROGRAM.to_string(),
        "-pe".to_string(),
        PARALLEL_ENVIRONMENT.to_string(),
        job.resources.parallelism.to_string(),
        "-l".to_string(),
        format!("h_vmem={}G", job.resources.memory_gb),
        "-N".to_string(),
        job.job_name.clone(),
        "-A".to_string(),
        job.account.clone(),
        "-o".to_string(),
        job.log_path.clone(),
        "-j".to_string(),
        "y".to_string(),
    ];
    if let Some(pattern) = &job.hold_pattern {
        tokens.push("-hold_jid".to_string());
        tokens.push(pattern.clone());
    }
    tokens.extend(["-V", "-cwd", "-b", "y"].map(String::from));
    tokens.extend(job.argv.iter().cloned());
    tokens.join(" ")
}

/// Resource numbers found in rendered command text
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DirectiveSummary {
    pub parallelism: Option<u32>,
    pub memory_gb: Option<u32>,
}

impl DirectiveSummary {
    /// Slot count multiplied by per-slot memory, or None without a memory directive
    ///
    /// A missing or zero slot count is treated as a single slot. A product too large for `u32` is an
    /// error.
    ///
    pub fn effective_memory_gb(&self) -> SimpleResult<Option<u32>> {
        let Some(memory) = self.memory_gb else {
            return Ok(None);
        };
        let parallelism = match self.parallelism {
            Some(0) | None => 1,
            Some(x) => x,
        };
        match memory.checked_mul(parallelism) {
            Some(x) => Ok(Some(x)),
            None => bail!(
                "Requested memory of {} slots x {}G is too large",
                parallelism,
                memory
            ),
        }
    }
}

static PARALLELISM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"DJ\s*(\d+)").unwrap());

static MEMORY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"h_vmem=\s*(\d+)").unwrap());

fn first_capture_number(regex: &Regex, text: &str, name: &str) -> SimpleResult<Option<u32>> {
    let Some(x) = regex.captures(text).and_then(|x| x.get(1)) else {
        return Ok(None);
    };
    let value = map_err_with!(
        x.as_str().parse::<u32>(),
        "Unable to parse {} value '{}'",
        name,
        x.as_str()
    )?;
    Ok(Some(value))
}

/// Pull the slot count and per-slot memory back out of a rendered command
///
/// A directive whose number does not fit in `u32` is an error rather than an absent directive.
///
pub fn parse_directives(command: &str) -> SimpleResult<DirectiveSummary> {
    Ok(DirectiveSummary {
        parallelism: first_capture_number(&PARALLELISM_REGEX, command, "DJ")?,
        memory_gb: first_capture_number(&MEMORY_REGEX, command, "h_vmem")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::{JobRequest, SubmitSettings};
    use crate::resources::ResourceProfile;
    use crate::tool::PipelineStep;

    fn get_test_job(hold: Option<&str>) -> JobDescriptor {
        let mut request = JobRequest::new(
            PipelineStep::Realign,
            &SubmitSettings::new(989898, "kim"),
            "gatk.jar",
            "log_dir",
        );
        if let Some(pattern) = hold {
            request = request.hold(pattern);
        }
        request.into_descriptor(
            ResourceProfile::new(7, 2),
            vec!["java".to_string(), "-jar".to_string(), "gatk.jar".to_string()],
        )
    }

    #[test]
    fn test_render_qsub() {
        let cmd = render_qsub(&get_test_job(None));
        assert_eq!(
            cmd,
            "qsub -pe DJ 2 -l h_vmem=7G -N 989898_realign -A kim -o log_dir -j y -V -cwd -b y java -jar gatk.jar"
        );
    }

    #[test]
    fn test_render_qsub_with_hold() {
        let cmd = render_qsub(&get_test_job(Some("star")));
        assert!(cmd.contains(" -hold_jid star -V "));
    }

    #[test]
    fn test_parse_directives() {
        let summary = parse_directives("qsub -pe DJ 4 -l h_vmem=4G -N x").unwrap();
        assert_eq!(summary.parallelism, Some(4));
        assert_eq!(summary.memory_gb, Some(4));
        assert_eq!(summary.effective_memory_gb(), Ok(Some(16)));
    }

    #[test]
    fn test_parse_directives_without_slots() {
        let summary = parse_directives("qsub -l h_vmem=14G -N x").unwrap();
        assert_eq!(summary.parallelism, None);
        assert_eq!(summary.effective_memory_gb(), Ok(Some(14)));

        let summary = parse_directives("qsub -pe DJ 0 -l h_vmem=14G").unwrap();
        assert_eq!(summary.effective_memory_gb(), Ok(Some(14)));
    }

    #[test]
    fn test_parse_directives_without_memory() {
        let summary = parse_directives("echo hello").unwrap();
        assert_eq!(summary, DirectiveSummary::default());
        assert_eq!(summary.effective_memory_gb(), Ok(None));
    }

    #[test]
    fn test_parse_directives_out_of_range() {
        assert!(parse_directives("qsub -pe DJ 99999999999 -l h_vmem=1G").is_err());
        assert!(parse_directives("qsub -pe DJ 2 -l h_vmem=99999999999G").is_err());
    }

    #[test]
    fn test_effective_memory_overflow() {
        let summary = parse_directives("qsub -pe DJ 70000 -l h_vmem=70000G").unwrap();
        assert_eq!(summary.parallelism, Some(70000));
        assert!(summary.effective_memory_gb().is_err());
    }

    #[test]
    fn test_rendered_directives_match_descriptor() {
        let job = get_test_job(None);
        let summary = parse_directives(&render_qsub(&job)).unwrap();
        assert_eq!(summary.parallelism, Some(job.resources.parallelism));
        assert_eq!(summary.memory_gb, Some(job.resources.memory_gb));
    }
}
