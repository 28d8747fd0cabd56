use camino::Utf8PathBuf;
use clap::Args;
use simple_error::{SimpleResult, bail};

use crate::job::SubmitSettings;

#[derive(Args, Default)]
pub struct SharedSettings {
    /// Prefix for all scheduler job names, typically the sample or run id
    #[arg(long, global = true, value_name = "PREFIX")]
    pub job_prefix: Option<String>,

    /// Scheduler account charged for submitted jobs
    #[arg(long, global = true)]
    pub account: Option<String>,

    /// JSON file overriding the per-tool memory and slot requests
    ///
    /// The file holds an object keyed on tool name (align, index, dedupe, sort, recalibrate,
    /// realign, call_variants, coverage), each value giving "memory_gb" per slot and
    /// "parallelism". Tools not listed keep their default request.
    ///
    #[arg(long = "resource-config", global = true, value_name = "FILE")]
    pub resource_config_filename: Option<Utf8PathBuf>,

    /// Print the structured job description as JSON instead of the qsub command line
    #[arg(long, global = true)]
    pub json: bool,

    /// Turn on extra debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

impl SharedSettings {
    pub fn submit_settings(&self) -> SubmitSettings {
        SubmitSettings::new(
            self.job_prefix.clone().unwrap_or_default(),
            self.account.as_deref().unwrap_or_default(),
        )
    }
}

pub fn validate_and_fix_shared_settings(settings: SharedSettings) -> SimpleResult<SharedSettings> {
    if let Some(filename) = &settings.resource_config_filename {
        if !filename.exists() {
            bail!("Can't find specified resource configuration file: '{}'", filename);
        }
        if !filename.is_file() {
            bail!(
                "Specified resource configuration path does not appear to be a file: '{}'",
                filename
            );
        }
    }
    Ok(settings)
}

/// Check the submission options needed by every pipeline step command
///
pub fn check_submit_settings(settings: &SharedSettings) -> SimpleResult<()> {
    if settings.job_prefix.as_deref().unwrap_or_default().is_empty() {
        bail!("--job-prefix must be specified for pipeline step commands");
    }
    if settings.account.as_deref().unwrap_or_default().is_empty() {
        bail!("--account must be specified for pipeline step commands");
    }
    Ok(())
}
