//! BWA (aln/sampe) job builders
//!

use log::debug;

use crate::cli::{BwaAlnSettings, BwaSampeSettings};
use crate::errors::CommandError;
use crate::job::{JobDescriptor, JobRequest, SubmitSettings};
use crate::resources::ResourceTable;
use crate::tool::PipelineStep;

/// Find suffix array coordinates for one read file
///
/// The aligner runs one thread per requested slot.
///
pub fn call_aln(
    settings: &BwaAlnSettings,
    submit: &SubmitSettings,
    table: &ResourceTable,
) -> Result<JobDescriptor, CommandError> {
    let request = JobRequest::new(PipelineStep::BwaAln, submit, &settings.bwa, &settings.log_file)
        .input("read", &settings.read)
        .output("sai", &settings.sai)
        .extra("genome index", &settings.index);
    request.validate()?;

    let resources = request.resources(table);
    let argv = vec![
        settings.bwa.clone(),
        "aln".to_string(),
        "-t".to_string(),
        resources.parallelism.to_string(),
        "-f".to_string(),
        settings.sai.clone(),
        settings.index.clone(),
        settings.read.clone(),
    ];
    debug!("Built bwa aln job: {}", request.job_name());
    Ok(request.into_descriptor(resources, argv))
}

/// Pair the aln results of both read ends into one SAM file
///
pub fn call_paired_end(
    settings: &BwaSampeSettings,
    submit: &SubmitSettings,
    table: &ResourceTable,
) -> Result<JobDescriptor, CommandError> {
    let request = JobRequest::new(
        PipelineStep::BwaSampe,
        submit,
        &settings.bwa,
        &settings.log_file,
    )
    .input("read1", &settings.read1)
    .input("read2", &settings.read2)
    .input("sai1", &settings.sai1)
    .input("sai2", &settings.sai2)
    .output("SAM", &settings.sam_file)
    .extra("genome index", &settings.index);
    request.validate()?;

    let resources = request.resources(table);
    let argv = vec![
        settings.bwa.clone(),
        "sampe".to_string(),
        "-f".to_string(),
        settings.sam_file.clone(),
        settings.index.clone(),
        settings.sai1.clone(),
        settings.sai2.clone(),
        settings.read1.clone(),
        settings.read2.clone(),
    ];
    debug!("Built bwa sampe job: {}", request.job_name());
    Ok(request.into_descriptor(resources, argv))
}
