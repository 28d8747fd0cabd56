use log::debug;

use crate::cli::SamtoolsIndexSettings;
use crate::errors::CommandError;
use crate::job::{JobDescriptor, JobRequest, SubmitSettings};
use crate::resources::ResourceTable;
use crate::tool::PipelineStep;

/// Index a coordinate sorted BAM file
///
pub fn index(
    settings: &SamtoolsIndexSettings,
    submit: &SubmitSettings,
    table: &ResourceTable,
) -> Result<JobDescriptor, CommandError> {
    let request = JobRequest::new(
        PipelineStep::SamtoolsIndex,
        submit,
        &settings.samtools,
        &settings.log_file,
    )
    .input("BAM", &settings.bam_file);
    request.validate()?;

    let resources = request.resources(table);
    let argv = vec![
        settings.samtools.clone(),
        "index".to_string(),
        settings.bam_file.clone(),
    ];
    debug!("Built samtools index job: {}", request.job_name());
    Ok(request.into_descriptor(resources, argv))
}
