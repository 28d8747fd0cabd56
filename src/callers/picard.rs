//! Picard job builders
//!
//! Picard is distributed here as one jar per tool in a common directory, each tool taking its
//! arguments as KEY=VALUE pairs.
//!

use log::debug;

use super::java_jar_argv;
use crate::cli::{
    BuildIndexSettings, ConvertSettings, MarkDuplicatesSettings, ReadGroupSortSettings,
};
use crate::errors::CommandError;
use crate::job::{JobDescriptor, JobRequest, SubmitSettings};
use crate::resources::{ResourceProfile, ResourceTable};
use crate::tool::PipelineStep;

const VALIDATION_STRINGENCY: &str = "VALIDATION_STRINGENCY=LENIENT";

/// Platform recorded in each read group
const READ_GROUP_PLATFORM: &str = "illumina";

fn picard_jar(picard_tools: &str, tool_name: &str) -> String {
    format!("{picard_tools}/{tool_name}.jar")
}

fn picard_argv(
    resources: &ResourceProfile,
    picard_tools: &str,
    tool_name: &str,
    args: &[(&str, &str)],
) -> Vec<String> {
    let mut argv = java_jar_argv(resources, picard_jar(picard_tools, tool_name));
    argv.extend(args.iter().map(|(key, value)| format!("{key}={value}")));
    argv.push(VALIDATION_STRINGENCY.to_string());
    argv
}

fn finish(
    request: JobRequest,
    table: &ResourceTable,
    tool_name: &str,
    args: &[(&str, &str)],
) -> Result<JobDescriptor, CommandError> {
    request.validate()?;
    let resources = request.resources(table);
    let argv = picard_argv(&resources, &request.tool_path, tool_name, args);
    debug!("Built Picard {tool_name} job: {}", request.job_name());
    Ok(request.into_descriptor(resources, argv))
}

/// Convert a SAM file to BAM
///
pub fn convert(
    settings: &ConvertSettings,
    submit: &SubmitSettings,
    table: &ResourceTable,
) -> Result<JobDescriptor, CommandError> {
    let request = JobRequest::new(
        PipelineStep::Convert,
        submit,
        &settings.picard_tools,
        &settings.log_file,
    )
    .input("SAM", &settings.sam_file)
    .output("BAM", &settings.bam_file);

    finish(
        request,
        table,
        "SamFormatConverter",
        &[
            ("INPUT", settings.sam_file.as_str()),
            ("OUTPUT", settings.bam_file.as_str()),
        ],
    )
}

/// Assign a read group to every read and sort the output by coordinate
///
pub fn rg_and_sorting(
    settings: &ReadGroupSortSettings,
    submit: &SubmitSettings,
    table: &ResourceTable,
) -> Result<JobDescriptor, CommandError> {
    let request = JobRequest::new(
        PipelineStep::RgAndSorting,
        submit,
        &settings.picard_tools,
        &settings.log_file,
    )
    .input("BAM", &settings.bam_file)
    .output("sorted BAM", &settings.bam_file_sorted)
    .extra("library", &settings.library)
    .extra("index", &settings.index)
    .extra("sample name", &settings.sample_name);

    let id = settings.id.to_string();
    finish(
        request,
        table,
        "AddOrReplaceReadGroups",
        &[
            ("INPUT", settings.bam_file.as_str()),
            ("OUTPUT", settings.bam_file_sorted.as_str()),
            ("SORT_ORDER", "coordinate"),
            ("RGID", id.as_str()),
            ("RGLB", settings.library.as_str()),
            ("RGPL", READ_GROUP_PLATFORM),
            ("RGPU", settings.index.as_str()),
            ("RGSM", settings.sample_name.as_str()),
        ],
    )
}

pub fn mark_duplicates(
    settings: &MarkDuplicatesSettings,
    submit: &SubmitSettings,
    table: &ResourceTable,
) -> Result<JobDescriptor, CommandError> {
    let request = JobRequest::new(
        PipelineStep::MarkDuplicates,
        submit,
        &settings.picard_tools,
        &settings.log_file,
    )
    .input("sorted BAM", &settings.bam_file_sorted)
    .output("duplicate marked BAM", &settings.bam_file_sorted_duplicates)
    .output("duplicate metrics", &settings.duplicate_metrics);

    finish(
        request,
        table,
        "MarkDuplicates",
        &[
            ("INPUT", settings.bam_file_sorted.as_str()),
            ("OUTPUT", settings.bam_file_sorted_duplicates.as_str()),
            ("METRICS_FILE", settings.duplicate_metrics.as_str()),
            ("ASSUME_SORTED", "true"),
        ],
    )
}

pub fn build_index(
    settings: &BuildIndexSettings,
    submit: &SubmitSettings,
    table: &ResourceTable,
) -> Result<JobDescriptor, CommandError> {
    let request = JobRequest::new(
        PipelineStep::BuildIndex,
        submit,
        &settings.picard_tools,
        &settings.log_file,
    )
    .input("BAM", &settings.bam_file_sorted_duplicates);

    finish(
        request,
        table,
        "BuildBamIndex",
        &[("INPUT", settings.bam_file_sorted_duplicates.as_str())],
    )
}
