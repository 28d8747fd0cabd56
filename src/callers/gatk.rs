//! GATK (3.x, single jar) job builders
//!

use log::debug;

use super::java_jar_argv;
use crate::cli::{
    CallSettings, CoverageSettings, PrepareRealignSettings, RealignSettings,
    RecalibrateBamSettings, TableCalibrationSettings,
};
use crate::errors::CommandError;
use crate::job::{JobDescriptor, JobRequest, SubmitSettings};
use crate::resources::{ResourceProfile, ResourceTable};
use crate::tool::PipelineStep;

/// Thread options understood by a GATK walker
enum WalkerThreads {
    Single,

    /// Data threads (-nt)
    Data,

    /// CPU threads per data thread (-nct)
    Cpu,
}

/// Build the argv for a walker run: `java -Xmx.. -jar <gatk> -T <walker> <args> [threads]`
///
fn gatk_argv(
    resources: &ResourceProfile,
    gatk: &str,
    walker: &str,
    args: &[&str],
    threads: WalkerThreads,
) -> Vec<String> {
    let mut argv = java_jar_argv(resources, gatk.to_string());
    argv.push("-T".to_string());
    argv.push(walker.to_string());
    argv.extend(args.iter().map(|x| x.to_string()));
    let thread_option = match threads {
        WalkerThreads::Single => None,
        WalkerThreads::Data => Some("-nt"),
        WalkerThreads::Cpu => Some("-nct"),
    };
    if let Some(option) = thread_option {
        argv.push(option.to_string());
        argv.push(resources.parallelism.to_string());
    }
    argv
}

fn finish(
    request: JobRequest,
    table: &ResourceTable,
    walker: &str,
    args: &[&str],
    threads: WalkerThreads,
) -> Result<JobDescriptor, CommandError> {
    request.validate()?;
    let resources = request.resources(table);
    let argv = gatk_argv(&resources, &request.tool_path, walker, args, threads);
    debug!("Built GATK {walker} job: {}", request.job_name());
    Ok(request.into_descriptor(resources, argv))
}

/// Call SNVs and indels against known sites
///
pub fn call(
    settings: &CallSettings,
    submit: &SubmitSettings,
    table: &ResourceTable,
) -> Result<JobDescriptor, CommandError> {
    let request = JobRequest::new(PipelineStep::Call, submit, &settings.gatk, &settings.log_dir)
        .input("BAM", &settings.read_bam)
        .output("VCF", &settings.read_vcf)
        .extra("reference", &settings.index_fa)
        .extra("known sites", &settings.dbsnp_file);

    finish(
        request,
        table,
        "UnifiedGenotyper",
        &[
            "-R",
            settings.index_fa.as_str(),
            "-I",
            settings.read_bam.as_str(),
            "-o",
            settings.read_vcf.as_str(),
            "--dbsnp",
            settings.dbsnp_file.as_str(),
            "-glm",
            "BOTH",
        ],
        WalkerThreads::Data,
    )
}

pub fn coverage(
    settings: &CoverageSettings,
    submit: &SubmitSettings,
    table: &ResourceTable,
) -> Result<JobDescriptor, CommandError> {
    let request = JobRequest::new(
        PipelineStep::Coverage,
        submit,
        &settings.gatk,
        &settings.log_dir,
    )
    .input("BAM", &settings.read_bam)
    .output("output prefix", &settings.outfile_prefix)
    .extra("reference", &settings.index_fa);

    finish(
        request,
        table,
        "DepthOfCoverage",
        &[
            "-R",
            settings.index_fa.as_str(),
            "-I",
            settings.read_bam.as_str(),
            "-o",
            settings.outfile_prefix.as_str(),
        ],
        WalkerThreads::Single,
    )
}

/// Model base quality errors over all non-variant sites
///
pub fn recalibrate_bam(
    settings: &RecalibrateBamSettings,
    submit: &SubmitSettings,
    table: &ResourceTable,
) -> Result<JobDescriptor, CommandError> {
    let request = JobRequest::new(
        PipelineStep::RecalibrateBam,
        submit,
        &settings.gatk,
        &settings.log_dir,
    )
    .input("BAM", &settings.read_bam)
    .output("recalibration table", &settings.recal_file)
    .extra("reference", &settings.index_fa)
    .extra("known sites", &settings.dbsnp_file);

    finish(
        request,
        table,
        "BaseRecalibrator",
        &[
            "-R",
            settings.index_fa.as_str(),
            "-I",
            settings.read_bam.as_str(),
            "-knownSites",
            settings.dbsnp_file.as_str(),
            "-o",
            settings.recal_file.as_str(),
        ],
        WalkerThreads::Cpu,
    )
}

/// Rewrite base qualities from a recalibration table
///
pub fn table_calibration(
    settings: &TableCalibrationSettings,
    submit: &SubmitSettings,
    table: &ResourceTable,
) -> Result<JobDescriptor, CommandError> {
    let request = JobRequest::new(
        PipelineStep::TableCalibration,
        submit,
        &settings.gatk,
        &settings.log_dir,
    )
    .input("BAM", &settings.read_bam)
    .input("recalibration table", &settings.recal_file)
    .output("recalibrated BAM", &settings.recal_bam)
    .extra("reference", &settings.index_fa);

    finish(
        request,
        table,
        "PrintReads",
        &[
            "-R",
            settings.index_fa.as_str(),
            "-I",
            settings.read_bam.as_str(),
            "-BQSR",
            settings.recal_file.as_str(),
            "-o",
            settings.recal_bam.as_str(),
        ],
        WalkerThreads::Cpu,
    )
}

/// Realign reads over the target intervals
///
/// The job is held until jobs matching the hold pattern have finished, normally the
/// prepare-realign job of the same run.
///
pub fn realign(
    settings: &RealignSettings,
    submit: &SubmitSettings,
    table: &ResourceTable,
) -> Result<JobDescriptor, CommandError> {
    let request = JobRequest::new(
        PipelineStep::Realign,
        submit,
        &settings.gatk,
        &settings.log_dir,
    )
    .input("BAM", &settings.read_bam)
    .input("target intervals", &settings.target_intervals)
    .output("realigned BAM", &settings.realigned_bam)
    .extra("reference", &settings.index_fa)
    .hold(&settings.hold_pattern);

    finish(
        request,
        table,
        "IndelRealigner",
        &[
            "-I",
            settings.read_bam.as_str(),
            "-R",
            settings.index_fa.as_str(),
            "-targetIntervals",
            settings.target_intervals.as_str(),
            "-o",
            settings.realigned_bam.as_str(),
        ],
        WalkerThreads::Single,
    )
}

pub fn prepare_realign(
    settings: &PrepareRealignSettings,
    submit: &SubmitSettings,
    table: &ResourceTable,
) -> Result<JobDescriptor, CommandError> {
    let request = JobRequest::new(
        PipelineStep::PrepareRealign,
        submit,
        &settings.gatk,
        &settings.log_dir,
    )
    .input("BAM", &settings.read_bam)
    .output("target intervals", &settings.target_intervals)
    .extra("reference", &settings.index_fa)
    .extra("known sites", &settings.dbsnp_file)
    .hold(&settings.hold_pattern);

    finish(
        request,
        table,
        "RealignerTargetCreator",
        &[
            "-I",
            settings.read_bam.as_str(),
            "-R",
            settings.index_fa.as_str(),
            "-known",
            settings.dbsnp_file.as_str(),
            "-o",
            settings.target_intervals.as_str(),
        ],
        WalkerThreads::Data,
    )
}
