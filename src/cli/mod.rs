mod bwa;
mod gatk;
mod picard;
mod samtools;
mod shared;

use chrono::Datelike;
use clap::{Args, Parser, Subcommand};
use simple_error::SimpleResult;

use crate::tool::PipelineStep;

pub use self::bwa::{BwaAlnSettings, BwaSampeSettings};
pub use self::gatk::{
    CallSettings, CoverageSettings, PrepareRealignSettings, RealignSettings,
    RecalibrateBamSettings, TableCalibrationSettings,
};
pub use self::picard::{
    BuildIndexSettings, ConvertSettings, MarkDuplicatesSettings, ReadGroupSortSettings,
};
pub use self::samtools::SamtoolsIndexSettings;
use self::shared::{check_submit_settings, validate_and_fix_shared_settings};
pub use self::shared::SharedSettings;

#[derive(Args)]
pub struct InspectSettings {
    /// Rendered qsub command text to inspect
    #[arg(value_name = "COMMAND")]
    pub command_text: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a greeting and exit
    Hi,

    /// Align one read file against the genome index with bwa aln
    BwaAln(BwaAlnSettings),

    /// Pair two bwa aln results into a SAM file with bwa sampe
    BwaSampe(BwaSampeSettings),

    /// Index a sorted BAM file with samtools
    SamtoolsIndex(SamtoolsIndexSettings),

    /// Convert SAM to BAM with Picard
    Convert(ConvertSettings),

    /// Add read group information and coordinate sort with Picard
    RgAndSorting(ReadGroupSortSettings),

    /// Mark duplicate reads with Picard
    MarkDuplicates(MarkDuplicatesSettings),

    /// Index a BAM file with Picard
    BuildIndex(BuildIndexSettings),

    /// Call SNVs and indels with the GATK UnifiedGenotyper
    Call(CallSettings),

    /// Report read depth with GATK DepthOfCoverage
    Coverage(CoverageSettings),

    /// Build a base quality recalibration table with GATK
    RecalibrateBam(RecalibrateBamSettings),

    /// Apply a base quality recalibration table with GATK
    TableCalibration(TableCalibrationSettings),

    /// Realign reads around indels with GATK
    Realign(RealignSettings),

    /// Find intervals needing indel realignment with GATK
    PrepareRealign(PrepareRealignSettings),

    /// Print the resource table in effect as JSON
    Resources,

    /// Report the resource request embedded in a rendered qsub command
    Inspect(InspectSettings),
}

impl Commands {
    /// Pipeline step built by this command, None for the utility commands
    pub fn pipeline_step(&self) -> Option<PipelineStep> {
        let step = match self {
            Self::BwaAln(_) => PipelineStep::BwaAln,
            Self::BwaSampe(_) => PipelineStep::BwaSampe,
            Self::SamtoolsIndex(_) => PipelineStep::SamtoolsIndex,
            Self::Convert(_) => PipelineStep::Convert,
            Self::RgAndSorting(_) => PipelineStep::RgAndSorting,
            Self::MarkDuplicates(_) => PipelineStep::MarkDuplicates,
            Self::BuildIndex(_) => PipelineStep::BuildIndex,
            Self::Call(_) => PipelineStep::Call,
            Self::Coverage(_) => PipelineStep::Coverage,
            Self::RecalibrateBam(_) => PipelineStep::RecalibrateBam,
            Self::TableCalibration(_) => PipelineStep::TableCalibration,
            Self::Realign(_) => PipelineStep::Realign,
            Self::PrepareRealign(_) => PipelineStep::PrepareRealign,
            Self::Hi | Self::Resources | Self::Inspect(_) => return None,
        };
        Some(step)
    }
}

#[derive(Parser)]
#[command(
    author,
    version,
    about,
    after_help = format!("Copyright (C) 2011-{}     Mutcaller Developers
This program comes with ABSOLUTELY NO WARRANTY. It only prints scheduler
commands, it does not submit or run them.", chrono::Utc::now().year()),
    help_template = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}"
)]
#[clap(propagate_version = true, rename_all = "kebab_case")]
pub struct Settings {
    #[command(flatten)]
    pub shared: SharedSettings,

    #[command(subcommand)]
    pub command: Commands,
}

/// Validate settings and update parameters that can't be processed by clap
///
pub fn validate_and_fix_settings_impl(mut settings: Settings) -> SimpleResult<Settings> {
    settings.shared = validate_and_fix_shared_settings(settings.shared)?;

    if settings.command.pipeline_step().is_some() {
        check_submit_settings(&settings.shared)?;
    }

    Ok(settings)
}

/// Validate settings and update to parameters that can't be processed automatically by clap.
///
pub fn validate_and_fix_settings(settings: Settings) -> Settings {
    match validate_and_fix_settings_impl(settings) {
        Ok(x) => x,
        Err(msg) => {
            eprintln!("Invalid command-line setting: {}", msg);
            std::process::exit(exitcode::USAGE);
        }
    }
}

pub fn parse_settings() -> Settings {
    Settings::parse()
}
