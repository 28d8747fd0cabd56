//! Tool identifiers and the pipeline steps which map onto them
//!

use std::fmt;

use serde::{Deserialize, Serialize};
pub use strum::{EnumCount, IntoEnumIterator};

/// Resource class of a pipeline step
///
/// Each class carries one entry in the resource table, several steps may share a class.
///
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    strum::Display,
    strum::EnumCount,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Tool {
    Align,
    Index,
    Dedupe,
    Sort,
    Recalibrate,
    Realign,
    CallVariants,
    Coverage,
}

/// External program family invoked by a step
#[derive(Clone, Copy, Debug, Eq, PartialEq, strum::Display)]
pub enum ExternalTool {
    #[strum(serialize = "BWA")]
    Bwa,
    Samtools,
    Picard,
    #[strum(serialize = "GATK")]
    Gatk,
}

/// One builder operation of the pipeline
///
/// The snake_case name doubles as the suffix of the scheduler job name.
///
#[derive(
    Clone,
    Copy,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    strum::Display,
    strum::EnumCount,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PipelineStep {
    BwaAln,
    BwaSampe,
    SamtoolsIndex,
    Convert,
    RgAndSorting,
    MarkDuplicates,
    BuildIndex,
    Call,
    Coverage,
    RecalibrateBam,
    TableCalibration,
    Realign,
    PrepareRealign,
}

impl fmt::Debug for PipelineStep {
    // Set Debug trait to copy Display
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl PipelineStep {
    pub fn tool(&self) -> Tool {
        use PipelineStep::*;
        match self {
            BwaAln | BwaSampe => Tool::Align,
            SamtoolsIndex | BuildIndex => Tool::Index,
            Convert | RgAndSorting => Tool::Sort,
            MarkDuplicates => Tool::Dedupe,
            Call => Tool::CallVariants,
            Coverage => Tool::Coverage,
            RecalibrateBam | TableCalibration => Tool::Recalibrate,
            Realign | PrepareRealign => Tool::Realign,
        }
    }

    pub fn external_tool(&self) -> ExternalTool {
        use PipelineStep::*;
        match self {
            BwaAln | BwaSampe => ExternalTool::Bwa,
            SamtoolsIndex => ExternalTool::Samtools,
            Convert | RgAndSorting | MarkDuplicates | BuildIndex => ExternalTool::Picard,
            Call | Coverage | RecalibrateBam | TableCalibration | Realign | PrepareRealign => {
                ExternalTool::Gatk
            }
        }
    }
}
