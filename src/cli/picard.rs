use clap::Args;

#[derive(Args, Clone, Debug, Default)]
pub struct ConvertSettings {
    /// Input alignment file in SAM format
    #[arg(long = "sam", value_name = "FILE")]
    pub sam_file: String,

    /// Output alignment file in BAM format
    #[arg(long = "bam", value_name = "FILE")]
    pub bam_file: String,

    /// Directory holding the Picard jar files
    #[arg(long, value_name = "DIR")]
    pub picard_tools: String,

    /// Scheduler log file
    #[arg(long = "log", value_name = "FILE")]
    pub log_file: String,
}

#[derive(Args, Clone, Debug, Default)]
pub struct ReadGroupSortSettings {
    /// Input alignment file in BAM format
    #[arg(long = "bam", value_name = "FILE")]
    pub bam_file: String,

    /// Coordinate sorted output with read group assigned
    #[arg(long = "sorted-bam", value_name = "FILE")]
    pub bam_file_sorted: String,

    /// Directory holding the Picard jar files
    #[arg(long, value_name = "DIR")]
    pub picard_tools: String,

    /// Read group library (RGLB)
    #[arg(long)]
    pub library: String,

    /// Read group platform unit (RGPU), usually the sample barcode index
    #[arg(long)]
    pub index: String,

    /// Read group sample name (RGSM)
    #[arg(long)]
    pub sample_name: String,

    /// Scheduler log file
    #[arg(long = "log", value_name = "FILE")]
    pub log_file: String,

    /// Read group id (RGID)
    #[arg(long)]
    pub id: u32,
}

#[derive(Args, Clone, Debug, Default)]
pub struct MarkDuplicatesSettings {
    /// Coordinate sorted input in BAM format
    #[arg(long = "sorted-bam", value_name = "FILE")]
    pub bam_file_sorted: String,

    /// Output with duplicates marked
    #[arg(long = "dedup-bam", value_name = "FILE")]
    pub bam_file_sorted_duplicates: String,

    /// Duplication metrics output file
    #[arg(long = "metrics", value_name = "FILE")]
    pub duplicate_metrics: String,

    /// Directory holding the Picard jar files
    #[arg(long, value_name = "DIR")]
    pub picard_tools: String,

    /// Scheduler log file
    #[arg(long = "log", value_name = "FILE")]
    pub log_file: String,
}

#[derive(Args, Clone, Debug, Default)]
pub struct BuildIndexSettings {
    /// Duplicate marked BAM file to index
    #[arg(long = "bam", value_name = "FILE")]
    pub bam_file_sorted_duplicates: String,

    /// Directory holding the Picard jar files
    #[arg(long, value_name = "DIR")]
    pub picard_tools: String,

    /// Scheduler log file
    #[arg(long = "log", value_name = "FILE")]
    pub log_file: String,
}
