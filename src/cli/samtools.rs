use clap::Args;

#[derive(Args, Clone, Debug, Default)]
pub struct SamtoolsIndexSettings {
    /// Coordinate sorted alignment file to index
    #[arg(long = "bam", value_name = "FILE")]
    pub bam_file: String,

    /// Path to the samtools binary
    #[arg(long, default_value = "samtools")]
    pub samtools: String,

    /// Scheduler log file
    #[arg(long = "log", value_name = "FILE")]
    pub log_file: String,
}
