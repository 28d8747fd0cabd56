use clap::Args;

#[derive(Args, Clone, Debug, Default)]
pub struct BwaAlnSettings {
    /// Reads to align, in FASTQ format
    #[arg(long, value_name = "FILE")]
    pub read: String,

    /// Suffix array coordinate output file
    #[arg(long, value_name = "FILE")]
    pub sai: String,

    /// Prefix of the BWA genome index
    #[arg(long, value_name = "PREFIX")]
    pub index: String,

    /// Path to the bwa binary
    #[arg(long, default_value = "bwa")]
    pub bwa: String,

    /// Scheduler log file
    #[arg(long = "log", value_name = "FILE")]
    pub log_file: String,
}

#[derive(Args, Clone, Debug, Default)]
pub struct BwaSampeSettings {
    /// First reads of each pair, in FASTQ format
    #[arg(long, value_name = "FILE")]
    pub read1: String,

    /// Second reads of each pair, in FASTQ format
    #[arg(long, value_name = "FILE")]
    pub read2: String,

    /// bwa aln output for the first reads
    #[arg(long, value_name = "FILE")]
    pub sai1: String,

    /// bwa aln output for the second reads
    #[arg(long, value_name = "FILE")]
    pub sai2: String,

    /// Paired alignment output, in SAM format
    #[arg(long = "sam", value_name = "FILE")]
    pub sam_file: String,

    /// Prefix of the BWA genome index
    #[arg(long, value_name = "PREFIX")]
    pub index: String,

    /// Path to the bwa binary
    #[arg(long, default_value = "bwa")]
    pub bwa: String,

    /// Scheduler log file
    #[arg(long = "log", value_name = "FILE")]
    pub log_file: String,
}
