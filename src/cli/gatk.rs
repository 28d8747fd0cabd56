use clap::Args;

#[derive(Args, Clone, Debug, Default)]
pub struct CallSettings {
    /// Directory receiving the scheduler log
    #[arg(long, value_name = "DIR")]
    pub log_dir: String,

    /// GenomeAnalysisTK jar file
    #[arg(long, value_name = "JAR")]
    pub gatk: String,

    /// Genome reference in FASTA format
    #[arg(long = "ref", value_name = "FILE")]
    pub index_fa: String,

    /// Input alignment file in BAM format
    #[arg(long = "bam", value_name = "FILE")]
    pub read_bam: String,

    /// Variant call output in VCF format
    #[arg(long = "vcf", value_name = "FILE")]
    pub read_vcf: String,

    /// Known variant sites (dbSNP) in VCF format
    #[arg(long = "dbsnp", value_name = "FILE")]
    pub dbsnp_file: String,
}

#[derive(Args, Clone, Debug, Default)]
pub struct CoverageSettings {
    /// Directory receiving the scheduler log
    #[arg(long, value_name = "DIR")]
    pub log_dir: String,

    /// GenomeAnalysisTK jar file
    #[arg(long, value_name = "JAR")]
    pub gatk: String,

    /// Genome reference in FASTA format
    #[arg(long = "ref", value_name = "FILE")]
    pub index_fa: String,

    /// Input alignment file in BAM format
    #[arg(long = "bam", value_name = "FILE")]
    pub read_bam: String,

    /// Prefix of the coverage report files
    #[arg(long = "output-prefix", value_name = "PREFIX")]
    pub outfile_prefix: String,
}

#[derive(Args, Clone, Debug, Default)]
pub struct RecalibrateBamSettings {
    /// Directory receiving the scheduler log
    #[arg(long, value_name = "DIR")]
    pub log_dir: String,

    /// GenomeAnalysisTK jar file
    #[arg(long, value_name = "JAR")]
    pub gatk: String,

    /// Genome reference in FASTA format
    #[arg(long = "ref", value_name = "FILE")]
    pub index_fa: String,

    /// Input alignment file in BAM format
    #[arg(long = "bam", value_name = "FILE")]
    pub read_bam: String,

    /// Recalibration table output
    #[arg(long = "recal-table", value_name = "FILE")]
    pub recal_file: String,

    /// Known variant sites (dbSNP) in VCF format
    #[arg(long = "dbsnp", value_name = "FILE")]
    pub dbsnp_file: String,
}

#[derive(Args, Clone, Debug, Default)]
pub struct TableCalibrationSettings {
    /// Directory receiving the scheduler log
    #[arg(long, value_name = "DIR")]
    pub log_dir: String,

    /// GenomeAnalysisTK jar file
    #[arg(long, value_name = "JAR")]
    pub gatk: String,

    /// Genome reference in FASTA format
    #[arg(long = "ref", value_name = "FILE")]
    pub index_fa: String,

    /// Input alignment file in BAM format
    #[arg(long = "bam", value_name = "FILE")]
    pub read_bam: String,

    /// Recalibrated alignment output in BAM format
    #[arg(long = "recal-bam", value_name = "FILE")]
    pub recal_bam: String,

    /// Recalibration table from the recalibrate-bam step
    #[arg(long = "recal-table", value_name = "FILE")]
    pub recal_file: String,
}

#[derive(Args, Clone, Debug, Default)]
pub struct RealignSettings {
    /// Directory receiving the scheduler log
    #[arg(long, value_name = "DIR")]
    pub log_dir: String,

    /// GenomeAnalysisTK jar file
    #[arg(long, value_name = "JAR")]
    pub gatk: String,

    /// Input alignment file in BAM format
    #[arg(long = "bam", value_name = "FILE")]
    pub read_bam: String,

    /// Genome reference in FASTA format
    #[arg(long = "ref", value_name = "FILE")]
    pub index_fa: String,

    /// Realignment target intervals from the prepare-realign step
    #[arg(long = "target-intervals", value_name = "FILE")]
    pub target_intervals: String,

    /// Realigned output in BAM format
    #[arg(long = "realigned-bam", value_name = "FILE")]
    pub realigned_bam: String,

    /// Job name pattern this job waits on before it is scheduled
    #[arg(long = "hold", value_name = "PATTERN")]
    pub hold_pattern: String,
}

#[derive(Args, Clone, Debug, Default)]
pub struct PrepareRealignSettings {
    /// Directory receiving the scheduler log
    #[arg(long, value_name = "DIR")]
    pub log_dir: String,

    /// GenomeAnalysisTK jar file
    #[arg(long, value_name = "JAR")]
    pub gatk: String,

    /// Input alignment file in BAM format
    #[arg(long = "bam", value_name = "FILE")]
    pub read_bam: String,

    /// Genome reference in FASTA format
    #[arg(long = "ref", value_name = "FILE")]
    pub index_fa: String,

    /// Realignment target intervals output
    #[arg(long = "target-intervals", value_name = "FILE")]
    pub target_intervals: String,

    /// Known variant sites (dbSNP) in VCF format
    #[arg(long = "dbsnp", value_name = "FILE")]
    pub dbsnp_file: String,

    /// Job name pattern this job waits on before it is scheduled
    #[arg(long = "hold", value_name = "PATTERN")]
    pub hold_pattern: String,
}
