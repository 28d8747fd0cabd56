mod callers;
mod cli;
mod errors;
mod globals;
mod job;
mod logger;
mod resources;
mod scheduler;
mod tool;

use std::{error, process};

use hhmmss::Hhmmss;
use log::info;
use simple_error::{SimpleError, SimpleResult, bail};

use crate::callers::{bwa, gatk, picard, samtools};
use crate::cli::{Commands, InspectSettings};
use crate::errors::CommandError;
use crate::globals::{PROGRAM_NAME, PROGRAM_VERSION};
use crate::job::{JobDescriptor, SubmitSettings};
use crate::logger::setup_logger;
use crate::resources::ResourceTable;
use crate::scheduler::{parse_directives, render_qsub};

/// Build the job descriptor for a pipeline step command
///
/// Returns None for commands which `Commands::pipeline_step` does not classify as a pipeline step
///
fn build_step_job(
    command: &Commands,
    submit: &SubmitSettings,
    table: &ResourceTable,
) -> Option<Result<JobDescriptor, CommandError>> {
    command.pipeline_step()?;
    let job = match command {
        Commands::BwaAln(x) => bwa::call_aln(x, submit, table),
        Commands::BwaSampe(x) => bwa::call_paired_end(x, submit, table),
        Commands::SamtoolsIndex(x) => samtools::index(x, submit, table),
        Commands::Convert(x) => picard::convert(x, submit, table),
        Commands::RgAndSorting(x) => picard::rg_and_sorting(x, submit, table),
        Commands::MarkDuplicates(x) => picard::mark_duplicates(x, submit, table),
        Commands::BuildIndex(x) => picard::build_index(x, submit, table),
        Commands::Call(x) => gatk::call(x, submit, table),
        Commands::Coverage(x) => gatk::coverage(x, submit, table),
        Commands::RecalibrateBam(x) => gatk::recalibrate_bam(x, submit, table),
        Commands::TableCalibration(x) => gatk::table_calibration(x, submit, table),
        Commands::Realign(x) => gatk::realign(x, submit, table),
        Commands::PrepareRealign(x) => gatk::prepare_realign(x, submit, table),
        _ => return None,
    };
    Some(job)
}

fn run_inspect(settings: &InspectSettings) -> SimpleResult<()> {
    let summary = parse_directives(&settings.command_text)?;
    let Some(effective_memory) = summary.effective_memory_gb()? else {
        bail!("No h_vmem memory directive found in command text");
    };
    println!(
        "parallelism: {}",
        summary
            .parallelism
            .map_or("not set".to_string(), |x| x.to_string())
    );
    println!("memory_gb: {}", summary.memory_gb.unwrap_or_default());
    println!("effective_memory_gb: {effective_memory}");
    Ok(())
}

fn run(settings: &cli::Settings, table: &ResourceTable) -> Result<(), Box<dyn error::Error>> {
    info!("Starting {PROGRAM_NAME} {PROGRAM_VERSION}");
    info!(
        "cmdline: {}",
        std::env::args().collect::<Vec<_>>().join(" ")
    );

    let start = std::time::Instant::now();

    match &settings.command {
        Commands::Hi => {
            println!("{}", callers::hi());
        }
        Commands::Resources => {
            println!("{}", table.to_json()?);
        }
        Commands::Inspect(x) => {
            run_inspect(x)?;
        }
        command => {
            if let Some(job) = build_step_job(command, &settings.shared.submit_settings(), table) {
                let job = job?;
                info!(
                    "Built {} {} job '{}' requesting {} slots x {}G",
                    job.step.external_tool(),
                    job.step,
                    job.job_name,
                    job.resources.parallelism,
                    job.resources.memory_gb
                );
                if settings.shared.json {
                    println!("{}", serde_json::to_string_pretty(&job)?);
                } else {
                    println!("{}", render_qsub(&job));
                }
            }
        }
    }

    info!(
        "{PROGRAM_NAME} completed. Total Runtime: {}",
        start.elapsed().hhmmssxxx()
    );
    Ok(())
}

/// Process exit code for an error returned from `run`
///
/// Only `inspect` reports a `SimpleError`, for command text it cannot read resources from.
///
fn exit_code(err: &(dyn error::Error + 'static)) -> i32 {
    if err.is::<CommandError>() {
        exitcode::USAGE
    } else if err.is::<SimpleError>() {
        exitcode::DATAERR
    } else {
        exitcode::SOFTWARE
    }
}

fn main() {
    let settings = cli::validate_and_fix_settings(cli::parse_settings());

    if let Err(err) = setup_logger(settings.shared.debug) {
        eprintln!("Unable to start logger: {err}");
        process::exit(exitcode::SOFTWARE);
    }

    let table = match &settings.shared.resource_config_filename {
        Some(filename) => match ResourceTable::from_json_file(filename) {
            Ok(x) => x,
            Err(msg) => {
                eprintln!("Invalid resource configuration: {msg}");
                process::exit(exitcode::CONFIG);
            }
        },
        None => ResourceTable::default(),
    };

    if let Err(err) = run(&settings, &table) {
        eprintln!("{err}");
        process::exit(exit_code(err.as_ref()));
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::resources::MIN_EFFECTIVE_MEMORY_GB;
    use crate::tool::{EnumCount, PipelineStep};

    fn parse(args: &[&str]) -> cli::Settings {
        cli::validate_and_fix_settings_impl(cli::Settings::try_parse_from(args).unwrap()).unwrap()
    }

    /// Arguments for one invocation of every pipeline step subcommand
    fn get_step_command_args() -> Vec<Vec<&'static str>> {
        vec![
            vec!["bwa-aln", "--read", "r1", "--sai", "sai1", "--index", "index", "--log", "log"],
            vec![
                "bwa-sampe", "--read1", "r1", "--read2", "r2", "--sai1", "sai1", "--sai2", "sai2",
                "--sam", "out_file", "--index", "index", "--log", "log",
            ],
            vec!["samtools-index", "--bam", "x.bam", "--log", "log"],
            vec![
                "convert", "--sam", "sam_file", "--bam", "bam_file", "--picard-tools", "picard",
                "--log", "log",
            ],
            vec![
                "rg-and-sorting", "--bam", "bam_file", "--sorted-bam", "bam_file",
                "--picard-tools", "picard", "--library", "library", "--index", "index",
                "--sample-name", "sample_name", "--log", "log", "--id", "1",
            ],
            vec![
                "mark-duplicates", "--sorted-bam", "bam_sorted", "--dedup-bam", "bam_dup",
                "--metrics", "dup_met", "--picard-tools", "picard", "--log", "log",
            ],
            vec!["build-index", "--bam", "x.bam", "--picard-tools", "picard", "--log", "log"],
            vec![
                "call", "--log-dir", "log_dir", "--gatk", "gatk", "--ref", "index_fa", "--bam",
                "read_bam", "--vcf", "read_vcf", "--dbsnp", "dbsnp_file",
            ],
            vec![
                "coverage", "--log-dir", "log_dir", "--gatk", "gatk", "--ref", "index_fa",
                "--bam", "read_bam", "--output-prefix", "outfile_prefix",
            ],
            vec![
                "recalibrate-bam", "--log-dir", "log_dir", "--gatk", "gatk", "--ref", "index_fa",
                "--bam", "read_bam", "--recal-table", "recal_file", "--dbsnp", "dbsnp_file",
            ],
            vec![
                "table-calibration", "--log-dir", "log_dir", "--gatk", "gatk", "--ref",
                "index_fa", "--bam", "read_bam", "--recal-bam", "recal_bam", "--recal-table",
                "recal_file",
            ],
            vec![
                "realign", "--log-dir", "log_dir", "--gatk", "gatk", "--bam", "read_bam",
                "--ref", "index_fa", "--target-intervals", "target_int", "--realigned-bam",
                "realigned_bam", "--hold", "star",
            ],
            vec![
                "prepare-realign", "--log-dir", "log_dir", "--gatk", "gatk", "--bam",
                "read_bam", "--ref", "index_fa", "--target-intervals", "target_int",
                "--dbsnp", "dbsnp", "--hold", "star",
            ],
        ]
    }

    /// Parse the step subcommands with the shared submission options
    fn get_step_settings() -> Vec<cli::Settings> {
        get_step_command_args()
            .iter()
            .map(|args| {
                let mut full_args = vec!["mutcaller", "--job-prefix", "12345", "--account", "kim"];
                full_args.extend(args.iter().copied());
                parse(&full_args)
            })
            .collect()
    }

    #[test]
    fn test_non_step_commands() {
        let table = ResourceTable::default();
        for args in [
            vec!["mutcaller", "hi"],
            vec!["mutcaller", "resources"],
            vec!["mutcaller", "inspect", "qsub -l h_vmem=14G"],
        ] {
            let settings = parse(&args);
            let job = build_step_job(&settings.command, &settings.shared.submit_settings(), &table);
            assert!(job.is_none());
        }
    }

    #[test]
    fn test_every_step_command_builds_its_step() {
        let table = ResourceTable::default();
        let all_settings = get_step_settings();
        assert_eq!(all_settings.len(), PipelineStep::COUNT);
        for settings in all_settings.iter() {
            let job = build_step_job(&settings.command, &settings.shared.submit_settings(), &table)
                .unwrap()
                .unwrap();
            assert_eq!(settings.command.pipeline_step(), Some(job.step));
        }
    }

    #[test]
    fn test_every_step_command_meets_memory_minimum() {
        let table = ResourceTable::default();
        for settings in get_step_settings().iter() {
            let job = build_step_job(&settings.command, &settings.shared.submit_settings(), &table)
                .unwrap()
                .unwrap();
            let cmd = render_qsub(&job);
            let mem = parse_directives(&cmd)
                .unwrap()
                .effective_memory_gb()
                .unwrap()
                .unwrap();
            assert!(mem >= MIN_EFFECTIVE_MEMORY_GB, "{cmd}");
            assert!(cmd.contains(" -A kim "));
            assert!(job.job_name.starts_with("12345_"));
        }
    }

    #[test]
    fn test_every_step_command_is_idempotent() {
        let table = ResourceTable::default();
        for settings in get_step_settings().iter() {
            let submit = settings.shared.submit_settings();
            let job1 = build_step_job(&settings.command, &submit, &table).unwrap().unwrap();
            let job2 = build_step_job(&settings.command, &submit, &table).unwrap().unwrap();
            assert_eq!(job1, job2);
            assert_eq!(render_qsub(&job1), render_qsub(&job2));
        }
    }

    #[test]
    fn test_json_descriptor() {
        let settings = parse(&[
            "mutcaller",
            "--job-prefix",
            "12345",
            "--account",
            "kim",
            "convert",
            "--sam",
            "sam_file",
            "--bam",
            "bam_file",
            "--picard-tools",
            "picard",
            "--log",
            "log_file",
        ]);
        let job = build_step_job(
            &settings.command,
            &settings.shared.submit_settings(),
            &ResourceTable::default(),
        )
        .unwrap()
        .unwrap();

        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["step"], "convert");
        assert_eq!(value["tool"], "sort");
        assert_eq!(value["job_name"], "12345_convert");
        assert_eq!(value["resources"]["memory_gb"], 7);
        assert_eq!(value["resources"]["parallelism"], 2);
        assert_eq!(value["hold_pattern"], serde_json::Value::Null);
        assert_eq!(value["inputs"][0]["label"], "SAM");
        assert_eq!(value["inputs"][0]["value"], "sam_file");
        assert_eq!(
            value["argv"],
            serde_json::json!([
                "java",
                "-Xmx10g",
                "-jar",
                "picard/SamFormatConverter.jar",
                "INPUT=sam_file",
                "OUTPUT=bam_file",
                "VALIDATION_STRINGENCY=LENIENT"
            ])
        );
    }

    #[test]
    fn test_run_inspect() {
        let inspect = |text: &str| {
            run_inspect(&InspectSettings {
                command_text: text.to_string(),
            })
        };
        assert!(inspect("qsub -pe DJ 2 -l h_vmem=7G -N 12345_convert").is_ok());
        assert!(inspect("qsub -l h_vmem=14G").is_ok());

        // No memory directive
        assert!(inspect("qsub -pe DJ 2 -N 12345_convert").is_err());
        assert!(inspect("qsub -pe DJ 99999999999 -l h_vmem=1G").is_err());
        assert!(inspect("qsub -pe DJ 70000 -l h_vmem=70000G").is_err());
    }

    #[test]
    fn test_exit_code() {
        let err: Box<dyn error::Error> = Box::new(CommandError::InvalidRequest {
            step: PipelineStep::Convert,
            field: "SAM",
        });
        assert_eq!(exit_code(err.as_ref()), exitcode::USAGE);

        let err = run_inspect(&InspectSettings {
            command_text: "echo hello".to_string(),
        })
        .unwrap_err();
        let err: Box<dyn error::Error> = Box::new(err);
        assert_eq!(exit_code(err.as_ref()), exitcode::DATAERR);

        let err: Box<dyn error::Error> =
            Box::new(serde_json::from_str::<u32>("not json").unwrap_err());
        assert_eq!(exit_code(err.as_ref()), exitcode::SOFTWARE);
    }
}
