use crate::argparse::Mode;
use crate::utils::{error::AppError, setup_store::SetupRecord};
use clap::Args;

/// Initialise a round of setup generation: store paths to genome libs etc. once
/// under a codename and load them by that codename for every setup file created.
#[derive(Args, Debug, Default)]
#[command(next_help_heading = "Step 1: INIT")]
pub struct InitArgs {
    /// Absolute path to your required human genome reference
    #[arg(long, value_name = "PATH")]
    ref_human_gex: Option<String>,

    /// Absolute path to your required human probe set transcriptome
    #[arg(long, value_name = "PATH")]
    probeset_human_transcriptome: Option<String>,

    /// Optional: write .BAM / .BAI files for deeper analysis
    #[arg(long)]
    write_bam_files: bool,

    /// Directory receiving the generated setup CSV files
    #[arg(long, value_name = "DIR")]
    output_dir: Option<String>,
}

fn required(value: Option<String>, arg: &'static str) -> Result<String, AppError> {
    value.ok_or(AppError::MissingArgument { mode: Mode::Init.name(), arg })
}

impl InitArgs {
    pub fn into_record(self) -> Result<SetupRecord, AppError> {
        Ok(SetupRecord {
            ref_human_gex: required(self.ref_human_gex, "ref-human-gex")?,
            probeset_human_transcriptome: required(
                self.probeset_human_transcriptome,
                "probeset-human-transcriptome",
            )?,
            write_bam: self.write_bam_files,
            output_dir: required(self.output_dir, "output-dir")?,
        })
    }
}
