use crate::argparse::Mode;
use crate::utils::{error::AppError, sample_sheet::PoolRequest};
use clap::Args;

/// Generate demultiplex setup CSV files for your pools.
#[derive(Args, Debug, Default)]
#[command(next_help_heading = "Step 2: GEN")]
pub struct GenArgs {
    /// Sample/pool name as used as the `prefix` for the FastQ files of this pool
    #[arg(long = "sample_pool_name", visible_alias = "sample-pool-name", value_name = "NAME")]
    sample_pool_name: Option<String>,

    /// Absolute path to the FastQ files for this pool
    #[arg(long, value_name = "PATH")]
    fastq_path: Option<String>,

    /// ID of sample with probe barcode BC001
    #[arg(long = "sample-id-BC001", value_name = "ID")]
    sample_id_bc001: Option<String>,

    /// ID of sample with probe barcode BC002
    #[arg(long = "sample-id-BC002", value_name = "ID")]
    sample_id_bc002: Option<String>,

    /// ID of sample with probe barcode BC003
    #[arg(long = "sample-id-BC003", value_name = "ID")]
    sample_id_bc003: Option<String>,

    /// ID of sample with probe barcode BC004
    #[arg(long = "sample-id-BC004", value_name = "ID")]
    sample_id_bc004: Option<String>,
}

impl GenArgs {
    pub fn into_request(self) -> Result<PoolRequest, AppError> {
        let mode = Mode::Gen.name();
        let pool_name = self.sample_pool_name
            .ok_or(AppError::MissingArgument { mode, arg: "sample_pool_name" })?;
        let fastq_path = self.fastq_path
            .ok_or(AppError::MissingArgument { mode, arg: "fastq-path" })?;
        Ok(PoolRequest::with_fixed_barcodes(
            pool_name,
            fastq_path,
            [
                self.sample_id_bc001,
                self.sample_id_bc002,
                self.sample_id_bc003,
                self.sample_id_bc004,
            ],
        ))
    }
}
