use crate::argparse::{Action, Cli, Invocation, Request};
use crate::utils::{
    error::AppError,
    sample_sheet::{PoolRequest, SampleSheet},
    setup_store::{SetupRecord, SetupStore},
};

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// How a run ended; none of these is an error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Setup stored at the given path
    Initialised(PathBuf),
    /// Setup CSV written at the given path
    Written(PathBuf),
    /// Target CSV already existed and was left alone
    Skipped(PathBuf),
    /// Help text was printed
    Help,
}

/// Runs a parsed command line; a bare invocation prints the help text
pub fn execute(invocation: Invocation) -> Result<Outcome, AppError> {
    match invocation {
        Invocation::Help => {
            println!("{}", Cli::help_text());
            Ok(Outcome::Help)
        }
        Invocation::Run(cli) => dispatch(cli),
    }
}

/// Resolves the mode and runs the matching step
///
/// # Errors
/// Returns AppError for user input errors, a missing or broken setup, or I/O errors
pub fn dispatch(cli: Cli) -> Result<Outcome, AppError> {
    let request: Request = cli.into_request()?;
    let root = request.store_root.unwrap_or_else(SetupStore::default_root);
    log::debug!("setup store at {}", root.display());
    let store = SetupStore::open(root)?;

    match request.action {
        Action::Init(record) => init(&store, &request.codename, record),
        Action::Gen(pool) => generate(&store, &request.codename, pool),
    }
}

/// Stores the shared setup under a codename
///
/// # Arguments
/// - `store`: setup store receiving `<codename>.json`
/// - `record`: reference paths, BAM flag and output directory
///
/// # Errors
/// Returns AppError for an invalid codename or I/O errors
pub fn init(store: &SetupStore, codename: &str, record: SetupRecord) -> Result<Outcome, AppError> {
    fs::create_dir_all(&record.output_dir)?;

    let path = store.record_path(codename)?;
    let json = record.to_pretty_json().map_err(io::Error::from)?;
    println!("Creating a setup json file at {} with:\n{json}", path.display());

    let path = store.save(codename, &record)?;
    log::info!("setup `{codename}` stored at {}", path.display());
    println!(
        "Setup is done. You can safely proceed with step 2: GEN to generate de-multiplex setup files using data stored under setup code {codename}."
    );
    Ok(Outcome::Initialised(path))
}

/// Renders the setup CSV for one pool
///
/// # Arguments
/// - `store`: setup store holding `<codename>.json`
/// - `pool`: pool name, fastq path and samples
///
/// # Errors
/// Returns AppError when no setup is stored under the codename, it cannot be parsed,
/// or for I/O errors. An existing target file is reported as `Outcome::Skipped`.
pub fn generate(store: &SetupStore, codename: &str, pool: PoolRequest) -> Result<Outcome, AppError> {
    let setup = store.load(codename)?;
    let output_dir = Path::new(&setup.output_dir);
    fs::create_dir_all(output_dir)?;

    let pool_name = pool.pool_name.clone();
    let target = output_dir.join(SampleSheet::file_name(&pool_name));
    if target.exists() {
        return Ok(skip(&pool_name, output_dir, target));
    }

    let contents = SampleSheet::new(&setup, pool).to_string();
    let mut file = match fs::OpenOptions::new().write(true).create_new(true).open(&target) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
            return Ok(skip(&pool_name, output_dir, target));
        }
        Err(err) => return Err(err.into()),
    };
    file.write_all(contents.as_bytes())?;
    file.flush()?;

    log::info!("setup CSV written to {}", target.display());
    println!("Setup file for {pool_name} successfully created.");
    Ok(Outcome::Written(target))
}

fn skip(pool_name: &str, output_dir: &Path, target: PathBuf) -> Outcome {
    log::debug!("{} already exists, not overwriting", target.display());
    println!(
        "WARNING: Target file for {pool_name} exists in path {}!\nPlease (re-)move or rename the existing file; no files will be overwritten to avoid loss of information.",
        output_dir.display()
    );
    Outcome::Skipped(target)
}
