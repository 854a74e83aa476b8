pub mod init;
pub mod generate;

use crate::utils::{
    error::AppError,
    sample_sheet::PoolRequest,
    setup_store::{validate_codename, SetupRecord},
};
use std::ffi::OsString;
use std::path::PathBuf;
use clap::{CommandFactory, Parser};
use self::{generate::GenArgs, init::InitArgs};

/// Command line arguments resolve the main structure
///
/// Use the clap-derived macro to implement command line parameter parsing
#[derive(Parser, Debug)]
#[command(name = "demux-setup")]
#[command(version)]
#[command(about = "CellRanger De-Multiplex Setup Generator", long_about =
    "Generate demultiplex setup files for CellRanger per pool; currently only human reference supported.\n\
    \tStep 1 (optional): -INIT -> store your library paths and output path under a convenient codename.\n\
    \tStep 2 (real deal): -GEN -> generate a new demultiplex setup CSV file per pool."
)]
#[command(next_line_help = true)]
pub struct Cli {
    /// Name under which the setup is stored; only letters, digits, '-' or '_', no file suffix
    #[arg(long, required = true, value_parser = validate_codename)]
    setup_codename: String,

    /// Set the mode to INIT -> store common information (e.g. transcriptome paths) under the codename
    #[arg(long = "INIT")]
    init_mode: bool,

    /// Set the mode to GEN -> create a new setup file for a specific sample pool
    #[arg(long = "GEN")]
    gen_mode: bool,

    /// Directory holding stored setups [default: <executable dir>/init_files]
    #[arg(long, value_name = "DIR")]
    init_dir: Option<PathBuf>,

    #[command(flatten)]
    init: InitArgs,

    #[command(flatten)]
    generate: GenArgs,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Init,
    Gen,
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Init => "INIT",
            Mode::Gen => "GEN",
        }
    }
}

/// What a successful parse asks the tool to do
#[derive(Debug)]
pub enum Invocation {
    Help,
    Run(Cli),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Init(SetupRecord),
    Gen(PoolRequest),
}

/// Fully validated request for one run
#[derive(Debug, Clone)]
pub struct Request {
    pub codename: String,
    pub store_root: Option<PathBuf>,
    pub action: Action,
}

/// Rewrites the single-dash mode flags into their long form
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(|arg| {
            let arg: OsString = arg.into();
            match arg.to_str() {
                Some("-INIT") => OsString::from("--INIT"),
                Some("-GEN") => OsString::from("--GEN"),
                _ => arg,
            }
        })
        .collect()
}

impl Cli {
    /// Parses argv; a bare invocation without any argument asks for help
    pub fn invocation_from<I, T>(args: I) -> Result<Invocation, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args = normalize_args(args);
        if args.len() <= 1 {
            return Ok(Invocation::Help);
        }
        Cli::try_parse_from(args).map(Invocation::Run)
    }

    pub fn help_text() -> String {
        Cli::command().render_help().to_string()
    }

    /// Exactly one of INIT and GEN must be selected
    pub fn mode(&self) -> Result<Mode, AppError> {
        match (self.init_mode, self.gen_mode) {
            (true, false) => Ok(Mode::Init),
            (false, true) => Ok(Mode::Gen),
            (false, false) => Err(AppError::NoModeSelected),
            (true, true) => Err(AppError::ConflictingModes),
        }
    }

    pub fn into_request(self) -> Result<Request, AppError> {
        let action = match self.mode()? {
            Mode::Init => Action::Init(self.init.into_record()?),
            Mode::Gen => Action::Gen(self.generate.into_request()?),
        };
        Ok(Request {
            codename: self.setup_codename,
            store_root: self.init_dir,
            action,
        })
    }
}
