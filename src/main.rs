use demux_setup::argparse::Cli;
use demux_setup::run;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let invocation = Cli::invocation_from(std::env::args_os()).unwrap_or_else(|err| err.exit());
    match run::execute(invocation) {
        Ok(outcome) => {
            log::debug!("finished with {outcome:?}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
