pub mod argparse;
pub mod run;
pub mod utils;
