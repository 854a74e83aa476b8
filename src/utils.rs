pub mod error;
pub mod sample_sheet;
pub mod setup_store;
