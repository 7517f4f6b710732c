pub mod batch;
pub mod cli;
pub mod crypto;
pub mod errors;
pub mod files;
pub mod scan;
