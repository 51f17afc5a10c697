pub mod cli;
pub mod provider;
pub mod report;
pub mod resolve;
