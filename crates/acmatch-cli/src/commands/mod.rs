pub mod compile;
pub mod dump;
pub mod find;
pub mod input;
pub mod trace;


pub use input::CliError;
