pub mod calculation;
pub mod file_formats;
pub mod inputs;
pub mod results;
pub mod units;
