use crate::cli::Args;

pub use crate::cli::Method;

/// Runtime configuration derived from CLI arguments
#[derive(Clone, Debug)]
pub struct Config {
    pub reverse: bool,
    pub numeric: bool,
    pub general_numeric: bool,
    pub fold_case: bool,
    pub unique: bool,
    pub debug: bool,
    pub method: Method,
    pub record_delimiter: u8,
    pub output_file: Option<String>,
    pub input_files: Vec<String>,
}

impl Config {
    /// Build configuration from parsed CLI arguments
    pub fn from_args(args: &Args) -> Self {
        Config {
            reverse: args.reverse,
            numeric: args.numeric,
            general_numeric: args.general_numeric,
            fold_case: args.fold_case,
            unique: args.unique,
            debug: args.debug,
            method: args.method,
            record_delimiter: args.record_delimiter(),
            output_file: args.output.clone(),
            input_files: args.files.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            reverse: false,
            numeric: false,
            general_numeric: false,
            fold_case: false,
            unique: false,
            debug: false,
            method: Method::default(),
            record_delimiter: b'\n',
            output_file: None,
            input_files: vec![],
        }
    }
}
