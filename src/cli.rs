use clap::{Parser, ValueEnum};

/// How the records are put in order
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// Heap-sort the records in place
    #[default]
    Heapsort,
    /// Build a min-heap from the records and drain it
    Extract,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "hsort", about = "Sort lines of text with a binary heap")]
pub struct Args {
    /// Reverse the result of comparisons
    #[arg(short = 'r', long)]
    pub reverse: bool,

    /// Compare according to leading numerical value
    #[arg(short = 'n', long = "numeric-sort")]
    pub numeric: bool,

    /// Compare whole lines as floating-point numbers
    #[arg(short = 'g', long = "general-numeric-sort")]
    pub general_numeric: bool,

    /// Fold lower case to upper case characters
    #[arg(short = 'f', long = "ignore-case")]
    pub fold_case: bool,

    /// Output only the first of lines with equal keys
    #[arg(short = 'u', long)]
    pub unique: bool,

    /// Sorting strategy
    #[arg(long, value_enum, default_value_t = Method::Heapsort)]
    pub method: Method,

    /// Write result to FILE instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<String>,

    /// Use NUL as line delimiter
    #[arg(short = 'z', long = "zero-terminated")]
    pub zero_terminated: bool,

    /// Print the array before and after sorting to stderr
    #[arg(long)]
    pub debug: bool,

    /// Input files
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,
}

impl Args {
    /// Get the record delimiter (newline or NUL)
    pub fn record_delimiter(&self) -> u8 {
        if self.zero_terminated {
            0u8
        } else {
            b'\n'
        }
    }
}
