// Export modules for library usage
pub mod cli;
pub mod core;
pub mod extract;
pub mod io;

// Re-export commonly used types
pub use crate::core::{Declaration, Parameter};

pub use crate::extract::{
    extract_to_csv, find_declarations, render_csv, split_parameters, strip, Declarations,
    CSV_HEADER,
};
