pub mod lexer;
pub mod state;

pub use lexer::extract_strings;
pub use state::ScanState;
