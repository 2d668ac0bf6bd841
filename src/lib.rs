pub mod citations;
pub mod config;
pub mod drafter;
pub mod hangul;
pub mod josa;
pub mod numbering;
pub mod parser;
pub mod rules;
pub mod runtime;
pub mod types;
