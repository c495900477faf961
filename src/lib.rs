pub mod cli;
pub mod ctx;
pub mod error;
pub mod io;
pub mod mapping;
pub mod mirna;
pub mod pipeline;
pub mod targets;
