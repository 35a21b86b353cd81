pub mod board;
pub mod errors;
pub mod execution;
pub mod history;
pub mod observer;
pub mod stats;
pub mod types;
