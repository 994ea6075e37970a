pub mod classify;
pub mod logic;
pub mod parser;
pub mod reconstruct;
pub mod report;

pub use logic::Core;
