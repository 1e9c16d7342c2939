pub mod application;
pub mod evaluation;
pub mod job;
