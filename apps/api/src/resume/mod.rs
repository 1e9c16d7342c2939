// Resume Text Provider: PDF → extracted text + keyword list.
// Opaque to the evaluation pipeline; degrades to a placeholder, never errors.

pub mod handlers;
pub mod parser;
