//! CSV batch surface: one invocation per input row, one response per output row.

pub mod invocation_reader;
pub mod response_writer;
