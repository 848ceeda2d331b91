//! Transcription parsing for GradeVox
//!
//! Turns raw recognized speech text into (name, score) candidates. Two
//! layers: a single-utterance parser that pulls the first number out of a
//! sentence, and a splitter that breaks a multi-student utterance into
//! per-student segments and detects the session-ending sentinel words.
//! Everything here is pure and synchronous.

pub mod parser;
pub mod splitter;

pub use parser::{parse, ParseResult};
pub use splitter::{split_segments, SplitterConfig};
