//! Interactive question-and-answer flow for PopChoice.
//!
//! Asks the three questions, submits them with a thinking spinner, renders
//! the match, and offers to go again. Entry point: `loop_runner::run_ask_loop`.

pub mod banner;
pub mod input;
pub mod loop_runner;
pub mod renderer;
