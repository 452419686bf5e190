//! hookplan: template-driven content-plan boards for LinkedIn and other
//! social platforms.
//!
//! A board is a month of post ideas. Each post has a hook, an angle note, a
//! call-to-action and a comment prompt, all generated from a template corpus
//! for the user's goal, audience and preferred tone.
//!
//! ```no_run
//! use hookplan::{Config, Context, Goal, generate_board};
//!
//! let context = Context::new("B2B founders", "close more deals");
//! let board = generate_board(&Goal::Calls, &context, &Config::default())?;
//! println!("{}", hookplan::export::to_text(&board.posts));
//! # Ok::<(), hookplan::error::PlanError>(())
//! ```

pub mod board;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod exit_codes;
pub mod export;
pub mod fs;
pub mod goals;
pub mod lint;
pub mod platform;
pub mod template;

#[cfg(test)]
pub(crate) mod test_support;

pub use board::{Board, Column, Post, PostField};
pub use config::Config;
pub use context::Context;
pub use corpus::Corpus;
pub use engine::{BoardGenerator, generate_board};
pub use error::{PlanError, Result};
pub use goals::Goal;
