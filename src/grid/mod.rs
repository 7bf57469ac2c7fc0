//! Numeric grid parsing and analysis
//!
//! Turns a loosely formatted text file of numbers into a dense grid in one
//! pass, without knowing the row or column count up front.
//!
//! # Pipeline
//!
//! ```text
//! bytes ──► tokenizer ──► accumulator ──► densify ──► Grid ──► stats
//!           (numbers)     (col,row,val)   (NaN-filled)          (mean, drop column)
//! ```
//!
//! Rows are delimited by `\n`; anything that cannot start a number separates
//! values. Short rows are padded with [`MISSING`].

mod accumulator;
mod densify;
mod model;
pub mod render;
mod stats;
mod stream;
mod tokenizer;

pub use accumulator::{accumulate, Cell, ParsedCells};
pub use densify::densify;
pub use model::{is_missing, Grid, MISSING};
pub use stats::{find_first_match, mean_non_missing, remove_column};
pub use stream::CharStream;
pub use tokenizer::{is_space, parse_prefix, read_token, starts_number, MAX_TOKEN_LEN};
