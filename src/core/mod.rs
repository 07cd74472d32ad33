pub mod alpha_order;
pub mod banner;
pub mod braces;
pub mod digits;
pub mod exit_status;
pub mod longest_word;
pub mod numeric;
pub mod one_char_diff;
pub mod order_stat;
pub mod product;
pub mod slices;

pub use crate::domain::model::{Number, NumberKind, Value};
pub use crate::domain::ports::{CommandOutcome, CommandRunner, TextSource};
pub use crate::utils::error::Result;
