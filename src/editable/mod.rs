//! Cell text editing
//!
//! - [`CellBuffer`]: the text and caret of a focused cell
//! - [`EditConstraints`]: character filters for free-text and date cells
//! - [`DecimalInput`]: the fixed-precision decimal state machine

mod buffer;
mod constraints;
mod decimal;

pub use buffer::CellBuffer;
pub use constraints::{CharFilter, EditConstraints};
pub use decimal::{strip_commas, DecimalInput, CONTROL_KEYS, DEFAULT_PRECISION};
