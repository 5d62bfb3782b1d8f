//! Higher-order functions over ordered, in-memory sequences.
//!
//! Every operation reads its input sequence front to back, calls the
//! supplied function synchronously, and never mutates the input. The
//! `try_` variants stop at the first error the function returns and hand
//! that error back unchanged.
//!
//! ```
//! use toolbox_slices::{map, try_map};
//!
//! assert_eq!(map(&[1, 2, 3], |v| v * 2), vec![2, 4, 6]);
//!
//! let failed = try_map(&[1, 2, 3, 4], |v| {
//!     if *v == 3 {
//!         Err(format!("fail at {}", v))
//!     } else {
//!         Ok(v * 3)
//!     }
//! });
//! assert_eq!(failed, Err("fail at 3".to_string()));
//! ```
mod error;
mod ext;
mod fold;
mod select;
mod sequence;
mod transform;
mod traverse;

pub use error::{Error, Result};
pub use ext::SequenceExt;
pub use fold::{fold_left, fold_right, for_each_pair, map_pairs};
pub use select::{filter, try_filter};
pub use sequence::Sequence;
pub use transform::{map, map_with_index, try_map, try_map_with_index};
pub use traverse::{for_each, for_each_with_index, try_for_each, try_for_each_with_index};
