//! # argcheck: argument validation guards
//!
//! Guard functions for validating the arguments of public APIs:
//! - Boolean and templated preconditions (`is_true`, `is_false`)
//! - Presence checks for `Option` arguments (`not_none`, `no_nones`)
//! - String guards for blank input and regex shape (`not_blank`, `matches`)
//! - Emptiness checks across string, slice and map types (`not_empty`)
//! - Numeric sign, range and ordering guards (`not_negative`, `in_order_not_equal`)
//!
//! Every guard takes the argument name, embeds it in the failure message,
//! and on success returns the checked value so calls chain directly into
//! field initializers:
//!
//! ```
//! use argcheck::{not_blank, not_negative, Result};
//!
//! #[derive(Debug)]
//! struct Account {
//!     owner: String,
//!     balance: f64,
//! }
//!
//! impl Account {
//!     fn new(owner: String, balance: f64) -> Result<Account> {
//!         Ok(Account {
//!             owner: not_blank(owner, "owner")?,
//!             balance: not_negative(balance, "balance")?,
//!         })
//!     }
//! }
//!
//! let err = Account::new("  ".into(), 10.0).unwrap_err();
//! assert_eq!(err.message(), "argument 'owner' must not be blank");
//! ```
//!
//! A failed guard is a programmer error in the calling code, not a
//! recoverable runtime condition: the expected response is to fix the call
//! site, so [`Error`] carries a message and nothing else.

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

// Re-export public API
pub mod check;
pub mod error;
pub mod messages;

pub use check::{
    has_negative_element, has_none_element, in_order_not_equal, in_order_or_equal,
    in_range_excluding_high, is_false, is_false_with, is_in_range_excluding_high,
    is_in_range_excluding_low, is_in_range_exclusive, is_in_range_inclusive, is_true,
    is_true_with, matches, no_none_items, no_none_values, no_nones, not_blank, not_empty,
    not_negative, not_negative_or_zero, not_none, not_none_item, HasLength, Numeric,
};
pub use error::{Error, Result};
