//! Argument guards.
//!
//! Free functions that check one precondition about one input and either
//! return the input unchanged or fail with [`Error`]. Most guards pass the
//! validated value through so checks compose at assignment sites:
//!
//! ```
//! use argcheck::{check, Result};
//!
//! struct Person {
//!     name: String,
//!     age: i32,
//! }
//!
//! impl Person {
//!     fn new(name: String, age: i32) -> Result<Person> {
//!         Ok(Person {
//!             name: check::not_blank(name, "name")?,
//!             age: check::not_negative(age, "age")?,
//!         })
//!     }
//! }
//!
//! assert!(Person::new("Ada".to_string(), 36).is_ok());
//! assert!(Person::new("  ".to_string(), 36).is_err());
//! ```
//!
//! Presence is checked on [`Option`] arguments; a value the type system
//! already proves present needs no guard.

mod collection;
mod numeric;
mod order;
mod string;

pub use collection::{
    has_negative_element, has_none_element, no_none_items, no_none_values, no_nones, not_empty,
    HasLength,
};
pub use numeric::{
    in_range_excluding_high, is_in_range_excluding_high, is_in_range_excluding_low,
    is_in_range_exclusive, is_in_range_inclusive, not_negative, not_negative_or_zero, Numeric,
};
pub use order::{in_order_not_equal, in_order_or_equal};
pub use string::{matches, not_blank};

use std::fmt::Display;

use crate::error::{Error, Result};
use crate::messages;

/// Checks that a caller-computed condition holds, failing with the given
/// message verbatim.
pub fn is_true(condition: bool, message: &str) -> Result<()> {
    if !condition {
        return Err(Error::new(message));
    }
    Ok(())
}

/// Checks that a caller-computed condition holds, building the failure
/// message from a `{}` placeholder template (see [`messages::format`]).
pub fn is_true_with(condition: bool, template: &str, args: &[&dyn Display]) -> Result<()> {
    if !condition {
        return Err(Error::new(messages::format(template, args)));
    }
    Ok(())
}

/// Checks that a caller-computed condition does not hold.
pub fn is_false(condition: bool, message: &str) -> Result<()> {
    if condition {
        return Err(Error::new(message));
    }
    Ok(())
}

/// Checks that a caller-computed condition does not hold, building the
/// failure message from a `{}` placeholder template.
pub fn is_false_with(condition: bool, template: &str, args: &[&dyn Display]) -> Result<()> {
    if condition {
        return Err(Error::new(messages::format(template, args)));
    }
    Ok(())
}

/// Checks that an optional value is present and unwraps it.
///
/// ```
/// use argcheck::check;
///
/// let port = check::not_none(Some(8080), "port")?;
/// assert_eq!(port, 8080);
/// # Ok::<(), argcheck::Error>(())
/// ```
pub fn not_none<T>(value: Option<T>, name: &str) -> Result<T> {
    match value {
        Some(value) => Ok(value),
        None => Err(Error::new(format!("argument '{name}' must not be None"))),
    }
}

/// Variant of [`not_none`] for individual elements while iterating a
/// container; the error text carries no parameter name.
pub fn not_none_item<T>(value: Option<T>) -> Result<T> {
    match value {
        Some(value) => Ok(value),
        None => Err(Error::new("argument collection must not contain None")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_true_passes_without_effect() {
        assert_eq!(is_true(true, "msg"), Ok(()));
    }

    #[test]
    fn test_is_true_fails_with_verbatim_message() {
        let err = is_true(false, "collection must contain 'value'").unwrap_err();
        assert_eq!(err.message(), "collection must contain 'value'");
    }

    #[test]
    fn test_is_true_with_formats_placeholders() {
        let err = is_true_with(false, "msg {}", &[&"x"]).unwrap_err();
        assert_eq!(err.message(), "msg x");
    }

    #[test]
    fn test_is_false_rejects_true() {
        assert!(is_false(true, "must not hold").is_err());
        assert_eq!(is_false(false, "must not hold"), Ok(()));
    }

    #[test]
    fn test_is_false_with_appends_excess_args() {
        let err = is_false_with(true, "found {}", &[&"dup", &"extra"]).unwrap_err();
        assert_eq!(err.message(), "found dup - [extra]");
    }

    #[test]
    fn test_not_none_unwraps_present_value() {
        assert_eq!(not_none(Some(42), "answer"), Ok(42));
    }

    #[test]
    fn test_not_none_rejects_none_regardless_of_name() {
        let err = not_none::<u8>(None, "answer").unwrap_err();
        assert_eq!(err.message(), "argument 'answer' must not be None");
        assert!(not_none::<u8>(None, "other").is_err());
    }

    #[test]
    fn test_not_none_item_uses_generic_message() {
        assert_eq!(not_none_item(Some("x")), Ok("x"));
        let err = not_none_item::<&str>(None).unwrap_err();
        assert_eq!(err.message(), "argument collection must not contain None");
    }
}
