//! Ordering guards for pairs of comparable values.

use std::fmt::Display;

use crate::error::{Error, Result};

/// Checks that `first < second`, rejecting equal values.
///
/// Returns unit since there is no single value to pass through.
pub fn in_order_not_equal<T>(first: &T, second: &T, first_name: &str, second_name: &str) -> Result<()>
where
    T: PartialOrd + Display,
{
    if first >= second {
        return Err(Error::new(format!(
            "invalid order: expected '{first_name}' < '{second_name}', but found: '{first}' >= '{second}'"
        )));
    }
    Ok(())
}

/// Checks that `first <= second`, accepting equal values.
pub fn in_order_or_equal<T>(first: &T, second: &T, first_name: &str, second_name: &str) -> Result<()>
where
    T: PartialOrd + Display,
{
    if first > second {
        return Err(Error::new(format!(
            "invalid order: expected '{first_name}' <= '{second_name}', but found: '{first}' > '{second}'"
        )));
    }
    Ok(())
}
