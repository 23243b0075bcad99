//! Message templating with positional placeholders.
//!
//! Error messages for the boolean assertions are built from a template
//! containing zero or more `{}` placeholders, each replaced by the next
//! available argument. Excess arguments are appended to the end of the
//! message; missing arguments leave the remaining placeholders verbatim. No
//! formatting beyond each argument's `Display` output is applied.

use std::fmt::Display;
use std::fmt::Write as _;

/// Placeholder token replaced by successive arguments.
const PLACEHOLDER: &str = "{}";

/// Expands `{}` placeholders in `template` from `args`, left to right.
///
/// With more arguments than placeholders the excess is appended as
/// ` - [a, b]`; with fewer, the unused placeholders stay in place.
///
/// ```
/// use argcheck::messages::format;
///
/// assert_eq!(format("size {} exceeds {}", &[&3, &2]), "size 3 exceeds 2");
/// assert_eq!(format("all good", &[&"spare"]), "all good - [spare]");
/// assert_eq!(format("{} and {}", &[&"one"]), "one and {}");
/// ```
pub fn format(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut rest = template;
    let mut used = 0;

    while used < args.len() {
        let Some(at) = rest.find(PLACEHOLDER) else {
            break;
        };
        out.push_str(&rest[..at]);
        let _ = write!(out, "{}", args[used]);
        rest = &rest[at + PLACEHOLDER.len()..];
        used += 1;
    }
    out.push_str(rest);

    if used < args.len() {
        out.push_str(" - [");
        for (i, arg) in args[used..].iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{arg}");
        }
        out.push(']');
    }
    out
}
