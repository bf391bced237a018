//! Convert ASCII identifiers between naming conventions, without needing to know which convention
//! they are currently in.
//!
//! Six cases are supported:
//!
//! | [`Case`] | Example |
//! |---|---|
//! | [`LowerCamel`](Case::LowerCamel) | `oneTwoThree` |
//! | [`UpperCamel`](Case::UpperCamel) | `OneTwoThree` |
//! | [`LowerHyphen`](Case::LowerHyphen) | `one-two-three` |
//! | [`UpperHyphen`](Case::UpperHyphen) | `ONE-TWO-THREE` |
//! | [`LowerUnderscore`](Case::LowerUnderscore) | `one_two_three` |
//! | [`UpperUnderscore`](Case::UpperUnderscore) | `ONE_TWO_THREE` |
//!
//! Inputs which are not valid in any of these cases, such as `foo_bar-baz`, are returned
//! unchanged.
//!
//! # Examples
//!
//! ```
//! use autocase::{to_lower_hyphen, to_upper_camel};
//!
//! assert_eq!(to_upper_camel(Some("one_two_three")).as_deref(), Some("OneTwoThree"));
//! assert_eq!(to_lower_hyphen(Some("ONE_TWO_THREE")).as_deref(), Some("one-two-three"));
//! assert_eq!(to_lower_hyphen(Some("foo_bar-baz")).as_deref(), Some("foo_bar-baz"));
//! assert_eq!(to_lower_hyphen(None), None);
//! ```
#![warn(missing_debug_implementations, missing_docs)]
#![deny(unsafe_code)]
#![doc(html_root_url = "https://docs.rs/autocase/0.1.0/")]

mod case;
mod convert;
mod error;

pub use self::case::Case;
pub use self::convert::{
    convert, to_lower_camel, to_lower_hyphen, to_lower_underscore, to_upper_camel,
    to_upper_hyphen, to_upper_underscore,
};
pub use self::error::ParseCaseError;
