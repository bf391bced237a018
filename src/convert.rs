use std::borrow::Cow;

use crate::Case;

/// Converts `s` into the `target` case, detecting its current case automatically.
///
/// If `s` is already valid in the `target` case, or is not a valid identifier in any case, it is
/// returned unchanged as [`Cow::Borrowed`]. Otherwise it is split into words according to the
/// case returned by [`Case::classify`], and the words are joined back together in the
/// `target` case.
///
/// # Examples
///
/// ```
/// # use std::borrow::Cow;
/// # use autocase::{convert, Case};
/// assert_eq!(convert("oneTwoThree", Case::UpperUnderscore), "ONE_TWO_THREE");
/// assert_eq!(convert("ONE-TWO-THREE", Case::LowerCamel), "oneTwoThree");
/// assert!(matches!(convert("one_two", Case::LowerUnderscore), Cow::Borrowed("one_two")));
/// assert!(matches!(convert("foo_bar-baz", Case::LowerCamel), Cow::Borrowed("foo_bar-baz")));
/// ```
pub fn convert(s: &str, target: Case) -> Cow<'_, str> {
    if target.matches(s) {
        log::trace!("identifier '{}' is already {}", s, target);
        return Cow::Borrowed(s);
    }

    match Case::classify(s) {
        Some(source) => {
            log::trace!("converting identifier '{}' from {} to {}", s, source, target);
            Cow::Owned(assemble(&tokenize(s, source), target))
        }
        None => {
            log::trace!("identifier '{}' is not in a recognized case", s);
            Cow::Borrowed(s)
        }
    }
}

/// Converts an identifier to `lowerCamelCase`.
///
/// Returns `None` if `input` is `None`. See [`convert()`] for details.
///
/// # Examples
///
/// ```
/// # use autocase::to_lower_camel;
/// assert_eq!(to_lower_camel(Some("one-two-three")).as_deref(), Some("oneTwoThree"));
/// assert_eq!(to_lower_camel(None), None);
/// ```
pub fn to_lower_camel(input: Option<&str>) -> Option<Cow<'_, str>> {
    input.map(|s| convert(s, Case::LowerCamel))
}

/// Converts an identifier to `UpperCamelCase`.
///
/// Returns `None` if `input` is `None`. See [`convert()`] for details.
///
/// # Examples
///
/// ```
/// # use autocase::to_upper_camel;
/// assert_eq!(to_upper_camel(Some("one_two_three")).as_deref(), Some("OneTwoThree"));
/// ```
pub fn to_upper_camel(input: Option<&str>) -> Option<Cow<'_, str>> {
    input.map(|s| convert(s, Case::UpperCamel))
}

/// Converts an identifier to `lower-hyphen-case`.
///
/// Returns `None` if `input` is `None`. See [`convert()`] for details.
///
/// # Examples
///
/// ```
/// # use autocase::to_lower_hyphen;
/// assert_eq!(to_lower_hyphen(Some("OneTwoThree")).as_deref(), Some("one-two-three"));
/// ```
pub fn to_lower_hyphen(input: Option<&str>) -> Option<Cow<'_, str>> {
    input.map(|s| convert(s, Case::LowerHyphen))
}

/// Converts an identifier to `UPPER-HYPHEN-CASE`.
///
/// Returns `None` if `input` is `None`. See [`convert()`] for details.
pub fn to_upper_hyphen(input: Option<&str>) -> Option<Cow<'_, str>> {
    input.map(|s| convert(s, Case::UpperHyphen))
}

/// Converts an identifier to `lower_underscore_case`.
///
/// Returns `None` if `input` is `None`. See [`convert()`] for details.
///
/// # Examples
///
/// ```
/// # use autocase::to_lower_underscore;
/// assert_eq!(to_lower_underscore(Some("ONE-TWO-THREE")).as_deref(), Some("one_two_three"));
/// ```
pub fn to_lower_underscore(input: Option<&str>) -> Option<Cow<'_, str>> {
    input.map(|s| convert(s, Case::LowerUnderscore))
}

/// Converts an identifier to `UPPER_UNDERSCORE_CASE`.
///
/// Returns `None` if `input` is `None`. See [`convert()`] for details.
pub fn to_upper_underscore(input: Option<&str>) -> Option<Cow<'_, str>> {
    input.map(|s| convert(s, Case::UpperUnderscore))
}

/// Splits an identifier in the `source` case into lowercase words.
pub(crate) fn tokenize(s: &str, source: Case) -> Vec<String> {
    if let Some(delimiter) = source.delimiter() {
        return s
            .split(delimiter)
            .map(|word| word.to_ascii_lowercase())
            .collect();
    }

    let mut words = Vec::new();
    let mut start = 0;
    for (index, ch) in s.char_indices().skip(1) {
        if ch.is_ascii_uppercase() {
            words.push(s[start..index].to_ascii_lowercase());
            start = index;
        }
    }
    words.push(s[start..].to_ascii_lowercase());
    words
}

/// Joins lowercase words into an identifier in the `target` case.
pub(crate) fn assemble(words: &[String], target: Case) -> String {
    let mut result = String::with_capacity(words.iter().map(|word| word.len() + 1).sum());

    for (index, word) in words.iter().enumerate() {
        if index != 0 {
            if let Some(delimiter) = target.delimiter() {
                result.push(delimiter);
            }
        }

        match target {
            Case::LowerCamel if index == 0 => result.push_str(word),
            Case::LowerCamel | Case::UpperCamel => push_capitalized(&mut result, word),
            Case::LowerHyphen | Case::LowerUnderscore => {
                result.extend(word.chars().map(|ch| ch.to_ascii_lowercase()))
            }
            Case::UpperHyphen | Case::UpperUnderscore => {
                result.extend(word.chars().map(|ch| ch.to_ascii_uppercase()))
            }
        }
    }

    result
}

fn push_capitalized(result: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(ch) = chars.next() {
        result.push(ch.to_ascii_uppercase());
    }
    result.extend(chars);
}
