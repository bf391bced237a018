use std::{borrow::Cow, fmt, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{convert, ParseCaseError};

static LOWER_CAMEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z0-9][a-zA-Z0-9]+$").unwrap());
static LOWER_HYPHEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap());
static LOWER_UNDERSCORE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(?:_[a-z0-9]+)*$").unwrap());
static UPPER_CAMEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z0-9][a-zA-Z0-9]+$").unwrap());
static UPPER_HYPHEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9]+(?:-[A-Z0-9]+)*$").unwrap());
static UPPER_UNDERSCORE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9]+(?:_[A-Z0-9]+)*$").unwrap());

/// A naming convention for ASCII identifiers.
///
/// The variants are declared in classification order: when an identifier matches more than one
/// case (for example `a` is valid in both [`LowerHyphen`](Case::LowerHyphen) and
/// [`LowerUnderscore`](Case::LowerUnderscore)), [`Case::classify`] returns the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
    /// `lowerCamelCase`
    LowerCamel,
    /// `lower-hyphen-case`, also known as kebab case.
    LowerHyphen,
    /// `lower_underscore_case`, also known as snake case.
    LowerUnderscore,
    /// `UpperCamelCase`, also known as pascal case.
    UpperCamel,
    /// `UPPER-HYPHEN-CASE`
    UpperHyphen,
    /// `UPPER_UNDERSCORE_CASE`, commonly used for constants.
    UpperUnderscore,
}

impl Case {
    /// All cases, in classification order.
    pub const ALL: [Case; 6] = [
        Case::LowerCamel,
        Case::LowerHyphen,
        Case::LowerUnderscore,
        Case::UpperCamel,
        Case::UpperHyphen,
        Case::UpperUnderscore,
    ];

    /// Returns `true` if the whole of `s` is a valid identifier in this case.
    ///
    /// Digits are allowed anywhere. The camel cases require at least two characters, while the
    /// delimited cases accept a single character.
    ///
    /// # Examples
    ///
    /// ```
    /// # use autocase::Case;
    /// assert!(Case::UpperCamel.matches("OneTwo"));
    /// assert!(!Case::UpperCamel.matches("OneTwo!!!"));
    /// assert!(Case::LowerHyphen.matches("f"));
    /// assert!(Case::LowerUnderscore.matches("f"));
    /// assert!(!Case::LowerCamel.matches("f"));
    /// ```
    pub fn matches(self, s: &str) -> bool {
        self.pattern().is_match(s)
    }

    /// Detects the case of `s`, returning `None` if it is not a valid identifier in any case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use autocase::Case;
    /// assert_eq!(Case::classify("oneTwo"), Some(Case::LowerCamel));
    /// assert_eq!(Case::classify("foo"), Some(Case::LowerCamel));
    /// assert_eq!(Case::classify("f"), Some(Case::LowerHyphen));
    /// assert_eq!(Case::classify("ONE_TWO"), Some(Case::UpperUnderscore));
    /// assert_eq!(Case::classify("foo_bar-baz"), None);
    /// ```
    pub fn classify(s: &str) -> Option<Case> {
        Case::ALL.into_iter().find(|case| case.matches(s))
    }

    /// Converts `s` into this case. See [`convert()`](crate::convert()).
    pub fn convert(self, s: &str) -> Cow<'_, str> {
        convert::convert(s, self)
    }

    /// Gets the canonical name of this case, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Case::LowerCamel => "lower-camel",
            Case::LowerHyphen => "lower-hyphen",
            Case::LowerUnderscore => "lower-underscore",
            Case::UpperCamel => "upper-camel",
            Case::UpperHyphen => "upper-hyphen",
            Case::UpperUnderscore => "upper-underscore",
        }
    }

    pub(crate) fn delimiter(self) -> Option<char> {
        match self {
            Case::LowerCamel | Case::UpperCamel => None,
            Case::LowerHyphen | Case::UpperHyphen => Some('-'),
            Case::LowerUnderscore | Case::UpperUnderscore => Some('_'),
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Case::LowerCamel => &LOWER_CAMEL,
            Case::LowerHyphen => &LOWER_HYPHEN,
            Case::LowerUnderscore => &LOWER_UNDERSCORE,
            Case::UpperCamel => &UPPER_CAMEL,
            Case::UpperHyphen => &UPPER_HYPHEN,
            Case::UpperUnderscore => &UPPER_UNDERSCORE,
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Case {
    type Err = ParseCaseError;

    /// Parses a case from its name.
    ///
    /// Names are matched ignoring ASCII case, and `_` may be used in place of `-`. Along with
    /// the canonical names, some common aliases such as `snake`, `kebab` and `pascal` are
    /// accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "lower-camel" | "lowercamel" | "camel" => Ok(Case::LowerCamel),
            "lower-hyphen" | "kebab" => Ok(Case::LowerHyphen),
            "lower-underscore" | "snake" => Ok(Case::LowerUnderscore),
            "upper-camel" | "uppercamel" | "pascal" => Ok(Case::UpperCamel),
            "upper-hyphen" | "cobol" | "train" => Ok(Case::UpperHyphen),
            "upper-underscore" | "screaming-snake" | "constant" => Ok(Case::UpperUnderscore),
            _ => Err(ParseCaseError::new(s)),
        }
    }
}
