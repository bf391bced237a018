use autocase::{
    to_lower_camel, to_lower_hyphen, to_lower_underscore, to_upper_camel, to_upper_hyphen,
    to_upper_underscore, Case,
};
use miette::Diagnostic;

const LOWER_CAMEL: &str = "oneTwoThree";
const LOWER_HYPHEN: &str = "one-two-three";
const LOWER_UNDERSCORE: &str = "one_two_three";
const UPPER_CAMEL: &str = "OneTwoThree";
const UPPER_HYPHEN: &str = "ONE-TWO-THREE";
const UPPER_UNDERSCORE: &str = "ONE_TWO_THREE";

const ALL: [&str; 6] = [
    LOWER_CAMEL,
    LOWER_HYPHEN,
    LOWER_UNDERSCORE,
    UPPER_CAMEL,
    UPPER_HYPHEN,
    UPPER_UNDERSCORE,
];

#[test]
fn lower_camel() {
    for input in ALL {
        assert_eq!(to_lower_camel(Some(input)).as_deref(), Some(LOWER_CAMEL));
    }
    assert_eq!(to_lower_camel(None), None);
}

#[test]
fn lower_hyphen() {
    for input in ALL {
        assert_eq!(to_lower_hyphen(Some(input)).as_deref(), Some(LOWER_HYPHEN));
    }
    assert_eq!(to_lower_hyphen(None), None);
}

#[test]
fn lower_underscore() {
    for input in ALL {
        assert_eq!(
            to_lower_underscore(Some(input)).as_deref(),
            Some(LOWER_UNDERSCORE)
        );
    }
    assert_eq!(to_lower_underscore(None), None);
}

#[test]
fn upper_camel() {
    for input in ALL {
        assert_eq!(to_upper_camel(Some(input)).as_deref(), Some(UPPER_CAMEL));
    }
    assert_eq!(to_upper_camel(None), None);
}

#[test]
fn upper_hyphen() {
    for input in ALL {
        assert_eq!(to_upper_hyphen(Some(input)).as_deref(), Some(UPPER_HYPHEN));
    }
    assert_eq!(to_upper_hyphen(None), None);
}

#[test]
fn upper_underscore() {
    for input in ALL {
        assert_eq!(
            to_upper_underscore(Some(input)).as_deref(),
            Some(UPPER_UNDERSCORE)
        );
    }
    assert_eq!(to_upper_underscore(None), None);
}

#[test]
fn digits() {
    let input = Some("0neTw0Thr3e");
    assert_eq!(to_lower_camel(input).as_deref(), Some("0neTw0Thr3e"));
    assert_eq!(to_upper_camel(input).as_deref(), Some("0neTw0Thr3e"));
    assert_eq!(to_lower_hyphen(input).as_deref(), Some("0ne-tw0-thr3e"));
    assert_eq!(to_upper_hyphen(input).as_deref(), Some("0NE-TW0-THR3E"));
    assert_eq!(to_lower_underscore(input).as_deref(), Some("0ne_tw0_thr3e"));
    assert_eq!(to_upper_underscore(input).as_deref(), Some("0NE_TW0_THR3E"));
}

#[test]
fn mixed_delimiters() {
    let input = Some("foo_bar-baz");
    assert_eq!(to_lower_camel(input).as_deref(), input);
    assert_eq!(to_upper_camel(input).as_deref(), input);
    assert_eq!(to_lower_hyphen(input).as_deref(), input);
    assert_eq!(to_upper_hyphen(input).as_deref(), input);
    assert_eq!(to_lower_underscore(input).as_deref(), input);
    assert_eq!(to_upper_underscore(input).as_deref(), input);
}

#[test]
fn unknown_case_name() {
    let err = "sentence".parse::<Case>().unwrap_err();
    assert_eq!(err.to_string(), "unknown case 'sentence'");
    assert!(err
        .help()
        .unwrap()
        .to_string()
        .contains("'lower-camel'"));
}
