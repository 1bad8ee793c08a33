use regex::Regex;

/// Caller-supplied check over a field's raw value; `true` means valid.
pub type Predicate = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// Whitespace as browsers trim it: Unicode `White_Space` minus NEL, plus
/// the byte order mark.
pub fn is_trim_char(ch: char) -> bool {
    match ch {
        '\u{FEFF}' => true,
        '\u{85}' => false,
        _ => ch.is_whitespace(),
    }
}

pub fn trim_value(value: &str) -> &str {
    value.trim_matches(is_trim_char)
}

pub fn is_blank(value: &str) -> bool {
    trim_value(value).is_empty()
}

pub fn required_message(label: &str) -> String {
    format!("{label} is required")
}

/// Matches `re` against the value with surrounding whitespace removed.
pub fn trimmed_match(re: Regex) -> Predicate {
    Box::new(move |value: &str| re.is_match(trim_value(value)))
}
