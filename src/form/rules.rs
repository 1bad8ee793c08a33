use crate::form::field::FieldName;
use crate::form::values::FieldValues;
use crate::widgets::validators::{Predicate, is_blank, trim_value, trimmed_match};
use regex::Regex;
use std::sync::LazyLock;

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https://\S+$").expect("valid url pattern"));

pub const INVALID_URL_MESSAGE: &str = "Invalid URL";

/// `https://` followed by at least one non-whitespace character and nothing
/// else, after trimming. The scheme is case-sensitive.
pub fn is_valid_url(value: &str) -> bool {
    URL_PATTERN.is_match(trim_value(value))
}

pub fn url_predicate() -> Predicate {
    trimmed_match(URL_PATTERN.clone())
}

pub fn field_is_valid(field: FieldName, value: &str) -> bool {
    match field {
        FieldName::Title | FieldName::ImdbId => !is_blank(value),
        FieldName::Description => true,
        FieldName::ImgUrl | FieldName::ImdbUrl => is_valid_url(value),
    }
}

pub fn form_is_valid(values: &FieldValues) -> bool {
    FieldName::ALL
        .into_iter()
        .all(|field| field_is_valid(field, values.get(field)))
}

#[cfg(test)]
mod tests {
    use super::{field_is_valid, form_is_valid, is_valid_url};
    use crate::form::field::FieldName;
    use crate::form::values::FieldValues;

    #[test]
    fn url_rule_cases() {
        assert!(is_valid_url("https://a"));
        assert!(is_valid_url("  https://a  "));
        assert!(is_valid_url("https://a.com/x?y=1#z"));
        assert!(!is_valid_url("http://a"));
        assert!(!is_valid_url("https:// "));
        assert!(!is_valid_url("https://"));
        assert!(!is_valid_url("https://a b"));
        assert!(!is_valid_url("HTTPS://a"));
        assert!(!is_valid_url(""));
        assert!(is_valid_url("\u{FEFF}https://a\u{FEFF}"));
        assert!(!is_valid_url("\u{85}https://a"));
    }

    #[test]
    fn description_is_always_valid() {
        assert!(field_is_valid(FieldName::Description, ""));
        assert!(field_is_valid(FieldName::Description, "   "));
    }

    #[test]
    fn text_fields_need_non_blank() {
        for field in [FieldName::Title, FieldName::ImdbId] {
            assert!(!field_is_valid(field, " \t"));
            assert!(field_is_valid(field, " x "));
            assert!(!field_is_valid(field, "\u{FEFF}"));
            assert!(field_is_valid(field, "\u{85}"));
        }
    }

    #[test]
    fn url_predicate_agrees_with_rule() {
        let predicate = super::url_predicate();
        for value in ["https://a", " https://a ", "http://a", "https:// ", "\u{FEFF}https://a", ""] {
            assert_eq!(predicate(value), is_valid_url(value), "{value:?}");
        }
    }

    #[test]
    fn form_validity_is_conjunction() {
        let mut values = FieldValues {
            title: "Inception".to_string(),
            description: String::new(),
            img_url: "https://img".to_string(),
            imdb_url: "https://imdb".to_string(),
            imdb_id: "tt1".to_string(),
        };
        assert!(form_is_valid(&values));
        values.set(FieldName::ImdbUrl, "imdb.com".to_string());
        assert!(!form_is_valid(&values));
    }
}
