//! Free-text validators
//!
//! Character sets follow what Russian-language forms accept: printable
//! ASCII, whitespace, the Cyrillic alphabet (including `ё`) and `№`.

use std::borrow::Cow;
use std::sync::LazyLock;

use crate::foundation::{ErrorInfo, FnRule, create_rule};

/// Default maximum length of [`text_field`], in characters.
pub const TEXT_FIELD_MAX_LENGTH: usize = 1000;

const NAME_MAX_LENGTH: usize = 200;

pub static INVALID_TEXT_FIELD_ERROR_INFO: LazyLock<ErrorInfo> = LazyLock::new(|| {
    ErrorInfo::register("text_field", "Contains characters that are not allowed")
});

pub static LENGTH_TEXT_FIELD_ERROR_INFO: LazyLock<ErrorInfo> =
    LazyLock::new(|| ErrorInfo::register("text_field_length", "Text is too long"));

pub static PERSON_NAME_ERROR_INFO: LazyLock<ErrorInfo> =
    LazyLock::new(|| ErrorInfo::register("person_name", "Invalid name"));

pub static PERSON_SURNAME_ERROR_INFO: LazyLock<ErrorInfo> =
    LazyLock::new(|| ErrorInfo::register("person_surname", "Invalid surname"));

pub static PERSON_PATRONYMIC_ERROR_INFO: LazyLock<ErrorInfo> =
    LazyLock::new(|| ErrorInfo::register("person_patronymic", "Invalid patronymic"));

fn is_cyrillic(c: char) -> bool {
    matches!(c, 'а'..='я' | 'А'..='Я' | 'ё' | 'Ё')
}

fn is_text_char(c: char) -> bool {
    c.is_ascii_graphic() || c.is_whitespace() || is_cyrillic(c) || c == '№'
}

// ============================================================================
// TEXT FIELD
// ============================================================================

/// Settings of [`text_field_with`].
///
/// The two messages are independent: `message` replaces the disallowed
/// character error, `invalid_length_message` the length error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFieldParams {
    pub max_length: usize,
    pub message: Option<Cow<'static, str>>,
    pub invalid_length_message: Option<Cow<'static, str>>,
}

impl Default for TextFieldParams {
    fn default() -> Self {
        Self {
            max_length: TEXT_FIELD_MAX_LENGTH,
            message: None,
            invalid_length_message: None,
        }
    }
}

impl TextFieldParams {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn invalid_length_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.invalid_length_message = Some(message.into());
        self
    }
}

/// Free text of at most [`TEXT_FIELD_MAX_LENGTH`] allowed characters.
///
/// # Examples
///
/// ```
/// use formguard_validator::prelude::*;
///
/// assert!(text_field().validate("Заказ №15, доставка до 18:00").is_ok());
/// assert_eq!(text_field().validate("👍").unwrap_err().code(), INVALID_TEXT_FIELD_ERROR_INFO.code);
/// ```
pub fn text_field() -> FnRule<str> {
    text_field_with(TextFieldParams::default())
}

/// [`text_field`] with a different length limit.
pub fn text_field_with_length(max: usize) -> FnRule<str> {
    text_field_with(TextFieldParams::new().max_length(max))
}

/// [`text_field`] configured by `params`.
///
/// ```
/// use formguard_validator::prelude::*;
/// use formguard_validator::validators::TextFieldParams;
///
/// let comment = text_field_with(
///     TextFieldParams::new()
///         .max_length(5)
///         .invalid_length_message("Не более 5 символов")
///         .message("Недопустимые символы"),
/// );
///
/// assert_eq!(comment.validate("слишком длинно").unwrap_err().message(), "Не более 5 символов");
/// assert_eq!(comment.validate("😀").unwrap_err().message(), "Недопустимые символы");
/// ```
pub fn text_field_with(params: TextFieldParams) -> FnRule<str> {
    create_rule(move |value: &str, ctx| {
        if value.chars().count() > params.max_length {
            return Err(ctx.create_error_with(
                &LENGTH_TEXT_FIELD_ERROR_INFO,
                params.invalid_length_message.clone(),
            ));
        }
        if !value.chars().all(is_text_char) {
            return Err(ctx.create_error_with(&INVALID_TEXT_FIELD_ERROR_INFO, params.message.clone()));
        }
        Ok(())
    })
}

// ============================================================================
// PERSON NAME
// ============================================================================

fn is_name_letter(c: char) -> bool {
    is_cyrillic(c) || c == 'I' || c == 'V'
}

fn is_name_char(c: char) -> bool {
    is_name_letter(c) || matches!(c, '-' | ' ' | '.' | '\'' | '’' | ',' | '(' | ')')
}

fn is_special(c: char) -> bool {
    c.is_ascii_punctuation()
}

/// Two identical special characters, or two whitespace characters, in a row.
fn has_consecutive_specials(value: &str) -> bool {
    value.chars().zip(value.chars().skip(1)).any(|(a, b)| {
        (a == b && is_special(a)) || (a.is_whitespace() && b.is_whitespace())
    })
}

fn is_person_name(value: &str) -> bool {
    let length = value.chars().count();
    (1..=NAME_MAX_LENGTH).contains(&length)
        && value.chars().all(is_name_char)
        && value.chars().next().is_some_and(is_name_letter)
        && value.chars().next_back().is_some_and(is_name_letter)
        && !has_consecutive_specials(value)
}

fn name_part(info: &'static LazyLock<ErrorInfo>) -> FnRule<str> {
    create_rule(move |value: &str, ctx| {
        if !is_person_name(value) {
            return Err(ctx.create_error(info));
        }
        Ok(())
    })
}

/// A given name.
///
/// One to 200 characters; Cyrillic letters, Roman numeral letters `I` and
/// `V`, and `- . ' ’ , ( )` or spaces between them. Must start and end with
/// a letter, and separators may not repeat.
///
/// # Examples
///
/// ```
/// use formguard_validator::prelude::*;
///
/// assert!(person_name().validate("Салтыков-Щедрин").is_ok());
/// assert!(person_name().validate("Пётр I").is_ok());
/// assert!(person_name().validate("Ivan").is_err());
/// assert!(person_name().validate("Анна--Мария").is_err());
/// ```
pub fn person_name() -> FnRule<str> {
    name_part(&PERSON_NAME_ERROR_INFO)
}

/// A surname, with the character rules of [`person_name`].
pub fn person_surname() -> FnRule<str> {
    name_part(&PERSON_SURNAME_ERROR_INFO)
}

/// A patronymic, with the character rules of [`person_name`].
pub fn person_patronymic() -> FnRule<str> {
    name_part(&PERSON_PATRONYMIC_ERROR_INFO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Rule, RuleExt};
    use rstest::rstest;

    #[rstest]
    #[case("!@#$%^&*()-_=+|[]{};:\",.<>/?")]
    #[case("123")]
    #[case("abcABC")]
    #[case("абвАБВ")]
    #[case("   абв   ")]
    #[case("      ")]
    #[case("Авада кедавра...")]
    #[case("Ёж №7")]
    fn test_text_field_valid(#[case] value: &str) {
        assert!(text_field().validate(value).is_ok());
    }

    #[rstest]
    #[case("∑")]
    #[case("⛔️")]
    #[case("😀")]
    #[case("1⃣")]
    #[case("٩(◕‿◕｡)۶")]
    fn test_text_field_invalid(#[case] value: &str) {
        let error = text_field().validate(value).unwrap_err();
        assert_eq!(error.code(), INVALID_TEXT_FIELD_ERROR_INFO.code);
        assert_eq!(error.message(), INVALID_TEXT_FIELD_ERROR_INFO.message);
    }

    #[test]
    fn test_text_field_default_length() {
        let long = format!("{}!", "a".repeat(TEXT_FIELD_MAX_LENGTH));
        let error = text_field().validate(&long).unwrap_err();
        assert_eq!(error.code(), LENGTH_TEXT_FIELD_ERROR_INFO.code);
        assert_eq!(error.message(), LENGTH_TEXT_FIELD_ERROR_INFO.message);
    }

    #[test]
    fn test_text_field_custom_length_keeps_default_message() {
        let error = text_field_with_length(2).validate("abcABC").unwrap_err();
        assert_eq!(error.code(), LENGTH_TEXT_FIELD_ERROR_INFO.code);
        assert_eq!(error.message(), LENGTH_TEXT_FIELD_ERROR_INFO.message);
    }

    #[test]
    fn test_text_field_messages_are_independent() {
        let rule = text_field_with(TextFieldParams::new().invalid_length_message("CustomMessage"));
        let long = format!("{}!", "a".repeat(TEXT_FIELD_MAX_LENGTH));

        assert_eq!(rule.validate(&long).unwrap_err().message(), "CustomMessage");
        let error = rule.validate("😀").unwrap_err();
        assert_eq!(error.message(), INVALID_TEXT_FIELD_ERROR_INFO.message);

        let rule = text_field_with(TextFieldParams::new().message("CustomMessage"));
        assert_eq!(rule.validate("😀").unwrap_err().message(), "CustomMessage");
        assert_eq!(rule.validate(&long).unwrap_err().message(), LENGTH_TEXT_FIELD_ERROR_INFO.message);
    }

    #[test]
    fn test_text_field_custom_message() {
        let error = text_field().with_message("CustomMessage").validate("😀").unwrap_err();
        assert_eq!(error.message(), "CustomMessage");
    }

    #[rstest]
    #[case("Иван")]
    #[case("ё")]
    #[case("Салтыков-Щедрин")]
    #[case("Мария Антуанетта")]
    #[case("Д'Артаньян")]
    #[case("Д’Артаньян")]
    #[case("Пётр I")]
    #[case("Иванов (Петров) Иван")]
    fn test_person_name_valid(#[case] value: &str) {
        let result = person_name().validate(value);
        assert!(result.is_ok(), "{value}: {result:?}");
    }

    #[rstest]
    #[case("")]
    #[case("Ivan")]
    #[case("-Иван")]
    #[case("Иван.")]
    #[case("Иван  Петров")]
    #[case("Анна--Мария")]
    #[case("Иван1")]
    #[case("Иван@")]
    #[case("Людовик XIV")]
    fn test_person_name_invalid(#[case] value: &str) {
        let error = person_name().validate(value).unwrap_err();
        assert_eq!(error.code(), PERSON_NAME_ERROR_INFO.code);
    }

    #[test]
    fn test_name_parts_report_their_own_codes() {
        let surname = person_surname().validate("Smith").unwrap_err();
        let patronymic = person_patronymic().validate("Иванович-").unwrap_err();

        assert_eq!(surname.code(), PERSON_SURNAME_ERROR_INFO.code);
        assert_eq!(patronymic.code(), PERSON_PATRONYMIC_ERROR_INFO.code);
        assert_ne!(surname.code(), PERSON_NAME_ERROR_INFO.code);
        assert!(person_surname().validate("Салтыков-Щедрин").is_ok());
        assert!(person_patronymic().validate("Ильинична").is_ok());
    }

    #[test]
    fn test_person_name_length_limit() {
        assert!(person_name().validate(&"а".repeat(200)).is_ok());
        assert!(person_name().validate(&"а".repeat(201)).is_err());
    }

    #[test]
    fn test_consecutive_specials() {
        assert!(has_consecutive_specials("a..b"));
        assert!(has_consecutive_specials("a \tb"));
        assert!(!has_consecutive_specials("a.-b"));
        assert!(!has_consecutive_specials("a. b"));
    }
}
