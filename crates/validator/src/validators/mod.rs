//! Built-in leaf rules
//!
//! Every rule here is produced through [`create_rule`](crate::foundation::create_rule),
//! so each one supports `.exclude(..)` and `.with_message(..)`, and each
//! reports its own error code.
//!
//! - **Length**: [`min_length`], [`max_length`], [`min_items`], [`max_items`]
//! - **Numeric**: [`min`], [`max`], [`integer`], [`positive_number`]
//! - **Dates**: [`min_date`], [`max_date`]
//! - **Patterns**: [`pattern`], [`only_number`], [`contains_numbers`]
//! - **Content**: [`email`], [`guid`], [`mobile_phone`]
//! - **Text**: [`text_field`], [`person_name`], [`person_surname`], [`person_patronymic`]
//! - **Identifiers**: [`inn_ul`], [`inn_ip`], [`kpp`], [`snils`], [`ogrn_ul`], [`ogrn_ip`]
//! - **Passport**: [`passport_series`], [`passport_number`], [`passport_code`]

pub mod content;
pub mod date;
pub mod identifiers;
pub mod length;
pub mod numeric;
pub mod passport;
pub mod pattern;
pub mod phone;
pub mod text;

pub use content::{
    EMAIL_MAX_LENGTH, GUID_ERROR_INFO, INVALID_EMAIL_ERROR_INFO, LENGTH_EMAIL_ERROR_INFO, email,
    guid,
};
pub use date::{DATE_MAX_ERROR_INFO, DATE_MIN_ERROR_INFO, max_date, min_date};
pub use identifiers::{
    INN_IP_ERROR_INFO, INN_UL_ERROR_INFO, INVALID_KPP_ERROR_INFO,
    KPP_DOUBLE_ZERO_START_ERROR_INFO, KPP_ZEROS_ONLY_ERROR_INFO, OGRN_IP_ERROR_INFO,
    OGRN_UL_ERROR_INFO, SNILS_ERROR_INFO, inn_ip, inn_ul, kpp, ogrn_ip, ogrn_ul, snils,
};
pub use length::{
    ARRAY_MAX_ERROR_INFO, ARRAY_MIN_ERROR_INFO, STRING_MAX_ERROR_INFO, STRING_MIN_ERROR_INFO,
    max_items, max_length, min_items, min_length,
};
pub use numeric::{
    INTEGER_ERROR_INFO, MAX_ERROR_INFO, MIN_ERROR_INFO, POSITIVE_NUMBER_ERROR_INFO, integer, max,
    min, positive_number,
};
pub use passport::{
    PASSPORT_CODE_ERROR_INFO, PASSPORT_CODE_LENGTH_ERROR_INFO,
    PASSPORT_CODE_ONLY_DIGITS_ERROR_INFO, PASSPORT_NUMBER_ERROR_INFO,
    PASSPORT_NUMBER_LENGTH_ERROR_INFO, PASSPORT_NUMBER_ONLY_DIGITS_ERROR_INFO,
    PASSPORT_SERIES_ERROR_INFO, PASSPORT_SERIES_LENGTH_ERROR_INFO,
    PASSPORT_SERIES_ONLY_DIGITS_ERROR_INFO, passport_code, passport_number, passport_series,
};
pub use pattern::{
    CONTAINS_NUMBERS_ERROR_INFO, ONLY_NUMBER_ERROR_INFO, PATTERN_ERROR_INFO, contains_numbers,
    only_number, pattern,
};
pub use phone::{MOBILE_PHONE_ERROR_INFO, mobile_phone};
pub use text::{
    INVALID_TEXT_FIELD_ERROR_INFO, LENGTH_TEXT_FIELD_ERROR_INFO, PERSON_NAME_ERROR_INFO,
    PERSON_PATRONYMIC_ERROR_INFO, PERSON_SURNAME_ERROR_INFO, TEXT_FIELD_MAX_LENGTH,
    TextFieldParams, person_name, person_patronymic, person_surname, text_field, text_field_with,
    text_field_with_length,
};
