//! Date range validators (inclusive)

use std::sync::LazyLock;

use chrono::NaiveDate;

use crate::foundation::{ErrorInfo, FnRule, create_rule};

pub static DATE_MIN_ERROR_INFO: LazyLock<ErrorInfo> =
    LazyLock::new(|| ErrorInfo::register("date_min", "Date is too early"));

pub static DATE_MAX_ERROR_INFO: LazyLock<ErrorInfo> =
    LazyLock::new(|| ErrorInfo::register("date_max", "Date is too late"));

/// On or after `min`.
pub fn min_date(min: NaiveDate) -> FnRule<NaiveDate> {
    create_rule(move |value: &NaiveDate, ctx| {
        if *value < min {
            return Err(ctx.create_error_with(
                &DATE_MIN_ERROR_INFO,
                Some(format!("Must not be earlier than {}", min.format("%d.%m.%Y")).into()),
            ));
        }
        Ok(())
    })
}

/// On or before `max`.
pub fn max_date(max: NaiveDate) -> FnRule<NaiveDate> {
    create_rule(move |value: &NaiveDate, ctx| {
        if *value > max {
            return Err(ctx.create_error_with(
                &DATE_MAX_ERROR_INFO,
                Some(format!("Must not be later than {}", max.format("%d.%m.%Y")).into()),
            ));
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Rule;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(min_date(day(2020, 1, 1)).validate(&day(2020, 1, 1)).is_ok());
        assert!(max_date(day(2020, 1, 1)).validate(&day(2020, 1, 1)).is_ok());
    }

    #[test]
    fn out_of_range_reports_bound() {
        let error = min_date(day(2020, 1, 1)).validate(&day(2019, 12, 31)).unwrap_err();
        assert_eq!(error.code(), DATE_MIN_ERROR_INFO.code);
        assert_eq!(error.message(), "Must not be earlier than 01.01.2020");

        let error = max_date(day(2020, 1, 1)).validate(&day(2020, 1, 2)).unwrap_err();
        assert_eq!(error.code(), DATE_MAX_ERROR_INFO.code);
    }
}
