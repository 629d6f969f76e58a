use chrono::NaiveDate;

/// Whole days between the hire date and `now`, never negative.
///
/// Returns `None` when no hire date is recorded. A hire date in the future counts as zero days.
pub fn compute_days_employed(hired_on: Option<NaiveDate>, now: NaiveDate) -> Option<u32> {
    let hired_on = hired_on?;
    let days = now.signed_duration_since(hired_on).num_days().max(0);
    Some(u32::try_from(days).unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid date")
    }

    #[test]
    fn missing_hire_date_has_no_tenure() {
        assert_eq!(compute_days_employed(None, today()), None);
    }

    #[test]
    fn same_day_hire_is_zero_days() {
        assert_eq!(compute_days_employed(Some(today()), today()), Some(0));
    }

    #[test]
    fn future_hire_dates_clamp_to_zero() {
        let next_month = today() + Duration::days(30);
        assert_eq!(compute_days_employed(Some(next_month), today()), Some(0));
    }

    #[test]
    fn counts_whole_days_across_month_boundaries() {
        let hired = today() - Duration::days(10);
        assert_eq!(compute_days_employed(Some(hired), today()), Some(10));

        let leap_hire = NaiveDate::from_ymd_opt(2024, 2, 28).expect("valid date");
        let after_leap = NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date");
        assert_eq!(compute_days_employed(Some(leap_hire), after_leap), Some(2));
    }
}
