//! Block timestamps to calendar months (UTC, proleptic Gregorian).
//!
//! Dues are settled per calendar month. A month is encoded as
//! `year * 12 + (month - 1)`, so consecutive months differ by one and the
//! value is never zero for any block timestamp.

const SECONDS_PER_DAY: u64 = 86_400;

/// Days between 0000-03-01 and 1970-01-01.
const EPOCH_SHIFT_DAYS: u64 = 719_468;
const DAYS_PER_ERA: u64 = 146_097;

pub fn epoch_month(timestamp: u64) -> u64 {
    let (year, month) = year_month(timestamp);
    year * 12 + (month - 1)
}

/// Returns `(year, month)` with `month` in `1..=12`.
pub fn year_month(timestamp: u64) -> (u64, u64) {
    let z = timestamp / SECONDS_PER_DAY + EPOCH_SHIFT_DAYS;
    let era = z / DAYS_PER_ERA;
    let day_of_era = z - era * DAYS_PER_ERA;
    let year_of_era =
        (day_of_era - day_of_era / 1_460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    // Months counted from March so the leap day falls at the end of the year.
    let shifted_month = (5 * day_of_year + 2) / 153;
    let month = if shifted_month < 10 {
        shifted_month + 3
    } else {
        shifted_month - 9
    };
    let year = year_of_era + era * 400 + u64::from(month <= 2);
    (year, month)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_epoch_is_january_1970() {
        assert_eq!(year_month(0), (1970, 1));
        assert_eq!(epoch_month(0), 1970 * 12);
    }

    #[test]
    fn month_boundary() {
        // 2024-01-31T23:59:59Z and 2024-02-01T00:00:00Z
        assert_eq!(year_month(1_706_745_599), (2024, 1));
        assert_eq!(year_month(1_706_745_600), (2024, 2));
        assert_eq!(epoch_month(1_706_745_600) - epoch_month(1_706_745_599), 1);
    }

    #[test]
    fn leap_day_and_year_end() {
        // 2024-02-29T12:00:00Z
        assert_eq!(year_month(1_709_208_000), (2024, 2));
        // 2023-12-31T23:59:59Z rolls into 2024-01
        assert_eq!(year_month(1_704_067_199), (2023, 12));
        assert_eq!(year_month(1_704_067_200), (2024, 1));
        // 2000-03-01, after a 400-year leap day
        assert_eq!(year_month(951_868_800), (2000, 3));
    }

    #[test]
    fn consecutive_months_are_adjacent() {
        // 2026-10-15 and 2026-11-01
        assert_eq!(epoch_month(1_793_491_200), epoch_month(1_792_022_400) + 1);
    }
}
