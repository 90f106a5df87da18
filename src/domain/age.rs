use time::Date;

/// Whole years elapsed between `birth` and `today`.
///
/// The year difference is reduced by one while this year's birthday is still
/// ahead, comparing month first and day second.
pub fn age_on(birth: Date, today: Date) -> i32 {
    let years = today.year() - birth.year();
    let today_key = (today.month() as u8, today.day());
    let birth_key = (birth.month() as u8, birth.day());
    if today_key < birth_key { years - 1 } else { years }
}
