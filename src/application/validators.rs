use chrono::{Days, NaiveDate};
use validator::ValidateEmail;

/// Validates that the input looks like a valid email address
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    !email.is_empty() && email.validate_email()
}

/// Whether `date` falls in the bookable range `[today, today + window_days]`.
///
/// A window that runs past the last representable date has no upper bound.
pub fn is_within_booking_window(date: NaiveDate, today: NaiveDate, window_days: u32) -> bool {
    if date < today {
        return false;
    }
    match today.checked_add_days(Days::new(window_days.into())) {
        Some(last) => date <= last,
        None => true,
    }
}
