//! Time helpers.

use chrono::{Datelike, Local};

/// Current calendar year in the visitor's local time, for the footer stamp.
#[must_use]
pub fn current_year() -> i32 {
    Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_a_plausible_current_year() {
        let year = current_year();
        assert!((2024..2200).contains(&year));
    }
}
