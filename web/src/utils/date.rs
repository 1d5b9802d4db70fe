use chrono::Local;

/// Today's calendar date as `YYYY-MM-DD`, the value the booking form hands
/// to its date input's `min` attribute.
pub fn today_ymd() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn today_ymd_round_trips_as_an_iso_date() {
        let today = today_ymd();
        assert_eq!(today.len(), 10);
        assert!(NaiveDate::parse_from_str(&today, "%Y-%m-%d").is_ok());
    }
}
