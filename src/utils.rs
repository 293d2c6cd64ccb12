use chrono::{Local, NaiveDate};

/// Today's date on the local calendar.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Discord mention syntax for a user id.
pub fn mention(user_id: &str) -> String {
    format!("<@{user_id}>")
}
