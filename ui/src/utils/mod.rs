// Utility functions
use chrono::{DateTime, NaiveDateTime, Utc};

pub fn format_datetime(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d").to_string()
}

pub fn format_relative_time(dt: &DateTime<Utc>) -> String {
    relative_time_since(dt, &Utc::now())
}

pub fn relative_time_since(dt: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(*dt);

    if duration.num_seconds() < 60 {
        "just now".to_string()
    } else if duration.num_minutes() < 60 {
        format!("{} minutes ago", duration.num_minutes())
    } else if duration.num_hours() < 24 {
        format!("{} hours ago", duration.num_hours())
    } else if duration.num_days() < 30 {
        format!("{} days ago", duration.num_days())
    } else {
        format_date(dt)
    }
}

/// Leading `max_chars` characters of a reference id followed by "...".
pub fn abbreviate_reference(s: &str, max_chars: usize) -> String {
    let head: String = s.chars().take(max_chars).collect();
    format!("{}...", head)
}

/// Whole-dollar price with thousands separators, e.g. `$1,990`.
pub fn format_price(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("${}", grouped)
}

pub fn format_amount(amount: f64, currency: &str) -> String {
    match currency {
        "USD" => format!("${:.2}", amount),
        other => format!("{:.2} {}", amount, other),
    }
}

pub fn validate_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && email.len() < 255
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Initials for avatar badges: "John Doe" -> "JD".
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}
