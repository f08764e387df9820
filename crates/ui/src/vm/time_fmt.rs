use chrono::{DateTime, Utc};

/// Short "last updated" stamp for data fetched from the provider.
#[must_use]
pub fn format_updated_at(value: DateTime<Utc>) -> String {
    value.format("Updated %b %-d, %Y %H:%M UTC").to_string()
}
