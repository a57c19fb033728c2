use chrono::Utc;

pub type DateTime = chrono::DateTime<Utc>;
