use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod cache;
pub mod entities;
pub mod policies;
pub mod services;

#[cfg(test)]
pub mod test_support;

#[derive(Clone, Debug)]
pub struct LadleConfig {
    pub database: DatabaseConfig,
    /// Base URL prepended to canonical resource locations, e.g.
    /// `http://localhost:3000` yields `http://localhost:3000/recipes/<id>`.
    pub public_url: String,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
