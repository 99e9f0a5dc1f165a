/// Database row types — these map directly to SQLite rows.
/// Distinct from the corkboard-types API models to keep the DB layer
/// independent.

#[derive(Debug, Clone, PartialEq)]
pub struct MessageRow {
    pub id: i64,
    pub content: String,
    pub username: String,
}
