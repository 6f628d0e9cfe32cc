use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Names of every column after `id`, in the order they are reported.
pub const RECORD_FIELD_NAMES: [&str; 9] = [
    "version",
    "minVersion",
    "recommendedVersion",
    "updateMode",
    "updateMessage",
    "updateUrl",
    "isActive",
    "createdAt",
    "updatedAt",
];

/// One row of the `app_versions` table: a release and its update policy.
///
/// The struct maps column-for-column onto the table, so the camelCase column
/// names are kept through `sqlx` renames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct VersionRecord {
    pub id: i64,
    pub version: String,
    #[sqlx(rename = "minVersion")]
    pub min_version: String,
    #[sqlx(rename = "recommendedVersion")]
    pub recommended_version: String,
    /// Enum-like code such as `none`, `OPTIONAL` or `FORCE`.
    #[sqlx(rename = "updateMode")]
    pub update_mode: String,
    #[sqlx(rename = "updateMessage")]
    pub update_message: Option<String>,
    #[sqlx(rename = "updateUrl")]
    pub update_url: Option<String>,
    #[sqlx(rename = "isActive")]
    pub is_active: bool,
    #[sqlx(rename = "createdAt")]
    pub created_at: NaiveDateTime,
    #[sqlx(rename = "updatedAt")]
    pub updated_at: NaiveDateTime,
}

impl VersionRecord {
    /// Returns every field after `id` as `(name, value)` pairs, in
    /// `RECORD_FIELD_NAMES` order. Values use their `Display` form; a NULL
    /// column renders as `None`.
    pub fn labelled_values(&self) -> [(&'static str, String); 9] {
        let mut values = [
            self.version.clone(),
            self.min_version.clone(),
            self.recommended_version.clone(),
            self.update_mode.clone(),
            display_nullable(self.update_message.as_deref()),
            display_nullable(self.update_url.as_deref()),
            self.is_active.to_string(),
            self.created_at.to_string(),
            self.updated_at.to_string(),
        ]
        .into_iter();
        // Both arrays have nine entries, so `next()` always yields a value.
        RECORD_FIELD_NAMES.map(|name| (name, values.next().unwrap_or_default()))
    }
}

fn display_nullable(value: Option<&str>) -> String {
    value.unwrap_or("None").to_string()
}
