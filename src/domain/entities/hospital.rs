//! Domain entity representing a registered hospital.

use chrono::{DateTime, Utc};

/// A hospital record as stored in the registry.
///
/// `id` and `created_at` are assigned by the system on registration and never
/// change afterwards. The remaining fields are replaced as a whole on update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hospital {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub capacity: i64,
    pub created_at: DateTime<Utc>,
}

impl Hospital {
    /// Creates a new Hospital instance.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let hospital = Hospital::new(
    ///     1,
    ///     "General Hospital".to_string(),
    ///     "1 Main St".to_string(),
    ///     "+15551234567".to_string(),
    ///     250,
    ///     Utc::now(),
    /// );
    /// ```
    pub fn new(
        id: i64,
        name: String,
        address: String,
        phone: String,
        capacity: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            address,
            phone,
            capacity,
            created_at,
        }
    }
}

/// The user-supplied fields of a hospital.
///
/// Used both for registration and for full replacement on update. Instances
/// are only built from validated request payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHospital {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub capacity: i64,
}
