//! wire-boundary translation for absent values
//!
//! The document keeps a single internal representation for absence
//! (`Option::None`). The backend schema expects absent text as `""` and folds
//! it back to null itself, so the translation lives here and nowhere else.

/// serde `with` module for optional text fields: `None` serializes as `""`,
/// and `""`/null/whitespace deserialize back to `None`.
pub(crate) mod texto {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value.as_deref().unwrap_or(""))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()))
    }
}
