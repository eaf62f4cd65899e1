//! read-only view over the external form surface
//!
//! The form itself (layout, labels, which controls exist) is outside this
//! crate. The pipeline only ever asks for a named field's current value, so
//! the seam is a trait and the builder can run against any implementation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub trait FormSurface {
    /// Current value of a named input. Unknown or missing fields read as
    /// absent rather than failing; the form is the only source of truth.
    fn read(&self, key: &str) -> Option<String>;

    /// Value carried by the selected member of a mutually-exclusive group,
    /// or absent when nothing is selected.
    fn read_choice(&self, group: &str) -> Option<String>;
}

/// In-memory form surface, used by the demo binary (loaded from a JSON
/// snapshot) and by the tests.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MemoryForm {
    #[serde(default)]
    pub fields: HashMap<String, String>,
    #[serde(default)]
    pub choices: HashMap<String, String>,
}

impl MemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, value: &str) -> &mut Self {
        self.fields.insert(key.to_string(), value.to_string());
        self
    }

    pub fn choose(&mut self, group: &str, value: &str) -> &mut Self {
        self.choices.insert(group.to_string(), value.to_string());
        self
    }
}

impl FormSurface for MemoryForm {
    fn read(&self, key: &str) -> Option<String> {
        self.fields.get(key).cloned()
    }

    fn read_choice(&self, group: &str) -> Option<String> {
        self.choices.get(group).cloned()
    }
}
