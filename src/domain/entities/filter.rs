//! Filter criteria for character list requests.

use serde::Deserialize;

/// Filter values for one page request.
///
/// An empty string means "no filter on this field". A new set replaces the previous
/// one wholesale; sets are never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FilterSet {
    pub name: String,
    pub gender: String,
    pub culture: String,
    pub born: String,
    pub died: String,
}

impl FilterSet {
    /// Returns `(key, value)` pairs for every non-empty filter, in a fixed key order.
    pub fn active(&self) -> Vec<(&'static str, &str)> {
        [
            ("name", self.name.as_str()),
            ("gender", self.gender.as_str()),
            ("culture", self.culture.as_str()),
            ("born", self.born.as_str()),
            ("died", self.died.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.active().is_empty()
    }
}
