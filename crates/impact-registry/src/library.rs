use serde::Serialize;
use serde_json::Value;

/// A typed view of one entry in the merged index.
///
/// Index entries are free-form JSON; only the fields below are picked out,
/// and any of them may be missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryInfo {
    pub name: String,
    pub description: Option<String>,
    pub homepage: Option<String>,
    pub versions: Vec<String>,
}

impl LibraryInfo {
    pub fn from_entry(name: &str, value: &Value) -> Self {
        let text = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .map(String::from)
        };

        let versions = match value.get("versions") {
            Some(Value::Object(map)) => map.keys().cloned().collect(),
            Some(Value::Array(items)) => {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(String::from)
                    .collect()
            }
            _ => Vec::new(),
        };

        Self {
            name: name.to_string(),
            description: text("description"),
            homepage: text("homepage"),
            versions,
        }
    }

    /// The last listed version, if any.
    pub fn latest_version(&self) -> Option<&str> {
        self.versions.last().map(String::as_str)
    }
}
