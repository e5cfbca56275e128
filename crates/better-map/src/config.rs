/// Label used when a map is created without a name.
pub const DEFAULT_NAME: &str = "unknown items";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Display label, only used by `Display` and diagnostics.
    pub name: String,
    /// Number of entries to reserve up front.
    pub capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            capacity: 0,
        }
    }
}

impl Config {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
