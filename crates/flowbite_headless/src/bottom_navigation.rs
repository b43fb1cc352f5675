//! Bottom navigation layout tokens.

use serde::{Deserialize, Serialize};

/// Default number of grid columns.
pub const DEFAULT_COLUMNS: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
/// Visual style of a bottom navigation bar.
pub enum BottomNavigationStyle {
    /// Plain items.
    #[default]
    Default,
    /// Items separated by vertical rules.
    WithBorder,
}

impl BottomNavigationStyle {
    /// Stable token for the `data-ui-variant` attribute.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::WithBorder => "with-border",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
/// Number of equal-width columns in the bar. Always at least one.
pub struct GridColumns(u8);

impl GridColumns {
    /// Column count, clamped to at least one.
    pub fn new(columns: u8) -> Self {
        Self(columns.max(1))
    }

    /// Column count.
    pub fn get(self) -> u8 {
        self.0
    }

    /// `grid-template-columns` value for the container.
    pub fn template(self) -> String {
        format!("repeat({}, minmax(0, 1fr))", self.0)
    }

    /// Inline style for the item container.
    pub fn container_style(self) -> String {
        format!("display: grid; grid-template-columns: {};", self.template())
    }
}

impl Default for GridColumns {
    fn default() -> Self {
        Self(DEFAULT_COLUMNS)
    }
}

impl From<u8> for GridColumns {
    fn from(columns: u8) -> Self {
        Self::new(columns)
    }
}

impl From<GridColumns> for u8 {
    fn from(columns: GridColumns) -> Self {
        columns.0
    }
}
