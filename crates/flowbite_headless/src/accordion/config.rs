use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
/// Behavior mode of an accordion.
pub enum AccordionMode {
    /// At most one item may be open at a time.
    #[default]
    Collapse,
    /// Any number of items may be open.
    AlwaysOpen,
}

impl AccordionMode {
    /// Stable token for the `data-ui-mode` attribute.
    pub fn token(self) -> &'static str {
        match self {
            Self::Collapse => "collapse",
            Self::AlwaysOpen => "always-open",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
/// Visual style variant of an accordion. Presentational only.
pub enum AccordionStyle {
    /// Bordered group with rounded outer corners.
    #[default]
    Default,
    /// Each item rendered as its own card.
    Separated,
    /// No outer border; items divided by rules.
    Flush,
}

impl AccordionStyle {
    /// Stable token for the `data-ui-variant` attribute.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Separated => "separated",
            Self::Flush => "flush",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
/// Color scheme of an accordion. Presentational only.
pub enum AccordionColor {
    /// Neutral palette.
    #[default]
    Default,
    /// Brand/primary palette.
    Primary,
    /// Gray palette.
    Gray,
}

impl AccordionColor {
    /// Stable token for the `data-ui-tone` attribute.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Primary => "primary",
            Self::Gray => "gray",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "kebab-case")]
/// Per-instance accordion configuration. Re-applied on every configuration update.
pub struct AccordionConfig {
    /// Behavior mode.
    pub mode: AccordionMode,
    /// Visual style.
    pub style: AccordionStyle,
    /// Color scheme.
    pub color: AccordionColor,
}

impl AccordionConfig {
    /// Configuration with the given mode and default presentation.
    pub fn with_mode(mode: AccordionMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }
}
