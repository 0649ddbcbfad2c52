//! Emotion catalog model.
//!
//! # Responsibility
//! - Define the fixed, ordered palette of emotions a user can record.
//! - Provide display fallback for ids that are not in the palette.
//!
//! # Invariants
//! - Catalog ids are unique.
//! - Catalog order is the tie-break order for statistics and legend display.
//! - Lookups never fail: unknown ids resolve to the fallback display.

use serde::Serialize;

/// Label key used for ids missing from the catalog.
pub const UNKNOWN_LABEL_KEY: &str = "unknown";
/// Emoji used for ids missing from the catalog.
pub const UNKNOWN_EMOJI: &str = "❓";
/// Color used for ids missing from the catalog.
pub const UNKNOWN_COLOR: &str = "#E0E0E0";

/// One selectable emotion with its display metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmotionDefinition {
    /// Stable id persisted in entries (`emotion` field).
    pub id: &'static str,
    /// Translation key resolved by the presentation layer.
    pub label_key: &'static str,
    pub emoji: &'static str,
    /// CSS-style `#rrggbbaa` color.
    pub color: &'static str,
}

const BUILTIN_EMOTIONS: &[EmotionDefinition] = &[
    EmotionDefinition {
        id: "happy",
        label_key: "happy",
        emoji: "😊",
        color: "#f87fb1c7",
    },
    EmotionDefinition {
        id: "amazing",
        label_key: "amazing",
        emoji: "🤩",
        color: "#9efd9be0",
    },
    EmotionDefinition {
        id: "love",
        label_key: "love",
        emoji: "🥰",
        color: "#fc1aa5ff",
    },
    EmotionDefinition {
        id: "satisfied",
        label_key: "satisfied",
        emoji: "🤗",
        color: "#b0cec3ff",
    },
    EmotionDefinition {
        id: "neutral",
        label_key: "neutral",
        emoji: "😌",
        color: "#d1d3cfe7",
    },
    EmotionDefinition {
        id: "sad",
        label_key: "sad",
        emoji: "😔",
        color: "#9ea8ffe5",
    },
    EmotionDefinition {
        id: "worried",
        label_key: "worried",
        emoji: "😰",
        color: "#e4b0fcd5",
    },
    EmotionDefinition {
        id: "angry",
        label_key: "angry",
        emoji: "😡",
        color: "#e4907bff",
    },
    EmotionDefinition {
        id: "tired",
        label_key: "tired",
        emoji: "😴",
        color: "#b2cffcff",
    },
];

/// Display fields resolved for any emotion id, known or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmotionDisplay {
    pub label_key: &'static str,
    pub emoji: &'static str,
    pub color: &'static str,
    /// `false` when the fallback display was used.
    pub known: bool,
}

/// Read-only ordered view over emotion definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmotionCatalog {
    definitions: &'static [EmotionDefinition],
}

impl EmotionCatalog {
    /// Returns the palette shipped with the app.
    pub fn builtin() -> Self {
        Self {
            definitions: BUILTIN_EMOTIONS,
        }
    }

    /// Wraps a caller-provided static palette.
    ///
    /// Callers are responsible for id uniqueness.
    pub fn from_static(definitions: &'static [EmotionDefinition]) -> Self {
        Self { definitions }
    }

    pub fn definitions(&self) -> &'static [EmotionDefinition] {
        self.definitions
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&'static EmotionDefinition> {
        self.definitions.iter().find(|definition| definition.id == id)
    }

    /// Returns the catalog position of `id`.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.definitions
            .iter()
            .position(|definition| definition.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Resolves display fields, falling back for unknown ids.
    pub fn display(&self, id: &str) -> EmotionDisplay {
        match self.get(id) {
            Some(definition) => EmotionDisplay {
                label_key: definition.label_key,
                emoji: definition.emoji,
                color: definition.color,
                known: true,
            },
            None => EmotionDisplay {
                label_key: UNKNOWN_LABEL_KEY,
                emoji: UNKNOWN_EMOJI,
                color: UNKNOWN_COLOR,
                known: false,
            },
        }
    }
}

impl Default for EmotionCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
