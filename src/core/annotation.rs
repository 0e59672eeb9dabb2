//! Frei platzierte Annotationen (Notiz, Fläche, Pfeil) in Canvas-Koordinaten.

use super::new_id;
use serde::{Deserialize, Serialize};

/// Art der Annotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationKind {
    #[default]
    Note,
    Area,
    Arrow,
}

/// Absolute Canvas-Position (nicht normalisiert)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CanvasPoint {
    pub x: f64,
    pub y: f64,
}

impl CanvasPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Ausdehnung einer Annotation
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AnnotationSize {
    pub width: f64,
    pub height: f64,
}

/// Stil-Angaben einer Annotation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

/// Eine Annotation ohne Bezug zu Komponenten oder Verbindungen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: AnnotationKind,
    pub content: String,
    pub position: CanvasPoint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<AnnotationSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<AnnotationStyle>,
}

impl Annotation {
    /// Erstellt eine Annotation mit frisch vergebener ID.
    pub fn new(kind: AnnotationKind, content: impl Into<String>, position: CanvasPoint) -> Self {
        Self {
            id: new_id(),
            kind,
            content: content.into(),
            position,
            size: None,
            style: None,
        }
    }

    /// Erstellt eine Notiz an der gegebenen Canvas-Position.
    pub fn note(content: impl Into<String>, position: CanvasPoint) -> Self {
        Self::new(AnnotationKind::Note, content, position)
    }

    /// Übernimmt alle in `update` gesetzten Felder.
    pub fn apply_update(&mut self, update: AnnotationUpdate) {
        if let Some(kind) = update.kind {
            self.kind = kind;
        }
        if let Some(content) = update.content {
            self.content = content;
        }
        if let Some(position) = update.position {
            self.position = position;
        }
        if let Some(size) = update.size {
            self.size = size;
        }
        if let Some(style) = update.style {
            self.style = style;
        }
    }
}

/// Partielles Update einer Annotation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnotationUpdate {
    pub kind: Option<AnnotationKind>,
    pub content: Option<String>,
    pub position: Option<CanvasPoint>,
    pub size: Option<Option<AnnotationSize>>,
    pub style: Option<Option<AnnotationStyle>>,
}
