//! Komponente der Wardley-Map: ein Knoten auf den Achsen Sichtbarkeit/Evolution.

use super::new_id;
use serde::{Deserialize, Serialize};

/// Semantische Rolle einer Komponente
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    /// Nutzer am oberen Ende der Wertschöpfungskette (MapScript: `anchor`)
    User,
    /// Bedürfnis
    Need,
    /// Fähigkeit (MapScript: `component`)
    #[default]
    Capability,
}

/// Normalisierte Position auf beiden Achsen.
///
/// Beide Werte liegen konzeptionell in `[0, 1]`. Die Engine klemmt sie nicht,
/// das übernimmt die UI-Grenze bei Platzierung und Drag (siehe `CanvasLayout`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Y-Achse: 0 = oben/sichtbar, 1 = unten/unsichtbar
    pub visibility: f64,
    /// X-Achse: 0 = Genesis, 1 = Commodity
    pub evolution: f64,
}

impl Position {
    /// Erstellt eine Position aus Sichtbarkeit und Evolution.
    pub const fn new(visibility: f64, evolution: f64) -> Self {
        Self {
            visibility,
            evolution,
        }
    }

    /// Verschiebt beide Achsen um `delta`, nach oben auf 1.0 begrenzt.
    pub fn offset_capped(self, delta: f64) -> Self {
        Self {
            visibility: (self.visibility + delta).min(1.0),
            evolution: (self.evolution + delta).min(1.0),
        }
    }

    /// Klemmt beide Achsen auf `[0, 1]`.
    pub fn clamped(self) -> Self {
        Self {
            visibility: self.visibility.clamp(0.0, 1.0),
            evolution: self.evolution.clamp(0.0, 1.0),
        }
    }
}

/// Versatz eines Labels relativ zur Komponente (Canvas-Pixel)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LabelOffset {
    pub x: f64,
    pub y: f64,
}

/// Anzeige-Label einer Komponente
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentLabel {
    /// Label-Text
    pub text: String,
    /// Optionaler Versatz
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<LabelOffset>,
}

impl ComponentLabel {
    /// Erstellt ein Label ohne Versatz.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            offset: None,
        }
    }
}

/// Form der Komponenten-Darstellung
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentShape {
    Circle,
    Square,
    Custom,
}

/// Rein kosmetische Stil-Angaben
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComponentStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<ComponentShape>,
}

/// Eine Komponente der Map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Eindeutige, unveränderliche ID
    pub id: String,
    /// Anzeigename (per Konvention nicht leer)
    pub name: String,
    /// Rolle der Komponente
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    /// Position auf den normalisierten Achsen
    pub position: Position,
    /// Optionales Label (MapScript: `(label)`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<ComponentLabel>,
    /// Trägheit gegenüber Evolution (nur Metadaten)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inertia: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outsource: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buy: Option<bool>,
    /// Stil-Angaben für den Renderer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ComponentStyle>,
    /// Freitext-Notizen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Component {
    /// Erstellt eine neue Komponente mit frisch vergebener ID.
    pub fn new(name: impl Into<String>, kind: ComponentKind, position: Position) -> Self {
        Self::with_id(new_id(), name, kind, position)
    }

    /// Erstellt eine Komponente mit vorgegebener ID.
    pub fn with_id(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: ComponentKind,
        position: Position,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            position,
            label: None,
            inertia: None,
            pipeline: None,
            outsource: None,
            build: None,
            buy: None,
            style: None,
            notes: None,
        }
    }

    /// Setzt das Label (Builder-Stil).
    pub fn with_label(mut self, text: impl Into<String>) -> Self {
        self.label = Some(ComponentLabel::new(text));
        self
    }

    /// Gibt den anzuzeigenden Text zurück: Label-Text falls gesetzt und nicht leer, sonst Name.
    pub fn display_text(&self) -> &str {
        match &self.label {
            Some(label) if !label.text.is_empty() => &label.text,
            _ => &self.name,
        }
    }

    /// Übernimmt alle in `update` gesetzten Felder (flacher Merge).
    pub fn apply_update(&mut self, update: ComponentUpdate) {
        let ComponentUpdate {
            name,
            kind,
            position,
            label,
            inertia,
            pipeline,
            outsource,
            build,
            buy,
            style,
            notes,
        } = update;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(kind) = kind {
            self.kind = kind;
        }
        if let Some(position) = position {
            self.position = position;
        }
        if let Some(label) = label {
            self.label = label;
        }
        if let Some(inertia) = inertia {
            self.inertia = inertia;
        }
        if let Some(pipeline) = pipeline {
            self.pipeline = pipeline;
        }
        if let Some(outsource) = outsource {
            self.outsource = outsource;
        }
        if let Some(build) = build {
            self.build = build;
        }
        if let Some(buy) = buy {
            self.buy = buy;
        }
        if let Some(style) = style {
            self.style = style;
        }
        if let Some(notes) = notes {
            self.notes = notes;
        }
    }
}

/// Partielles Update einer Komponente.
///
/// `None` lässt ein Feld unverändert. Bei optionalen Feldern setzt
/// `Some(None)` das Feld zurück. Die ID ist nicht änderbar.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentUpdate {
    pub name: Option<String>,
    pub kind: Option<ComponentKind>,
    pub position: Option<Position>,
    pub label: Option<Option<ComponentLabel>>,
    pub inertia: Option<Option<f64>>,
    pub pipeline: Option<Option<bool>>,
    pub outsource: Option<Option<bool>>,
    pub build: Option<Option<bool>>,
    pub buy: Option<Option<bool>>,
    pub style: Option<Option<ComponentStyle>>,
    pub notes: Option<Option<String>>,
}

impl ComponentUpdate {
    /// Update, das nur die Position ändert (Drag-Ende).
    pub fn position(position: Position) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    /// Update, das nur den Namen ändert.
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Gibt `true` zurück, wenn kein Feld gesetzt ist.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
