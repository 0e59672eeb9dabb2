//! Core-Domänentypen: Komponenten, Verbindungen, Annotationen, Map-Inhalt, Kamera.

pub mod annotation;
pub mod camera;
pub mod canvas;
/// Core-Datenmodelle einer Wardley-Map
///
/// Dieses Modul definiert die Haupt-Datenstrukturen:
/// - MapContent: Container für Komponenten, Verbindungen und Annotationen
/// - Component: Knoten mit Position auf Sichtbarkeit/Evolution
/// - Connection: gerichtete Kante zwischen zwei Komponenten
pub mod component;
pub mod connection;
pub mod document;
mod id;
pub mod map_content;
pub mod meta;

pub use annotation::{
    Annotation, AnnotationKind, AnnotationSize, AnnotationStyle, AnnotationUpdate, CanvasPoint,
};
pub use camera::Camera2D;
pub use canvas::CanvasLayout;
pub use component::{
    Component, ComponentKind, ComponentLabel, ComponentShape, ComponentStyle, ComponentUpdate,
    LabelOffset, Position,
};
pub use connection::{Connection, ConnectionKind, ConnectionStyle, ConnectionUpdate};
pub use document::MapDocument;
pub use id::new_id;
pub use map_content::MapContent;
pub use meta::{MapMeta, DEFAULT_MAP_TITLE};
