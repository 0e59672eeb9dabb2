//! Use-Case-Funktionen für das Editieren des Map-Inhalts.
//!
//! Aufgeteilt nach Element:
//! - `components`: Komponenten hinzufügen, ändern, löschen (Löschen kaskadiert)
//! - `connections`: Verbindungen hinzufügen, ändern, löschen
//! - `annotations`: Annotationen (ohne History)
//! - `metadata`: Titel, Zweck, Umfang

mod annotations;
mod components;
mod connections;
mod metadata;

pub use annotations::{add_annotation, delete_annotation, update_annotation};
pub(crate) use components::prune_connection_selection;
pub use components::{add_component, delete_component, update_component};
pub use connections::{add_connection, delete_connection, update_connection};
pub use metadata::{set_purpose, set_scope, set_title};
