//! Use-Cases der Application-Layer-Orchestrierung.
//!
//! Jede Funktion nimmt `&mut AppState` und ist damit auch ohne Controller nutzbar.

pub mod clipboard;
pub mod document;
pub mod editing;
pub mod file_io;
pub mod history;
pub mod selection;
pub mod view;
