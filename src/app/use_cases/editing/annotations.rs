//! Use-Case: Annotationen. Keine History-Einträge.

use crate::app::AppState;
use crate::core::{Annotation, AnnotationUpdate};

/// Hängt eine Annotation an.
pub fn add_annotation(state: &mut AppState, annotation: Annotation) {
    log::debug!("Annotation hinzugefügt: {} ({:?})", annotation.id, annotation.kind);
    state.content_mut().add_annotation(annotation);
}

/// Übernimmt die gesetzten Felder von `update` in die Annotation `id`.
pub fn update_annotation(state: &mut AppState, id: &str, update: AnnotationUpdate) {
    if state.content.annotation(id).is_none() {
        log::debug!("Update ignoriert: Annotation {} existiert nicht", id);
        return;
    }
    state.content_mut().update_annotation(id, update);
}

/// Löscht die Annotation `id`.
pub fn delete_annotation(state: &mut AppState, id: &str) {
    if state.content.annotation(id).is_none() {
        log::debug!("Löschen ignoriert: Annotation {} existiert nicht", id);
        return;
    }
    state.content_mut().remove_annotation(id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CanvasPoint;

    #[test]
    fn annotation_edits_skip_history() {
        let mut state = AppState::new();
        let note = Annotation::note("Hinweis", CanvasPoint::new(10.0, 20.0));
        let id = note.id.clone();

        add_annotation(&mut state, note);
        update_annotation(
            &mut state,
            &id,
            AnnotationUpdate {
                content: Some("Geändert".into()),
                ..Default::default()
            },
        );
        assert_eq!(
            state.content.annotation(&id).map(|a| a.content.as_str()),
            Some("Geändert")
        );

        delete_annotation(&mut state, &id);
        assert_eq!(state.annotation_count(), 0);
        assert!(!state.can_undo());
    }
}
