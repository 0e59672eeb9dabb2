use crate::core::MapContent;
use std::sync::Arc;

/// Snapshot reduziert auf die für Undo/Redo relevanten Teile.
///
/// Nutzt Arc-Clone (Copy-on-Write): Das Erstellen eines Snapshots ist O(1),
/// der eigentliche Klon des Map-Inhalts passiert erst beim nächsten
/// `Arc::make_mut()` in einem Use-Case.
///
/// Selektion, Metadaten und View sind nicht Teil des Snapshots.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Komponenten, Verbindungen und Annotationen (Arc-Klon für O(1)-Snapshot)
    pub content: Arc<MapContent>,
}

impl Snapshot {
    /// Erstellt einen O(1)-Snapshot durch Arc-Clone statt Deep-Clone.
    pub fn from_state(state: &crate::app::AppState) -> Self {
        Self {
            content: state.content.clone(),
        }
    }

    /// Stellt den Snapshot wieder her (O(1) Arc-Zuweisung).
    pub fn apply_to(self, state: &mut crate::app::AppState) {
        state.content = self.content;
    }
}

/// Undo/Redo-Manager mit Snapshotting und begrenzter Tiefe.
#[derive(Debug)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth.min(64)),
            redo_stack: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Legt einen Snapshot (Zustand VOR der Mutation) ab und leert den Redo-Stack.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        push_bounded(&mut self.undo_stack, snap, self.max_depth);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Anzahl der Undo-Schritte.
    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Anzahl der Redo-Schritte.
    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Pop undo stack and push `current` onto redo stack; returns the snapshot to apply.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let prev = self.undo_stack.pop()?;
        push_bounded(&mut self.redo_stack, current, self.max_depth);
        Some(prev)
    }

    /// Pop redo stack and push `current` onto undo stack; returns the snapshot to apply.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        push_bounded(&mut self.undo_stack, current, self.max_depth);
        Some(next)
    }

    /// Verwirft beide Stacks.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Ändert die maximale Tiefe; überzählige älteste Einträge werden verworfen.
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth.max(1);
        for stack in [&mut self.undo_stack, &mut self.redo_stack] {
            if stack.len() > self.max_depth {
                let excess = stack.len() - self.max_depth;
                stack.drain(..excess);
            }
        }
    }
}

fn push_bounded(stack: &mut Vec<Snapshot>, snap: Snapshot, max_depth: usize) {
    if !stack.is_empty() && stack.len() >= max_depth {
        stack.remove(0);
    }
    stack.push(snap);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Component, ComponentKind, Position};

    fn make_snapshot_with_component_count(count: usize) -> Snapshot {
        let mut content = MapContent::new();
        for i in 0..count {
            content.add_component(Component::new(
                format!("C{i}"),
                ComponentKind::Capability,
                Position::new(0.1, 0.2),
            ));
        }
        Snapshot {
            content: Arc::new(content),
        }
    }

    #[test]
    fn empty_history_cannot_undo_or_redo() {
        let history = EditHistory::new_with_capacity(10);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_restores_previous_snapshot() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_component_count(2));

        let restored = history
            .pop_undo_with_current(make_snapshot_with_component_count(5))
            .expect("undo vorhanden");

        assert_eq!(restored.content.component_count(), 2);
        assert!(!history.can_undo());
        assert!(history.can_redo());
    }

    #[test]
    fn redo_restores_undone_snapshot() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_component_count(2));
        let _ = history.pop_undo_with_current(make_snapshot_with_component_count(5));

        let redone = history
            .pop_redo_with_current(make_snapshot_with_component_count(2))
            .expect("redo vorhanden");

        assert_eq!(redone.content.component_count(), 5);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn new_record_clears_redo_stack() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_component_count(1));
        let _ = history.pop_undo_with_current(make_snapshot_with_component_count(3));
        assert!(history.can_redo());

        history.record_snapshot(make_snapshot_with_component_count(7));
        assert!(!history.can_redo());
    }

    #[test]
    fn respects_max_depth() {
        let mut history = EditHistory::new_with_capacity(3);
        for i in 1..=5 {
            history.record_snapshot(make_snapshot_with_component_count(i));
        }
        assert_eq!(history.undo_len(), 3);

        // Älteste Einträge (1, 2) wurden verworfen
        let mut last = 0;
        while let Some(snap) =
            history.pop_undo_with_current(make_snapshot_with_component_count(99))
        {
            last = snap.content.component_count();
        }
        assert_eq!(last, 3);
    }

    #[test]
    fn shrinking_max_depth_drops_oldest() {
        let mut history = EditHistory::new_with_capacity(10);
        for i in 1..=6 {
            history.record_snapshot(make_snapshot_with_component_count(i));
        }
        history.set_max_depth(2);
        assert_eq!(history.undo_len(), 2);

        let top = history
            .pop_undo_with_current(make_snapshot_with_component_count(0))
            .expect("undo vorhanden");
        assert_eq!(top.content.component_count(), 6);
    }

    #[test]
    fn pop_on_empty_returns_none() {
        let mut history = EditHistory::new_with_capacity(10);
        assert!(history
            .pop_undo_with_current(make_snapshot_with_component_count(1))
            .is_none());
        assert!(history
            .pop_redo_with_current(make_snapshot_with_component_count(1))
            .is_none());
        assert!(!history.can_redo());
    }

    #[test]
    fn snapshot_shares_content_until_mutation() {
        let snap = make_snapshot_with_component_count(1);
        let mut live = snap.content.clone();
        assert!(Arc::ptr_eq(&snap.content, &live));

        Arc::make_mut(&mut live).add_component(Component::new(
            "X",
            ComponentKind::User,
            Position::default(),
        ));
        assert!(!Arc::ptr_eq(&snap.content, &live));
        assert_eq!(snap.content.component_count(), 1);
        assert_eq!(live.component_count(), 2);
    }
}
