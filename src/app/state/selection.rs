use indexmap::IndexSet;

/// Auswahlbezogener Anwendungszustand
///
/// Komponenten- und Verbindungs-Selektion schließen sich gegenseitig aus.
/// `IndexSet` hält die Auswahl-Reihenfolge deterministisch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// Selektierte Komponenten-IDs
    pub selected_component_ids: IndexSet<String>,
    /// Selektierte Verbindungs-IDs
    pub selected_connection_ids: IndexSet<String>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Auswahl := {id}, Verbindungs-Selektion wird geleert.
    pub fn select_component(&mut self, id: impl Into<String>) {
        self.selected_component_ids.clear();
        self.selected_component_ids.insert(id.into());
        self.selected_connection_ids.clear();
    }

    /// Ersetzt die Komponenten-Auswahl, Verbindungs-Selektion wird geleert.
    pub fn select_components<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_component_ids = ids.into_iter().map(Into::into).collect();
        self.selected_connection_ids.clear();
    }

    /// Auswahl := {id} für Verbindungen, Komponenten-Selektion wird geleert.
    pub fn select_connection(&mut self, id: impl Into<String>) {
        self.selected_connection_ids.clear();
        self.selected_connection_ids.insert(id.into());
        self.selected_component_ids.clear();
    }

    /// Leert beide Auswahlmengen.
    pub fn clear(&mut self) {
        self.selected_component_ids.clear();
        self.selected_connection_ids.clear();
    }

    /// Prüft, ob die Komponente selektiert ist.
    pub fn is_component_selected(&self, id: &str) -> bool {
        self.selected_component_ids.contains(id)
    }

    /// Prüft, ob die Verbindung selektiert ist.
    pub fn is_connection_selected(&self, id: &str) -> bool {
        self.selected_connection_ids.contains(id)
    }

    /// Gibt `true` zurück, wenn nichts selektiert ist.
    pub fn is_empty(&self) -> bool {
        self.selected_component_ids.is_empty() && self.selected_connection_ids.is_empty()
    }

    /// Komponenten-Auswahl nach Shift-Klick: `id` wird hinzugefügt oder entfernt.
    ///
    /// Verändert den Zustand nicht, das übernimmt `select_components`.
    pub fn toggled_component_ids(&self, id: &str) -> Vec<String> {
        let mut ids: Vec<String> = self.selected_component_ids.iter().cloned().collect();
        if let Some(pos) = ids.iter().position(|s| s == id) {
            ids.remove(pos);
        } else {
            ids.push(id.to_string());
        }
        ids
    }
}
