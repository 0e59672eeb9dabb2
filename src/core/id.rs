//! Vergabe eindeutiger Element-IDs.

use uuid::Uuid;

/// Erzeugt eine neue, opake ID (UUID v4) für Komponenten, Verbindungen,
/// Annotationen und Maps.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::new_id;

    #[test]
    fn ids_are_unique() {
        let a = new_id();
        let b = new_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
    }
}
