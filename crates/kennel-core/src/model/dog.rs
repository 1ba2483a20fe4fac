use serde::{Deserialize, Serialize};

/// Dog - the single entity tracked by the registry
///
/// A Dog is one in-memory value representing a row of the dogs table.
/// The id is assigned by the store on first insert; `None` means the
/// record has not been persisted yet. A Dog carries no behavior of its
/// own beyond its fields; all persistence goes through the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dog {
    /// Primary key, store-assigned on first insert (`None` until saved)
    pub id: Option<i64>,

    /// Call name, no uniqueness constraint
    pub name: String,

    /// Breed label, no uniqueness constraint
    pub breed: String,
}

impl Dog {
    /// Create a new unpersisted Dog with the given name and breed
    pub fn new(name: String, breed: String) -> Self {
        Self {
            id: None,
            name,
            breed,
        }
    }

    /// Create a Dog hydrated from an existing row's column values
    pub fn with_id(id: i64, name: String, breed: String) -> Self {
        Self {
            id: Some(id),
            name,
            breed,
        }
    }

    /// Check whether this record corresponds to a stored row
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_dog_is_unpersisted() {
        let dog = Dog::new("Rex".to_string(), "Labrador".to_string());

        assert_eq!(dog.id, None);
        assert_eq!(dog.name, "Rex");
        assert_eq!(dog.breed, "Labrador");
        assert!(!dog.is_persisted());
    }

    #[test]
    fn test_with_id_is_persisted() {
        let dog = Dog::with_id(7, "Fido".to_string(), "Poodle".to_string());

        assert_eq!(dog.id, Some(7));
        assert!(dog.is_persisted());
    }

    #[test]
    fn test_serde_round_trip() {
        let dog = Dog::with_id(1, "Rex".to_string(), "Labrador".to_string());

        let json = serde_json::to_string(&dog).unwrap();
        let back: Dog = serde_json::from_str(&json).unwrap();

        assert_eq!(dog, back);
    }
}
