use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Prefix and start number the host engine uses to auto-number parts and assemblies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberingSeries {
    pub prefix: String,
    pub start_number: i32,
}

impl NumberingSeries {
    pub fn new(prefix: impl Into<String>, start_number: i32) -> Self {
        Self {
            prefix: prefix.into(),
            start_number,
        }
    }
}

impl Default for NumberingSeries {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            start_number: 1,
        }
    }
}

/// Identity of an object inside the host model.
/// An id of 0 means the object has not been inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Identifier {
    pub id: i32,
    pub guid: Uuid,
}

impl Identifier {
    pub const UNSET: Self = Self {
        id: 0,
        guid: Uuid::nil(),
    };

    pub fn new(id: i32) -> Self {
        Self {
            id,
            guid: Uuid::nil(),
        }
    }

    pub fn with_guid(id: i32, guid: Uuid) -> Self {
        Self { id, guid }
    }

    pub fn is_valid(&self) -> bool {
        self.id != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_numbering_starts_at_one() {
        let series = NumberingSeries::default();
        assert!(series.prefix.is_empty());
        assert_eq!(series.start_number, 1);
    }

    #[test]
    fn test_unset_identifier_is_invalid() {
        assert!(!Identifier::UNSET.is_valid());
        assert!(Identifier::new(1234567).is_valid());
        assert_eq!(Identifier::default(), Identifier::UNSET);
    }
}
