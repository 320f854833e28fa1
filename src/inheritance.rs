//! Inheritance strategy classification

use serde::{Deserialize, Serialize};

use crate::elements::{EntityElement, EntityKind};

/// How an entity hierarchy is laid out over tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InheritanceType {
    /// A root entity without subclasses
    NoInheritance,
    /// The whole hierarchy in one table with a discriminator
    SingleTable,
    /// One table per subclass, joined on the primary key
    Joined,
    /// One complete table per concrete class
    TablePerClass,
}

impl std::fmt::Display for InheritanceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InheritanceType::NoInheritance => write!(f, "NO_INHERITANCE"),
            InheritanceType::SingleTable => write!(f, "SINGLE_TABLE"),
            InheritanceType::Joined => write!(f, "JOINED"),
            InheritanceType::TablePerClass => write!(f, "TABLE_PER_CLASS"),
        }
    }
}

impl From<EntityKind> for InheritanceType {
    fn from(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Subclass => InheritanceType::SingleTable,
            EntityKind::JoinedSubclass => InheritanceType::Joined,
            EntityKind::UnionSubclass => InheritanceType::TablePerClass,
            EntityKind::Class => InheritanceType::NoInheritance,
        }
    }
}

/// Inheritance strategy implied by the shape of the entity element
pub fn interpret_inheritance_type(element: &EntityElement) -> InheritanceType {
    InheritanceType::from(element.kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpret_inheritance_type() {
        let cases = [
            (EntityKind::Class, InheritanceType::NoInheritance),
            (EntityKind::Subclass, InheritanceType::SingleTable),
            (EntityKind::JoinedSubclass, InheritanceType::Joined),
            (EntityKind::UnionSubclass, InheritanceType::TablePerClass),
        ];
        for (kind, expected) in cases {
            assert_eq!(interpret_inheritance_type(&EntityElement::new(kind)), expected);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(InheritanceType::TablePerClass.to_string(), "TABLE_PER_CLASS");
    }
}
