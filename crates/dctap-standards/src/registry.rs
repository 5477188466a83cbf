//! Element registry for the DCTAP vocabulary.
//!
//! The registry is built once on first use and shared read-only by every
//! parse in the process.

use std::collections::HashMap;
use std::sync::LazyLock;

use dctap_model::{ConstraintType, Element, ElementKind, ElementScope};

const ELEMENTS: &[Element] = &[
    Element {
        name: "shapeID",
        scope: ElementScope::Shape,
        kind: ElementKind::Identifier,
        description: "Identifier of the shape the statement belongs to",
    },
    Element {
        name: "shapeLabel",
        scope: ElementScope::Shape,
        kind: ElementKind::Label,
        description: "Human-readable name of the shape",
    },
    Element {
        name: "propertyID",
        scope: ElementScope::Statement,
        kind: ElementKind::Identifier,
        description: "Property being described",
    },
    Element {
        name: "propertyLabel",
        scope: ElementScope::Statement,
        kind: ElementKind::Label,
        description: "Human-readable name of the property",
    },
    Element {
        name: "mandatory",
        scope: ElementScope::Statement,
        kind: ElementKind::Boolean,
        description: "Whether the property is required",
    },
    Element {
        name: "repeatable",
        scope: ElementScope::Statement,
        kind: ElementKind::Boolean,
        description: "Whether the property may occur more than once",
    },
    Element {
        name: "valueNodeType",
        scope: ElementScope::Statement,
        kind: ElementKind::NodeType,
        description: "Node type of the value: IRI, literal or bnode",
    },
    Element {
        name: "valueDataType",
        scope: ElementScope::Statement,
        kind: ElementKind::Identifier,
        description: "Datatype of a literal value",
    },
    Element {
        name: "valueConstraint",
        scope: ElementScope::Statement,
        kind: ElementKind::ConstraintValue,
        description: "Parameter of the value constraint",
    },
    Element {
        name: "valueConstraintType",
        scope: ElementScope::Statement,
        kind: ElementKind::ConstraintType,
        description: "Kind of value constraint (Picklist, Pattern, ...)",
    },
    Element {
        name: "valueShape",
        scope: ElementScope::Statement,
        kind: ElementKind::Identifier,
        description: "Shape the value must conform to",
    },
    Element {
        name: "note",
        scope: ElementScope::Statement,
        kind: ElementKind::FreeText,
        description: "Free-text note",
    },
];

/// Built-in node types, in canonical case.
pub const NODE_TYPES: &[&str] = &["iri", "literal", "bnode"];

static REGISTRY: LazyLock<ElementRegistry> = LazyLock::new(ElementRegistry::build);

/// Returns the process-wide element registry.
pub fn registry() -> &'static ElementRegistry {
    &REGISTRY
}

/// Lower-case and drop spaces, underscores and dashes.
///
/// `"Property ID"`, `"property_id"` and `"PROPERTY-ID"` all become `"propertyid"`.
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|ch| !(ch.is_whitespace() || matches!(ch, '_' | '-')))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Immutable lookup tables over [`ELEMENTS`].
#[derive(Debug)]
pub struct ElementRegistry {
    exact: HashMap<&'static str, &'static Element>,
    lowercase: HashMap<String, &'static Element>,
    normalized: HashMap<String, &'static Element>,
}

impl ElementRegistry {
    fn build() -> Self {
        let mut exact = HashMap::new();
        let mut lowercase = HashMap::new();
        let mut normalized = HashMap::new();
        for element in ELEMENTS {
            exact.insert(element.name, element);
            lowercase.insert(element.name.to_lowercase(), element);
            normalized.insert(normalize_name(element.name), element);
        }
        Self {
            exact,
            lowercase,
            normalized,
        }
    }

    /// All elements in canonical column order.
    pub fn elements(&self) -> &'static [Element] {
        ELEMENTS
    }

    /// Exact, case-sensitive lookup by canonical name.
    pub fn lookup(&self, name: &str) -> Option<&'static Element> {
        self.exact.get(name).copied()
    }

    pub fn lookup_ignore_case(&self, name: &str) -> Option<&'static Element> {
        self.lowercase.get(&name.to_lowercase()).copied()
    }

    /// Lookup ignoring case, spaces, underscores and dashes.
    pub fn lookup_normalized(&self, name: &str) -> Option<&'static Element> {
        self.normalized.get(&normalize_name(name)).copied()
    }

    pub fn constraint_types(&self) -> &'static [ConstraintType] {
        &ConstraintType::ALL
    }

    pub fn is_element_name(&self, name: &str) -> bool {
        self.exact.contains_key(name)
    }
}
