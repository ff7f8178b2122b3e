use derive_more::Display;

///
/// ScalarKind
///
/// Runtime type of a scalar field. Aligned with the scalar `Value`
/// variants.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[remain::sorted]
pub enum ScalarKind {
    Bool,
    Date,
    Duration,
    Float,
    Int,
    Ref,
    Text,
    TimeOfDay,
    Timestamp,
    Uint,
}

///
/// FieldCard
///
/// Capability of one field, resolved once at schema-build time:
/// plain scalar, nested record (single or many), or many-relation.
///

#[derive(Clone, Debug, Eq, PartialEq)]
#[remain::sorted]
pub enum FieldCard {
    ManyRelation { target: String },
    NestedMany { target: String },
    NestedSingle { target: String },
    Scalar(ScalarKind),
}

impl FieldCard {
    /// Plural fields are excluded from the initial create write and
    /// attached afterwards.
    #[must_use]
    pub const fn is_plural(&self) -> bool {
        matches!(self, Self::ManyRelation { .. } | Self::NestedMany { .. })
    }

    /// Nested fields are validated through a child serializer.
    #[must_use]
    pub const fn is_nested(&self) -> bool {
        matches!(self, Self::NestedMany { .. } | Self::NestedSingle { .. })
    }

    /// Record type on the far side, for non-scalar fields.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::ManyRelation { target }
            | Self::NestedMany { target }
            | Self::NestedSingle { target } => Some(target),
            Self::Scalar(_) => None,
        }
    }
}

///
/// FieldModel
///
/// Resolved runtime field metadata. `source` is the parsed attribute
/// path; for direct fields it is the single-segment `[name]`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldModel {
    pub name: String,
    pub source: Vec<String>,
    pub card: FieldCard,
    pub required: bool,
}

impl FieldModel {
    #[must_use]
    pub fn is_direct(&self) -> bool {
        self.source.len() == 1
    }

    /// Path segments traversed before the final attribute.
    #[must_use]
    pub fn prefix(&self) -> &[String] {
        &self.source[..self.source.len() - 1]
    }
}

///
/// Field
///
/// Declaration-side field description, consumed by the record builder.
///

#[derive(Clone, Debug)]
pub struct Field {
    pub(crate) name: String,
    pub(crate) source: Option<String>,
    pub(crate) card: FieldCard,
    pub(crate) required: bool,
}

impl Field {
    fn new(name: impl Into<String>, card: FieldCard) -> Self {
        Self {
            name: name.into(),
            source: None,
            card,
            required: false,
        }
    }

    #[must_use]
    pub fn scalar(name: impl Into<String>, kind: ScalarKind) -> Self {
        Self::new(name, FieldCard::Scalar(kind))
    }

    #[must_use]
    pub fn nested(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(
            name,
            FieldCard::NestedSingle {
                target: target.into(),
            },
        )
    }

    #[must_use]
    pub fn nested_many(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(
            name,
            FieldCard::NestedMany {
                target: target.into(),
            },
        )
    }

    #[must_use]
    pub fn relation(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(
            name,
            FieldCard::ManyRelation {
                target: target.into(),
            },
        )
    }

    /// Dotted attribute path the validated value lives at. The final
    /// segment must match the field name.
    #[must_use]
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Require the field in full (non-partial) validation.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}
