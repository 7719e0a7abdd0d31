//! Source objects and their field accessors.

use indexmap::IndexMap;

use epbridge_shared::span::Span;

use crate::{
    id::ObjectId,
    kind::ObjectKind,
    value::{Scalar, Value},
};

/// One object of the source model.
///
/// Scalars, references and collections are keyed by the static field names
/// from the kind's [schema](crate::schema). Accessors take a field name and
/// return `None` (or an empty slice) when the field has no value. Asking for
/// a field the kind does not declare is a programming error and is caught by
/// a debug assertion.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceObject {
    id: ObjectId,
    kind: ObjectKind,
    name: Option<String>,
    span: Option<Span>,
    scalars: IndexMap<&'static str, Scalar>,
    references: IndexMap<&'static str, ObjectId>,
    collections: IndexMap<&'static str, Vec<ObjectId>>,
}

impl SourceObject {
    pub(crate) fn new(id: ObjectId, kind: ObjectKind, name: Option<String>) -> Self {
        let schema = kind.schema();

        let scalars = schema
            .scalars
            .iter()
            .filter_map(|spec| {
                Value::from_default(spec.default).map(|value| (spec.name, Scalar::defaulted(value)))
            })
            .collect();

        let collections = schema
            .collections
            .iter()
            .map(|spec| (spec.name, Vec::new()))
            .collect();

        Self {
            id,
            kind,
            name,
            span: None,
            scalars,
            references: IndexMap::new(),
            collections,
        }
    }

    /// Returns the identity of this object.
    #[must_use]
    pub const fn id(&self) -> ObjectId {
        self.id
    }

    /// Returns the kind of this object.
    #[must_use]
    pub const fn kind(&self) -> ObjectKind {
        self.kind
    }

    /// Returns the name of this object, if it has one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns where the object was declared, if it came from a source file.
    #[must_use]
    pub const fn span(&self) -> Option<&Span> {
        self.span.as_ref()
    }

    /// Returns the scalar stored in `field`.
    #[must_use]
    pub fn scalar(&self, field: &str) -> Option<&Scalar> {
        debug_assert!(
            self.kind.schema().scalar(field).is_some(),
            "{} has no scalar field `{field}`",
            self.kind
        );
        self.scalars.get(field)
    }

    /// Returns the numeric value of `field`.
    ///
    /// Returns `None` when the field is absent or autosized.
    #[must_use]
    pub fn number(&self, field: &str) -> Option<f64> {
        if let Some(Value::Number(number)) = self.scalar(field).map(Scalar::value) {
            Some(*number)
        } else {
            None
        }
    }

    /// Returns the text value of `field`.
    #[must_use]
    pub fn text(&self, field: &str) -> Option<&str> {
        if let Some(Value::Text(text)) = self.scalar(field).map(Scalar::value) {
            Some(text)
        } else {
            None
        }
    }

    /// Returns the boolean value of `field`.
    #[must_use]
    pub fn boolean(&self, field: &str) -> Option<bool> {
        if let Some(Value::Boolean(boolean)) = self.scalar(field).map(Scalar::value) {
            Some(*boolean)
        } else {
            None
        }
    }

    /// Returns true unless `field` was set explicitly.
    ///
    /// An absent field counts as defaulted.
    #[must_use]
    pub fn is_defaulted(&self, field: &str) -> bool {
        self.scalar(field).is_none_or(Scalar::is_defaulted)
    }

    /// Returns true if `field` holds the autosize marker.
    #[must_use]
    pub fn is_autosized(&self, field: &str) -> bool {
        self.scalar(field)
            .is_some_and(|scalar| matches!(scalar.value(), Value::Autosize))
    }

    /// Returns the target of the reference `field`.
    #[must_use]
    pub fn reference(&self, field: &str) -> Option<ObjectId> {
        debug_assert!(
            self.kind.schema().reference(field).is_some(),
            "{} has no reference field `{field}`",
            self.kind
        );
        self.references.get(field).copied()
    }

    /// Returns the children in `collection`, in insertion order.
    #[must_use]
    pub fn children(&self, collection: &str) -> &[ObjectId] {
        debug_assert!(
            self.kind.schema().collection(collection).is_some(),
            "{} has no collection `{collection}`",
            self.kind
        );
        self.collections.get(collection).map_or(&[], Vec::as_slice)
    }

    /// Returns every scalar field with a value, in schema order.
    pub fn scalars(&self) -> impl Iterator<Item = (&'static str, &Scalar)> {
        self.scalars.iter().map(|(name, scalar)| (*name, scalar))
    }

    /// Returns every set reference, in assignment order.
    pub fn references(&self) -> impl Iterator<Item = (&'static str, ObjectId)> {
        self.references.iter().map(|(name, id)| (*name, *id))
    }

    /// Returns every collection, in schema order.
    pub fn collections(&self) -> impl Iterator<Item = (&'static str, &[ObjectId])> {
        self.collections
            .iter()
            .map(|(name, children)| (*name, children.as_slice()))
    }

    /// Returns a short description of the object for messages, such as
    /// `Space 'Office'` or `Space #4`.
    #[must_use]
    pub fn brief_description(&self) -> String {
        match &self.name {
            Some(name) => format!("{} '{name}'", self.kind),
            None => format!("{} {}", self.kind, self.id),
        }
    }

    pub(crate) fn set_span(&mut self, span: Span) {
        self.span = Some(span);
    }

    pub(crate) fn set_scalar(&mut self, field: &'static str, value: Value) {
        self.scalars.insert(field, Scalar::explicit(value));
    }

    /// Sets a reference and returns the previous target.
    pub(crate) fn set_reference(&mut self, field: &'static str, target: ObjectId) -> Option<ObjectId> {
        self.references.insert(field, target)
    }

    pub(crate) fn push_child(&mut self, collection: &'static str, child: ObjectId) {
        self.collections.entry(collection).or_default().push(child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_object_holds_schema_defaults() {
        let object = SourceObject::new(
            ObjectId::new(0),
            ObjectKind::DesignSpecificationOutdoorAir,
            Some("DSOA".to_string()),
        );

        assert_eq!(object.text("outdoor_air_method"), Some("Sum"));
        assert_eq!(object.number("outdoor_air_flow_per_person"), Some(0.009_44));
        assert!(object.is_defaulted("outdoor_air_method"));
    }

    #[test]
    fn autosized_field_has_no_number() {
        let object = SourceObject::new(ObjectId::new(0), ObjectKind::CoilHeatingElectric, None);

        assert!(object.is_autosized("nominal_capacity"));
        assert_eq!(object.number("nominal_capacity"), None);
    }

    #[test]
    fn explicit_value_is_not_defaulted() {
        let mut object = SourceObject::new(ObjectId::new(0), ObjectKind::ThermalZone, None);
        object.set_scalar("multiplier", Value::Number(2.0));

        assert_eq!(object.number("multiplier"), Some(2.0));
        assert!(!object.is_defaulted("multiplier"));
    }

    #[test]
    fn absent_field_counts_as_defaulted() {
        let object = SourceObject::new(ObjectId::new(0), ObjectKind::ThermalZone, None);

        assert_eq!(object.number("volume"), None);
        assert!(object.is_defaulted("volume"));
        assert!(!object.is_autosized("volume"));
    }

    #[test]
    fn brief_description_uses_name_or_id() {
        let named = SourceObject::new(ObjectId::new(1), ObjectKind::Space, Some("Office".to_string()));
        let unnamed = SourceObject::new(ObjectId::new(4), ObjectKind::Space, None);

        assert_eq!(named.brief_description(), "Space 'Office'");
        assert_eq!(unnamed.brief_description(), "Space #4");
    }
}
