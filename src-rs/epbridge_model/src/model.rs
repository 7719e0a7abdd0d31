//! The finished, read-only source model.

use indexmap::IndexMap;

use crate::{id::ObjectId, kind::ObjectKind, object::SourceObject};

/// The object that owns a child, and the collection the child lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Owner {
    /// The owning object
    pub object: ObjectId,
    /// The collection of the owner that holds the child
    pub collection: &'static str,
}

/// An object that references another, and the field it does so through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Referrer {
    /// The referencing object
    pub object: ObjectId,
    /// The reference field
    pub field: &'static str,
}

/// An arena of source objects with owner and referrer indexes.
///
/// A `SourceModel` is produced by a
/// [`SourceModelBuilder`](crate::SourceModelBuilder) and cannot be changed
/// afterwards. Both indexes are kept up to date while building, so looking
/// up the owner of a child or the users of a schedule never scans the arena.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceModel {
    pub(crate) objects: Vec<SourceObject>,
    pub(crate) owners: IndexMap<ObjectId, Owner>,
    pub(crate) referrers: IndexMap<ObjectId, Vec<Referrer>>,
}

impl SourceModel {
    /// Returns the object with the given id.
    #[must_use]
    pub fn get(&self, id: ObjectId) -> Option<&SourceObject> {
        self.objects.get(id.index())
    }

    /// Returns every object, in creation order.
    pub fn objects(&self) -> impl Iterator<Item = &SourceObject> {
        self.objects.iter()
    }

    /// Returns every object of `kind`, in creation order.
    pub fn objects_of_kind(&self, kind: ObjectKind) -> impl Iterator<Item = &SourceObject> {
        self.objects.iter().filter(move |object| object.kind() == kind)
    }

    /// Returns true if the model holds at least one object of `kind`.
    #[must_use]
    pub fn contains_kind(&self, kind: ObjectKind) -> bool {
        self.objects_of_kind(kind).next().is_some()
    }

    /// Returns the owner of `id`, if it is a child of another object.
    #[must_use]
    pub fn owner(&self, id: ObjectId) -> Option<Owner> {
        self.owners.get(&id).copied()
    }

    /// Returns the owning object of `id`, if any.
    #[must_use]
    pub fn owner_object(&self, id: ObjectId) -> Option<&SourceObject> {
        self.owner(id).and_then(|owner| self.get(owner.object))
    }

    /// Returns every object that references `id`, in assignment order.
    #[must_use]
    pub fn referrers(&self, id: ObjectId) -> &[Referrer] {
        self.referrers.get(&id).map_or(&[], Vec::as_slice)
    }

    /// Returns the number of objects in the model.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns true if the model has no objects.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
