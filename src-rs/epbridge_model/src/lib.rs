//! Source graph of building model objects for the epbridge translator
//!
//! A [`SourceModel`] is an arena of [`SourceObject`]s addressed by
//! [`ObjectId`] handles. Each object has a kind from the closed set in
//! [`ObjectKind`], scalar fields that are either explicit or filled in from
//! the kind's [schema](schema), single references to other objects, and
//! ordered child collections. The model keeps an owner index for children
//! and a referrer index for references so that both directions of the graph
//! can be walked without scanning.
//!
//! Models are assembled with a [`SourceModelBuilder`], which checks every
//! assignment against the schema.

pub mod builder;
pub mod error;
pub mod id;
pub mod kind;
pub mod model;
pub mod object;
pub mod schema;
pub mod value;

pub use builder::SourceModelBuilder;
pub use error::ModelError;
pub use id::ObjectId;
pub use kind::ObjectKind;
pub use model::{Owner, Referrer, SourceModel};
pub use object::SourceObject;
pub use value::{Scalar, Value};
