//! Loaded building models.
//!
//! A [`ModelGeometry`] is built once per asset by [`ModelBuilder`]: the
//! merged mesh, its [`Bvh`](crate::spatial::Bvh) and the [`ElementIndex`].
//! A [`Model`] places shared geometry in the world under a [`ModelId`];
//! [`ModelSet`] is the append-only registry the ray caster reads.

mod builder;
mod element_index;
mod geometry;
mod ids;
mod instance;
mod set;

pub use builder::ModelBuilder;
pub use element_index::ElementIndex;
pub use geometry::ModelGeometry;
pub use ids::{ElementId, ModelId};
pub use instance::Model;
pub use set::ModelSet;
