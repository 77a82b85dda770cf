//! Pointer picking: cast a ray from the pointer, find the nearest face across
//! all models, and resolve it to the element that owns it.

mod caster;
mod hit;
mod resolver;

pub use caster::RayCaster;
pub use hit::{Hit, Selection};
pub use resolver::resolve;
