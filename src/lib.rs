// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Pointer-to-element picking and hover highlighting for loaded building
//! models.
//!
//! A pointer position is turned into a world-space ray, cast against every
//! loaded model's BVH, and the nearest face is resolved to the building
//! element that owns it. A small state machine keeps exactly that element
//! highlighted through an external overlay renderer.
//!
//! # Key entry points
//!
//! - [`engine::PickingEngine`] - owns models, camera and highlight; runs
//!   event turns
//! - [`picking::RayCaster`] and [`picking::resolve`] - the pure query path
//! - [`highlight::HighlightController`] - the hover highlight state machine
//! - [`model::ModelBuilder`] - assembles per-element meshes into pickable
//!   geometry
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Data flow
//!
//! pointer event → [`input::InputProcessor`] → [`engine::PickCommand`] →
//! ray cast → element resolve → highlight transition → overlay renderer.
//! Everything runs synchronously on the caller's thread; once
//! [`engine::PickingEngine::process_events`] returns, the highlight state and
//! the renderer's overlays agree.

pub mod camera;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod highlight;
pub mod input;
pub mod model;
pub mod options;
pub mod picking;
pub mod spatial;
