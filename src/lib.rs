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
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
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

//! Smoothed orbit camera rig for interactive 3D scenes.
//!
//! The rig orbits a target on two angles and a distance, each eased toward
//! an input-driven goal. Dragging rotates, scrolling zooms, and clicking an
//! object moves the look-at point onto it.
//!
//! # Key entry points
//!
//! - [`camera::OrbitCameraController`] - the rig itself
//! - [`input::InputProcessor`] - folds window events into
//!   [`input::FrameInput`] snapshots
//! - [`picking::RayCaster`] - the host's scene intersection service
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Frame model
//!
//! Everything runs on the host's frame loop. Each frame the host calls
//! `early_update` (drag, axis smoothing, pose), `late_update` (pointer
//! pick, runs even while locked) and, after drawing, `post_render`.

pub mod callbacks;
pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod picking;

pub use camera::{OrbitCameraController, TargetTransform};
pub use error::RigError;
pub use options::Options;
