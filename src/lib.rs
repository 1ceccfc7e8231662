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

//! Interaction core for a 3D bike customizer: point at a part to highlight
//! it, click to select and focus the camera on it, swap it for one of its
//! alternatives, right-click to let go.
//!
//! # Key entry points
//!
//! - [`engine::GarageEngine`] - owns the scene, parts, selection and camera
//!   and runs the per-frame pass
//! - [`selection::SelectionController`] - hover/selection state machine
//! - [`part::RendererSet`] - highlight bookkeeping that never loses the
//!   original materials
//! - [`camera::FocusCameraController`] - orbit camera with a focus mode
//! - [`options::Options`] - runtime configuration (camera, input, display)
//!
//! # Architecture
//!
//! The core never owns scene objects. It talks to the host scene through
//! the traits in [`scene`] ([`scene::SurfaceBackend`],
//! [`scene::InstanceBackend`], [`scene::PickingBackend`]) and to the UI
//! through [`selection::InfoSink`]. [`scene::MemoryScene`] implements the
//! scene side headlessly and can be built from a TOML
//! [`scene::GarageLayout`].
//!
//! Each frame, platform events folded by [`input::InputProcessor`] become a
//! [`input::FrameInput`]; [`engine::GarageEngine::frame`] runs hover, then
//! selection, then the camera. UI buttons go through
//! [`engine::GarageEngine::execute`].

pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod part;
pub mod picking;
pub mod scene;
pub mod selection;
