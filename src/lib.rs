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

//! Motion logic for a single-page 3D portfolio scene.
//!
//! Folio is renderer-agnostic: the host feeds pointer positions, frame
//! deltas and viewport geometry in, and gets camera transforms and 2D
//! element transforms back.
//!
//! # Key entry points
//!
//! - [`camera::CameraRig`] - hero camera that holds an establishing shot and
//!   then sways with the pointer
//! - [`animation::SectionChoreography`] - one-shot keyframe playback for the
//!   skills section, started by a visibility trigger
//! - [`skills::SkillShowcase`] - skill groups, progress-ring geometry and
//!   icon layout
//! - [`options::Options`] - tuning constants with TOML preset support
//!
//! # Frame flow
//!
//! Each rendered frame the host samples the pointer
//! ([`camera::PointerSampler`]), calls [`camera::CameraRig::update`] with the
//! elapsed time, and uploads a [`camera::CameraUniform`]. The skills section
//! is fed its on-screen bounds through
//! [`animation::SectionChoreography::observe`] and advanced with
//! [`animation::SectionChoreography::tick`].

pub mod animation;
pub mod camera;
pub mod error;
pub mod options;
pub mod skills;
pub mod util;

pub use error::FolioError;
