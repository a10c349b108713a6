// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`query`]: Query services (page navigation)
//! - [`render`]: Fit-to-surface page rendering
//! - [`comparison`]: The two-slot comparison state and its render effect
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer uses application layer services
//!
//! # Example
//!
//! ```ignore
//! use pdf_compare::application::comparison::ComparisonState;
//! use pdf_compare::domain::document::PixelSize;
//!
//! let mut state = ComparisonState::new(PixelSize::new(560, 720));
//! state.install(parser.parse(bytes)?);
//! for outcome in state.refresh() {
//!     println!("{} -> {:?}", outcome.slot, outcome.result);
//! }
//! ```

pub mod comparison;
pub mod port;
pub mod query;
pub mod render;
