// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading and rendering

pub mod design_tokens;
pub mod icons;
pub mod notifications;
pub mod styles;
pub mod theming;
