// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for toasts and the gallery.

pub mod button;
pub mod container;
