// SPDX-License-Identifier: MPL-2.0

//! Page view modules for the speed dial demo.
//! Each module contains the view logic for a specific page.

pub mod demo;
pub mod settings;
