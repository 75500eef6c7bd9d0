// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Available-colors API endpoint

pub mod handler;

pub use handler::available_colors_handler;
