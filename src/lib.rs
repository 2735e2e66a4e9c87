// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod aggregate;
pub mod charts;
pub mod cli;
pub mod commands;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod error;
pub mod exchange;
pub mod listing;
pub mod logging;
pub mod models;
pub mod prefs;
pub mod repository;
pub mod sample;
pub mod utils;
