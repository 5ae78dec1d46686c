// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod book;
pub mod cli;
pub mod db;
pub mod models;
pub mod month;
pub mod persistence;
pub mod store;
pub mod summary;
pub mod utils;
pub mod commands;
