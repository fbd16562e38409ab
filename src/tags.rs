// Copyright (c) 2025 Exercise Adapter Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Exercise Adapter Project contributors

pub mod exercise;
pub mod inert;

pub use exercise::ExerciseBlock;
pub use inert::{InertKind, InertTag};
