// Copyright (c) 2025 Exercise Adapter Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.
// Authors: Exercise Adapter Project contributors

pub mod build;
pub mod render;
