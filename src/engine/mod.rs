// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod aggregate;
pub mod chart;
pub mod goal;
pub mod habits;
pub mod insights;
pub mod networth;
pub mod trend;
