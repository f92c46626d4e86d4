// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod dispatch;
pub mod spawner;

pub use dispatch::{execute, handle_envelope, WorkerStep};
pub use spawner::ThreadWorkerSpawner;
