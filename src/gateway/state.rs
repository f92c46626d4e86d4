// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

/// Lifecycle of an [`OffloadGateway`](crate::gateway::OffloadGateway).
///
/// ```text
/// Uninitialized -> Initializing -> Ready    -> Disposed
///                               -> Fallback -> Disposed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayState {
    Uninitialized,
    Initializing,
    /// Worker created and response router attached.
    Ready,
    /// Worker creation failed; operations return degraded local results.
    Fallback,
    Disposed,
}

impl GatewayState {
    pub fn uses_worker(&self) -> bool {
        matches!(self, GatewayState::Ready)
    }
}

impl fmt::Display for GatewayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GatewayState::Uninitialized => "uninitialized",
            GatewayState::Initializing => "initializing",
            GatewayState::Ready => "ready",
            GatewayState::Fallback => "fallback",
            GatewayState::Disposed => "disposed",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_ready_uses_the_worker() {
        assert!(GatewayState::Ready.uses_worker());
        for state in [
            GatewayState::Uninitialized,
            GatewayState::Initializing,
            GatewayState::Fallback,
            GatewayState::Disposed,
        ] {
            assert!(!state.uses_worker(), "{}", state);
        }
    }
}
