// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

/// Errors raised while configuring the facade or registering the native agent.
///
/// Facade operations themselves never fail; see [`crate::NewRelic`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("A New Relic agent is already installed in this process")]
    AgentAlreadyInstalled,
}
