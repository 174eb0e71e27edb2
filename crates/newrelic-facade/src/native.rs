// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Entry points of the native New Relic agent.
//!
//! The agent is an external collaborator: an integration (FFI bindings to the
//! agent SDK, or a test double) implements [`NativeAgent`] and registers it
//! once per process with [`install`]. Whether an agent has been installed is
//! the capability probe used by [`Adaptive`](crate::Adaptive).

use std::error::Error as StdError;
use std::sync::OnceLock;

use tracing::debug;

use crate::api::{Attributes, Scalar};
use crate::error::Error;
use crate::segment::DatastoreParams;

/// One method per agent API function. Return values are the agent's own
/// verdict and are passed through to callers untouched.
pub trait NativeAgent: Send + Sync {
    fn set_appname(&self, name: &str, license: Option<&str>, xmit: bool) -> bool;

    fn name_transaction(&self, name: &str) -> bool;

    fn ignore_transaction(&self);

    fn record_custom_event(&self, name: &str, attributes: &Attributes);

    fn custom_metric(&self, name: &str, value: f64) -> bool;

    fn add_custom_parameter(&self, name: &str, value: &Scalar) -> bool;

    fn get_browser_timing_header(&self, include_tags: bool) -> String;

    fn get_browser_timing_footer(&self, include_tags: bool) -> String;

    fn disable_autorum(&self);

    fn notice_error(
        &self,
        err_no: i32,
        message: &str,
        file: Option<&str>,
        line: Option<u32>,
        context: Option<&str>,
    );

    fn notice_exception(&self, message: &str, error: &(dyn StdError + 'static));

    fn background_job(&self, flag: bool);

    fn start_transaction(&self, appname: &str, license: Option<&str>) -> bool;

    fn end_transaction(&self, ignore: bool) -> bool;

    fn ignore_apdex(&self);

    fn add_custom_tracer(&self, name: &str) -> bool;

    fn capture_params(&self, enabled: bool);

    fn end_of_transaction(&self);

    /// Must call `segment` exactly once and attribute its duration to a
    /// datastore segment described by `params`.
    fn record_datastore_segment(&self, params: &DatastoreParams, segment: &mut dyn FnMut());

    fn set_user_attributes(&self, user: &str, account: &str, product: &str) -> bool;
}

static AGENT: OnceLock<Box<dyn NativeAgent>> = OnceLock::new();

/// Registers the process-wide agent. Only the first call succeeds.
pub fn install<A: NativeAgent + 'static>(agent: A) -> Result<(), Error> {
    AGENT
        .set(Box::new(agent))
        .map_err(|_| Error::AgentAlreadyInstalled)?;
    debug!("New Relic agent installed");
    Ok(())
}

/// Returns the installed agent, if any.
pub fn get() -> Option<&'static dyn NativeAgent> {
    AGENT.get().map(|agent| &**agent)
}

/// Reports whether an agent is loaded in this process.
pub fn is_loaded() -> bool {
    AGENT.get().is_some()
}
