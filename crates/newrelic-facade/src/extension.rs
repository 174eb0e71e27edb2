// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::api::{Attributes, NewRelic, Scalar};
use crate::config::Config;
use crate::error::Error;
use crate::native::{self, NativeAgent};
use crate::segment::DatastoreParams;

#[derive(Clone)]
enum Binding {
    /// Whatever agent is installed in the process when a call is made.
    Global,
    Explicit(Arc<dyn NativeAgent>),
}

/// Forwards every call to the native agent.
///
/// Results are exactly what the agent reports. When bound to the process-wide
/// agent and none is installed, calls behave like a rejected call: `false`,
/// empty snippets, and datastore segments that are not run.
#[derive(Clone)]
pub struct Extension {
    binding: Binding,
    config: Config,
}

impl Extension {
    /// Binds to the agent registered with [`native::install`].
    pub fn new(config: Config) -> Self {
        Self {
            binding: Binding::Global,
            config,
        }
    }

    pub fn from_env() -> Result<Self, Error> {
        Ok(Self::new(Config::from_env()?))
    }

    /// Binds to `agent` instead of the process-wide one.
    ///
    /// [`Adaptive::new`](crate::Adaptive::new) only checks the process-wide
    /// agent, so pair this with [`Adaptive::select`](crate::Adaptive::select).
    pub fn with_agent(agent: Arc<dyn NativeAgent>, config: Config) -> Self {
        Self {
            binding: Binding::Explicit(agent),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn agent(&self) -> Option<&dyn NativeAgent> {
        let agent = match &self.binding {
            Binding::Global => native::get(),
            Binding::Explicit(agent) => Some(&**agent),
        };
        if agent.is_none() {
            debug!("New Relic agent is not loaded, dropping call");
        }
        agent
    }
}

impl fmt::Debug for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let binding = match self.binding {
            Binding::Global => "global",
            Binding::Explicit(_) => "explicit",
        };
        f.debug_struct("Extension")
            .field("binding", &binding)
            .field("config", &self.config)
            .finish()
    }
}

impl NewRelic for Extension {
    fn set_application_name(&self, name: &str, license: Option<&str>, xmit: bool) -> bool {
        self.agent()
            .is_some_and(|agent| agent.set_appname(name, license, xmit))
    }

    fn set_transaction_name(&self, name: &str) -> bool {
        self.agent()
            .is_some_and(|agent| agent.name_transaction(name))
    }

    fn start_transaction(&self, name: Option<&str>, license: Option<&str>) -> bool {
        let Some(agent) = self.agent() else {
            return false;
        };
        let name = name
            .or(self.config.app_name.as_deref())
            .unwrap_or_default();
        agent.start_transaction(name, license)
    }

    fn end_transaction(&self, ignore: bool) -> bool {
        self.agent()
            .is_some_and(|agent| agent.end_transaction(ignore))
    }

    fn ignore_transaction(&self) {
        if let Some(agent) = self.agent() {
            agent.ignore_transaction();
        }
    }

    fn exclude_from_apdex(&self) {
        if let Some(agent) = self.agent() {
            agent.ignore_apdex();
        }
    }

    fn stop_transaction_timing(&self) {
        if let Some(agent) = self.agent() {
            agent.end_of_transaction();
        }
    }

    fn add_custom_event(&self, name: &str, attributes: &Attributes) {
        if let Some(agent) = self.agent() {
            agent.record_custom_event(name, attributes);
        }
    }

    fn add_custom_metric(&self, name: &str, value: f64) -> bool {
        self.agent()
            .is_some_and(|agent| agent.custom_metric(name, value))
    }

    fn add_custom_parameter(&self, name: &str, value: &Scalar) -> bool {
        self.agent()
            .is_some_and(|agent| agent.add_custom_parameter(name, value))
    }

    fn set_user_attributes(
        &self,
        user_value: &str,
        account_value: &str,
        product_value: &str,
    ) -> bool {
        self.agent().is_some_and(|agent| {
            agent.set_user_attributes(user_value, account_value, product_value)
        })
    }

    fn notice_error(
        &self,
        err_no: i32,
        err_str: &str,
        err_file: Option<&str>,
        err_line: Option<u32>,
        err_context: Option<&str>,
    ) {
        if let Some(agent) = self.agent() {
            agent.notice_error(err_no, err_str, err_file, err_line, err_context);
        }
    }

    fn notice_exception(&self, error: &(dyn StdError + 'static), message: Option<&str>) {
        let Some(agent) = self.agent() else {
            return;
        };
        match message.filter(|message| !message.is_empty()) {
            Some(message) => agent.notice_exception(message, error),
            None => agent.notice_exception(&error.to_string(), error),
        }
    }

    fn get_browser_timing_header(&self, include_tags: bool) -> String {
        self.agent()
            .map(|agent| agent.get_browser_timing_header(include_tags))
            .unwrap_or_default()
    }

    fn get_browser_timing_footer(&self, include_tags: bool) -> String {
        self.agent()
            .map(|agent| agent.get_browser_timing_footer(include_tags))
            .unwrap_or_default()
    }

    fn disable_auto_rum(&self) {
        if let Some(agent) = self.agent() {
            agent.disable_autorum();
        }
    }

    fn enable_background_job(&self) {
        if let Some(agent) = self.agent() {
            agent.background_job(true);
        }
    }

    fn disable_background_job(&self) {
        if let Some(agent) = self.agent() {
            agent.background_job(false);
        }
    }

    fn add_custom_tracer(&self, name: &str) -> bool {
        self.agent()
            .is_some_and(|agent| agent.add_custom_tracer(name))
    }

    fn set_capture_params(&self, enabled: bool) {
        if let Some(agent) = self.agent() {
            agent.capture_params(enabled);
        }
    }

    fn time_datastore_segment(&self, params: &DatastoreParams, segment: &mut dyn FnMut()) {
        if let Some(agent) = self.agent() {
            agent.record_datastore_segment(params, segment);
        }
    }
}
