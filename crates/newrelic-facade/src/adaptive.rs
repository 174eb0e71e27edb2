// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::error::Error as StdError;

use tracing::debug;

use crate::api::{Attributes, NewRelic, Scalar};
use crate::config::Config;
use crate::native;
use crate::segment::DatastoreParams;

#[derive(Debug, Clone)]
enum Delegate<R, F> {
    Real(R),
    Fallback(F),
}

/// Uses `R` when the agent is loaded and `F` otherwise.
///
/// The choice is made once, at construction, and holds for the lifetime of
/// the value even if an agent is installed later.
///
/// ```
/// use newrelic_facade::{Adaptive, BlackHole, Config, Extension, NewRelic};
///
/// let newrelic = Adaptive::new(Extension::new(Config::default()), BlackHole);
/// assert!(!newrelic.is_real());
/// assert!(newrelic.set_transaction_name("checkout"));
/// ```
#[derive(Debug, Clone)]
pub struct Adaptive<R, F> {
    delegate: Delegate<R, F>,
}

impl<R: NewRelic, F: NewRelic> Adaptive<R, F> {
    /// Checks for the process-wide agent registered with
    /// [`native::install`](crate::native::install).
    ///
    /// A real implementation built with
    /// [`Extension::with_agent`](crate::Extension::with_agent) carries its own
    /// agent, which this check does not see. Use [`Adaptive::select`] with
    /// `true` for it.
    pub fn new(real: R, fallback: F) -> Self {
        Self::select(real, fallback, native::is_loaded())
    }

    /// Like [`Adaptive::new`] but also honours `config.enabled`.
    pub fn from_config(real: R, fallback: F, config: &Config) -> Self {
        Self::select(real, fallback, config.agent_available())
    }

    pub fn select(real: R, fallback: F, agent_loaded: bool) -> Self {
        debug!(agent_loaded, "Selecting New Relic implementation");
        let delegate = if agent_loaded {
            Delegate::Real(real)
        } else {
            Delegate::Fallback(fallback)
        };
        Self { delegate }
    }

    /// True when calls go to the real implementation.
    pub fn is_real(&self) -> bool {
        matches!(self.delegate, Delegate::Real(_))
    }

    fn delegate(&self) -> &dyn NewRelic {
        match &self.delegate {
            Delegate::Real(real) => real,
            Delegate::Fallback(fallback) => fallback,
        }
    }
}

impl<R: NewRelic, F: NewRelic> NewRelic for Adaptive<R, F> {
    fn set_application_name(&self, name: &str, license: Option<&str>, xmit: bool) -> bool {
        self.delegate().set_application_name(name, license, xmit)
    }

    fn set_transaction_name(&self, name: &str) -> bool {
        self.delegate().set_transaction_name(name)
    }

    fn start_transaction(&self, name: Option<&str>, license: Option<&str>) -> bool {
        self.delegate().start_transaction(name, license)
    }

    fn end_transaction(&self, ignore: bool) -> bool {
        self.delegate().end_transaction(ignore)
    }

    fn ignore_transaction(&self) {
        self.delegate().ignore_transaction()
    }

    fn exclude_from_apdex(&self) {
        self.delegate().exclude_from_apdex()
    }

    fn stop_transaction_timing(&self) {
        self.delegate().stop_transaction_timing()
    }

    fn add_custom_event(&self, name: &str, attributes: &Attributes) {
        self.delegate().add_custom_event(name, attributes)
    }

    fn add_custom_metric(&self, name: &str, value: f64) -> bool {
        self.delegate().add_custom_metric(name, value)
    }

    fn add_custom_parameter(&self, name: &str, value: &Scalar) -> bool {
        self.delegate().add_custom_parameter(name, value)
    }

    fn set_user_attributes(
        &self,
        user_value: &str,
        account_value: &str,
        product_value: &str,
    ) -> bool {
        self.delegate()
            .set_user_attributes(user_value, account_value, product_value)
    }

    fn notice_error(
        &self,
        err_no: i32,
        err_str: &str,
        err_file: Option<&str>,
        err_line: Option<u32>,
        err_context: Option<&str>,
    ) {
        self.delegate()
            .notice_error(err_no, err_str, err_file, err_line, err_context)
    }

    fn notice_exception(&self, error: &(dyn StdError + 'static), message: Option<&str>) {
        self.delegate().notice_exception(error, message)
    }

    fn get_browser_timing_header(&self, include_tags: bool) -> String {
        self.delegate().get_browser_timing_header(include_tags)
    }

    fn get_browser_timing_footer(&self, include_tags: bool) -> String {
        self.delegate().get_browser_timing_footer(include_tags)
    }

    fn disable_auto_rum(&self) {
        self.delegate().disable_auto_rum()
    }

    fn enable_background_job(&self) {
        self.delegate().enable_background_job()
    }

    fn disable_background_job(&self) {
        self.delegate().disable_background_job()
    }

    fn add_custom_tracer(&self, name: &str) -> bool {
        self.delegate().add_custom_tracer(name)
    }

    fn set_capture_params(&self, enabled: bool) {
        self.delegate().set_capture_params(enabled)
    }

    fn time_datastore_segment(&self, params: &DatastoreParams, segment: &mut dyn FnMut()) {
        self.delegate().time_datastore_segment(params, segment)
    }
}
