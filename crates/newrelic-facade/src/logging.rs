// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Debug logging around any [`NewRelic`] implementation.
//!
//! Each call emits one `DEBUG` event into the decorator's own
//! [`Dispatch`] and is then forwarded. Without a dispatcher the events are
//! discarded, so wrapping is always safe:
//!
//! ```
//! use newrelic_facade::{BlackHole, LoggingDecorator, NewRelic};
//!
//! let newrelic = LoggingDecorator::new(BlackHole);
//! assert!(newrelic.add_custom_metric("latency", 12.5));
//! ```

use std::error::Error as StdError;

use tracing::{debug, dispatcher, Dispatch};

use crate::api::{Attributes, NewRelic, Scalar};
use crate::segment::DatastoreParams;

#[derive(Debug, Clone)]
pub struct LoggingDecorator<N> {
    inner: N,
    dispatch: Dispatch,
}

impl<N: NewRelic> LoggingDecorator<N> {
    /// Wraps `inner` with a dispatcher that drops every event.
    pub fn new(inner: N) -> Self {
        Self::with_dispatch(inner, Dispatch::none())
    }

    pub fn with_dispatch(inner: N, dispatch: Dispatch) -> Self {
        Self { inner, dispatch }
    }

    /// Logs to whichever dispatcher is the default when this is called.
    pub fn with_current_dispatch(inner: N) -> Self {
        Self::with_dispatch(inner, dispatcher::get_default(Dispatch::clone))
    }

    pub fn inner(&self) -> &N {
        &self.inner
    }

    pub fn into_inner(self) -> N {
        self.inner
    }

    fn log(&self, event: impl FnOnce()) {
        dispatcher::with_default(&self.dispatch, event);
    }
}

impl<N: NewRelic> NewRelic for LoggingDecorator<N> {
    fn set_application_name(&self, name: &str, license: Option<&str>, xmit: bool) -> bool {
        self.log(|| debug!(name, "Setting New Relic application name"));
        self.inner.set_application_name(name, license, xmit)
    }

    fn set_transaction_name(&self, name: &str) -> bool {
        self.log(|| debug!(name, "Setting New Relic transaction name"));
        self.inner.set_transaction_name(name)
    }

    fn start_transaction(&self, name: Option<&str>, license: Option<&str>) -> bool {
        self.log(|| debug!(name = ?name, "Starting a new New Relic transaction"));
        self.inner.start_transaction(name, license)
    }

    fn end_transaction(&self, ignore: bool) -> bool {
        self.log(|| debug!(ignore, "Ending New Relic transaction"));
        self.inner.end_transaction(ignore)
    }

    fn ignore_transaction(&self) {
        self.log(|| debug!("Ignoring New Relic transaction"));
        self.inner.ignore_transaction()
    }

    fn exclude_from_apdex(&self) {
        self.log(|| debug!("Excluding current transaction from New Relic Apdex score"));
        self.inner.exclude_from_apdex()
    }

    fn stop_transaction_timing(&self) {
        self.log(|| debug!("Stopping New Relic transaction timing"));
        self.inner.stop_transaction_timing()
    }

    fn add_custom_event(&self, name: &str, attributes: &Attributes) {
        self.log(|| debug!(name, ?attributes, "Adding custom New Relic event"));
        self.inner.add_custom_event(name, attributes)
    }

    fn add_custom_metric(&self, name: &str, value: f64) -> bool {
        self.log(|| debug!(name, value, "Adding custom New Relic metric"));
        self.inner.add_custom_metric(name, value)
    }

    fn add_custom_parameter(&self, name: &str, value: &Scalar) -> bool {
        self.log(|| debug!(name, %value, "Adding custom New Relic parameter"));
        self.inner.add_custom_parameter(name, value)
    }

    fn set_user_attributes(
        &self,
        user_value: &str,
        account_value: &str,
        product_value: &str,
    ) -> bool {
        self.log(|| {
            debug!(
                user_value,
                account_value,
                product_value,
                "Setting New Relic user attributes"
            )
        });
        self.inner
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
        self.log(|| {
            debug!(
                error_code = err_no,
                error_message = err_str,
                file = ?err_file,
                line = ?err_line,
                context_error = ?err_context,
                "Sending notice error to New Relic"
            )
        });
        self.inner
            .notice_error(err_no, err_str, err_file, err_line, err_context)
    }

    fn notice_exception(&self, error: &(dyn StdError + 'static), message: Option<&str>) {
        self.log(|| {
            debug!(
                override_message = ?message,
                exception = %error,
                "Sending exception to New Relic"
            )
        });
        self.inner.notice_exception(error, message)
    }

    fn get_browser_timing_header(&self, include_tags: bool) -> String {
        self.log(|| debug!(include_tags, "Getting New Relic browser timing header"));
        self.inner.get_browser_timing_header(include_tags)
    }

    fn get_browser_timing_footer(&self, include_tags: bool) -> String {
        self.log(|| debug!(include_tags, "Getting New Relic browser timing footer"));
        self.inner.get_browser_timing_footer(include_tags)
    }

    fn disable_auto_rum(&self) {
        self.log(|| debug!("Disabling New Relic auto-RUM"));
        self.inner.disable_auto_rum()
    }

    fn enable_background_job(&self) {
        self.log(|| debug!("Enabling New Relic background job"));
        self.inner.enable_background_job()
    }

    fn disable_background_job(&self) {
        self.log(|| debug!("Disabling New Relic background job"));
        self.inner.disable_background_job()
    }

    fn add_custom_tracer(&self, name: &str) -> bool {
        self.log(|| debug!(name, "Adding custom New Relic tracer"));
        self.inner.add_custom_tracer(name)
    }

    fn set_capture_params(&self, enabled: bool) {
        self.log(|| debug!(enabled, "Toggling New Relic capture params"));
        self.inner.set_capture_params(enabled)
    }

    fn time_datastore_segment(&self, params: &DatastoreParams, segment: &mut dyn FnMut()) {
        self.log(|| debug!(parameters = ?params, "Adding custom New Relic datastore segment"));
        self.inner.time_datastore_segment(params, segment)
    }
}
