// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::segment::DatastoreParams;

/// A scalar value accepted by custom parameters and custom event attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(value) => write!(f, "{value}"),
            Scalar::Int(value) => write!(f, "{value}"),
            Scalar::Float(value) => write!(f, "{value}"),
            Scalar::String(value) => f.write_str(value),
        }
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int(i64::from(value))
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::String(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::String(value)
    }
}

/// Attributes attached to a custom event.
pub type Attributes = HashMap<String, Scalar>;

/// The New Relic agent API as seen by application code.
///
/// Implementations never panic and never report expected conditions (agent not
/// loaded, instrumentation disabled) as failures. Boolean operations return
/// `false` only when the agent itself rejected the call.
pub trait NewRelic: Send + Sync {
    /// Sets the application name reported for the current and later
    /// transactions. `xmit` sends the current transaction under the old name
    /// before switching.
    fn set_application_name(&self, name: &str, license: Option<&str>, xmit: bool) -> bool;

    fn set_transaction_name(&self, name: &str) -> bool;

    /// Starts a new transaction. Without a name, the configured default
    /// application name is used.
    fn start_transaction(&self, name: Option<&str>, license: Option<&str>) -> bool;

    /// Stops instrumenting the current transaction and sends its data. With
    /// `ignore`, the data is discarded instead.
    fn end_transaction(&self, ignore: bool) -> bool;

    fn ignore_transaction(&self);

    /// Excludes the current transaction from the Apdex score.
    fn exclude_from_apdex(&self);

    /// Stops timing the current transaction but keeps instrumenting it.
    fn stop_transaction_timing(&self);

    fn add_custom_event(&self, name: &str, attributes: &Attributes);

    /// Records a custom metric, in milliseconds.
    fn add_custom_metric(&self, name: &str, value: f64) -> bool;

    fn add_custom_parameter(&self, name: &str, value: &Scalar) -> bool;

    /// Sets the user, account and product attributes of the current
    /// transaction.
    fn set_user_attributes(
        &self,
        user_value: &str,
        account_value: &str,
        product_value: &str,
    ) -> bool;

    fn notice_error(
        &self,
        err_no: i32,
        err_str: &str,
        err_file: Option<&str>,
        err_line: Option<u32>,
        err_context: Option<&str>,
    );

    /// Reports a caught error. Without an override `message`, the error's own
    /// message is reported.
    fn notice_exception(&self, error: &(dyn StdError + 'static), message: Option<&str>);

    /// Returns the browser monitoring header snippet. `include_tags` wraps it in
    /// `<script>` tags.
    fn get_browser_timing_header(&self, include_tags: bool) -> String;

    fn get_browser_timing_footer(&self, include_tags: bool) -> String;

    /// Disables automatic injection of the browser monitoring snippet.
    fn disable_auto_rum(&self);

    fn enable_background_job(&self);

    fn disable_background_job(&self);

    /// Registers a function or method for custom tracing, e.g. `Foo::bar`.
    fn add_custom_tracer(&self, name: &str) -> bool;

    fn set_capture_params(&self, enabled: bool);

    /// Times `segment` as a datastore call described by `params`.
    ///
    /// Implementations either run `segment` exactly once or not at all.
    /// Callers normally go through [`NewRelic::record_datastore_segment`].
    fn time_datastore_segment(&self, params: &DatastoreParams, segment: &mut dyn FnMut());

    /// Runs `func` inside a datastore segment and returns its result, or
    /// `None` when the implementation did not run it.
    fn record_datastore_segment<R, F>(&self, params: &DatastoreParams, func: F) -> Option<R>
    where
        Self: Sized,
        F: FnOnce() -> R,
    {
        let mut func = Some(func);
        let mut result = None;
        self.time_datastore_segment(params, &mut || {
            if let Some(func) = func.take() {
                result = Some(func());
            }
        });
        result
    }
}

impl<T: NewRelic + ?Sized> NewRelic for Arc<T> {
    fn set_application_name(&self, name: &str, license: Option<&str>, xmit: bool) -> bool {
        (**self).set_application_name(name, license, xmit)
    }

    fn set_transaction_name(&self, name: &str) -> bool {
        (**self).set_transaction_name(name)
    }

    fn start_transaction(&self, name: Option<&str>, license: Option<&str>) -> bool {
        (**self).start_transaction(name, license)
    }

    fn end_transaction(&self, ignore: bool) -> bool {
        (**self).end_transaction(ignore)
    }

    fn ignore_transaction(&self) {
        (**self).ignore_transaction()
    }

    fn exclude_from_apdex(&self) {
        (**self).exclude_from_apdex()
    }

    fn stop_transaction_timing(&self) {
        (**self).stop_transaction_timing()
    }

    fn add_custom_event(&self, name: &str, attributes: &Attributes) {
        (**self).add_custom_event(name, attributes)
    }

    fn add_custom_metric(&self, name: &str, value: f64) -> bool {
        (**self).add_custom_metric(name, value)
    }

    fn add_custom_parameter(&self, name: &str, value: &Scalar) -> bool {
        (**self).add_custom_parameter(name, value)
    }

    fn set_user_attributes(
        &self,
        user_value: &str,
        account_value: &str,
        product_value: &str,
    ) -> bool {
        (**self).set_user_attributes(user_value, account_value, product_value)
    }

    fn notice_error(
        &self,
        err_no: i32,
        err_str: &str,
        err_file: Option<&str>,
        err_line: Option<u32>,
        err_context: Option<&str>,
    ) {
        (**self).notice_error(err_no, err_str, err_file, err_line, err_context)
    }

    fn notice_exception(&self, error: &(dyn StdError + 'static), message: Option<&str>) {
        (**self).notice_exception(error, message)
    }

    fn get_browser_timing_header(&self, include_tags: bool) -> String {
        (**self).get_browser_timing_header(include_tags)
    }

    fn get_browser_timing_footer(&self, include_tags: bool) -> String {
        (**self).get_browser_timing_footer(include_tags)
    }

    fn disable_auto_rum(&self) {
        (**self).disable_auto_rum()
    }

    fn enable_background_job(&self) {
        (**self).enable_background_job()
    }

    fn disable_background_job(&self) {
        (**self).disable_background_job()
    }

    fn add_custom_tracer(&self, name: &str) -> bool {
        (**self).add_custom_tracer(name)
    }

    fn set_capture_params(&self, enabled: bool) {
        (**self).set_capture_params(enabled)
    }

    fn time_datastore_segment(&self, params: &DatastoreParams, segment: &mut dyn FnMut()) {
        (**self).time_datastore_segment(params, segment)
    }
}
