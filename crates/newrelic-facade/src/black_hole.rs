// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::error::Error as StdError;

use crate::api::{Attributes, NewRelic, Scalar};
use crate::segment::DatastoreParams;

/// Accepts every call and does nothing.
///
/// Boolean operations return `true`, browser snippets are empty and datastore
/// segments are not run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BlackHole;

impl NewRelic for BlackHole {
    fn set_application_name(&self, _name: &str, _license: Option<&str>, _xmit: bool) -> bool {
        true
    }

    fn set_transaction_name(&self, _name: &str) -> bool {
        true
    }

    fn start_transaction(&self, _name: Option<&str>, _license: Option<&str>) -> bool {
        true
    }

    fn end_transaction(&self, _ignore: bool) -> bool {
        true
    }

    fn ignore_transaction(&self) {}

    fn exclude_from_apdex(&self) {}

    fn stop_transaction_timing(&self) {}

    fn add_custom_event(&self, _name: &str, _attributes: &Attributes) {}

    fn add_custom_metric(&self, _name: &str, _value: f64) -> bool {
        true
    }

    fn add_custom_parameter(&self, _name: &str, _value: &Scalar) -> bool {
        true
    }

    fn set_user_attributes(
        &self,
        _user_value: &str,
        _account_value: &str,
        _product_value: &str,
    ) -> bool {
        true
    }

    fn notice_error(
        &self,
        _err_no: i32,
        _err_str: &str,
        _err_file: Option<&str>,
        _err_line: Option<u32>,
        _err_context: Option<&str>,
    ) {
    }

    fn notice_exception(&self, _error: &(dyn StdError + 'static), _message: Option<&str>) {}

    fn get_browser_timing_header(&self, _include_tags: bool) -> String {
        String::new()
    }

    fn get_browser_timing_footer(&self, _include_tags: bool) -> String {
        String::new()
    }

    fn disable_auto_rum(&self) {}

    fn enable_background_job(&self) {}

    fn disable_background_job(&self) {}

    fn add_custom_tracer(&self, _name: &str) -> bool {
        true
    }

    fn set_capture_params(&self, _enabled: bool) {}

    fn time_datastore_segment(&self, _params: &DatastoreParams, _segment: &mut dyn FnMut()) {}
}
