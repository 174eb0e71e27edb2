// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Mock implementations of the facade and of the native agent

use std::error::Error as StdError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use newrelic_facade::native::NativeAgent;
use newrelic_facade::{Attributes, DatastoreParams, NewRelic, Scalar};

use super::capture::Captured;

/// Records each operation together with the number of events captured at the
/// moment it ran.
pub struct MockNewRelic {
    verdict: bool,
    snippet: String,
    captured: Option<Captured>,
    calls: Mutex<Vec<(&'static str, usize)>>,
}

impl MockNewRelic {
    pub fn new(verdict: bool, snippet: &str) -> Self {
        Self {
            verdict,
            snippet: snippet.to_string(),
            captured: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn observing(mut self, captured: Captured) -> Self {
        self.captured = Some(captured);
        self
    }

    pub fn calls(&self) -> Vec<(&'static str, usize)> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, operation: &'static str) {
        let seen = self.captured.as_ref().map_or(0, Captured::len);
        self.calls.lock().unwrap().push((operation, seen));
    }
}

impl NewRelic for MockNewRelic {
    fn set_application_name(&self, _name: &str, _license: Option<&str>, _xmit: bool) -> bool {
        self.record("set_application_name");
        self.verdict
    }

    fn set_transaction_name(&self, _name: &str) -> bool {
        self.record("set_transaction_name");
        self.verdict
    }

    fn start_transaction(&self, _name: Option<&str>, _license: Option<&str>) -> bool {
        self.record("start_transaction");
        self.verdict
    }

    fn end_transaction(&self, _ignore: bool) -> bool {
        self.record("end_transaction");
        self.verdict
    }

    fn ignore_transaction(&self) {
        self.record("ignore_transaction");
    }

    fn exclude_from_apdex(&self) {
        self.record("exclude_from_apdex");
    }

    fn stop_transaction_timing(&self) {
        self.record("stop_transaction_timing");
    }

    fn add_custom_event(&self, _name: &str, _attributes: &Attributes) {
        self.record("add_custom_event");
    }

    fn add_custom_metric(&self, _name: &str, _value: f64) -> bool {
        self.record("add_custom_metric");
        self.verdict
    }

    fn add_custom_parameter(&self, _name: &str, _value: &Scalar) -> bool {
        self.record("add_custom_parameter");
        self.verdict
    }

    fn set_user_attributes(
        &self,
        _user_value: &str,
        _account_value: &str,
        _product_value: &str,
    ) -> bool {
        self.record("set_user_attributes");
        self.verdict
    }

    fn notice_error(
        &self,
        _err_no: i32,
        _err_str: &str,
        _err_file: Option<&str>,
        _err_line: Option<u32>,
        _err_context: Option<&str>,
    ) {
        self.record("notice_error");
    }

    fn notice_exception(&self, _error: &(dyn StdError + 'static), _message: Option<&str>) {
        self.record("notice_exception");
    }

    fn get_browser_timing_header(&self, _include_tags: bool) -> String {
        self.record("get_browser_timing_header");
        self.snippet.clone()
    }

    fn get_browser_timing_footer(&self, _include_tags: bool) -> String {
        self.record("get_browser_timing_footer");
        self.snippet.clone()
    }

    fn disable_auto_rum(&self) {
        self.record("disable_auto_rum");
    }

    fn enable_background_job(&self) {
        self.record("enable_background_job");
    }

    fn disable_background_job(&self) {
        self.record("disable_background_job");
    }

    fn add_custom_tracer(&self, _name: &str) -> bool {
        self.record("add_custom_tracer");
        self.verdict
    }

    fn set_capture_params(&self, _enabled: bool) {
        self.record("set_capture_params");
    }

    fn time_datastore_segment(&self, _params: &DatastoreParams, segment: &mut dyn FnMut()) {
        self.record("time_datastore_segment");
        segment();
    }
}

/// Native agent that accepts everything and counts calls. Clones share the
/// counter.
#[derive(Debug, Default, Clone)]
pub struct CountingAgent {
    calls: Arc<AtomicUsize>,
}

impl CountingAgent {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

impl NativeAgent for CountingAgent {
    fn set_appname(&self, _name: &str, _license: Option<&str>, _xmit: bool) -> bool {
        self.hit();
        true
    }

    fn name_transaction(&self, _name: &str) -> bool {
        self.hit();
        true
    }

    fn ignore_transaction(&self) {
        self.hit();
    }

    fn record_custom_event(&self, _name: &str, _attributes: &Attributes) {
        self.hit();
    }

    fn custom_metric(&self, _name: &str, _value: f64) -> bool {
        self.hit();
        true
    }

    fn add_custom_parameter(&self, _name: &str, _value: &Scalar) -> bool {
        self.hit();
        true
    }

    fn get_browser_timing_header(&self, include_tags: bool) -> String {
        self.hit();
        if include_tags {
            "<script>header</script>".to_string()
        } else {
            "header".to_string()
        }
    }

    fn get_browser_timing_footer(&self, include_tags: bool) -> String {
        self.hit();
        if include_tags {
            "<script>footer</script>".to_string()
        } else {
            "footer".to_string()
        }
    }

    fn disable_autorum(&self) {
        self.hit();
    }

    fn notice_error(
        &self,
        _err_no: i32,
        _message: &str,
        _file: Option<&str>,
        _line: Option<u32>,
        _context: Option<&str>,
    ) {
        self.hit();
    }

    fn notice_exception(&self, _message: &str, _error: &(dyn StdError + 'static)) {
        self.hit();
    }

    fn background_job(&self, _flag: bool) {
        self.hit();
    }

    fn start_transaction(&self, _appname: &str, _license: Option<&str>) -> bool {
        self.hit();
        true
    }

    fn end_transaction(&self, _ignore: bool) -> bool {
        self.hit();
        true
    }

    fn ignore_apdex(&self) {
        self.hit();
    }

    fn add_custom_tracer(&self, _name: &str) -> bool {
        self.hit();
        true
    }

    fn capture_params(&self, _enabled: bool) {
        self.hit();
    }

    fn end_of_transaction(&self) {
        self.hit();
    }

    fn record_datastore_segment(&self, _params: &DatastoreParams, segment: &mut dyn FnMut()) {
        self.hit();
        segment();
    }

    fn set_user_attributes(&self, _user: &str, _account: &str, _product: &str) -> bool {
        self.hit();
        true
    }
}
