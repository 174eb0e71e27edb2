// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// Describes a datastore call timed with
/// [`NewRelic::record_datastore_segment`](crate::NewRelic::record_datastore_segment).
///
/// Field names serialize to the keys the agent expects (`portPathOrId`,
/// `databaseName`, ...). Unset fields are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatastoreParams {
    /// Datastore product, e.g. `MySQL` or `Redis`
    pub product: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_path_or_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_query_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_query: Option<String>,
}

impl DatastoreParams {
    pub fn new(product: impl Into<String>) -> Self {
        Self {
            product: product.into(),
            ..Default::default()
        }
    }

    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = Some(collection.into());
        self
    }

    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn with_port_path_or_id(mut self, port_path_or_id: impl Into<String>) -> Self {
        self.port_path_or_id = Some(port_path_or_id.into());
        self
    }

    pub fn with_database_name(mut self, database_name: impl Into<String>) -> Self {
        self.database_name = Some(database_name.into());
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Records the query that produced `query`, e.g. the ORM statement behind a
    /// generated SQL string.
    pub fn with_input_query(
        mut self,
        label: impl Into<String>,
        input_query: impl Into<String>,
    ) -> Self {
        self.input_query_label = Some(label.into());
        self.input_query = Some(input_query.into());
        self
    }
}
