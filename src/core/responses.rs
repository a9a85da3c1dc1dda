/*
 * Copyright 2025 Vijaykumar Singh
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Row-oriented responses built from the wire results

use crate::core::types::{RowData, SearchResultRow};
use crate::proto::common::{KeyValuePair, Status};

/// Search hits grouped per query vector, in query order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchResults {
    pub status: Status,
    pub results: Vec<Vec<SearchResultRow>>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryResults {
    pub status: Status,
    pub data: Vec<RowData>,
}

/// Statistics as returned by the server plus the extracted `row_count`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatisticsResponse {
    pub status: Status,
    pub stats: Vec<KeyValuePair>,
    pub data: serde_json::Map<String, serde_json::Value>,
}

impl StatisticsResponse {
    pub fn row_count(&self) -> Option<i64> {
        match self.data.get("row_count")? {
            serde_json::Value::Number(n) => n.as_i64(),
            serde_json::Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CountResult {
    pub status: Status,
    pub data: i64,
}
