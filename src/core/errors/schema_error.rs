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

//! Errors raised when a caller payload disagrees with the live schema

use std::fmt;

use thiserror::Error;

/// Which dimension check failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionCheck {
    /// Query vector against the anns field
    Search,
    /// Float vector row on insert
    FloatInsert,
    /// Packed binary vector row on insert, `dim / 8` bytes expected
    BinaryInsert,
    /// Unpacked bit array, length must be a multiple of 8
    BitPacking,
}

impl fmt::Display for DimensionCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            DimensionCheck::Search => "Your vector dimension is not match your anns_field dimension",
            DimensionCheck::FloatInsert => {
                "Insert fail: the length of the float vector should be equal to the dimension."
            }
            DimensionCheck::BinaryInsert => {
                "Insert fail: the length of the binary vector should be (dimension / 8)."
            }
            DimensionCheck::BitPacking => "The length of a binary bit array should be a multiple of 8.",
        };
        f.write_str(message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("Insert fail: some field does not exist for this collection in line. (field `{field}` in row {row})")]
    UnknownField { field: String, row: usize },

    #[error("Insert fail: field `{field}` is missing in row {row}.")]
    MissingField { field: String, row: usize },

    #[error("{check} (field `{field}`: expected {expected}, got {actual})")]
    DimensionMismatch {
        check: DimensionCheck,
        field: String,
        expected: usize,
        actual: usize,
    },

    #[error("Insert fail: value of field `{field}` in row {row} does not match data type {data_type}.")]
    ValueTypeMismatch {
        field: String,
        row: usize,
        data_type: String,
    },

    #[error("The value of the `data_type` property is not supported: {0}")]
    UnsupportedDataType(String),

    #[error("Your anns_field cannot find in this collection. (`{0}`)")]
    VectorFieldNotFound(String),

    #[error("The collection `{0}` has no vector field.")]
    NoVectorField(String),

    #[error("The `dim` type param of vector field `{0}` is missing or invalid.")]
    InvalidDim(String),
}
