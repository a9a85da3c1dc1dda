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

//! Vector byte codecs and placeholder-group encoding
//!
//! Float vectors are 4 little-endian bytes per element. Binary vectors are
//! packed 8 bits per byte, most significant bit first, so element `i` of a
//! bit array lands in byte `i / 8` under mask `0x80 >> (i % 8)`.

use bytes::{Buf, BufMut, BytesMut};
use prost::Message;

use crate::core::errors::{DimensionCheck, MilvusError, SchemaError};
use crate::core::types::VectorData;
use crate::proto::common::{PlaceholderGroup, PlaceholderType, PlaceholderValue};

/// Tag expected by the server for boolean-expression searches
pub const PLACEHOLDER_TAG: &str = "$0";

pub fn float_vector_to_bytes(vector: &[f32]) -> Vec<u8> {
    let mut buf = BytesMut::with_capacity(vector.len() * 4);
    for value in vector {
        buf.put_f32_le(*value);
    }
    buf.to_vec()
}

/// Inverse of [`float_vector_to_bytes`]
pub fn bytes_to_float_vector(bytes: &[u8]) -> Result<Vec<f32>, MilvusError> {
    if bytes.len() % 4 != 0 {
        return Err(MilvusError::MalformedResponse(format!(
            "float vector payload of {} bytes is not a multiple of 4",
            bytes.len()
        )));
    }
    let mut buf = bytes;
    let mut out = Vec::with_capacity(bytes.len() / 4);
    while buf.has_remaining() {
        out.push(buf.get_f32_le());
    }
    Ok(out)
}

/// Pack a 0/1 array, any non-zero element counts as a set bit
pub fn pack_binary_bits(bits: &[u8]) -> Result<Vec<u8>, SchemaError> {
    if bits.len() % 8 != 0 {
        return Err(SchemaError::DimensionMismatch {
            check: DimensionCheck::BitPacking,
            field: "binary_vector".to_string(),
            expected: bits.len().next_multiple_of(8),
            actual: bits.len(),
        });
    }
    Ok(bits
        .chunks_exact(8)
        .map(|chunk| {
            chunk
                .iter()
                .enumerate()
                .filter(|(_, bit)| **bit != 0)
                .fold(0u8, |byte, (i, _)| byte | (0x80 >> i))
        })
        .collect())
}

/// Inverse of [`pack_binary_bits`], one 0/1 element per bit
pub fn unpack_binary_bits(bytes: &[u8]) -> Vec<u8> {
    bytes
        .iter()
        .flat_map(|byte| (0..8).map(move |i| (byte >> (7 - i)) & 1))
        .collect()
}

pub fn vector_to_bytes(vector: &VectorData) -> Vec<u8> {
    match vector {
        VectorData::Float(values) => float_vector_to_bytes(values),
        VectorData::Binary(packed) => packed.clone(),
    }
}

/// Serialized `PlaceholderGroup` holding every query vector under tag `$0`
pub fn build_placeholder_group(vectors: &[VectorData], kind: PlaceholderType) -> Vec<u8> {
    let group = PlaceholderGroup {
        placeholders: vec![PlaceholderValue {
            tag: PLACEHOLDER_TAG.to_string(),
            r#type: kind as i32,
            values: vectors.iter().map(vector_to_bytes).collect(),
        }],
    };
    group.encode_to_vec()
}
