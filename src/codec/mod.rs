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

//! Wire codecs: parameter pairs, vector payloads, hybrid timestamps

pub mod key_value;
pub mod timestamp;
pub mod vector;

pub use key_value::{find_key_value, from_pairs, from_typed_pairs, to_pairs, value_kinds, ValueKind};
pub use timestamp::{
    datetime_to_hybridts, hybridts_str_to_unixtime, hybridts_to_unixtime, unixtime_str_to_hybridts,
    unixtime_to_hybridts,
};
pub use vector::{
    build_placeholder_group, bytes_to_float_vector, float_vector_to_bytes, pack_binary_bits,
    unpack_binary_bits,
};
