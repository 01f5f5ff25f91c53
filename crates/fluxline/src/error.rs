// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Encoding errors.

use thiserror::Error;

/// Errors raised while encoding a write request into line protocol.
///
/// All variants are synchronous and abort the whole batch: no partial
/// payload is ever handed to a transport.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// A field value could not be classified into one of the four
    /// supported scalar kinds (integer, float, boolean, string).
    #[error("unsupported field value type: {0}")]
    UnsupportedType(String),

    /// A point declared zero fields. A line-protocol record is invalid
    /// without at least one field.
    #[error("point '{0}' has no fields")]
    EmptyFieldSet(String),

    /// An explicit request time could not be parsed as RFC 3339.
    #[error("invalid time {value:?}: {source}")]
    InvalidTime {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
