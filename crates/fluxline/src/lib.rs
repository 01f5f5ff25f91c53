// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! InfluxDB Line Protocol encoder.
//!
//! Line Protocol format:
//! ```text
//! measurement,tag1=val1,tag2=val2 field1=val1,field2=val2 timestamp_ns
//! ```
//!
//! See: <https://docs.influxdata.com/influxdb/v2/reference/syntax/line-protocol/>
//!
//! This crate turns a [`WriteRequest`] (tags, an optional explicit time,
//! and a list of points) into line-protocol records. It is pure and
//! synchronous; delivery lives in the companion client crate.
//!
//! ```text
//! WriteRequest --> compose --> Vec<String> (one line per point)
//! ```
//!
//! Tag ordering is the caller's insertion order, and the three tag layers
//! (global, request, point) are concatenated in that precedence order.
//! The wall clock sits behind the [`Clock`] trait so batches can be
//! composed deterministically in tests.

pub mod error;
pub mod escape;
pub mod line;
pub mod point;
pub mod time;
pub mod value;

pub use error::EncodeError;
pub use line::{compose, encode_fields, encode_tags};
pub use point::{Point, TagSet, WriteRequest};
pub use time::{resolve_rfc3339, Clock, SystemClock};
pub use value::FieldValue;
