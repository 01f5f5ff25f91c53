// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Line composition.
//!
//! Assembles one line-protocol record per point:
//!
//! ```text
//! measurement[,tag1=val1,...] field1=val1[,field2=val2,...] timestamp_ns
//! ```
//!
//! Tag layers are concatenated in precedence order (global, request,
//! point). The merge is a literal append: a key present in more than one
//! layer appears more than once in the output, and order within each
//! layer is the caller's insertion order.

use crate::error::EncodeError;
use crate::escape::{escape_field_key, escape_measurement, escape_tag_key, escape_tag_value};
use crate::point::{Point, TagSet, WriteRequest};
use crate::time::{resolve_rfc3339, Clock};

/// Encode a tag set as a comma-joined `key=value` segment.
///
/// An empty set yields an empty string; the caller omits the segment.
pub fn encode_tags(tags: &TagSet) -> String {
    encode_tag_pairs(tags.iter())
}

fn encode_tag_pairs<'a>(pairs: impl Iterator<Item = &'a (String, String)>) -> String {
    let mut out = String::new();
    for (i, (key, value)) in pairs.enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&escape_tag_key(key));
        out.push('=');
        out.push_str(&escape_tag_value(value));
    }
    out
}

/// Encode a point's fields as a comma-joined `key=value` segment.
///
/// Fails with [`EncodeError::EmptyFieldSet`] when the point has no
/// fields.
pub fn encode_fields(point: &Point) -> Result<String, EncodeError> {
    if point.fields.is_empty() {
        return Err(EncodeError::EmptyFieldSet(point.measurement.clone()));
    }

    let mut out = String::new();
    for (i, (key, value)) in point.fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&escape_field_key(key));
        out.push('=');
        out.push_str(&value.to_line_protocol());
    }
    Ok(out)
}

/// Compose one line per point in the request.
///
/// When the request carries an explicit time it is resolved once and
/// shared by every line; otherwise the clock is read independently per
/// point. Any failure aborts the whole batch.
pub fn compose(
    request: &WriteRequest,
    global_tags: &TagSet,
    clock: &dyn Clock,
) -> Result<Vec<String>, EncodeError> {
    let shared_ts = match &request.time {
        Some(time) => Some(resolve_rfc3339(time)?),
        None => None,
    };

    let mut lines = Vec::with_capacity(request.points.len());
    for point in &request.points {
        let timestamp = shared_ts.unwrap_or_else(|| clock.now_nanos());
        lines.push(compose_line(point, global_tags, &request.tags, timestamp)?);
    }
    Ok(lines)
}

fn compose_line(
    point: &Point,
    global_tags: &TagSet,
    request_tags: &TagSet,
    timestamp: i64,
) -> Result<String, EncodeError> {
    let mut line = escape_measurement(&point.measurement);

    let tag_segment = encode_tag_pairs(
        global_tags
            .iter()
            .chain(request_tags.iter())
            .chain(point.tags.iter()),
    );
    if !tag_segment.is_empty() {
        line.push(',');
        line.push_str(&tag_segment);
    }

    line.push(' ');
    line.push_str(&encode_fields(point)?);

    line.push(' ');
    line.push_str(&timestamp.to_string());

    Ok(line)
}
