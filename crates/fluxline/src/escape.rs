// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Line Protocol escaping rules.
//!
//! See: <https://docs.influxdata.com/influxdb/v2/reference/syntax/line-protocol/>

/// Escape a measurement name. Commas and spaces are backslash-prefixed.
pub fn escape_measurement(s: &str) -> String {
    s.replace(',', "\\,").replace(' ', "\\ ")
}

/// Escape a tag key. Commas, equals signs, and spaces are backslash-prefixed.
pub fn escape_tag_key(s: &str) -> String {
    s.replace(',', "\\,")
        .replace('=', "\\=")
        .replace(' ', "\\ ")
}

/// Escape a tag value. Same rules as tag keys.
pub fn escape_tag_value(s: &str) -> String {
    s.replace(',', "\\,")
        .replace('=', "\\=")
        .replace(' ', "\\ ")
}

/// Escape a field key. Same rules as tag keys.
pub fn escape_field_key(s: &str) -> String {
    s.replace(',', "\\,")
        .replace('=', "\\=")
        .replace(' ', "\\ ")
}
