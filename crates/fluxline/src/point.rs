// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Write request data model: tag sets, points, and requests.
//!
//! Everything here is transient, built per write call and dropped after
//! the payload is handed to the transport.

use crate::value::FieldValue;

/// An ordered set of tag key/value pairs.
///
/// Insertion order is the serialization order and is never sorted.
/// Keys are unique within one set: inserting an existing key replaces
/// the value in place, keeping the original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagSet(Vec<(String, String)>);

impl TagSet {
    /// Create an empty tag set.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert a tag, replacing the value in place if the key exists.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.0.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.0.push((key, value));
        }
    }

    /// Iterate pairs in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, (String, String)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TagSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = TagSet::new();
        for (k, v) in iter {
            set.insert(k, v);
        }
        set
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a (String, String);
    type IntoIter = std::slice::Iter<'a, (String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// One timestamped observation under a measurement.
///
/// Fields keep their declaration order; a point without at least one
/// field is rejected at composition time.
#[derive(Debug, Clone, Default)]
pub struct Point {
    /// The named series this point belongs to.
    pub measurement: String,
    /// Point-level tags, the highest-precedence tag layer.
    pub tags: TagSet,
    /// Typed field values in declaration order.
    pub fields: Vec<(String, FieldValue)>,
}

impl Point {
    /// Create a point for the given measurement.
    pub fn new(measurement: impl Into<String>) -> Self {
        Self {
            measurement: measurement.into(),
            tags: TagSet::new(),
            fields: Vec::new(),
        }
    }

    /// Add a point-level tag.
    pub fn tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key, value);
        self
    }

    /// Add a field.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }
}

/// A batch write: request-level tags, an optional explicit time, and the
/// points to encode.
///
/// When `time` is set it is resolved once and shared by every point in
/// the batch; when absent each point gets an independently resolved
/// wall-clock timestamp.
#[derive(Debug, Clone, Default)]
pub struct WriteRequest {
    /// Request-level tags, layered between global and point tags.
    pub tags: TagSet,
    /// Optional explicit RFC 3339 time for the whole batch.
    pub time: Option<String>,
    /// Points to write. One line is emitted per point.
    pub points: Vec<Point>,
}

impl WriteRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a request-level tag.
    pub fn tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key, value);
        self
    }

    /// Set the explicit batch time (RFC 3339).
    pub fn time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    /// Append a point.
    pub fn point(mut self, point: Point) -> Self {
        self.points.push(point);
        self
    }
}
