// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Batch writer.
//!
//! Drives the line composer over a write request, joins the resulting
//! lines with newlines, and hands the payload to the transport in a
//! single `write` call. No retry, no acknowledgment, no partial-batch
//! recovery: if one point fails to encode, nothing is sent.

use std::io;

use thiserror::Error;

use fluxline::{compose, Clock, EncodeError, SystemClock, TagSet, WriteRequest};

use crate::options::Options;
use crate::transport::{Transport, UdpTransport};

/// Errors surfaced by [`Sender::send`].
#[derive(Debug, Error)]
pub enum SendError {
    /// The request could not be encoded; the transport was not touched.
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),

    /// The transport failed. Passed through unchanged.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Write client: global tags plus a transport.
///
/// Safe to share across threads once built; the options are not mutated
/// after construction.
pub struct Sender<T: Transport> {
    tags: TagSet,
    transport: T,
    clock: Box<dyn Clock + Send + Sync>,
}

impl Sender<UdpTransport> {
    /// Connect a UDP sender from options.
    pub fn connect(options: &Options) -> io::Result<Self> {
        let transport = UdpTransport::connect(&options.host, options.port)?;
        Ok(Self::with_transport(options.tags.clone(), transport))
    }
}

impl<T: Transport> Sender<T> {
    /// Build a sender over an arbitrary transport.
    pub fn with_transport(tags: TagSet, transport: T) -> Self {
        Self {
            tags,
            transport,
            clock: Box::new(SystemClock),
        }
    }

    /// Replace the wall clock. Timestamps become deterministic under a
    /// stub clock.
    pub fn with_clock(mut self, clock: Box<dyn Clock + Send + Sync>) -> Self {
        self.clock = clock;
        self
    }

    /// Encode the request and write the newline-joined payload.
    ///
    /// One `send` is exactly one transport write, regardless of how many
    /// points the request carries.
    pub fn send(&self, request: &WriteRequest) -> Result<(), SendError> {
        let lines = compose(request, &self.tags, self.clock.as_ref())?;
        let payload = lines.join("\n");
        log::debug!(
            "[sender] writing {} line(s), {} bytes",
            lines.len(),
            payload.len()
        );
        self.transport.write(&payload)?;
        Ok(())
    }
}
