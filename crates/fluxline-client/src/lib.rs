// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! fluxline UDP client.
//!
//! Delivery layer for the `fluxline` encoder: client options (target
//! address plus the global tag layer), a fire-and-forget UDP transport,
//! and the batch sender that ties them together.
//!
//! ```text
//! WriteRequest --> Sender --> compose --> newline-join --> Transport::write
//! ```
//!
//! One `send` call is one transport write. Delivery is not confirmed
//! (UDP) and nothing is retried.
//!
//! ```no_run
//! use fluxline::{Point, WriteRequest};
//! use fluxline_client::{Options, Sender};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let options = Options::new("127.0.0.1", 8089).tag("dc", "eu-west");
//! let sender = Sender::connect(&options)?;
//! sender.send(
//!     &WriteRequest::new().point(Point::new("cpu").field("value", 0.64)),
//! )?;
//! # Ok(())
//! # }
//! ```

pub mod options;
pub mod query;
pub mod sender;
pub mod transport;

pub use options::{Options, OptionsError};
pub use sender::{SendError, Sender};
pub use transport::{Transport, UdpTransport};
