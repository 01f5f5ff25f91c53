// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! UDP transport.
//!
//! Fire-and-forget datagram delivery. A completed `write` does not mean
//! the payload arrived anywhere; MTU limits are between the caller and
//! the network.

use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs, UdpSocket};

use socket2::{Domain, Protocol, Socket, Type};

/// A one-way payload carrier.
///
/// Exactly one `write` call carries one payload; the implementation
/// decides what a payload maps to on the wire (for UDP, one datagram).
pub trait Transport {
    fn write(&self, payload: &str) -> io::Result<()>;
}

/// UDP transport bound to an ephemeral local port and connected to a
/// single target.
pub struct UdpTransport {
    socket: UdpSocket,
    target: SocketAddr,
}

impl UdpTransport {
    /// Resolve `host:port` and connect a datagram socket to it.
    pub fn connect(host: &str, port: u16) -> io::Result<Self> {
        let target = (host, port).to_socket_addrs()?.next().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::AddrNotAvailable,
                format!("no address found for {}:{}", host, port),
            )
        })?;

        let (domain, bind): (Domain, SocketAddr) = if target.is_ipv4() {
            (Domain::IPV4, (Ipv4Addr::UNSPECIFIED, 0).into())
        } else {
            (Domain::IPV6, (Ipv6Addr::UNSPECIFIED, 0).into())
        };

        let socket2 = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
        socket2.bind(&bind.into())?;

        let socket: UdpSocket = socket2.into();
        socket.connect(target)?;
        log::debug!(
            "[UDP] transport connected local={} target={}",
            socket.local_addr()?,
            target
        );

        Ok(Self { socket, target })
    }

    /// The resolved target address.
    pub fn target(&self) -> SocketAddr {
        self.target
    }
}

impl Transport for UdpTransport {
    fn write(&self, payload: &str) -> io::Result<()> {
        let sent = self.socket.send(payload.as_bytes())?;
        log::debug!("[UDP] sent {} bytes to {}", sent, self.target);
        Ok(())
    }
}
