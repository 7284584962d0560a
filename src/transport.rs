//! Seams between the sender and the radio.
//!
//! The sender never talks to the ESP-NOW driver directly. It drives a
//! [`Transport`] for datagrams and a [`NetworkInterface`] for the WiFi mode
//! switch, so the same logic runs against the real radio or a test double.

use crate::mac::MacAddress;
use core::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportError {
    #[error("transmit subsystem is not initialized")]
    NotInitialized,
    #[error("peer is already registered")]
    PeerExists,
    #[error("peer is not registered")]
    PeerNotFound,
    #[error("peer list is full")]
    PeerListFull,
    #[error("driver rejected the request")]
    Driver,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceError {
    #[error("interface did not become ready within {0} ms")]
    NotReady(u32),
    #[error("could not switch interface mode")]
    ModeChange,
}

/// Peer registration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeerConfig {
    pub address: MacAddress,
    /// 0 means "whatever channel the interface is on".
    pub channel: u8,
    pub encrypt: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Delivered,
    Failed,
}

impl fmt::Display for DeliveryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return match self {
            Self::Delivered => f.write_str("Delivered ✓"),
            Self::Failed => f.write_str("Failed ✗"),
        };
    }
}

/// Completion notice for some earlier send. Carries no reference to the
/// send that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendStatus {
    pub peer: MacAddress,
    pub outcome: DeliveryOutcome,
}

impl SendStatus {
    pub fn delivered(&self) -> bool {
        return self.outcome == DeliveryOutcome::Delivered;
    }
}

/// Point-to-point datagram service (ESP-NOW).
pub trait Transport {
    fn init(&mut self) -> Result<(), TransportError>;

    fn add_peer(&mut self, peer: PeerConfig) -> Result<(), TransportError>;

    fn remove_peer(&mut self, address: &MacAddress) -> Result<(), TransportError>;

    /// Queues `data` for `address`. `Ok` means accepted, not delivered.
    fn send(&mut self, address: &MacAddress, data: &[u8]) -> Result<(), TransportError>;

    /// Next delivery notice raised by the radio since the last call, if any.
    fn poll_send_status(&mut self) -> Option<SendStatus>;
}

/// WiFi interface control needed before ESP-NOW can run.
pub trait NetworkInterface {
    /// Drops any association with an access point.
    fn disconnect(&mut self);

    fn set_station_mode(&mut self) -> Result<(), InterfaceError>;

    /// Blocks until the interface settled after a mode change, for at most
    /// `timeout_ms`.
    fn wait_ready(&mut self, timeout_ms: u32) -> Result<(), InterfaceError>;

    fn local_address(&self) -> MacAddress;
}
