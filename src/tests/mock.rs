use crate::mac::MacAddress;
use crate::transport::{
    DeliveryOutcome, InterfaceError, NetworkInterface, PeerConfig, SendStatus, Transport, TransportError,
};
use mockall::mock;
use std::collections::VecDeque;
use std::vec::Vec;

pub const LOCAL_MAC: MacAddress = MacAddress([0x24, 0x6F, 0x28, 0x01, 0x02, 0x03]);
pub const RECEIVER_MAC: MacAddress = MacAddress([0x08, 0x3A, 0xF2, 0xAA, 0xBB, 0xCC]);
pub const OTHER_MAC: MacAddress = MacAddress([0x08, 0x3A, 0xF2, 0x11, 0x22, 0x33]);

/// Radio calls in the order they were made
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RadioCall {
    Init,
    AddPeer(PeerConfig),
    RemovePeer(MacAddress),
    Send(MacAddress),
}

/// In-memory stand-in for the ESP-NOW driver.
///
/// Keeps a real peer table, so duplicate registrations and sends to unknown
/// peers fail the way the driver does. Delivery notices are only raised
/// when a test calls [FakeRadio::complete].
#[derive(Default)]
pub struct FakeRadio {
    initialized: bool,
    peers: Vec<MacAddress>,

    /// Every call, successful or not
    pub calls: Vec<RadioCall>,

    /// Accepted datagrams
    pub sent: Vec<(MacAddress, Vec<u8>)>,

    /// Notices not yet polled
    pending: VecDeque<SendStatus>,

    /// Injected failures
    pub fail_init: Option<TransportError>,
    pub fail_add: Option<TransportError>,
    pub fail_remove: Option<TransportError>,
    pub fail_send: Option<TransportError>,
}

impl FakeRadio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn peers(&self) -> &[MacAddress] {
        &self.peers
    }

    pub fn count(&self, matches: impl Fn(&RadioCall) -> bool) -> usize {
        self.calls.iter().filter(|call| matches(call)).count()
    }

    /// Raises a delivery notice for the most recent accepted send.
    pub fn complete(&mut self, outcome: DeliveryOutcome) {
        let peer = self.sent.last().map(|(peer, _)| *peer).unwrap();
        self.pending.push_back(SendStatus { peer, outcome });
    }
}

impl Transport for FakeRadio {
    fn init(&mut self) -> Result<(), TransportError> {
        self.calls.push(RadioCall::Init);
        if let Some(err) = self.fail_init {
            return Err(err);
        }
        self.initialized = true;
        Ok(())
    }

    fn add_peer(&mut self, peer: PeerConfig) -> Result<(), TransportError> {
        self.calls.push(RadioCall::AddPeer(peer));
        if !self.initialized {
            return Err(TransportError::NotInitialized);
        }
        if let Some(err) = self.fail_add {
            return Err(err);
        }
        if self.peers.contains(&peer.address) {
            return Err(TransportError::PeerExists);
        }
        self.peers.push(peer.address);
        Ok(())
    }

    fn remove_peer(&mut self, address: &MacAddress) -> Result<(), TransportError> {
        self.calls.push(RadioCall::RemovePeer(*address));
        if let Some(err) = self.fail_remove {
            return Err(err);
        }
        let index = self
            .peers
            .iter()
            .position(|peer| peer == address)
            .ok_or(TransportError::PeerNotFound)?;
        self.peers.remove(index);
        Ok(())
    }

    fn send(&mut self, address: &MacAddress, data: &[u8]) -> Result<(), TransportError> {
        self.calls.push(RadioCall::Send(*address));
        if !self.initialized {
            return Err(TransportError::NotInitialized);
        }
        if let Some(err) = self.fail_send {
            return Err(err);
        }
        if !self.peers.contains(address) {
            return Err(TransportError::PeerNotFound);
        }
        self.sent.push((*address, data.to_vec()));
        Ok(())
    }

    fn poll_send_status(&mut self) -> Option<SendStatus> {
        self.pending.pop_front()
    }
}

mock! {
    pub Network {}

    impl NetworkInterface for Network {
        fn disconnect(&mut self);
        fn set_station_mode(&mut self) -> Result<(), InterfaceError>;
        fn wait_ready(&mut self, timeout_ms: u32) -> Result<(), InterfaceError>;
        fn local_address(&self) -> MacAddress;
    }
}

impl MockNetwork {
    /// Interface that comes up immediately
    pub fn ready() -> Self {
        let mut network = MockNetwork::new();
        network.expect_disconnect().return_const(());
        network.expect_set_station_mode().returning(|| Ok(()));
        network.expect_wait_ready().returning(|_| Ok(()));
        network.expect_local_address().return_const(LOCAL_MAC);
        network
    }
}
