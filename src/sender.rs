//! Weather station side of the link.
//!
//! A [`Sender`] owns the team name, the receiver address and the outgoing
//! record. Delivery notices from the radio are only logged: the radio does
//! not say which send they belong to, so two sends in flight cannot be told
//! apart. [`Sender::last_status`] is the single place the latest one lands.

use crate::{
    mac::MacAddress,
    record::{TeamName, WeatherRecord, MESSAGE_FIELD_LEN},
    settings::SenderSettings,
    transport::{InterfaceError, NetworkInterface, PeerConfig, SendStatus, Transport, TransportError},
};
use log::{debug, error, info, warn};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitError {
    #[error("network interface setup failed: {0}")]
    Interface(InterfaceError),
    #[error("error initializing ESP-NOW: {0}")]
    Transport(TransportError),
    #[error("failed to add peer {0}: {1}")]
    RegisterPeer(MacAddress, TransportError),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeerError {
    #[error("sender is not initialized")]
    NotInitialized,
    #[error("failed to add peer {0}: {1}")]
    Register(MacAddress, TransportError),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendError {
    #[error("sender is not initialized")]
    NotInitialized,
    #[error("error sending message: {0}")]
    Rejected(TransportError),
}

/// What `initialize` found out about the setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitReport {
    pub receiver: MacAddress,
    pub local_address: MacAddress,
    /// The receiver is the all-zero default and cannot reach a real node.
    pub placeholder_receiver: bool,
}

/// Result of a successful receiver change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeerUpdate {
    pub previous: MacAddress,
    pub current: MacAddress,
    /// Removing the previous peer is best effort. Set if it failed.
    pub deregistration_error: Option<TransportError>,
}

pub struct Sender<T: Transport, N: NetworkInterface> {
    transport: T,
    network: N,
    settings: SenderSettings,
    team: TeamName,
    receiver: MacAddress,
    peer_registered: bool,
    initialized: bool,
    outgoing: WeatherRecord,
    last_status: Option<SendStatus>,
}

impl<T: Transport, N: NetworkInterface> Sender<T, N> {
    pub fn new(transport: T, network: N, settings: SenderSettings) -> Self {
        return Self {
            transport,
            network,
            settings,
            team: TeamName::new(),
            receiver: settings.default_receiver,
            peer_registered: false,
            initialized: false,
            outgoing: WeatherRecord::default(),
            last_status: None,
        };
    }

    /// Brings up the radio and registers the receiver.
    ///
    /// `receiver` falls back to the configured default. A placeholder
    /// receiver is warned about but not rejected.
    pub fn initialize(
        &mut self,
        team: &str,
        receiver: Option<MacAddress>,
    ) -> Result<InitReport, InitError> {
        self.initialized = false;
        self.team = TeamName::truncate_from(team);
        if self.team.len() < team.len() {
            debug!("Team name truncated to {:?}", self.team.as_str());
        }

        let receiver = receiver.unwrap_or(self.settings.default_receiver);
        let placeholder_receiver = receiver.is_placeholder();
        if placeholder_receiver {
            warn!("Using placeholder MAC address. Please configure your receiver MAC address!");
            warn!("Set a valid MAC address using set_peer_address() or WEATHER_COMM_RECEIVER_MAC.");
        }

        info!("--- Initializing Weather Station Communication ---");
        info!("Team: {}", self.team);
        info!("Receiver MAC Address: {receiver}");

        self.network.disconnect();
        self.network
            .wait_ready(self.settings.disconnect_settle_ms)
            .map_err(InitError::Interface)?;
        self.network.set_station_mode().map_err(|err| {
            error!("Failed to switch to station mode: {err}");
            InitError::Interface(err)
        })?;
        self.network
            .wait_ready(self.settings.mode_settle_ms)
            .map_err(InitError::Interface)?;

        let local_address = self.network.local_address();
        info!("Sender MAC Address: {local_address}");

        if let Err(err) = self.transport.init() {
            error!("Error initializing ESP-NOW: {err}");
            return Err(InitError::Transport(err));
        }

        // A repeated initialize must not trip over its own earlier peer
        if self.peer_registered {
            if let Err(err) = self.transport.remove_peer(&self.receiver) {
                warn!("Could not remove previous peer {}: {err}", self.receiver);
            }
            self.peer_registered = false;
        }

        self.receiver = receiver;
        let peer = self.peer_config(receiver);
        if let Err(err) = self.transport.add_peer(peer) {
            error!("Failed to add peer {receiver}: {err}");
            return Err(InitError::RegisterPeer(receiver, err));
        }
        self.peer_registered = true;
        self.initialized = true;

        info!("ESP-NOW communication initialized successfully");
        return Ok(InitReport {
            receiver,
            local_address,
            placeholder_receiver,
        });
    }

    /// Swaps the registered receiver for `address`.
    ///
    /// Calling it with the current receiver re-registers the same peer.
    pub fn set_peer_address(&mut self, address: MacAddress) -> Result<PeerUpdate, PeerError> {
        if !self.initialized {
            return Err(PeerError::NotInitialized);
        }

        let previous = self.receiver;
        let mut deregistration_error = None;
        if self.peer_registered {
            if let Err(err) = self.transport.remove_peer(&previous) {
                warn!("Could not remove previous peer {previous}: {err}");
                deregistration_error = Some(err);
            }
            self.peer_registered = false;
        }

        self.receiver = address;
        let peer = self.peer_config(address);
        if let Err(err) = self.transport.add_peer(peer) {
            error!("Failed to add peer {address}: {err}");
            return Err(PeerError::Register(address, err));
        }
        self.peer_registered = true;

        info!("Receiver MAC updated to: {address}");
        return Ok(PeerUpdate {
            previous,
            current: address,
            deregistration_error,
        });
    }

    /// Hands one record to the radio. `Ok` means the radio accepted it;
    /// the delivery outcome shows up later through [`Self::poll_status`].
    pub fn send(&mut self, message: &str) -> Result<(), SendError> {
        if !self.initialized {
            return Err(SendError::NotInitialized);
        }

        self.outgoing.fill(&self.team, message);
        if message.len() > MESSAGE_FIELD_LEN - 1 {
            debug!("Message truncated to {} bytes", self.outgoing.message.len());
        }

        info!("Sending message...");
        info!("Team: {}", self.outgoing.team);
        info!("Message: {}", self.outgoing.message);

        let packet = self.outgoing.encode();
        return match self.transport.send(&self.receiver, &packet) {
            Ok(()) => {
                info!("Message sent successfully");
                Ok(())
            }
            Err(err) => {
                error!("Error sending message: {err}");
                Err(SendError::Rejected(err))
            }
        };
    }

    /// Drains delivery notices from the radio, logging each one.
    ///
    /// Returns the newest notice seen by this call.
    pub fn poll_status(&mut self) -> Option<SendStatus> {
        let mut newest = None;
        while let Some(status) = self.transport.poll_send_status() {
            info!("Sending to MAC: {}", status.peer);
            info!("Send Status: {}", status.outcome);
            newest = Some(status);
        }
        if newest.is_some() {
            self.last_status = newest;
        }
        return newest;
    }

    pub fn last_status(&self) -> Option<SendStatus> {
        return self.last_status;
    }

    pub fn is_initialized(&self) -> bool {
        return self.initialized;
    }

    pub fn team(&self) -> &TeamName {
        return &self.team;
    }

    pub fn receiver(&self) -> MacAddress {
        return self.receiver;
    }

    /// The record built by the last `send`.
    pub fn outgoing(&self) -> &WeatherRecord {
        return &self.outgoing;
    }

    pub fn transport(&self) -> &T {
        return &self.transport;
    }

    pub fn transport_mut(&mut self) -> &mut T {
        return &mut self.transport;
    }

    fn peer_config(&self, address: MacAddress) -> PeerConfig {
        return PeerConfig {
            address,
            channel: self.settings.channel,
            encrypt: false,
        };
    }
}
