//! ESP32 bindings for the radio seams, backed by `esp-wifi`.

use crate::{
    mac::MacAddress,
    transport::{
        DeliveryOutcome, InterfaceError, NetworkInterface, PeerConfig, SendStatus, Transport,
        TransportError,
    },
};
use esp_hal::{delay::Delay, peripherals::WIFI};
use esp_wifi::{
    esp_now::{Error as DriverError, EspNow, EspNowError, PeerInfo},
    EspWifiInitialization,
};
use heapless::Deque;

const STATUS_QUEUE_LEN: usize = 8;

fn map_error(err: EspNowError) -> TransportError {
    return match err {
        EspNowError::Error(DriverError::NotInitialized) => TransportError::NotInitialized,
        EspNowError::Error(DriverError::PeerExists) => TransportError::PeerExists,
        EspNowError::Error(DriverError::NotFound) => TransportError::PeerNotFound,
        EspNowError::Error(DriverError::PeerListFull) => TransportError::PeerListFull,
        err => {
            log::error!("esp-now: {err:?}");
            TransportError::Driver
        }
    };
}

/// ESP-NOW over the on-chip radio.
///
/// The driver is created lazily by [`Transport::init`] since it takes
/// ownership of the WIFI peripheral.
///
/// esp-wifi reports completion through a waiter that blocks until the
/// radio's send callback fires. The outcome is pushed onto a small queue
/// and surfaced through [`Transport::poll_send_status`]; when the queue is
/// full the oldest notice is dropped.
pub struct EspNowRadio<'d> {
    wifi_init: &'d EspWifiInitialization,
    wifi: Option<WIFI>,
    esp_now: Option<EspNow<'d>>,
    statuses: Deque<SendStatus, STATUS_QUEUE_LEN>,
}

impl<'d> EspNowRadio<'d> {
    pub fn new(wifi_init: &'d EspWifiInitialization, wifi: WIFI) -> Self {
        return Self {
            wifi_init,
            wifi: Some(wifi),
            esp_now: None,
            statuses: Deque::new(),
        };
    }

    fn driver(&mut self) -> Result<&mut EspNow<'d>, TransportError> {
        return self.esp_now.as_mut().ok_or(TransportError::NotInitialized);
    }

    fn push_status(&mut self, status: SendStatus) {
        if self.statuses.is_full() {
            self.statuses.pop_front();
        }
        let _ = self.statuses.push_back(status);
    }
}

impl<'d> Transport for EspNowRadio<'d> {
    fn init(&mut self) -> Result<(), TransportError> {
        if self.esp_now.is_some() {
            return Ok(());
        }
        let wifi = self.wifi.take().ok_or(TransportError::Driver)?;
        let esp_now = EspNow::new(self.wifi_init, wifi).map_err(map_error)?;
        if let Ok(version) = esp_now.get_version() {
            log::info!("esp-now version {version}");
        }
        self.esp_now = Some(esp_now);
        return Ok(());
    }

    fn add_peer(&mut self, peer: PeerConfig) -> Result<(), TransportError> {
        let esp_now = self.driver()?;
        return esp_now
            .add_peer(PeerInfo {
                peer_address: peer.address.0,
                lmk: None,
                channel: if peer.channel == 0 { None } else { Some(peer.channel) },
                encrypt: peer.encrypt,
            })
            .map_err(map_error);
    }

    fn remove_peer(&mut self, address: &MacAddress) -> Result<(), TransportError> {
        let esp_now = self.driver()?;
        return esp_now.remove_peer(address.octets()).map_err(map_error);
    }

    fn send(&mut self, address: &MacAddress, data: &[u8]) -> Result<(), TransportError> {
        let esp_now = self.driver()?;
        let waiter = esp_now.send(address.octets(), data).map_err(map_error)?;
        let outcome = match waiter.wait() {
            Ok(()) => DeliveryOutcome::Delivered,
            Err(_) => DeliveryOutcome::Failed,
        };
        self.push_status(SendStatus {
            peer: *address,
            outcome,
        });
        return Ok(());
    }

    fn poll_send_status(&mut self) -> Option<SendStatus> {
        return self.statuses.pop_front();
    }
}

/// Station interface of the on-chip WiFi.
///
/// ESP-NOW never joins an access point and `EspNow::new` starts the radio
/// in station mode, so only the settle delays and the address lookup touch
/// hardware here.
pub struct EspStation {
    delay: Delay,
}

impl EspStation {
    pub fn new() -> Self {
        return Self {
            delay: Delay::new(),
        };
    }
}

impl NetworkInterface for EspStation {
    fn disconnect(&mut self) {
        log::debug!("No access point association to drop");
    }

    fn set_station_mode(&mut self) -> Result<(), InterfaceError> {
        return Ok(());
    }

    fn wait_ready(&mut self, timeout_ms: u32) -> Result<(), InterfaceError> {
        self.delay.delay_millis(timeout_ms);
        return Ok(());
    }

    fn local_address(&self) -> MacAddress {
        let mut mac = [0u8; 6];
        esp_wifi::wifi::get_sta_mac(&mut mac);
        return MacAddress(mac);
    }
}
