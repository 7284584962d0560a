//! Weather station link
//!
//! Sends a team name and a short message to a single receiver via esp-now

//% FEATURES: esp-wifi esp-wifi/wifi esp-wifi/esp-now
//% CHIPS: esp32

#![cfg_attr(not(test), no_std)]

pub mod bounded_text;
#[cfg(feature = "esp32")]
pub mod esp;
pub mod mac;
pub mod record;
pub mod sender;
pub mod settings;
pub mod transport;

pub use mac::MacAddress;
pub use record::WeatherRecord;
pub use sender::Sender;
pub use settings::SenderSettings;

#[cfg(test)]
mod tests;
