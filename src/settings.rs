use crate::mac::MacAddress;

/// Receiver address baked in at build time via `WEATHER_COMM_RECEIVER_MAC`.
///
/// `build.rs` rejects malformed values, so a parse failure here can only
/// mean the variable was absent and the placeholder is returned.
pub fn build_receiver() -> MacAddress {
    return option_env!("WEATHER_COMM_RECEIVER_MAC")
        .and_then(|mac| mac.parse().ok())
        .unwrap_or(MacAddress::PLACEHOLDER);
}

/// Static configuration of a [`Sender`](crate::sender::Sender).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SenderSettings {
    /// Used by `initialize` when no receiver is passed.
    pub default_receiver: MacAddress,
    /// Radio channel for the peer registration, 0 for the current one.
    pub channel: u8,
    /// Settle time after dropping the access point connection.
    pub disconnect_settle_ms: u32,
    /// Settle time after switching to station mode.
    pub mode_settle_ms: u32,
}

impl SenderSettings {
    pub fn new(default_receiver: MacAddress) -> Self {
        return Self {
            default_receiver,
            ..Self::default()
        };
    }

    pub fn from_build_env() -> Self {
        return Self::new(build_receiver());
    }
}

impl Default for SenderSettings {
    fn default() -> Self {
        return Self {
            default_receiver: MacAddress::PLACEHOLDER,
            channel: 0,
            disconnect_settle_ms: 200,
            mode_settle_ms: 500,
        };
    }
}
