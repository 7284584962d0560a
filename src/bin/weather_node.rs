//! Weather station node
//!
//! Sends a reading to the receiver every few seconds via esp-now

//% FEATURES: esp-wifi esp-wifi/wifi esp-wifi/esp-now
//% CHIPS: esp32

#![no_std]
#![no_main]

use core::fmt::Write;
use esp_alloc as _;
use esp_backtrace as _;
use esp_hal::{
    prelude::*,
    rng::Rng,
    time::{self, Duration},
    timer::timg::TimerGroup,
};
use esp_println::println;
use esp_wifi::{init, EspWifiInitFor};
use heapless::String;
use weather_comm::{
    esp::{EspNowRadio, EspStation},
    record::MESSAGE_FIELD_LEN,
    Sender, SenderSettings,
};

const TEAM: &str = match option_env!("WEATHER_COMM_TEAM") {
    Some(team) => team,
    None => "Team",
};

#[entry]
fn main() -> ! {
    esp_println::logger::init_logger_from_env();
    let peripherals = esp_hal::init({
        let mut config = esp_hal::Config::default();
        config.cpu_clock = CpuClock::max();
        config
    });

    esp_alloc::heap_allocator!(72 * 1024);

    let timg0 = TimerGroup::new(peripherals.TIMG0);

    let init = init(
        EspWifiInitFor::Wifi,
        timg0.timer0,
        Rng::new(peripherals.RNG),
        peripherals.RADIO_CLK,
    )
    .unwrap();

    let radio = EspNowRadio::new(&init, peripherals.WIFI);
    let mut sender = Sender::new(radio, EspStation::new(), SenderSettings::from_build_env());

    let report = sender.initialize(TEAM, None).unwrap();
    if report.placeholder_receiver {
        println!("Receiver is not configured, messages will go nowhere");
    }

    let mut reading: u32 = 0;
    let mut next_send = time::now();
    loop {
        let now = time::now();
        if now >= next_send {
            next_send = now + Duration::secs(5);
            reading += 1;

            let mut message: String<MESSAGE_FIELD_LEN> = String::new();
            let _ = write!(message, "reading #{reading}");
            if let Err(err) = sender.send(&message) {
                println!("Send failed: {err}");
            }
        }

        if let Some(status) = sender.poll_status() {
            println!("Last delivery to {}: {}", status.peer, status.outcome);
        }
    }
}
