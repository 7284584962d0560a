//! Prints this board's station MAC address
//!
//! Flash it on the receiver and copy the address into
//! WEATHER_COMM_RECEIVER_MAC when building the station firmware

//% CHIPS: esp32

#![no_std]
#![no_main]

use esp_alloc as _;
use esp_backtrace as _;
use esp_hal::{delay::Delay, prelude::*};
use esp_println::println;
use weather_comm::{esp::EspStation, transport::NetworkInterface};

#[entry]
fn main() -> ! {
    esp_println::logger::init_logger_from_env();
    let _peripherals = esp_hal::init(esp_hal::Config::default());

    esp_alloc::heap_allocator!(32 * 1024);

    let station = EspStation::new();
    let delay = Delay::new();
    loop {
        println!("Receiver MAC Address: {}", station.local_address());
        delay.delay_millis(2000);
    }
}
