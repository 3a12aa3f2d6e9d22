#![no_std]
#![no_main]

mod peripherals;
mod system;

// Panic handler and debugging
use defmt::unwrap;

use defmt_rtt as _;
use panic_probe as _;

// Device
use embassy_executor::Spawner;
use embassy_futures::select::{select, Either};
use embassy_nrf::{
    bind_interrupts,
    gpio::{Input, Level, Output, OutputDrive, Pull},
    peripherals::SPI2,
    saadc::{self, ChannelConfig, Resolution, Saadc},
    spim,
};
use embassy_sync::{blocking_mutex::raw::ThreadModeRawMutex, signal::Signal};
use embassy_time::{Duration, Timer};

bind_interrupts!(struct Irqs {
    SAADC => saadc::InterruptHandler;
    SPIM2_SPIS2_SPI2 => spim::InterruptHandler<SPI2>;
});

// Crate
use peripherals::{backlight::Backlight, battery::Battery, button::Button, display::Display};
use system::{config::SystemConfig, time::TimeManager};
use tickface::{
    clock::ClockStyle,
    ui::{BatteryInfo, DigitalFace, FaceState},
};

// Others
use chrono::{NaiveDateTime, Timelike};

// Include the UTC epoch recorded at compile time
include!(concat!(env!("OUT_DIR"), "/utc.rs"));
const UTC_OFFSET: i32 = 1 * 3_600;
const CLOCK_STYLE: ClockStyle = ClockStyle::H24;

// Communication channels
static BATTERY_STATUS: Signal<ThreadModeRawMutex, BatteryInfo> = Signal::new();
static MINUTE_TICK: Signal<ThreadModeRawMutex, NaiveDateTime> = Signal::new();

/// Signal the wall clock time at the start of every minute.
#[embassy_executor::task(pool_size = 1)]
async fn tick_minutes(clock: TimeManager) {
    loop {
        let now = clock.now();
        defmt::info!("Minute tick: {}:{}", now.time().hour(), now.time().minute());
        MINUTE_TICK.signal(now);

        // Sleep through the rest of the minute
        Timer::after(clock.until_next_minute()).await;
    }
}

/// Fetch the battery status from the hardware and pass on changed readings.
#[embassy_executor::task(pool_size = 1)]
async fn watch_battery(mut battery: Battery) {
    loop {
        if battery.update().await {
            let info = battery.info();
            defmt::info!(
                "Battery: {}% ({})",
                info.percent,
                if info.charging {
                    "charging"
                } else {
                    "discharging"
                }
            );
            BATTERY_STATUS.signal(info);
        }

        // Re-check the hardware in 1s
        Timer::after(Duration::from_secs(1)).await;
    }
}

/// Redraw the face whenever a minute starts or the battery status changes.
#[embassy_executor::task(pool_size = 1)]
async fn render(mut display: Display<'static, SPI2>, mut state: FaceState) {
    let mut face = DigitalFace::new(CLOCK_STYLE);
    if let Err(e) = face.draw(&mut display, &state) {
        defmt::warn!("Initial draw failed: {}", defmt::Debug2Format(&e));
    }

    loop {
        match select(MINUTE_TICK.wait(), BATTERY_STATUS.wait()).await {
            Either::First(time) => state.time = time,
            Either::Second(battery) => state.battery = battery,
        }

        if let Err(e) = face.draw(&mut display, &state) {
            defmt::warn!("Redraw failed: {}", defmt::Debug2Format(&e));
        }
    }
}

/// Poll the button every 10ms and step the backlight on each press.
#[embassy_executor::task(pool_size = 1)]
async fn poll_button(mut button: Button, mut backlight: Backlight) {
    loop {
        if button.pressed().await {
            if backlight.brightness() < 7 {
                backlight.brighter().unwrap();
            } else {
                backlight.off();
            }
        }

        // Re-schedule the timer interrupt in 10ms
        Timer::after(Duration::from_millis(10)).await;
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let mut p = embassy_nrf::init(SystemConfig::new());
    defmt::info!("Initializing");

    // Initialize SAADC
    let mut saadc_config = saadc::Config::default();
    // Set resolution to 12bit, necessary for correct battery status calculation
    saadc_config.resolution = Resolution::_12BIT;
    // Pin P0.31: Voltage level
    let channel_config = ChannelConfig::single_ended(&mut p.P0_31);
    let mut saadc = Saadc::new(p.SAADC, Irqs, saadc_config, [channel_config]);
    saadc.calibrate().await;

    // Initialize battery with a first reading
    let battery = Battery::init(saadc, Input::new(p.P0_12, Pull::None)).await;

    // Initialize backlight
    let mut backlight = Backlight::init(
        Output::new(p.P0_14, Level::High, OutputDrive::Standard),
        Output::new(p.P0_22, Level::High, OutputDrive::Standard),
        Output::new(p.P0_23, Level::High, OutputDrive::Standard),
        0,
    );

    // Initialize button
    let button = Button::init(
        Input::new(p.P0_13, Pull::None),
        Output::new(p.P0_15, Level::Low, OutputDrive::Standard),
    );

    // Initialize SPI
    let mut spim_config = spim::Config::default();
    // Use SPI at 8MHz (the fastest clock available on the nRF52832),
    // otherwise refreshing will be super slow.
    spim_config.frequency = spim::Frequency::M8;
    // SPI must be used in mode 3. Mode 0 (the default) won't work.
    spim_config.mode = spim::MODE_3;

    let spim = spim::Spim::new(p.SPI2, Irqs, p.P0_02, p.P0_04, p.P0_03, spim_config);

    // Initialize LCD
    let display = Display::init(
        spim,
        Output::new(p.P0_25, Level::Low, OutputDrive::Standard),
        Output::new(p.P0_18, Level::Low, OutputDrive::Standard),
        Output::new(p.P0_26, Level::Low, OutputDrive::Standard),
    );
    backlight.set(2).unwrap();

    // Seed the wall clock from the build timestamp
    let clock = TimeManager::init(UTC_EPOCH + UTC_OFFSET as i64);
    let state = FaceState {
        time: clock.now(),
        battery: battery.info(),
    };

    defmt::info!("Initialization finished");

    // Schedule tasks
    unwrap!(spawner.spawn(render(display, state)));
    unwrap!(spawner.spawn(tick_minutes(clock)));
    unwrap!(spawner.spawn(watch_battery(battery)));
    unwrap!(spawner.spawn(poll_button(button, backlight)));
}
