//! Battery status check
//!
//! Voltage conversion and capacity estimation follow the hardware notes at
//! https://wiki.pine64.org/wiki/PineTime.

use embassy_nrf::{gpio::Input, peripherals::P0_12, saadc::Saadc};

use tickface::ui::BatteryInfo;

/// Battery configuration
struct BatteryConfig<'a> {
    /// ADC instance for battery voltage measurement
    adc: Saadc<'a, 1>,
    /// Charge indication pin:
    /// high = battery, low = charging
    pin_charge_indication: Input<'a, P0_12>,
}

/// Battery API
pub struct Battery {
    /// Battery configuration
    config: BatteryConfig<'static>,
    /// Most recent reading
    info: BatteryInfo,
}

impl Battery {
    /// Configure battery settings on boot and take a first reading
    pub async fn init(adc: Saadc<'static, 1>, charge_pin: Input<'static, P0_12>) -> Self {
        let mut battery = Self {
            config: BatteryConfig {
                adc,
                pin_charge_indication: charge_pin,
            },
            info: BatteryInfo {
                percent: 0,
                charging: false,
            },
        };
        battery.update().await;
        battery
    }

    /// Stored state of the battery.
    ///
    /// To fetch current data, call `update()` first.
    pub fn info(&self) -> BatteryInfo {
        self.info
    }

    /// Read the hardware and store the result. Reports whether the reading
    /// changed since the last one.
    pub async fn update(&mut self) -> bool {
        let reading = BatteryInfo {
            percent: self.percent().await,
            charging: self.config.pin_charge_indication.is_low(),
        };

        let changed = reading != self.info;
        self.info = reading;
        changed
    }

    /// Battery capacity in percent
    async fn percent(&mut self) -> u8 {
        let voltage = self.voltage().await;

        // Use fixed data points and linear interpolation in between
        // to estimate battery capacity.
        (match voltage {
            0..=3449 => 0,
            3450..=3699 => (voltage - 3450) / 5,
            3700..=4199 => 50 + (voltage - 3700) / 10,
            _ => 100,
        }) as u8
    }

    /// Battery voltage in millivolts
    async fn voltage(&mut self) -> u16 {
        let mut buf = [0; 1];
        self.config.adc.sample(&mut buf).await;
        // The divider halves the battery voltage; at 12 bit resolution that
        // makes mV = raw * 2 * 1000 / 1241. Use u32 during calculation to
        // prevent overflow, and clamp negative noise readings first.
        (buf[0].max(0) as u32 * 2000 / 1241) as u16
    }
}
