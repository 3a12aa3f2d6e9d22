//! General system configuration

use embassy_nrf::config::{Config, Debug, HfclkSource, LfclkSource};

pub struct SystemConfig {}

impl SystemConfig {
    /// Create new system configuration
    pub fn new() -> Config {
        // Generate default config, required because Config is set as
        // `non_exhaustive`
        let mut config = Config::default();

        // Set high-frequency and low-frequency clock sources to external,
        // both crystals are fitted on the PineTime board
        config.hfclk_source = HfclkSource::ExternalXtal;
        config.lfclk_source = LfclkSource::ExternalXtal;

        // Enable DC/DC regulator to massively reduce runtime current consumption
        config.dcdc.reg1 = true;

        // Allow debugging
        config.debug = Debug::Allowed;

        config
    }
}
