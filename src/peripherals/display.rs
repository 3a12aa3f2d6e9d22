//! Display control module for PineTime

use embassy_nrf::{
    gpio::Output,
    peripherals::{P0_18, P0_25, P0_26},
    spim::{self, Spim},
};

use display_interface_spi::SPIInterface;
use embassy_time::Delay;
use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::Rectangle,
};
use mipidsi::{models::ST7789, options::ColorInversion, Builder, Orientation};

const LCD_W: u16 = 240;
const LCD_H: u16 = 240;

/// The PineTime LCD: an ST7789 panel driven over SPI.
///
/// Implements `DrawTarget` by delegation so the face draws on the panel
/// the same way it draws on the simulator.
pub struct Display<'a, SPI>
where
    SPI: spim::Instance,
{
    lcd: mipidsi::Display<
        SPIInterface<Spim<'a, SPI>, Output<'a, P0_18>, Output<'a, P0_25>>,
        ST7789,
        Output<'a, P0_26>,
    >,
}

impl<'a, SPI> Display<'a, SPI>
where
    SPI: spim::Instance,
{
    /// Configure display settings on boot
    pub fn init(
        spim: Spim<'a, SPI>,
        cs_pin: Output<'a, P0_25>,
        dc_pin: Output<'a, P0_18>,
        rst_pin: Output<'a, P0_26>,
    ) -> Self {
        // The panel is an IPS variant, so it wants inverted colors.
        let lcd = Builder::st7789(SPIInterface::new(spim, dc_pin, cs_pin))
            .with_display_size(LCD_W, LCD_H)
            .with_orientation(Orientation::Portrait(false))
            .with_invert_colors(ColorInversion::Inverted)
            .init(&mut Delay, Some(rst_pin))
            .unwrap();

        Self { lcd }
    }
}

impl<SPI> DrawTarget for Display<'_, SPI>
where
    SPI: spim::Instance,
{
    type Color = Rgb565;
    type Error = mipidsi::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.lcd.draw_iter(pixels)
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        self.lcd.fill_contiguous(area, colors)
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        self.lcd.fill_solid(area, color)
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.lcd.clear(color)
    }
}

impl<SPI> OriginDimensions for Display<'_, SPI>
where
    SPI: spim::Instance,
{
    fn size(&self) -> Size {
        Size::new(LCD_W as u32, LCD_H as u32)
    }
}
