//! The digital face: three text labels over a black background
//!
//! On the 240x240 panel the time sits in the lower right with the date
//! directly above it; the battery reading keeps to the top left. Labels
//! track the text they last drew and only repaint when it changes.
//! Repainting starts with a background fill over the label bounds so
//! shrinking text ("10:59" to "9:07") leaves no stale glyph columns
//! behind.

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::{Alignment, Baseline, Text, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_14_POINT, PROFONT_18_POINT, PROFONT_24_POINT};

use super::{format, FaceState};
use crate::clock::ClockStyle;

const BUF_LEN: usize = 16;

const BACKGROUND: Rgb565 = Rgb565::BLACK;
const FOREGROUND: Rgb565 = Rgb565::WHITE;

const BATTERY_BOUNDS: Rectangle = Rectangle::new(Point::new(10, 10), Size::new(80, 20));
const DATE_BOUNDS: Rectangle = Rectangle::new(Point::new(80, 104), Size::new(150, 24));
const TIME_BOUNDS: Rectangle = Rectangle::new(Point::new(120, 146), Size::new(110, 32));

/// One rectangular text region
struct Label {
    buf: [u8; BUF_LEN],
    len: usize,
    bounds: Rectangle,
    anchor: Point,
    character_style: MonoTextStyle<'static, Rgb565>,
    text_style: TextStyle,
}

impl Label {
    fn new(bounds: Rectangle, font: &'static MonoFont<'static>, alignment: Alignment) -> Self {
        // Right-aligned text hangs off the far edge of the bounds.
        let anchor = match alignment {
            Alignment::Right => Point::new(
                bounds.top_left.x + bounds.size.width as i32 - 1,
                bounds.top_left.y,
            ),
            _ => bounds.top_left,
        };

        Self {
            buf: [0; BUF_LEN],
            len: 0,
            bounds,
            anchor,
            character_style: MonoTextStyle::new(font, FOREGROUND),
            text_style: TextStyleBuilder::new()
                .alignment(alignment)
                .baseline(Baseline::Top)
                .build(),
        }
    }

    fn text(&self) -> &str {
        core::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }

    /// Store new content, report whether it differs from what is shown
    fn set_text(&mut self, text: &str) -> bool {
        if text.as_bytes() == &self.buf[..self.len] {
            return false;
        }
        let len = text.len().min(BUF_LEN);
        self.buf[..len].copy_from_slice(&text.as_bytes()[..len]);
        self.len = len;
        true
    }

    /// Erase the label area, then draw the stored text
    fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        self.bounds
            .into_styled(PrimitiveStyle::with_fill(BACKGROUND))
            .draw(target)?;
        Text::with_text_style(self.text(), self.anchor, self.character_style, self.text_style)
            .draw(target)?;
        Ok(())
    }
}

/// Time, date and battery charge as plain text
pub struct DigitalFace {
    time: Label,
    date: Label,
    battery: Label,
    style: ClockStyle,
    cleared: bool,
}

impl DigitalFace {
    pub fn new(style: ClockStyle) -> Self {
        Self {
            time: Label::new(TIME_BOUNDS, &PROFONT_24_POINT, Alignment::Right),
            date: Label::new(DATE_BOUNDS, &PROFONT_18_POINT, Alignment::Right),
            battery: Label::new(BATTERY_BOUNDS, &PROFONT_14_POINT, Alignment::Left),
            style,
            cleared: false,
        }
    }

    /// Repaint the labels whose text changed since the last call.
    ///
    /// The first call clears the whole screen and paints all three labels;
    /// later calls touch only what a tick or battery event actually moved.
    pub fn draw<D>(&mut self, target: &mut D, state: &FaceState) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let mut buf = [0u8; BUF_LEN];

        let force = !self.cleared;
        if force {
            target.clear(BACKGROUND)?;
            self.cleared = true;
        }

        if self
            .time
            .set_text(format::time_text(&mut buf, state.time.time(), self.style))
            || force
        {
            self.time.draw(target)?;
        }

        if self
            .date
            .set_text(format::date_text(&mut buf, state.time.date()))
            || force
        {
            self.date.draw(target)?;
        }

        if self
            .battery
            .set_text(format::battery_text(&mut buf, state.battery.percent))
            || force
        {
            self.battery.draw(target)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use embedded_graphics::{mock_display::MockDisplay, primitives::PointsIter};
    use embedded_graphics_simulator::SimulatorDisplay;

    use super::*;
    use crate::ui::BatteryInfo;

    fn datetime(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 9, 5)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn state(h: u32, m: u32, percent: u8) -> FaceState {
        FaceState {
            time: datetime(h, m),
            battery: BatteryInfo {
                percent,
                charging: false,
            },
        }
    }

    fn any_lit(display: &SimulatorDisplay<Rgb565>, area: Rectangle) -> bool {
        area.points().any(|p| display.get_pixel(p) == FOREGROUND)
    }

    #[test]
    fn label_reports_changes_only() {
        let mut label = Label::new(
            Rectangle::new(Point::zero(), Size::new(40, 20)),
            &PROFONT_14_POINT,
            Alignment::Left,
        );
        assert!(label.set_text("5:07"));
        assert!(!label.set_text("5:07"));
        assert!(label.set_text("5:08"));
    }

    #[test]
    fn label_fills_its_bounds_before_drawing() {
        let mut display = MockDisplay::<Rgb565>::new();
        display.set_allow_overdraw(true);

        let mut label = Label::new(
            Rectangle::new(Point::zero(), Size::new(40, 20)),
            &PROFONT_14_POINT,
            Alignment::Left,
        );
        label.set_text("9");
        label.draw(&mut display).unwrap();

        // The corner far away from the glyph got erased to the background
        // and the glyph itself left foreground pixels behind.
        assert_eq!(display.get_pixel(Point::new(39, 19)), Some(BACKGROUND));
        let lit = (0..18)
            .any(|y| (0..10).any(|x| display.get_pixel(Point::new(x, y)) == Some(FOREGROUND)));
        assert!(lit);
    }

    #[test]
    fn shorter_text_leaves_no_stale_glyphs() {
        let mut display = MockDisplay::<Rgb565>::new();
        display.set_allow_overdraw(true);

        let mut label = Label::new(
            Rectangle::new(Point::zero(), Size::new(60, 20)),
            &PROFONT_14_POINT,
            Alignment::Left,
        );
        label.set_text("10:59");
        label.draw(&mut display).unwrap();
        label.set_text("9:07");
        label.draw(&mut display).unwrap();

        // "9:07" is one glyph narrower; the vacated columns end up
        // background only.
        let stale = (0..20)
            .any(|y| (40..60).any(|x| display.get_pixel(Point::new(x, y)) == Some(FOREGROUND)));
        assert!(!stale);
    }

    #[test]
    fn first_draw_paints_all_regions() {
        let mut display = SimulatorDisplay::<Rgb565>::new(Size::new(240, 240));
        let mut face = DigitalFace::new(ClockStyle::H24);

        face.draw(&mut display, &state(15, 7, 73)).unwrap();

        assert!(any_lit(&display, TIME_BOUNDS));
        assert!(any_lit(&display, DATE_BOUNDS));
        assert!(any_lit(&display, BATTERY_BOUNDS));
    }

    #[test]
    fn changed_label_is_repainted() {
        let mut display = SimulatorDisplay::<Rgb565>::new(Size::new(240, 240));
        let mut face = DigitalFace::new(ClockStyle::H24);
        face.draw(&mut display, &state(15, 7, 73)).unwrap();

        // Scribble into the time area; the next minute must wipe it.
        let marker = Point::new(TIME_BOUNDS.top_left.x + 1, TIME_BOUNDS.top_left.y + 1);
        Pixel(marker, Rgb565::RED).draw(&mut display).unwrap();

        face.draw(&mut display, &state(15, 8, 73)).unwrap();
        assert_eq!(display.get_pixel(marker), BACKGROUND);
    }

    #[test]
    fn unchanged_labels_are_left_alone() {
        let mut display = SimulatorDisplay::<Rgb565>::new(Size::new(240, 240));
        let mut face = DigitalFace::new(ClockStyle::H24);
        face.draw(&mut display, &state(15, 7, 73)).unwrap();

        // A minute tick repaints the time label but not the date.
        let marker = Point::new(DATE_BOUNDS.top_left.x + 1, DATE_BOUNDS.top_left.y + 1);
        Pixel(marker, Rgb565::RED).draw(&mut display).unwrap();
        face.draw(&mut display, &state(15, 8, 73)).unwrap();
        assert_eq!(display.get_pixel(marker), Rgb565::RED);

        // A battery event that only flips the charging flag repaints
        // nothing at all.
        let mut charging = state(15, 8, 73);
        charging.battery.charging = true;
        let time_marker = Point::new(TIME_BOUNDS.top_left.x + 1, TIME_BOUNDS.top_left.y + 1);
        Pixel(time_marker, Rgb565::RED).draw(&mut display).unwrap();
        face.draw(&mut display, &charging).unwrap();
        assert_eq!(display.get_pixel(time_marker), Rgb565::RED);
    }
}
