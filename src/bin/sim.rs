//! Desktop preview of the watchface
//!
//! Renders the face into an SDL window using the host clock. Up/Down nudge
//! the simulated battery charge, `c` toggles the charging flag.

use std::{thread, time::Duration};

use chrono::Local;
use embedded_graphics::{pixelcolor::Rgb565, prelude::*};
use embedded_graphics_simulator::{
    sdl2::Keycode, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
};

use tickface::{
    clock::ClockStyle,
    ui::{BatteryInfo, DigitalFace, FaceState},
};

fn main() -> Result<(), core::convert::Infallible> {
    let mut display = SimulatorDisplay::<Rgb565>::new(Size::new(240, 240));
    let mut window = Window::new("tickface", &OutputSettingsBuilder::new().scale(2).build());

    let mut face = DigitalFace::new(ClockStyle::H24);
    let mut state = FaceState {
        time: Local::now().naive_local(),
        battery: BatteryInfo {
            percent: 73,
            charging: false,
        },
    };

    'running: loop {
        state.time = Local::now().naive_local();
        face.draw(&mut display, &state)?;
        window.update(&display);

        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, .. } => match keycode {
                    Keycode::Up => state.battery.percent = (state.battery.percent + 1).min(100),
                    Keycode::Down => {
                        state.battery.percent = state.battery.percent.saturating_sub(1)
                    }
                    Keycode::C => state.battery.charging = !state.battery.charging,
                    _ => {}
                },
                _ => {}
            }
        }

        thread::sleep(Duration::from_millis(200));
    }

    Ok(())
}
