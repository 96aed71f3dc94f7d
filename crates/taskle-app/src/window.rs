//! Native window viewer.

use crate::app::{AppError, AppResult, Whiteboard};
use crate::shortcuts::ShortcutRegistry;
use kurbo::Size;
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};
use std::path::Path;
use taskle_core::{PointerEvent, SerializableColor, WhiteboardConfig};
use taskle_render::{present, write_export};

/// Area around the surface when zoomed out.
const BACKDROP: SerializableColor = SerializableColor::rgb(0x11, 0x18, 0x27);

/// Key name as listed in the shortcut registry.
fn key_name(key: Key) -> Option<&'static str> {
    let name = match key {
        Key::P => "P",
        Key::E => "E",
        Key::R => "R",
        Key::C => "C",
        Key::T => "T",
        Key::M => "M",
        Key::K => "K",
        Key::S => "S",
        Key::Z => "Z",
        Key::Y => "Y",
        Key::I => "I",
        Key::Key0 | Key::NumPad0 => "0",
        Key::Key1 | Key::NumPad1 => "1",
        Key::Key2 | Key::NumPad2 => "2",
        Key::Key3 | Key::NumPad3 => "3",
        Key::Key4 | Key::NumPad4 => "4",
        Key::Key5 | Key::NumPad5 => "5",
        Key::Key6 | Key::NumPad6 => "6",
        Key::Key7 | Key::NumPad7 => "7",
        Key::Equal | Key::NumPadPlus => "+",
        Key::Minus | Key::NumPadMinus => "-",
        Key::Delete | Key::Backspace => "Delete",
        _ => return None,
    };
    Some(name)
}

/// Tracks the mouse so minifb polling turns into pointer events.
///
/// The physical button state is kept apart from the stroke: a stroke only
/// starts on a released-to-pressed transition inside the window, so coming
/// back in with the button still held does not draw.
#[derive(Debug, Default)]
struct MouseTracker {
    button_down: bool,
    stroke: bool,
    last: Option<(f32, f32)>,
}

impl MouseTracker {
    fn poll(&mut self, position: Option<(f32, f32)>, pressed: bool) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        let pressed_now = pressed && !self.button_down;
        self.button_down = pressed;

        let Some((x, y)) = position else {
            if self.stroke {
                events.push(PointerEvent::Leave);
            }
            self.stroke = false;
            self.last = None;
            return events;
        };

        let (x64, y64) = (f64::from(x), f64::from(y));
        if pressed_now {
            events.push(PointerEvent::down(x64, y64));
            self.stroke = true;
        } else if self.stroke && pressed && self.last != Some((x, y)) {
            events.push(PointerEvent::move_to(x64, y64));
        } else if self.stroke && !pressed {
            events.push(PointerEvent::Up);
            self.stroke = false;
        }
        self.last = Some((x, y));
        events
    }
}

fn window_title(board: &Whiteboard) -> String {
    let config = board.config();
    format!("{} - {} - {}", config.title, board.tool().kind, board.viewport().label())
}

/// Open a window on `config` and run until it is closed or Escape is pressed.
pub fn run(config: WhiteboardConfig) -> AppResult<()> {
    let mut board: Whiteboard = Whiteboard::new(config);
    board.mount()?;

    let (width, height) = (board.config().width as usize, board.config().height as usize);
    let mut window = Window::new(
        &window_title(&board),
        width,
        height,
        WindowOptions {
            resize: true,
            ..WindowOptions::default()
        },
    )
    .map_err(|e| AppError::Window(e.to_string()))?;
    window.set_target_fps(60);

    let mut mouse = MouseTracker::default();
    let mut title = window_title(&board);

    while window.is_open() && !window.is_key_down(Key::Escape) {
        let (frame_width, frame_height) = window.get_size();
        let container = Size::new(frame_width as f64, frame_height as f64);

        let ctrl = window.is_key_down(Key::LeftCtrl) || window.is_key_down(Key::RightCtrl);
        for key in window.get_keys_pressed(KeyRepeat::No) {
            let Some(name) = key_name(key) else {
                continue;
            };
            let Some(action) = ShortcutRegistry::action_for(name, ctrl, board.tool().color) else {
                continue;
            };
            if let Some(image) = board.apply(action)? {
                let path = write_export(&image.png, Path::new("."), &image.file_name)?;
                log::info!("Saved {}", path.display());
            }
        }

        let position = window.get_mouse_pos(MouseMode::Discard);
        let pressed = window.get_mouse_down(MouseButton::Left);
        for event in mouse.poll(position, pressed) {
            board.handle_screen_pointer(event, container);
        }

        let next_title = window_title(&board);
        if next_title != title {
            window.set_title(&next_title);
            title = next_title;
        }

        let Some(surface) = board.surface() else {
            break;
        };
        let frame = present(
            surface,
            board.viewport(),
            frame_width as u32,
            frame_height as u32,
            BACKDROP,
        );
        window
            .update_with_buffer(&frame, frame_width, frame_height)
            .map_err(|e| AppError::Window(e.to_string()))?;
    }

    board.unmount();
    Ok(())
}
