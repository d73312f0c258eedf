// The on-screen window: presents a FrameBuffer and reports mouse and keys.

use dot_animator::Command;
use dot_animator::error::Error;
use dot_animator::types::FrameBuffer;
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window,
}

impl Drawer {
    /// Open a window of exactly `width`×`height`, capped at 60 updates a second.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(60);
        Ok(Self { window })
    }

    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Mouse position in window pixels, or None once it leaves the window.
    pub fn mouse_pos(&self) -> Option<(f32, f32)> {
        self.window.get_mouse_pos(MouseMode::Discard)
    }

    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }

    /// Keys pressed since the last update, mapped to commands.
    pub fn commands(&self) -> Vec<Command> {
        self.window
            .get_keys_pressed(KeyRepeat::No)
            .into_iter()
            .filter_map(command_for_key)
            .collect()
    }
}

fn command_for_key(key: Key) -> Option<Command> {
    let cmd = match key {
        Key::O => Command::ToggleOnion,
        Key::C => Command::ClearActive,
        Key::Space => Command::TogglePlay,
        Key::Up | Key::Equal => Command::Faster,
        Key::Down | Key::Minus => Command::Slower,
        Key::S => Command::Export,
        Key::Key1 => Command::Select(0),
        Key::Key2 => Command::Select(1),
        Key::Key3 => Command::Select(2),
        Key::Key4 => Command::Select(3),
        Key::Key5 => Command::Select(4),
        Key::Key6 => Command::Select(5),
        Key::Key7 => Command::Select(6),
        Key::Key8 => Command::Select(7),
        Key::Key9 => Command::Select(8),
        _ => return None,
    };
    Some(cmd)
}
