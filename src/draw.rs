// Window wrapper: shows the composited canvas and reports mouse/keyboard state.
// Visual: one window the size of the canvas; the title shows tool and brush.

use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

use crate::error::Error;
use crate::types::FrameBuffer;

/// Key presses the frame loop reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Pen,
    Fill,
    Clear,
    Smaller,
    Larger,
    Palette(usize),
}

pub struct Drawer {
    window: Window,
}

impl Drawer {
    /// Create a window sized to the canvas.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(60);
        Ok(Self { window })
    }

    /// Push this frame's pixels to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))
    }

    pub fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    /// False once the user closes the window.
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Mouse position in canvas pixels, or None while the pointer is outside
    /// the window.
    pub fn mouse_pos(&self) -> Option<(f32, f32)> {
        self.window.get_mouse_pos(MouseMode::Discard)
    }

    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }

    /// Commands for keys that went down since the last frame.
    pub fn commands(&self) -> Vec<Command> {
        self.window
            .get_keys_pressed(KeyRepeat::Yes)
            .into_iter()
            .filter_map(command_for)
            .collect()
    }
}

fn command_for(key: Key) -> Option<Command> {
    let cmd = match key {
        Key::P => Command::Pen,
        Key::F => Command::Fill,
        Key::C => Command::Clear,
        Key::LeftBracket | Key::Minus => Command::Smaller,
        Key::RightBracket | Key::Equal => Command::Larger,
        Key::Key1 => Command::Palette(0),
        Key::Key2 => Command::Palette(1),
        Key::Key3 => Command::Palette(2),
        Key::Key4 => Command::Palette(3),
        Key::Key5 => Command::Palette(4),
        Key::Key6 => Command::Palette(5),
        Key::Key7 => Command::Palette(6),
        Key::Key8 => Command::Palette(7),
        _ => return None,
    };
    Some(cmd)
}
