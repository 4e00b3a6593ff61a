// What you SEE:
// • The base artwork (your file, or a generated demo page) fills the window.
// • Hold Left Mouse with the pen: paint stays inside the region you pressed in.
// • F switches to the bucket fill, P back to the pen. C clears your paint.
// • [ and ] shrink/grow the brush, 1-8 pick a color. ESC quits.

use clap::Parser;
use log::info;

use region_paint::compose::{composite, draw_brush_outline, draw_swatch};
use region_paint::config::{Config, PALETTE};
use region_paint::draw::{Command, Drawer};
use region_paint::types::FrameBuffer;
use region_paint::{loader, Error, Tool, ToolController};

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cfg = Config::parse();

    /* --- Base artwork ---
       Visual: the outline picture you color in. */
    let base = match &cfg.image {
        Some(path) => loader::load_base(path, cfg.width, cfg.height)?,
        None => {
            info!("no image given, using the demo page");
            loader::demo_artwork(cfg.width, cfg.height)?
        }
    };
    let (w, h) = (base.width(), base.height());

    let mut ctl = ToolController::new(base);
    ctl.set_color(cfg.color);
    ctl.set_brush_size(cfg.brush_size);
    ctl.set_tolerance(cfg.tolerance);

    let mut drawer = Drawer::new("Region Paint", w, h)?;
    let mut screen = FrameBuffer::new(w, h);
    let mut was_down = false; // left button state last frame
    let mut title = String::new();
    info!("canvas {}x{}, tolerance {}", w, h, cfg.tolerance);

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        /* 1) Keyboard: tool, color, size, clear */
        for cmd in drawer.commands() {
            match cmd {
                Command::Pen => ctl.set_tool(Tool::Pen),
                Command::Fill => ctl.set_tool(Tool::Fill),
                Command::Clear => ctl.clear(),
                Command::Smaller => ctl.set_brush_size(ctl.brush_size().saturating_sub(1)),
                Command::Larger => ctl.set_brush_size(ctl.brush_size() + 1),
                Command::Palette(i) => ctl.set_color(PALETTE[i]),
            }
        }

        /* 2) Mouse → pointer events.
           Press edge = down, held = move, release = up, gone from window = leave. */
        let down = drawer.left_mouse_down();
        match drawer.mouse_pos() {
            Some((mx, my)) => {
                if down && !was_down {
                    ctl.pointer_down(mx, my);
                } else if down {
                    ctl.pointer_move(mx, my);
                } else if was_down {
                    ctl.pointer_up();
                }
            }
            None => {
                if ctl.is_stroking() {
                    ctl.pointer_leave();
                }
            }
        }
        was_down = down;

        /* 3) Compose: paint over base, then the brush ring and color swatch. */
        composite(ctl.base(), ctl.paint(), &mut screen);
        if let Some((mx, my)) = drawer.mouse_pos()
            && ctl.tool() == Tool::Pen
        {
            draw_brush_outline(&mut screen, mx as i32, my as i32, ctl.brush_size(), 0x0080_8080);
        }
        draw_swatch(&mut screen, 8, 8, 18, ctl.color(), 0x0020_2020);

        let tool = match ctl.tool() {
            Tool::Pen => "Pen",
            Tool::Fill => "Fill",
        };
        let wanted = format!("Region Paint | {} | size {}", tool, ctl.brush_size());
        if wanted != title {
            drawer.set_title(&wanted);
            title = wanted;
        }

        /* 4) Present. */
        drawer.present(&screen)?;
    }

    Ok(())
}
