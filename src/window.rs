use raylib::prelude::*;
use crate::config::Config;
use crate::constants::*;
use crate::host::HostControls;
use crate::input::{InputEvent, Key};
use crate::layout::Layout;
use crate::pointer::{PointerSample, PointerTracker};
use crate::slide::Slide;
use crate::state::Frame;

const BACKGROUND: Color = Color::new(18, 18, 24, 255);
const BAR_COLOR: Color = Color::new(30, 30, 40, 255);
const BUTTON_COLOR: Color = Color::new(70, 110, 220, 255);
const DISABLED_COLOR: Color = Color::new(60, 60, 70, 255);
const INDICATOR_COLOR: Color = Color::new(90, 90, 110, 255);

fn map_key(key: KeyboardKey) -> Key {
    match key {
        KeyboardKey::KEY_RIGHT => Key::ArrowRight,
        KeyboardKey::KEY_LEFT => Key::ArrowLeft,
        KeyboardKey::KEY_SPACE => Key::Space,
        KeyboardKey::KEY_HOME => Key::Home,
        KeyboardKey::KEY_END => Key::End,
        KeyboardKey::KEY_ESCAPE => Key::Escape,
        _ => Key::Other,
    }
}

/// Opacity of the startup fade-in after `elapsed` seconds, from 0 to 1.
pub fn fade_in_opacity(elapsed: f32) -> f32 {
    ((elapsed - FADE_IN_DELAY) / FADE_IN_DURATION).clamp(0.0, 1.0)
}

/// Top-left corner of a counter `text_width` pixels wide, tucked into the
/// panel's bottom-right corner.
pub fn counter_position(panel: &Rectangle, text_width: i32) -> (i32, i32) {
    let right = (panel.x + panel.width) as i32;
    let x = (right - text_width).max(panel.x as i32);
    let y = (panel.y + panel.height) as i32 - COUNTER_FONT_SIZE;
    (x, y)
}

/// Draws the active slide and its page counter.
pub fn draw_page(d: &mut RaylibDrawHandle, slide: &Slide, layout: &Layout, frame: &Frame) {
    d.clear_background(BACKGROUND);
    slide.draw(d, &layout.panel);

    let counter = frame.counter_text();
    let (x, y) = counter_position(&layout.panel, d.measure_text(&counter, COUNTER_FONT_SIZE));
    d.draw_text(&counter, x, y, COUNTER_FONT_SIZE, Color::LIGHTGRAY);
}

fn draw_button(d: &mut RaylibDrawHandle, rect: Rectangle, label: &str, enabled: bool) {
    let color = if enabled { BUTTON_COLOR } else { DISABLED_COLOR };
    let text_color = if enabled { Color::WHITE } else { Color::GRAY };
    d.draw_rectangle_rec(rect, color);
    d.draw_text(label, rect.x as i32 + 12, rect.y as i32 + 10, 20, text_color);
}

pub fn draw_controls(d: &mut RaylibDrawHandle, layout: &Layout, frame: &Frame) {
    d.draw_rectangle_rec(layout.bar, BAR_COLOR);
    draw_button(d, layout.prev_button, "< Prev", !frame.prev_disabled);
    draw_button(d, layout.next_button, "Next >", !frame.next_disabled);
    draw_button(d, layout.print_button, "Print", true);

    for (dot, active) in layout.indicators.iter().zip(frame.indicators.iter()) {
        let color = if *active { Color::WHITE } else { INDICATOR_COLOR };
        d.draw_circle_v(*dot, layout.indicator_radius, color);
    }
}

pub struct Window {
    rl: RaylibHandle,
    thread: RaylibThread,
    pointer: PointerTracker,
    print_requested: bool,
    elapsed: f32,
}

impl Window {
    pub fn open(config: &Config) -> Window {
        let (mut rl, thread) = raylib::init()
            .size(config.width, config.height)
            .title("Slide Deck")
            .vsync()
            .resizable()
            .build();
        rl.set_target_fps(FPS);
        rl.set_trace_log(TraceLogLevel::LOG_ERROR);
        // Escape toggles fullscreen instead of closing the window
        rl.set_exit_key(None);

        let mut window = Window {
            rl,
            thread,
            pointer: PointerTracker::new(config.touch),
            print_requested: false,
            elapsed: 0.0,
        };
        if config.fullscreen {
            window.enter_fullscreen();
        }
        window
    }

    pub fn should_close(&self) -> bool {
        self.rl.window_should_close()
    }

    pub fn layout(&self, slide_count: usize) -> Layout {
        Layout::new(self.rl.get_screen_width() as f32, self.rl.get_screen_height() as f32, slide_count)
    }

    pub fn handle(&mut self) -> (&mut RaylibHandle, &RaylibThread) {
        (&mut self.rl, &self.thread)
    }

    pub fn take_print_request(&mut self) -> bool {
        std::mem::take(&mut self.print_requested)
    }

    /// Translates this frame's raylib input into deck events, in arrival order
    /// per device: keys, then mouse, then touch.
    pub fn poll_events(&mut self, layout: &Layout, frame: &Frame) -> Vec<InputEvent> {
        let mut events = Vec::new();

        while let Some(key) = self.rl.get_key_pressed() {
            events.push(InputEvent::Key(map_key(key)));
        }

        let sample = PointerSample {
            mouse: self.rl.get_mouse_position(),
            pressed: self.rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT),
            released: self.rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT),
            touch_count: self.rl.get_touch_point_count(),
            touch_x: self.rl.get_touch_x() as f32,
        };
        events.extend(self.pointer.update(sample, layout, frame));

        events
    }

    pub fn draw(&mut self, frame: &Frame, slides: &[Slide], layout: &Layout) {
        self.elapsed += self.rl.get_frame_time();
        let opacity = fade_in_opacity(self.elapsed);

        let mut d = self.rl.begin_drawing(&self.thread);
        draw_page(&mut d, &slides[frame.active_slide()], layout, frame);
        draw_controls(&mut d, layout, frame);

        if opacity < 1.0 {
            let cover = Color::new(0, 0, 0, ((1.0 - opacity) * 255.0) as u8);
            let sw = d.get_screen_width();
            let sh = d.get_screen_height();
            d.draw_rectangle(0, 0, sw, sh, cover);
        }
    }
}

impl HostControls for Window {
    fn enter_fullscreen(&mut self) {
        if !self.rl.is_window_fullscreen() {
            self.rl.toggle_fullscreen();
        }
    }

    fn exit_fullscreen(&mut self) {
        if self.rl.is_window_fullscreen() {
            self.rl.toggle_fullscreen();
        }
    }

    fn is_fullscreen(&self) -> bool {
        self.rl.is_window_fullscreen()
    }

    fn print(&mut self) {
        self.print_requested = true;
    }
}
