use raylib::prelude::*;
use crate::constants::*;
use crate::input::Control;

/// Screen geometry for one window size.
///
/// The slide panel fills everything above the control bar. The bar holds the
/// previous button on the left, next and print on the right, and one
/// indicator dot per slide in the middle.
#[derive(Debug, Clone)]
pub struct Layout {
    pub panel: Rectangle,
    pub bar: Rectangle,
    pub prev_button: Rectangle,
    pub next_button: Rectangle,
    pub print_button: Rectangle,
    pub indicators: Vec<Vector2>,
    pub indicator_radius: f32,
    indicator_reach: f32, // half-width of each dot's click box
}

fn contains(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x <= rect.x + rect.width
        && point.y >= rect.y
        && point.y <= rect.y + rect.height
}

impl Layout {
    pub fn new(width: f32, height: f32, slide_count: usize) -> Layout {
        let bar_top = (height - CONTROL_BAR_HEIGHT).max(0.0);
        let bar = Rectangle::new(0.0, bar_top, width, height - bar_top);

        let panel = Rectangle::new(
            PANEL_MARGIN,
            PANEL_MARGIN,
            (width - PANEL_MARGIN * 2.0).max(0.0),
            (bar_top - PANEL_MARGIN * 2.0).max(0.0),
        );

        let button_y = bar.y + (bar.height - BUTTON_HEIGHT) * 0.5;
        let prev_button = Rectangle::new(PANEL_MARGIN, button_y, BUTTON_WIDTH, BUTTON_HEIGHT);
        let print_button = Rectangle::new(width - PANEL_MARGIN - BUTTON_WIDTH, button_y, BUTTON_WIDTH, BUTTON_HEIGHT);
        let next_button = Rectangle::new(print_button.x - PANEL_MARGIN - BUTTON_WIDTH, button_y, BUTTON_WIDTH, BUTTON_HEIGHT);

        // Dots live between the previous and next buttons, squeezed together when the deck is long
        let span_start = prev_button.x + prev_button.width;
        let span = (next_button.x - span_start).max(0.0);
        let gaps = slide_count.saturating_sub(1) as f32;
        let spacing = if gaps > 0.0 {
            INDICATOR_SPACING.min((span - INDICATOR_RADIUS * 2.0) / gaps).max(0.0)
        } else {
            INDICATOR_SPACING
        };
        let indicator_reach = spacing * 0.5;
        let indicator_radius = INDICATOR_RADIUS.min(indicator_reach);

        let first_x = span_start + span * 0.5 - spacing * gaps * 0.5;
        let dot_y = bar.y + bar.height * 0.5;
        let indicators = (0..slide_count)
            .map(|i| Vector2::new(first_x + spacing * i as f32, dot_y))
            .collect();

        Layout {
            panel,
            bar,
            prev_button,
            next_button,
            print_button,
            indicators,
            indicator_radius,
            indicator_reach,
        }
    }

    pub fn in_slide_panel(&self, point: Vector2) -> bool {
        contains(&self.panel, point)
    }

    pub fn hit_test(&self, point: Vector2) -> Option<Control> {
        if contains(&self.prev_button, point) {
            return Some(Control::Previous);
        }
        if contains(&self.next_button, point) {
            return Some(Control::Next);
        }
        if contains(&self.print_button, point) {
            return Some(Control::Print);
        }
        self.indicators
            .iter()
            .position(|dot| {
                (point.x - dot.x).abs() < self.indicator_reach
                    && (point.y - dot.y).abs() <= INDICATOR_SPACING * 0.5
            })
            .map(|i| Control::Indicator(i + 1))
    }
}
