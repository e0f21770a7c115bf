//! Derived-layout calculator for the lists region. The two song panels fill
//! whatever vertical space remains after the fixed chrome (title, input
//! line, optional reset control, padding) and the variable-height keyboard
//! panel. The target height is a pure function of those inputs; the only
//! state kept here is the height currently on screen, so transitions can be
//! eased over a few ticks instead of snapping.

/// External keyboard visibility signal. The host tells us when the keyboard
/// panel appears (with its height) and when it goes away; nothing else about
/// the panel matters to layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardEvent {
    Shown { height: u16 },
    Hidden,
}

/// Fixed heights of the chrome surrounding the lists region. Kept as data
/// rather than constants so the terminal front-end can substitute row-scale
/// values while the defaults stay in the point scale the layout formula was
/// designed around.
#[derive(Debug, Clone, Copy)]
pub struct ChromeMetrics {
    pub title: u16,
    pub input: u16,
    /// Counted only while the reset control is visible.
    pub reset: u16,
    pub padding: u16,
}

impl ChromeMetrics {
    /// Row-scale metrics for terminal rendering: three rows each for the
    /// title bar, input line, and reset control, and three for the footer
    /// that serves as the padding band.
    pub const fn terminal_rows() -> Self {
        Self {
            title: 3,
            input: 3,
            reset: 3,
            padding: 3,
        }
    }
}

impl Default for ChromeMetrics {
    /// Point-scale defaults the height formula is tuned around.
    fn default() -> Self {
        Self {
            title: 80,
            input: 60,
            reset: 60,
            padding: 40,
        }
    }
}

/// Computes and smooths the height available to the song lists.
#[derive(Debug)]
pub struct LayoutSizer {
    screen_height: u16,
    keyboard_height: u16,
    metrics: ChromeMetrics,
    /// Height currently rendered. Chases the target a step per tick.
    current: u16,
}

impl LayoutSizer {
    /// Build a sizer for a screen of the given height. The initial rendered
    /// height matches the no-keyboard, no-reset target so the first frame
    /// does not animate from zero.
    pub fn new(screen_height: u16, metrics: ChromeMetrics) -> Self {
        let mut sizer = Self {
            screen_height,
            keyboard_height: 0,
            metrics,
            current: 0,
        };
        sizer.jump(false);
        sizer
    }

    pub fn keyboard_height(&self) -> u16 {
        self.keyboard_height
    }

    /// Apply a keyboard show/hide notification.
    pub fn handle_keyboard(&mut self, event: KeyboardEvent) {
        self.keyboard_height = match event {
            KeyboardEvent::Shown { height } => height,
            KeyboardEvent::Hidden => 0,
        };
    }

    /// Track a screen (terminal) resize. Resizes snap rather than animate;
    /// the terminal has already redrawn at the new size anyway.
    pub fn set_screen_height(&mut self, height: u16, reset_visible: bool) {
        self.screen_height = height;
        self.jump(reset_visible);
    }

    /// The space the lists should end up occupying. `reset_visible` is
    /// passed in fresh on every call because it is derived from the store;
    /// caching it here could let it drift from the truth. Clamped at zero
    /// for small screens where chrome plus keyboard exceed the total.
    pub fn target_height(&self, reset_visible: bool) -> u16 {
        let reset = if reset_visible { self.metrics.reset } else { 0 };
        self.screen_height
            .saturating_sub(self.keyboard_height)
            .saturating_sub(self.metrics.title)
            .saturating_sub(self.metrics.input)
            .saturating_sub(reset)
            .saturating_sub(self.metrics.padding)
    }

    /// Height to render this frame.
    pub fn current_height(&self) -> u16 {
        self.current
    }

    /// Advance the rendered height one easing step toward the target:
    /// half the remaining distance, at least one row, so every transition
    /// settles in a handful of ticks without ever jumping. Returns the new
    /// rendered height.
    pub fn step(&mut self, reset_visible: bool) -> u16 {
        let target = self.target_height(reset_visible);
        if self.current == target {
            return self.current;
        }
        let distance = self.current.abs_diff(target);
        let delta = (distance / 2).max(1);
        if self.current < target {
            self.current += delta;
        } else {
            self.current -= delta;
        }
        self.current
    }

    /// Snap straight to the target, skipping the animation.
    pub fn jump(&mut self, reset_visible: bool) {
        self.current = self.target_height(reset_visible);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_uses_point_scale_formula() {
        let sizer = LayoutSizer::new(800, ChromeMetrics::default());
        // 800 - 0 - 80 - 60 - 0 - 40
        assert_eq!(sizer.target_height(false), 620);
    }

    #[test]
    fn keyboard_and_reset_both_shrink_the_target() {
        let mut sizer = LayoutSizer::new(800, ChromeMetrics::default());
        sizer.handle_keyboard(KeyboardEvent::Shown { height: 300 });
        assert_eq!(sizer.target_height(false), 320);
        assert_eq!(sizer.target_height(true), 260);

        sizer.handle_keyboard(KeyboardEvent::Hidden);
        assert_eq!(sizer.target_height(false), 620);
    }

    #[test]
    fn target_clamps_to_zero_on_small_screens() {
        let mut sizer = LayoutSizer::new(200, ChromeMetrics::default());
        sizer.handle_keyboard(KeyboardEvent::Shown { height: 150 });
        assert_eq!(sizer.target_height(true), 0);
    }

    #[test]
    fn step_converges_and_then_holds() {
        let mut sizer = LayoutSizer::new(40, ChromeMetrics::terminal_rows());
        assert_eq!(sizer.current_height(), 31);

        sizer.handle_keyboard(KeyboardEvent::Shown { height: 8 });
        let target = sizer.target_height(false);
        assert_eq!(target, 23);

        let mut steps = 0;
        while sizer.current_height() != target {
            let before = sizer.current_height();
            let after = sizer.step(false);
            assert!(after.abs_diff(target) < before.abs_diff(target));
            steps += 1;
            assert!(steps < 32, "easing failed to converge");
        }

        // Fixed point once settled.
        assert_eq!(sizer.step(false), target);
        assert_eq!(sizer.current_height(), target);
    }

    #[test]
    fn resize_snaps_without_animation() {
        let mut sizer = LayoutSizer::new(40, ChromeMetrics::terminal_rows());
        sizer.set_screen_height(24, false);
        assert_eq!(sizer.current_height(), sizer.target_height(false));
    }
}
