//! Red -> green -> blue phase sequencer for the status LED.

/// One leg of the RGB LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    pub const fn next(self) -> Color {
        match self {
            Color::Red => Color::Green,
            Color::Green => Color::Blue,
            Color::Blue => Color::Red,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
        }
    }
}

impl core::fmt::Display for Color {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Cyclic phase counter, starting at red.
pub struct ColorCycle {
    current: Color,
}

impl ColorCycle {
    pub const fn new() -> Self {
        Self {
            current: Color::Red,
        }
    }

    pub fn current(&self) -> Color {
        self.current
    }

    /// Step to the next color and return it.
    pub fn advance(&mut self) -> Color {
        self.current = self.current.next();
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_is_red_green_blue() {
        let mut cycle = ColorCycle::new();
        assert_eq!(cycle.current(), Color::Red);
        assert_eq!(cycle.advance(), Color::Green);
        assert_eq!(cycle.advance(), Color::Blue);
        assert_eq!(cycle.advance(), Color::Red);
    }

    #[test]
    fn whole_cycles_return_to_the_start() {
        let mut cycle = ColorCycle::new();
        for _ in 0..3 {
            cycle.advance();
        }
        assert_eq!(cycle.current(), Color::Red);

        for _ in 0..9 {
            cycle.advance();
        }
        assert_eq!(cycle.current(), Color::Red);
    }

    #[test]
    fn a_pause_mid_cycle_keeps_the_phase() {
        let mut cycle = ColorCycle::new();
        for _ in 0..4 {
            cycle.advance();
        }
        assert_eq!(cycle.current(), Color::Green);

        // a paused blinker only reads the phase, never steps it
        for _ in 0..100 {
            assert_eq!(cycle.current(), Color::Green);
        }

        for _ in 0..5 {
            cycle.advance();
        }
        assert_eq!(cycle.current(), Color::Red);
    }
}
