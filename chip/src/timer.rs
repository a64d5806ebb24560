/// Represents a timer inside of the chip infrastruture, it will count down to zero from
/// whatever number it was given, one step per tick. The host is responsible for ticking
/// it at [`HERTZ`](crate::definitions::timer::HERTZ).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    value: u8,
}

impl Timer {
    /// Will set the value from which the timer shall count down from.
    pub fn set_value(&mut self, value: u8) {
        self.value = value;
    }

    /// Will get the value that the counter is currently at.
    pub fn get_value(&self) -> u8 {
        self.value
    }

    /// Moves the timer one step closer to zero, a timer at zero stays there.
    pub fn tick(&mut self) {
        self.value = self.value.saturating_sub(1);
    }

    pub fn is_running(&self) -> bool {
        self.value > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::timer::HERTZ;

    #[test]
    fn test_timer() {
        let mut timer = Timer::default();
        timer.set_value(HERTZ as u8);
        assert!(timer.is_running());

        // a full second worth of ticks
        for _ in 0..HERTZ {
            timer.tick();
        }
        assert_eq!(timer.get_value(), 0);
        assert!(!timer.is_running());
    }

    #[test]
    fn test_timer_stops_at_zero() {
        let mut timer = Timer::default();
        timer.tick();
        assert_eq!(timer.get_value(), 0);

        timer.set_value(1);
        timer.tick();
        timer.tick();
        assert_eq!(timer.get_value(), 0);
    }
}
