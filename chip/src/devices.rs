use crate::{definitions::keyboard, display::Frame};

#[cfg_attr(test, mockall::automock)]
/// The traits responsible for the display based code
pub trait DisplayCommands {
    /// Will display all from the pixels
    fn display(&mut self, pixels: &Frame);
}

#[cfg_attr(test, mockall::automock)]
/// The trait responsible for reading the keyboard data from the host
pub trait KeyboardCommands {
    /// Returns the level of every key, indexed by the chip key value `0x0-0xF`.
    fn get_keyboard(&self) -> [bool; keyboard::SIZE];
}

#[cfg_attr(test, mockall::automock)]
/// The trait responsible for the tone that is playing while the sound timer runs.
pub trait SoundCommands {
    /// The sound timer started, so should the tone.
    fn play(&mut self);
    /// The sound timer reached zero.
    fn pause(&mut self);
}

/// Will store the key levels of the keyboard and latch the last press.
///
/// Input is done with a hex keyboard that has 16 keys ranging `0-F`. The `8`, `4`, `6`, and
/// `2` keys are typically used for directional input. Three opcodes are used to detect input.
/// One skips an instruction if a specific key is pressed, while another does the same if a
/// specific key is not pressed. The third waits for a key press, and then stores it in one of
/// the data registers.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Keyboard {
    keys: [bool; keyboard::SIZE],
    /// The last key that went from released to pressed, consumed by the key wait.
    last: Option<usize>,
}

impl Keyboard {
    pub fn new() -> Self {
        Keyboard::default()
    }

    /// Sets the level of a single key. A transition from released to pressed is latched.
    ///
    /// Keys outside of `0x0-0xF` do not exist on the keypad and are ignored.
    pub fn set_key(&mut self, key: usize, to: bool) {
        if key >= keyboard::SIZE {
            log::warn!("Ignoring the state of the unknown key {:#X}.", key);
            return;
        }

        if to && !self.keys[key] {
            self.last = Some(key);
        }
        self.keys[key] = to;
    }

    /// Sets all key levels at once, latching the lowest newly pressed key. A press latched by an
    /// earlier update is dropped.
    pub fn set_mult(&mut self, keys: &[bool; keyboard::SIZE]) {
        self.last = None;
        for (key, to) in keys.iter().enumerate().rev() {
            self.set_key(key, *to);
        }
    }

    pub fn is_pressed(&self, key: usize) -> bool {
        self.keys[key % keyboard::SIZE]
    }

    pub fn get_keys(&self) -> &[bool] {
        &self.keys
    }

    /// Returns and forgets the last latched key press.
    pub fn take_last(&mut self) -> Option<usize> {
        self.last.take()
    }

    /// Drops a latched key press without touching the key levels.
    pub fn clear_last(&mut self) {
        self.last = None;
    }
}
