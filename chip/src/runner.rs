use std::{
    thread,
    time::{Duration, Instant},
};

use crate::{
    chip8::{ChipSet, CycleOutcome},
    definitions::{cpu, timer},
    devices::{DisplayCommands, KeyboardCommands, SoundCommands},
    ProcessError,
};

/// The speeds the host runs the chip at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Instructions executed per second.
    pub cpu_hertz: u64,
    /// Timer ticks per second, one frame is run per tick.
    pub timer_hertz: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cpu_hertz: cpu::HERTZ,
            timer_hertz: timer::HERTZ,
        }
    }
}

impl Config {
    /// The amount of cycles that fit into one frame, at least one.
    pub fn cycles_per_frame(&self) -> usize {
        (self.cpu_hertz / self.timer_hertz.max(1)).max(1) as usize
    }

    /// How long a single frame lasts.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / self.timer_hertz.max(1))
    }
}

/// Summary of a single [`Runner::frame`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    /// Cycles that executed or skipped an opcode.
    pub cycles: usize,
    /// The frame ended early as the chip waits for a key press.
    pub blocked: bool,
    /// Unknown opcodes skipped during the frame.
    pub unknown: usize,
}

/// Drives a [`ChipSet`] and connects it to the host devices.
pub struct Runner<D, K, S>
where
    D: DisplayCommands,
    K: KeyboardCommands,
    S: SoundCommands,
{
    chip: ChipSet,
    display: D,
    keyboard: K,
    sound: S,
    config: Config,
    /// whether the tone is currently playing
    playing: bool,
}

impl<D, K, S> Runner<D, K, S>
where
    D: DisplayCommands,
    K: KeyboardCommands,
    S: SoundCommands,
{
    pub fn new(chip: ChipSet, display: D, keyboard: K, sound: S, config: Config) -> Self {
        Self {
            chip,
            display,
            keyboard,
            sound,
            config,
            playing: false,
        }
    }

    pub fn chip(&self) -> &ChipSet {
        &self.chip
    }

    pub fn chip_mut(&mut self) -> &mut ChipSet {
        &mut self.chip
    }

    /// Runs a single frame: reads the keyboard, executes the cycles of the frame, ticks the
    /// timers once and then updates the display and the tone.
    ///
    /// A key that went down in this frame's keyboard read and is still held satisfies a key
    /// wait that starts later in the same frame.
    pub fn frame(&mut self) -> Result<FrameReport, ProcessError> {
        self.sync_keyboard();

        let mut report = FrameReport::default();
        for _ in 0..self.config.cycles_per_frame() {
            match self.chip.step_cycle()? {
                CycleOutcome::Advanced => report.cycles += 1,
                CycleOutcome::UnknownOpcode(_) => {
                    report.cycles += 1;
                    report.unknown += 1;
                }
                CycleOutcome::Blocked => {
                    report.blocked = true;
                    break;
                }
            }
        }

        self.chip.tick_timers();

        if self.chip.take_redraw() {
            self.display.display(self.chip.get_display());
        }
        self.sync_sound();

        Ok(report)
    }

    /// Runs frames at the timer rate until `should_stop` returns true or the chip faults.
    pub fn run<F>(&mut self, mut should_stop: F) -> Result<(), ProcessError>
    where
        F: FnMut() -> bool,
    {
        let frame_duration = self.config.frame_duration();
        log::debug!(
            "running at {} cycles per frame, one frame every {:?}",
            self.config.cycles_per_frame(),
            frame_duration
        );

        let mut result = Ok(());
        while !should_stop() {
            let start = Instant::now();
            if let Err(err) = self.frame() {
                result = Err(err);
                break;
            }
            if let Some(rest) = frame_duration.checked_sub(start.elapsed()) {
                thread::sleep(rest);
            }
        }

        // the tone must not outlive the loop, halted or not
        if self.playing {
            self.sound.pause();
            self.playing = false;
        }
        result
    }

    fn sync_keyboard(&mut self) {
        let keys = self.keyboard.get_keyboard();
        // only changes are written, so a held key is not a new press
        self.chip.set_keyboard(&keys);
    }

    fn sync_sound(&mut self) {
        let playing = self.chip.is_sound_playing();
        if playing == self.playing {
            return;
        }

        if playing {
            self.sound.play();
        } else {
            self.sound.pause();
        }
        self.playing = playing;
    }
}
