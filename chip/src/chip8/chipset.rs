use std::convert::TryFrom;

use {
    crate::{
        definitions::{cpu, display, keyboard, memory},
        display::{Display, Frame},
        devices::Keyboard,
        opcode::{
            self, ChipOpcodes, Instruction, Opcode, Operation, ProgramCounter, ProgramCounterStep,
        },
        resources::Rom,
        timer::Timer,
        LoadError, ProcessError, StackError,
    },
    rand::{rngs::StdRng, RngCore, SeedableRng},
    tinyvec::ArrayVec,
};

/// What happened during a single call to [`ChipSet::step_cycle`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CycleOutcome {
    /// An instruction was executed and the program counter moved on.
    Advanced,
    /// The chip waits for a key press, nothing was executed.
    Blocked,
    /// The opcode is not part of the instruction set, it was skipped.
    UnknownOpcode(Opcode),
}

/// The ChipSet struct represents the current state
/// of the system, it contains all the structures
/// needed for emulating an instant on the
/// Chip8 CPU.
pub struct ChipSet {
    /// name of the loaded rom
    pub(super) name: String,
    /// the last fetched opcode, all two bytes long and stored big-endian
    pub(super) opcode: Opcode,
    /// - `0x000-0x04F` - Used for the built in `4x5` pixel font set (`0-F`)
    /// - `0x050-0x1FF` - Free, historically the interpreter itself
    /// - `0x200-0xFFF` - Program ROM and work RAM
    pub(super) memory: Box<[u8]>,
    /// `8-bit` data registers named `V0` to `VF`. The `VF` register doubles as a flag for some
    /// instructions. In an addition operation, `VF` is the carry flag, while in subtraction, it
    /// is the "no borrow" flag. In the draw instruction `VF` is set upon pixel collision.
    pub(super) registers: [u8; cpu::register::SIZE],
    /// The index for the register, this is a special register entry
    /// called index `I`
    pub(super) index_register: u16,
    /// The program counter holds the address of the next instruction to be executed.
    pub(super) program_counter: u16,
    /// The stack is only used to store return addresses when subroutines are called. The
    /// original [RCA 1802](https://de.wikipedia.org/wiki/RCA1802) version allocated `48` bytes
    /// for up to `12` levels of nesting; here we are using `16`.
    pub(super) stack: ArrayVec<[u16; cpu::stack::SIZE]>,
    /// Delay timer: This timer is intended to be used for timing the events of games. Its value
    /// can be set and read.
    pub(super) delay_timer: Timer,
    /// Sound timer: This timer is used for sound effects. When its value is nonzero, a beeping
    /// sound is made.
    pub(super) sound_timer: Timer,
    pub(super) display: Display,
    /// Set whenever the display changed since the host last asked for it.
    pub(super) redraw: bool,
    pub(super) keyboard: Keyboard,
    /// The register waiting for a key press (`FX0A`), execution halts until it is filled.
    pub(super) awaiting_key: Option<usize>,
    /// The fatal error that stopped the execution, cleared only by a reset.
    pub(super) fault: Option<ProcessError>,
    /// This stores the random number generator, used by the chipset.
    /// It is stored into the chipset, so as to enable simple mocking
    /// of the given type.
    pub(super) rng: Box<dyn RngCore + Send>,
}

impl Default for ChipSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ChipSet {
    /// will create a new chipset object, seeded from the operating system
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// will create a new chipset object that draws its random numbers from `rng`
    pub fn with_rng<R>(rng: R) -> Self
    where
        R: RngCore + Send + 'static,
    {
        let mut chip = Self {
            name: String::new(),
            opcode: 0,
            memory: vec![0; memory::SIZE].into_boxed_slice(),
            registers: [0; cpu::register::SIZE],
            index_register: 0,
            program_counter: cpu::PROGRAM_COUNTER as u16,
            stack: ArrayVec::new(),
            delay_timer: Timer::default(),
            sound_timer: Timer::default(),
            display: Display::new(),
            redraw: false,
            keyboard: Keyboard::new(),
            awaiting_key: None,
            fault: None,
            rng: Box::new(rng),
        };
        chip.reset();
        chip
    }

    /// Brings the chip back into the power on state, with the font set loaded and the
    /// program counter at the start of the program region. The loaded program is gone
    /// afterwards.
    pub fn reset(&mut self) {
        self.opcode = 0;

        self.memory.fill(0);
        let font = display::fontset::LOCATION;
        self.memory[font..(font + display::fontset::FONTSET.len())]
            .copy_from_slice(&display::fontset::FONTSET);

        self.registers = [0; cpu::register::SIZE];
        self.index_register = 0;
        self.program_counter = cpu::PROGRAM_COUNTER as u16;
        self.stack.clear();

        self.delay_timer.set_value(0);
        self.sound_timer.set_value(0);

        self.display.clear();
        // the host should show the cleared screen
        self.redraw = true;

        self.keyboard.clear_last();
        self.awaiting_key = None;
        self.fault = None;

        log::debug!("chipset reset");
    }

    /// Copies the program into memory at the start of the program region. Nothing
    /// is written if the program does not fit.
    pub fn load(&mut self, program: &[u8]) -> Result<(), LoadError> {
        if program.len() > cpu::PROGRAM_SIZE {
            return Err(LoadError::ProgramTooLarge {
                size: program.len(),
                max: cpu::PROGRAM_SIZE,
            });
        }

        self.memory[cpu::PROGRAM_COUNTER..(cpu::PROGRAM_COUNTER + program.len())]
            .copy_from_slice(program);

        log::debug!("loaded a program of {} bytes", program.len());
        Ok(())
    }

    /// Loads the rom data, see [`load`](Self::load).
    pub fn load_rom(&mut self, rom: &Rom) -> Result<(), LoadError> {
        self.load(rom.get_data())?;
        self.name = rom.get_name().to_string();
        Ok(())
    }

    /// will get the next opcode from memory
    pub(super) fn set_opcode(&mut self) -> Result<(), ProcessError> {
        self.opcode = opcode::build_opcode(&self.memory, self.program_counter as usize)?;
        Ok(())
    }

    /// will advance the program by a single instruction
    ///
    /// A fatal error halts the chip, every following call returns the same error until the
    /// chip is [`reset`](Self::reset).
    pub fn step_cycle(&mut self) -> Result<CycleOutcome, ProcessError> {
        if let Some(fault) = self.fault {
            return Err(fault);
        }

        if let Some(register) = self.awaiting_key {
            return Ok(self.resolve_key_wait(register));
        }

        self.cycle().map_err(|err| {
            log::error!(
                "halting at {:#06X} on opcode {:#06X}: {}",
                self.program_counter,
                self.opcode,
                err
            );
            self.fault = Some(err);
            err
        })
    }

    fn cycle(&mut self) -> Result<CycleOutcome, ProcessError> {
        self.set_opcode()?;

        let instruction = match Instruction::try_from(self.opcode) {
            Ok(instruction) => instruction,
            Err(err) => {
                log::warn!("{} Skipping it at {:#06X}.", err, self.program_counter);
                self.step(ProgramCounterStep::Next);
                return Ok(CycleOutcome::UnknownOpcode(self.opcode));
            }
        };

        log::trace!("{:#06X}: {}", self.program_counter, instruction);

        let outcome = match self.calc(&instruction)? {
            Operation::None => CycleOutcome::Advanced,
            Operation::Draw => {
                self.redraw = true;
                CycleOutcome::Advanced
            }
            Operation::Wait => CycleOutcome::Blocked,
        };
        Ok(outcome)
    }

    /// Finishes a pending `FX0A` if a key was pressed since the wait started.
    fn resolve_key_wait(&mut self, register: usize) -> CycleOutcome {
        match self.keyboard.take_last() {
            Some(key) => {
                log::debug!("key {:#X} pressed, stored in V{:X}", key, register);
                self.registers[register] = key as u8;
                self.awaiting_key = None;
                self.step(ProgramCounterStep::Next);
                CycleOutcome::Advanced
            }
            None => CycleOutcome::Blocked,
        }
    }

    /// Counts both timers down by one, should be called at
    /// [`HERTZ`](crate::definitions::timer::HERTZ).
    pub fn tick_timers(&mut self) {
        self.delay_timer.tick();
        self.sound_timer.tick();
    }

    /// Will write keyboard data into internal keyboard representation.
    pub fn set_keyboard(&mut self, keys: &[bool; keyboard::SIZE]) {
        self.keyboard.set_mult(keys);
    }

    /// Will set the value of the given key
    pub fn set_key(&mut self, key: usize, to: bool) {
        self.keyboard.set_key(key, to)
    }

    /// Will get the current state of the keyboard
    pub fn get_keyboard(&self) -> &[bool] {
        self.keyboard.get_keys()
    }

    /// will return the sound timer
    pub fn get_sound_timer(&self) -> u8 {
        self.sound_timer.get_value()
    }

    /// A tone should be playing as long as this is true.
    pub fn is_sound_playing(&self) -> bool {
        self.sound_timer.is_running()
    }

    /// will return the delay timer
    pub fn get_delay_timer(&self) -> u8 {
        self.delay_timer.get_value()
    }

    /// Will return an immutable view of the current display configuration
    pub fn get_display(&self) -> &Frame {
        self.display.get_pixels()
    }

    /// Will return a copy of the current display configuration
    pub fn snapshot_display(&self) -> Frame {
        *self.display.get_pixels()
    }

    /// Returns whether the display changed since the last call.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::replace(&mut self.redraw, false)
    }

    pub fn get_registers(&self) -> &[u8] {
        &self.registers
    }

    pub fn get_index_register(&self) -> u16 {
        self.index_register
    }

    pub fn get_program_counter(&self) -> u16 {
        self.program_counter
    }

    pub fn get_stack(&self) -> &[u16] {
        &self.stack
    }

    pub fn get_memory(&self) -> &[u8] {
        &self.memory
    }

    pub fn get_opcode(&self) -> Opcode {
        self.opcode
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    /// The register that will receive the next key press, if the chip is waiting for one.
    pub fn waiting_register(&self) -> Option<usize> {
        self.awaiting_key
    }

    /// The fatal error that halted the chip.
    pub fn fault(&self) -> Option<ProcessError> {
        self.fault
    }

    /// Address `offset` bytes behind the index register, wrapped into the ram.
    pub(super) fn address(&self, offset: usize) -> usize {
        (self.index_register as usize + offset) & memory::ADDRESS_MASK
    }

    /// Will push the pointer to the stack
    pub(super) fn push_stack(&mut self, pointer: u16) -> Result<(), StackError> {
        match self.stack.try_push(pointer) {
            None => Ok(()),
            Some(_) => Err(StackError::Full),
        }
    }

    /// Will pop from the stack
    pub(super) fn pop_stack(&mut self) -> Result<u16, StackError> {
        self.stack.pop().ok_or(StackError::Empty)
    }
}

impl ProgramCounter for ChipSet {
    fn step(&mut self, step: ProgramCounterStep) {
        self.program_counter = step.apply(self.program_counter);
    }
}
