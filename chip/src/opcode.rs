//! Opcode abstractions, functionality and constants.
use std::{convert::TryFrom, fmt};

use crate::{definitions::memory, OpcodeError, ProcessError};

/// the base mask used for generating all the other sub masks
pub(crate) const OPCODE_MASK_FFFF: u16 = u16::MAX;

/// the mask for the first twelve bits
pub(crate) const OPCODE_MASK_FFF0: u16 = OPCODE_MASK_FFFF << 4;

/// the mask for the first eight bits
pub(crate) const OPCODE_MASK_FF00: u16 = OPCODE_MASK_FFFF << 8;

/// the mask for the first four bits
pub(crate) const OPCODE_MASK_F000: u16 = OPCODE_MASK_FFFF << 12;

/// the mask for the last four bits
pub(crate) const OPCODE_MASK_000F: u16 = OPCODE_MASK_FFFF ^ OPCODE_MASK_FFF0;

/// the mask for the last eight bits
pub(crate) const OPCODE_MASK_00FF: u16 = OPCODE_MASK_FFFF ^ OPCODE_MASK_FF00;

/// the mask for the last twelve bits
pub(crate) const OPCODE_MASK_0FFF: u16 = OPCODE_MASK_FFFF ^ OPCODE_MASK_F000;

/// the size of a nibble
const NIBBLE_SIZE: u16 = 0x4;

/// a wrapper type for u16 to make it clear what is meant to be used
pub type Opcode = u16;

/// will build an opcode from data and the given point
/// # Arguments
///
/// - `data` - A slice of u8 data entries used to generate the opcodes
/// - `pointer` - Where in the data the opcode shall be extracted, so `pointer` and `pointer + 1` make
/// the opcode up
///
/// # Example
/// ```rust
/// # use chip::opcode::*;
/// # use chip::ProcessError;
///  const OPCODES: [Opcode; 2] = [0x00EE, 0x1EDA];
///  const SPLIT_OPCODE: [u8; 4] = [0x00, 0xEE, 0x1E, 0xDA];
///  for (i, val) in OPCODES.iter().enumerate() {
///      let opcode = build_opcode(&SPLIT_OPCODE, i * 2).expect("This will work.");
///      assert_eq!(opcode, *val);
///  }
/// # let pointer = 3;
/// # let err = ProcessError::AddressOutOfRange { pointer, len: SPLIT_OPCODE.len() };
/// # assert_eq!(Err(err), build_opcode(&SPLIT_OPCODE, pointer));
/// ```
pub fn build_opcode(data: &[u8], pointer: usize) -> Result<Opcode, ProcessError> {
    // controlling that there is no illegal access here
    if pointer + 1 < data.len() {
        Ok(Opcode::from_be_bytes([data[pointer], data[pointer + 1]]))
    } else {
        Err(ProcessError::AddressOutOfRange {
            pointer,
            len: data.len(),
        })
    }
}

/// These are special traits used to filter out information
/// from opcodes
pub trait OpcodeTrait {
    /// Returns the opcode group, the highest nibble of the opcode.
    fn t(&self) -> usize;

    /// this is an opcode extractor for the opcode type `TNNN`
    /// - `NNN` is an address
    fn nnn(&self) -> u16;

    /// this is an opcode extractor for the opcode type `TXNN`
    /// - `X` is a register index
    /// - `NN` is a constant
    fn xnn(&self) -> (usize, u8);

    /// this is an opcode extractor for the opcode type `TXYN`
    /// - `X` is a register index
    /// - `Y` is a register index
    /// - `N` is a constant or an opcode subtype
    fn xyn(&self) -> (usize, usize, u8);

    /// this is an opcode extractor for the opcode type `TXYT`
    fn xy(&self) -> (usize, usize);

    /// this is an opcode extractor for the opcode type `TXTT`
    fn x(&self) -> usize;
}

impl OpcodeTrait for Opcode {
    /// # Example
    /// ```rust
    /// # use chip::opcode::*;
    /// const BASE_OPCODE: Opcode = 0x1EDA;
    /// assert_eq!(BASE_OPCODE.t(), 0x1);
    /// ```
    fn t(&self) -> usize {
        ((self & OPCODE_MASK_F000) >> (3 * NIBBLE_SIZE)) as usize
    }

    /// # Example
    /// ```rust
    /// # use chip::opcode::*;
    ///  const BASE_OPCODE: Opcode = 0x1EDA;
    ///  assert_eq!(BASE_OPCODE.nnn(), 0xEDA)
    /// ```
    fn nnn(&self) -> u16 {
        self & OPCODE_MASK_0FFF
    }

    /// # Example
    /// ```rust
    /// # use chip::opcode::*;
    /// const BASE_OPCODE: Opcode = 0x1EDA;
    /// assert_eq!(BASE_OPCODE.xnn(), (0xE, 0xDA));
    /// ```
    fn xnn(&self) -> (usize, u8) {
        (self.x(), (self & OPCODE_MASK_00FF) as u8)
    }

    /// ```rust
    /// # use chip::opcode::*;
    ///  const BASE_OPCODE: Opcode = 0x1EDA;
    ///  assert_eq!(BASE_OPCODE.xyn(), (0xE, 0xD, 0xA));
    /// ```
    fn xyn(&self) -> (usize, usize, u8) {
        let (x, y) = self.xy();
        (x, y, (self & OPCODE_MASK_000F) as u8)
    }

    fn xy(&self) -> (usize, usize) {
        const MASK: u16 = OPCODE_MASK_00FF ^ OPCODE_MASK_000F;
        let y = ((self & MASK) >> NIBBLE_SIZE) as usize;
        (self.x(), y)
    }

    fn x(&self) -> usize {
        ((self & OPCODE_MASK_0FFF & OPCODE_MASK_FF00) >> (2 * NIBBLE_SIZE)) as usize
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
/// Represents the program steps that the chip
/// can take.
pub enum ProgramCounterStep {
    /// Will not change the program counter
    None,
    /// Will move the program counter to the next opcode
    Next,
    /// Will skip over the next opcode
    Skip,
    /// Will simply move the program counter to the given location.
    Jump(u16),
}

impl ProgramCounterStep {
    /// Will return a Skip if the condition is true.
    ///
    /// # Example
    /// ```rust
    /// # use chip::opcode::ProgramCounterStep;
    /// assert_eq!(ProgramCounterStep::Next, ProgramCounterStep::cond(false));
    /// assert_eq!(ProgramCounterStep::Skip, ProgramCounterStep::cond(true));
    /// ```
    #[inline]
    pub fn cond(cond: bool) -> Self {
        if cond {
            ProgramCounterStep::Skip
        } else {
            ProgramCounterStep::Next
        }
    }

    /// Calculates the program counter that follows `pointer` after taking this step.
    ///
    /// # Example
    /// ```rust
    /// # use chip::opcode::ProgramCounterStep;
    /// assert_eq!(ProgramCounterStep::Skip.apply(0x200), 0x204);
    /// assert_eq!(ProgramCounterStep::Jump(0x345).apply(0x200), 0x345);
    /// ```
    #[inline]
    pub fn apply(&self, pointer: u16) -> u16 {
        const SIZE: u16 = memory::opcodes::SIZE as u16;
        match *self {
            ProgramCounterStep::None => pointer,
            ProgramCounterStep::Next => pointer.wrapping_add(SIZE),
            ProgramCounterStep::Skip => pointer.wrapping_add(2 * SIZE),
            ProgramCounterStep::Jump(to) => to,
        }
    }
}

/// Operands of the `TNNN` opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Address {
    pub nnn: u16,
}

/// Operands of the `TXNN` opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterConst {
    pub x: usize,
    pub nn: u8,
}

/// Operands of the `TXY0` opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterPair {
    pub x: usize,
    pub y: usize,
}

/// Operands of the `DXYN` opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    pub x: usize,
    pub y: usize,
    pub n: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemOp {
    /// Clears the display
    Clear,
    /// Returns from the subroutine
    Return,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
    Assign,
    Or,
    And,
    Xor,
    Add,
    Sub,
    ShiftRight,
    SubReverse,
    ShiftLeft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alu {
    pub op: AluOp,
    pub x: usize,
    pub y: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOp {
    Pressed,
    NotPressed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySkip {
    pub op: KeyOp,
    pub x: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MiscOp {
    GetDelayTimer,
    AwaitKeyPress,
    SetDelayTimer,
    SetSoundTimer,
    AddVxToI,
    SetIToSprite,
    StoreBcd,
    StoreV0ToVx,
    FillV0ToVx,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Misc {
    pub op: MiscOp,
    pub x: usize,
}

/// Creates the lookup from a sub opcode selector to the operation it stands for.
macro_rules! impl_selector {
    ($type_name:ty : $type_from:ty : $( $key:literal => $val:expr ),+ $(,)? ) => {
        impl $type_name {
            fn select(selector: $type_from) -> Option<Self> {
                match selector {
                    $(
                        $key => Some($val),
                    )+
                    _ => None,
                }
            }
        }
    };
}

/// Creates the conversion for operands that every opcode of the group carries.
macro_rules! impl_operands {
    ($type_name:ident, |$value:ident| $body:expr) => {
        impl From<Opcode> for $type_name {
            fn from($value: Opcode) -> Self {
                $body
            }
        }
    };
}

/// Creates the conversion for operands that only some opcodes of the group carry.
macro_rules! impl_try_operands {
    ($type_name:ident, |$value:ident| $body:expr) => {
        impl TryFrom<Opcode> for $type_name {
            type Error = OpcodeError;

            fn try_from($value: Opcode) -> Result<Self, Self::Error> {
                let operands: Option<Self> = $body;
                operands.ok_or(OpcodeError::InvalidOpcode($value))
            }
        }
    };
}

impl_selector!(SystemOp : Opcode :
    // 00E0
    0x00E0 => SystemOp::Clear,
    // 00EE
    0x00EE => SystemOp::Return,
);

impl_selector!(AluOp : u8 :
    0x0 => AluOp::Assign,
    0x1 => AluOp::Or,
    0x2 => AluOp::And,
    0x3 => AluOp::Xor,
    0x4 => AluOp::Add,
    0x5 => AluOp::Sub,
    0x6 => AluOp::ShiftRight,
    0x7 => AluOp::SubReverse,
    0xE => AluOp::ShiftLeft,
);

impl_selector!(KeyOp : u8 :
    0x9E => KeyOp::Pressed,
    0xA1 => KeyOp::NotPressed,
);

impl_selector!(MiscOp : u8 :
    0x07 => MiscOp::GetDelayTimer,
    0x0A => MiscOp::AwaitKeyPress,
    0x15 => MiscOp::SetDelayTimer,
    0x18 => MiscOp::SetSoundTimer,
    0x1E => MiscOp::AddVxToI,
    0x29 => MiscOp::SetIToSprite,
    0x33 => MiscOp::StoreBcd,
    0x55 => MiscOp::StoreV0ToVx,
    0x65 => MiscOp::FillV0ToVx,
);

impl_operands!(Address, |value| Address { nnn: value.nnn() });

impl_operands!(RegisterConst, |value| {
    let (x, nn) = value.xnn();
    RegisterConst { x, nn }
});

impl_operands!(Sprite, |value| {
    let (x, y, n) = value.xyn();
    Sprite { x, y, n }
});

impl_try_operands!(RegisterPair, |value| match value.xyn() {
    (x, y, 0) => Some(RegisterPair { x, y }),
    _ => None,
});

impl_try_operands!(Alu, |value| {
    let (x, y, n) = value.xyn();
    AluOp::select(n).map(|op| Alu { op, x, y })
});

impl_try_operands!(KeySkip, |value| {
    let (x, nn) = value.xnn();
    KeyOp::select(nn).map(|op| KeySkip { op, x })
});

impl_try_operands!(Misc, |value| {
    let (x, nn) = value.xnn();
    MiscOp::select(nn).map(|op| Misc { op, x })
});

/// A decoded instruction, classified by the opcode group (the highest nibble)
/// with the operands of the instruction attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// `00E0`, `00EE`
    System(SystemOp),
    /// `1NNN`
    Jump(Address),
    /// `2NNN`
    Call(Address),
    /// `3XNN`
    SkipEqual(RegisterConst),
    /// `4XNN`
    SkipNotEqual(RegisterConst),
    /// `5XY0`
    SkipRegistersEqual(RegisterPair),
    /// `6XNN`
    Set(RegisterConst),
    /// `7XNN`
    Add(RegisterConst),
    /// `8XYT`
    Alu(Alu),
    /// `9XY0`
    SkipRegistersNotEqual(RegisterPair),
    /// `ANNN`
    SetIndex(Address),
    /// `BNNN`
    JumpOffset(Address),
    /// `CXNN`
    Random(RegisterConst),
    /// `DXYN`
    Draw(Sprite),
    /// `EXTT`
    Key(KeySkip),
    /// `FXTT`
    Misc(Misc),
}

impl TryFrom<Opcode> for Instruction {
    type Error = OpcodeError;

    fn try_from(value: Opcode) -> Result<Self, Self::Error> {
        let res = match value.t() {
            0x0 => Instruction::System(
                SystemOp::select(value).ok_or(OpcodeError::InvalidOpcode(value))?,
            ),
            0x1 => Instruction::Jump(value.into()),
            0x2 => Instruction::Call(value.into()),
            0x3 => Instruction::SkipEqual(value.into()),
            0x4 => Instruction::SkipNotEqual(value.into()),
            0x5 => Instruction::SkipRegistersEqual(RegisterPair::try_from(value)?),
            0x6 => Instruction::Set(value.into()),
            0x7 => Instruction::Add(value.into()),
            0x8 => Instruction::Alu(Alu::try_from(value)?),
            0x9 => Instruction::SkipRegistersNotEqual(RegisterPair::try_from(value)?),
            0xA => Instruction::SetIndex(value.into()),
            0xB => Instruction::JumpOffset(value.into()),
            0xC => Instruction::Random(value.into()),
            0xD => Instruction::Draw(value.into()),
            0xE => Instruction::Key(KeySkip::try_from(value)?),
            _ => Instruction::Misc(Misc::try_from(value)?),
        };
        Ok(res)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Instruction::System(SystemOp::Clear) => write!(f, "CLS"),
            Instruction::System(SystemOp::Return) => write!(f, "RET"),
            Instruction::Jump(Address { nnn }) => write!(f, "JP {:#05X}", nnn),
            Instruction::Call(Address { nnn }) => write!(f, "CALL {:#05X}", nnn),
            Instruction::SkipEqual(RegisterConst { x, nn }) => write!(f, "SE V{:X}, {:#04X}", x, nn),
            Instruction::SkipNotEqual(RegisterConst { x, nn }) => {
                write!(f, "SNE V{:X}, {:#04X}", x, nn)
            }
            Instruction::SkipRegistersEqual(RegisterPair { x, y }) => write!(f, "SE V{:X}, V{:X}", x, y),
            Instruction::Set(RegisterConst { x, nn }) => write!(f, "LD V{:X}, {:#04X}", x, nn),
            Instruction::Add(RegisterConst { x, nn }) => write!(f, "ADD V{:X}, {:#04X}", x, nn),
            Instruction::Alu(Alu { op, x, y }) => {
                let name = match op {
                    AluOp::Assign => "LD",
                    AluOp::Or => "OR",
                    AluOp::And => "AND",
                    AluOp::Xor => "XOR",
                    AluOp::Add => "ADD",
                    AluOp::Sub => "SUB",
                    AluOp::ShiftRight => "SHR",
                    AluOp::SubReverse => "SUBN",
                    AluOp::ShiftLeft => "SHL",
                };
                write!(f, "{} V{:X}, V{:X}", name, x, y)
            }
            Instruction::SkipRegistersNotEqual(RegisterPair { x, y }) => {
                write!(f, "SNE V{:X}, V{:X}", x, y)
            }
            Instruction::SetIndex(Address { nnn }) => write!(f, "LD I, {:#05X}", nnn),
            Instruction::JumpOffset(Address { nnn }) => write!(f, "JP V0, {:#05X}", nnn),
            Instruction::Random(RegisterConst { x, nn }) => write!(f, "RND V{:X}, {:#04X}", x, nn),
            Instruction::Draw(Sprite { x, y, n }) => write!(f, "DRW V{:X}, V{:X}, {:#03X}", x, y, n),
            Instruction::Key(KeySkip { op: KeyOp::Pressed, x }) => write!(f, "SKP V{:X}", x),
            Instruction::Key(KeySkip { op: KeyOp::NotPressed, x }) => write!(f, "SKNP V{:X}", x),
            Instruction::Misc(Misc { op, x }) => match op {
                MiscOp::GetDelayTimer => write!(f, "LD V{:X}, DT", x),
                MiscOp::AwaitKeyPress => write!(f, "LD V{:X}, K", x),
                MiscOp::SetDelayTimer => write!(f, "LD DT, V{:X}", x),
                MiscOp::SetSoundTimer => write!(f, "LD ST, V{:X}", x),
                MiscOp::AddVxToI => write!(f, "ADD I, V{:X}", x),
                MiscOp::SetIToSprite => write!(f, "LD F, V{:X}", x),
                MiscOp::StoreBcd => write!(f, "LD B, V{:X}", x),
                MiscOp::StoreV0ToVx => write!(f, "LD [I], V{:X}", x),
                MiscOp::FillV0ToVx => write!(f, "LD V{:X}, [I]", x),
            },
        }
    }
}

/// Represents a step of the program counter
/// this requires the enum ProgramCounterStep
/// to work.
pub trait ProgramCounter {
    /// will move the program counter forward by a step.
    fn step(&mut self, step: ProgramCounterStep);
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
/// Represents a command from the interpreter up to the host.
pub enum Operation {
    /// If no action has to be taken.
    None,
    /// If the host shall wait
    /// for the next key press
    Wait,
    /// The display changed and should be redrawn
    Draw,
}

/// These are the traits that have to be full filled for a working opcode
/// table.
///
/// This trait requires the implementation of the [`ProgramCounter`](ProgramCounter) trait, as
/// the step computed by every instruction is applied through it.
pub trait ChipOpcodes: ProgramCounter {
    /// will execute a single decoded instruction and move the program counter accordingly
    fn calc(&mut self, instruction: &Instruction) -> Result<Operation, ProcessError> {
        let (step, operation) = match *instruction {
            Instruction::System(op) => self.system(op)?,
            Instruction::Jump(address) => (self.jump(address), Operation::None),
            Instruction::Call(address) => (self.call(address)?, Operation::None),
            Instruction::SkipEqual(operands) => (self.skip_equal(operands), Operation::None),
            Instruction::SkipNotEqual(operands) => (self.skip_not_equal(operands), Operation::None),
            Instruction::SkipRegistersEqual(operands) => {
                (self.skip_registers_equal(operands), Operation::None)
            }
            Instruction::Set(operands) => (self.set(operands), Operation::None),
            Instruction::Add(operands) => (self.add(operands), Operation::None),
            Instruction::Alu(operands) => (self.alu(operands), Operation::None),
            Instruction::SkipRegistersNotEqual(operands) => {
                (self.skip_registers_not_equal(operands), Operation::None)
            }
            Instruction::SetIndex(address) => (self.set_index(address), Operation::None),
            Instruction::JumpOffset(address) => (self.jump_offset(address), Operation::None),
            Instruction::Random(operands) => (self.random(operands), Operation::None),
            Instruction::Draw(sprite) => self.draw(sprite),
            Instruction::Key(operands) => (self.key(operands), Operation::None),
            Instruction::Misc(operands) => self.misc(operands),
        };

        self.step(step);
        Ok(operation)
    }

    /// - `00E0` - Display  - `disp_clear()`        - Clears the screen.
    /// - `00EE` - Flow     - `return;`             - Returns from a subroutine.
    ///
    /// Returns a stack error if there is no subroutine to return from.
    fn system(&mut self, op: SystemOp) -> Result<(ProgramCounterStep, Operation), ProcessError>;

    /// - `1NNN` - Flow     - `goto NNN;`           - Jumps to address `NNN`.
    fn jump(&self, address: Address) -> ProgramCounterStep;

    /// - `2NNN` - Flow     - `*(0xNNN)()`          - Calls subroutine at `NNN`.
    ///
    /// Returns a stack error if the nesting is too deep.
    fn call(&mut self, address: Address) -> Result<ProgramCounterStep, ProcessError>;

    /// - `3XNN` - Cond     - `if(Vx==NN)`          - Skips the next instruction if `VX` equals `NN`.
    fn skip_equal(&self, operands: RegisterConst) -> ProgramCounterStep;

    /// - `4XNN` - Cond     - `if(Vx!=NN)`          - Skips the next instruction if `VX` doesn't equal `NN`.
    fn skip_not_equal(&self, operands: RegisterConst) -> ProgramCounterStep;

    /// - `5XY0` - Cond     - `if(Vx==Vy)`          - Skips the next instruction if `VX` equals `VY`.
    fn skip_registers_equal(&self, operands: RegisterPair) -> ProgramCounterStep;

    /// - `6XNN` - Const    - `Vx = NN`             - Sets `VX` to `NN`.
    fn set(&mut self, operands: RegisterConst) -> ProgramCounterStep;

    /// - `7XNN` - Const    - `Vx += NN`            - Adds `NN` to `VX`. (Carry flag is not changed)
    fn add(&mut self, operands: RegisterConst) -> ProgramCounterStep;

    /// - `8XY0` - Assign   - `Vx=Vy`               - Sets `VX` to the value of `VY`.
    /// - `8XY1` - BitOp    - `Vx=Vx|Vy`            - Sets `VX` to `VX` or `VY`.
    /// - `8XY2` - BitOp    - `Vx=Vx&Vy`            - Sets `VX` to `VX` and `VY`.
    /// - `8XY3` - BitOp    - `Vx=Vx^Vy`            - Sets `VX` to `VX` xor `VY`.
    /// - `8XY4` - Math     - `Vx += Vy`            - Adds `VY` to `VX`. `VF` is set to `1` when there's a carry, and to `0` when there isn't.
    /// - `8XY5` - Math     - `Vx -= Vy`            - `VY` is subtracted from `VX`. `VF` is set to `0` when there's a borrow, and `1` when there isn't.
    /// - `8XY6` - BitOp    - `Vx>>=1`              - Stores the least significant bit of `VX` in `VF` and then shifts `VX` to the right by `1`.
    /// - `8XY7` - Math     - `Vx=Vy-Vx`            - Sets `VX` to `VY` minus `VX`. `VF` is set to `0` when there's a borrow, and `1` when there isn't.
    /// - `8XYE` - BitOp    - `Vx<<=1`              - Stores the most significant bit of `VX` in `VF` and then shifts `VX` to the left by `1`.
    fn alu(&mut self, operands: Alu) -> ProgramCounterStep;

    /// - `9XY0` - Cond     - `if(Vx!=Vy)`          - Skips the next instruction if `VX` doesn't equal `VY`.
    fn skip_registers_not_equal(&self, operands: RegisterPair) -> ProgramCounterStep;

    /// - `ANNN` - MEM      - `I = NNN`             - Sets `I` to the address `NNN`.
    fn set_index(&mut self, address: Address) -> ProgramCounterStep;

    /// - `BNNN` - Flow     - `PC=V0+NNN`           - Jumps to the address `NNN` plus `V0`.
    fn jump_offset(&self, address: Address) -> ProgramCounterStep;

    /// - `CXNN` - Rand     - `Vx=rand()&NN`        - Sets `VX` to a random byte masked with `NN`.
    fn random(&mut self, operands: RegisterConst) -> ProgramCounterStep;

    /// - `DXYN` - Disp     - `draw(Vx,Vy,N)`       - Draws a sprite at coordinate `(VX, VY)` that has a width of `8` pixels and a height of `N` pixels. Each row is read starting from memory location `I`; `VF` is set to `1` if any screen pixels are flipped from set to unset, and to `0` if that doesn't happen.
    fn draw(&mut self, sprite: Sprite) -> (ProgramCounterStep, Operation);

    /// - `EX9E` - KeyOp    - `if(key()==Vx)`       - Skips the next instruction if the key stored in `VX` is pressed.
    /// - `EXA1` - KeyOp    - `if(key()!=Vx)`       - Skips the next instruction if the key stored in `VX` isn't pressed.
    fn key(&self, operands: KeySkip) -> ProgramCounterStep;

    /// - `FX07` - Timer    - `Vx = get_delay()`    - Sets `VX` to the value of the delay timer.
    /// - `FX0A` - KeyOp    - `Vx = get_key()`      - A key press is awaited, and then stored in `VX`.
    /// - `FX15` - Timer    - `delay_timer(Vx)`     - Sets the delay timer to `VX`.
    /// - `FX18` - Sound    - `sound_timer(Vx)`     - Sets the sound timer to `VX`.
    /// - `FX1E` - MEM      - `I +=Vx`              - Adds `VX` to `I`. `VF` is not affected.
    /// - `FX29` - MEM      - `I=sprite_addr[Vx]`   - Sets `I` to the location of the font glyph for the character in `VX`.
    /// - `FX33` - BCD      - `set_BCD(Vx)`         - Stores the decimal digits of `VX` at `I`, `I+1` and `I+2`.
    /// - `FX55` - MEM      - `reg_dump(Vx,&I)`     - Stores `V0` to `VX` (including `VX`) in memory starting at address `I`. `I` is left unmodified.
    /// - `FX65` - MEM      - `reg_load(Vx,&I)`     - Fills `V0` to `VX` (including `VX`) with values from memory starting at address `I`. `I` is left unmodified.
    fn misc(&mut self, operands: Misc) -> (ProgramCounterStep, Operation);
}
