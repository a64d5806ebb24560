use thiserror::Error;

use crate::opcode::Opcode;

/// Fatal conditions raised while running a cycle. Once one of these was
/// returned the chipset refuses to run until it is reset.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum ProcessError {
    #[error("Invalid stack state '{0}'.")]
    Stack(#[from] StackError),
    #[error("Pointer location invalid there can not be an opcode at {pointer:#06X}, if memory len is {len:#06X}")]
    AddressOutOfRange { pointer: usize, len: usize },
}

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum OpcodeError {
    #[error("An unsupported opcode was used {0:#06X?}.")]
    InvalidOpcode(Opcode),
}

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum StackError {
    #[error("Stack is full!")]
    Full,
    #[error("Stack is empty!")]
    Empty,
}

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum LoadError {
    #[error("The program is {size} bytes long, but only {max} bytes fit into memory.")]
    ProgramTooLarge { size: usize, max: usize },
}

#[derive(Error, Debug)]
pub enum RomError {
    #[error("Unable to read the rom archive '{0}'.")]
    Archive(#[from] zip::result::ZipError),
    #[error("Unable to read the rom '{0}'.")]
    Io(#[from] std::io::Error),
}
