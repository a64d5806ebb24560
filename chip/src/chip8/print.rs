//! The pretty print implementation of the [`ChipSet`](super::ChipSet).
//! This implementation was split up into this file for smaller file sizes and higher
//! cohesion.

use {
    super::ChipSet,
    crate::{definitions::cpu, opcode::Opcode},
    once_cell::sync::Lazy,
    std::fmt::{self, Write},
};

/// The amount of values printed per row.
const HEX_PRINT_STEP: usize = 8;

/// The amount of bytes a memory row spans, as one opcode is two bytes.
const MEMORY_ROW_SIZE: usize = HEX_PRINT_STEP * 2;

/// The values that are used when there are at lease two rows of zeros.
const FILLER_BASE: &str = "...";

/// The width of a formatted integer, `0x` plus four digits.
const INTEGER_LEN: usize = 6;

/// Prepares the line that will be used, in the case that there is at least one row of
/// only zeros.
static ZERO_FILLER: Lazy<String> = Lazy::new(|| {
    let zero = format!("{:#06X}", 0);
    let length = INTEGER_LEN * (HEX_PRINT_STEP - 2) + (HEX_PRINT_STEP - 1) - FILLER_BASE.len();
    let filler = " ".repeat(length / 2);
    format!("{}{}{}{}{}", zero, filler, FILLER_BASE, filler, zero)
});

/// will format the pointers according to definition
fn pointer(line: &mut String, from: usize, to: usize) -> fmt::Result {
    write!(line, "{:#06X} - {:#06X} :", from, to)
}

/// will pretty print the content of the raw memory, runs of rows that only
/// contain zeros are collapsed into a single row
fn memory_rows(memory: &[u8]) -> Result<Vec<String>, fmt::Error> {
    let mut rows: Vec<(usize, usize, Option<[Opcode; HEX_PRINT_STEP]>)> =
        Vec::with_capacity(memory.len() / MEMORY_ROW_SIZE);

    for (index, chunk) in memory.chunks(MEMORY_ROW_SIZE).enumerate() {
        let from = index * MEMORY_ROW_SIZE;
        let to = from + chunk.len() - 1;

        let mut data = [0; HEX_PRINT_STEP];
        for (entry, pair) in data.iter_mut().zip(chunk.chunks(2)) {
            *entry = Opcode::from_be_bytes([pair[0], pair.get(1).copied().unwrap_or(0)]);
        }

        if data.iter().any(|entry| *entry != 0) {
            rows.push((from, to, Some(data)));
            continue;
        }

        match rows.last_mut() {
            Some((_, last_to, None)) => *last_to = to,
            _ => rows.push((from, to, None)),
        }
    }

    rows.into_iter()
        .map(|(from, to, data)| {
            let mut line = String::new();
            pointer(&mut line, from, to)?;
            line.push(' ');
            match data {
                Some(data) => line.push_str(&integers(&data)?),
                None => line.push_str(&ZERO_FILLER),
            }
            Ok(line)
        })
        .collect()
}

fn integers<T: fmt::UpperHex>(data: &[T]) -> Result<String, fmt::Error> {
    let mut line = String::with_capacity(data.len() * (INTEGER_LEN + 1));
    for entry in data {
        write!(line, "{:#06X} ", entry)?;
    }
    line.truncate(line.trim_end().len());
    Ok(line)
}

/// will pretty print all the integer data given
fn integer_rows<T: fmt::UpperHex>(data: &[T]) -> Result<Vec<String>, fmt::Error> {
    data.chunks(HEX_PRINT_STEP)
        .enumerate()
        .map(|(index, chunk)| {
            let from = index * HEX_PRINT_STEP;
            let mut line = String::new();
            pointer(&mut line, from, from + chunk.len() - 1)?;
            line.push(' ');
            line.push_str(&integers(chunk)?);
            Ok(line)
        })
        .collect()
}

/// will pretty print all the boolean data given, padded to the integer width
fn bool_rows(data: &[bool]) -> Result<Vec<String>, fmt::Error> {
    data.chunks(HEX_PRINT_STEP)
        .enumerate()
        .map(|(index, chunk)| {
            let from = index * HEX_PRINT_STEP;
            let mut line = String::new();
            pointer(&mut line, from, from + chunk.len() - 1)?;
            for value in chunk {
                write!(line, " {:<width$}", value, width = INTEGER_LEN)?;
            }
            line.truncate(line.trim_end().len());
            Ok(line)
        })
        .collect()
}

fn section(f: &mut fmt::Formatter<'_>, title: &str, rows: &[String]) -> fmt::Result {
    writeln!(f, "\t{} :", title)?;
    for row in rows {
        writeln!(f, "\t\t{}", row)?;
    }
    Ok(())
}

impl fmt::Display for ChipSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // the stack is filled up to its full size
        let mut stack = [0; cpu::stack::SIZE];
        stack[..self.stack.len()].copy_from_slice(&self.stack);

        writeln!(f, "Chipset {{")?;
        section(f, "Program Name", &[self.name.clone()])?;
        section(f, "Opcode", &[format!("{:#06X}", self.opcode)])?;
        section(f, "Program Counter", &[format!("{:#06X}", self.program_counter)])?;
        section(f, "Index Register", &[format!("{:#06X}", self.index_register)])?;
        section(f, "Delay Timer", &[format!("{:#06X}", self.delay_timer.get_value())])?;
        section(f, "Sound Timer", &[format!("{:#06X}", self.sound_timer.get_value())])?;
        section(f, "Memory", &memory_rows(&self.memory)?)?;
        section(f, "Keyboard", &bool_rows(self.keyboard.get_keys())?)?;
        section(f, "Stack", &integer_rows(&stack)?)?;
        section(f, "Register", &integer_rows(&self.registers)?)?;
        write!(f, "}}")
    }
}
