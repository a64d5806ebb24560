use {
    super::ChipSet,
    crate::{
        definitions::{cpu, display},
        opcode::{
            Address, Alu, AluOp, ChipOpcodes, KeyOp, KeySkip, Misc, MiscOp, Operation,
            ProgramCounterStep, RegisterConst, RegisterPair, Sprite, SystemOp,
        },
        ProcessError,
    },
    rand::Rng,
    tinyvec::ArrayVec,
};

impl ChipOpcodes for ChipSet {
    fn system(&mut self, op: SystemOp) -> Result<(ProgramCounterStep, Operation), ProcessError> {
        match op {
            SystemOp::Clear => {
                self.display.clear();
                Ok((ProgramCounterStep::Next, Operation::Draw))
            }
            SystemOp::Return => {
                let pc = self.pop_stack()?;
                log::debug!("return to {:#06X}", pc);
                Ok((ProgramCounterStep::Jump(pc), Operation::None))
            }
        }
    }

    fn jump(&self, address: Address) -> ProgramCounterStep {
        ProgramCounterStep::Jump(address.nnn)
    }

    fn call(&mut self, address: Address) -> Result<ProgramCounterStep, ProcessError> {
        // the return address is the opcode after the call
        let next = ProgramCounterStep::Next.apply(self.program_counter);
        self.push_stack(next)?;
        log::debug!("call {:#06X}, depth {}", address.nnn, self.stack.len());
        Ok(ProgramCounterStep::Jump(address.nnn))
    }

    fn skip_equal(&self, RegisterConst { x, nn }: RegisterConst) -> ProgramCounterStep {
        ProgramCounterStep::cond(self.registers[x] == nn)
    }

    fn skip_not_equal(&self, RegisterConst { x, nn }: RegisterConst) -> ProgramCounterStep {
        ProgramCounterStep::cond(self.registers[x] != nn)
    }

    fn skip_registers_equal(&self, RegisterPair { x, y }: RegisterPair) -> ProgramCounterStep {
        ProgramCounterStep::cond(self.registers[x] == self.registers[y])
    }

    fn set(&mut self, RegisterConst { x, nn }: RegisterConst) -> ProgramCounterStep {
        self.registers[x] = nn;
        ProgramCounterStep::Next
    }

    fn add(&mut self, RegisterConst { x, nn }: RegisterConst) -> ProgramCounterStep {
        // let VX overflow, but ignore carry
        self.registers[x] = self.registers[x].wrapping_add(nn);
        ProgramCounterStep::Next
    }

    fn alu(&mut self, Alu { op, x, y }: Alu) -> ProgramCounterStep {
        let vx = self.registers[x];
        let vy = self.registers[y];

        let (res, flag) = match op {
            AluOp::Assign => (vy, None),
            AluOp::Or => (vx | vy, None),
            AluOp::And => (vx & vy, None),
            AluOp::Xor => (vx ^ vy, None),
            AluOp::Add => {
                let (res, carry) = vx.overflowing_add(vy);
                (res, Some(carry as u8))
            }
            AluOp::Sub => {
                let (res, borrow) = vx.overflowing_sub(vy);
                (res, Some(!borrow as u8))
            }
            AluOp::ShiftRight => (vx >> 1, Some(vx & 0x1)),
            AluOp::SubReverse => {
                let (res, borrow) = vy.overflowing_sub(vx);
                (res, Some(!borrow as u8))
            }
            AluOp::ShiftLeft => (vx << 1, Some((vx >> 7) & 0x1)),
        };

        self.registers[x] = res;
        // written last, so the flag wins if VF was the target
        if let Some(flag) = flag {
            self.registers[cpu::register::LAST] = flag;
        }
        ProgramCounterStep::Next
    }

    fn skip_registers_not_equal(&self, RegisterPair { x, y }: RegisterPair) -> ProgramCounterStep {
        ProgramCounterStep::cond(self.registers[x] != self.registers[y])
    }

    fn set_index(&mut self, address: Address) -> ProgramCounterStep {
        self.index_register = address.nnn;
        ProgramCounterStep::Next
    }

    fn jump_offset(&self, address: Address) -> ProgramCounterStep {
        let v0 = self.registers[0] as u16;
        ProgramCounterStep::Jump(address.nnn.wrapping_add(v0))
    }

    fn random(&mut self, RegisterConst { x, nn }: RegisterConst) -> ProgramCounterStep {
        let rand: u8 = self.rng.gen();
        self.registers[x] = rand & nn;
        ProgramCounterStep::Next
    }

    fn draw(&mut self, Sprite { x, y, n }: Sprite) -> (ProgramCounterStep, Operation) {
        // see https://tobiasvl.github.io/blog/write-a-chip-8-emulator/
        let rows: ArrayVec<[u8; 16]> = (0..n as usize)
            .map(|row| self.memory[self.address(row)])
            .collect();

        let coorx = self.registers[x] as usize;
        let coory = self.registers[y] as usize;
        let collision = self.display.draw_sprite(coorx, coory, &rows);

        self.registers[cpu::register::LAST] = collision as u8;
        (ProgramCounterStep::Next, Operation::Draw)
    }

    fn key(&self, KeySkip { op, x }: KeySkip) -> ProgramCounterStep {
        let pressed = self.keyboard.is_pressed(self.registers[x] as usize);
        match op {
            KeyOp::Pressed => ProgramCounterStep::cond(pressed),
            KeyOp::NotPressed => ProgramCounterStep::cond(!pressed),
        }
    }

    fn misc(&mut self, Misc { op, x }: Misc) -> (ProgramCounterStep, Operation) {
        let vx = self.registers[x];
        match op {
            MiscOp::GetDelayTimer => {
                self.registers[x] = self.delay_timer.get_value();
            }
            MiscOp::AwaitKeyPress => {
                // an unused press only counts while its key is still down
                let held = self
                    .keyboard
                    .take_last()
                    .filter(|key| self.keyboard.is_pressed(*key));
                match held {
                    Some(key) => {
                        log::debug!("key {:#X} already pressed, stored in V{:X}", key, x);
                        self.registers[x] = key as u8;
                    }
                    None => {
                        self.awaiting_key = Some(x);
                        log::debug!("waiting for a key press into V{:X}", x);
                        // the counter moves once the key arrived
                        return (ProgramCounterStep::None, Operation::Wait);
                    }
                }
            }
            MiscOp::SetDelayTimer => {
                self.delay_timer.set_value(vx);
            }
            MiscOp::SetSoundTimer => {
                self.sound_timer.set_value(vx);
            }
            MiscOp::AddVxToI => {
                // VF is not affected
                self.index_register = self.index_register.wrapping_add(vx as u16);
            }
            MiscOp::SetIToSprite => {
                let glyph = display::fontset::LOCATION + display::fontset::GLYPH_SIZE * vx as usize;
                self.index_register = glyph as u16;
            }
            MiscOp::StoreBcd => {
                let digits = [vx / 100, vx / 10 % 10, vx % 10];
                for (offset, digit) in digits.iter().enumerate() {
                    let address = self.address(offset);
                    self.memory[address] = *digit;
                }
            }
            MiscOp::StoreV0ToVx => {
                for offset in 0..=x {
                    let address = self.address(offset);
                    self.memory[address] = self.registers[offset];
                }
            }
            MiscOp::FillV0ToVx => {
                for offset in 0..=x {
                    self.registers[offset] = self.memory[self.address(offset)];
                }
            }
        }
        (ProgramCounterStep::Next, Operation::None)
    }
}
