/*!
core::Cpu - The 6502 façade and its cycle-countdown state machine.

States
======
- Idle      : `cycles == 0`, the next tick fetches.
- Executing : `cycles > 0`, ticks only count down.

On a tick that starts Idle the CPU first samples the bus interrupt lines
(NMI before IRQ; both are cleared when sampled), then, if no interrupt
sequence was entered, runs fetch -> decode -> resolve -> execute and loads
the countdown with the base cost plus any earned extra cycles. Every tick,
including that one, then consumes one cycle. Interrupts raised while an
instruction is in flight therefore wait for its last cycle.

`reset` preloads the countdown with the reset latency; the first ticks after
it only drain that latency.

Usage:
```rust
use famicore::{Bus, Cpu};

let mut bus = Bus::new();
let mut cpu = Cpu::new();
cpu.reset(&mut bus);
cpu.step(&mut bus); // drains the reset latency
cpu.step(&mut bus); // first instruction
```
*/

use crate::bus::Bus;
use crate::cpu::addressing::{OperandContext, resolve};
use crate::cpu::cycles::{IRQ_CYCLES, IRQ_VECTOR, NMI_CYCLES, NMI_VECTOR, RESET_CYCLES, RESET_VECTOR};
use crate::cpu::dispatch::execute;
use crate::cpu::execute::enter_interrupt;
use crate::cpu::state::{CpuState, IRQ_DISABLE};
use crate::cpu::table::lookup;

#[derive(Debug, Clone, Default)]
pub struct Cpu {
    pub(crate) state: CpuState,
    pub(crate) ctx: OperandContext,
    cycles: u8,
    total_cycles: u64,
}

impl Cpu {
    /// Construct a CPU with power-up register values and an idle countdown.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CpuState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut CpuState {
        &mut self.state
    }

    /// Cycles left in the instruction (or interrupt/reset sequence) in flight.
    pub fn cycles_remaining(&self) -> u8 {
        self.cycles
    }

    /// Ticks consumed since construction.
    pub fn total_cycles(&self) -> u64 {
        self.total_cycles
    }

    /// True when the next tick will fetch (or take an interrupt).
    pub fn is_idle(&self) -> bool {
        self.cycles == 0
    }

    // ---------------------------------------------------------------------
    // External events
    // ---------------------------------------------------------------------

    /// Reset: zero A/X/Y, S = $FD, P = Unused only, PC from $FFFC/$FFFD.
    /// Prior register state is ignored.
    pub fn reset(&mut self, bus: &mut Bus) {
        self.state = CpuState::new();
        self.state.pc = bus.read_word(RESET_VECTOR);
        self.ctx = OperandContext::default();
        self.cycles = RESET_CYCLES;
        log::debug!("cpu reset, pc={:04X}", self.state.pc);
    }

    /// Maskable interrupt entry. No-op while Interrupt-Disable is set.
    pub fn irq(&mut self, bus: &mut Bus) {
        if self.state.is_flag_set(IRQ_DISABLE) {
            log::debug!("irq dropped, I set (pc={:04X})", self.state.pc);
            return;
        }
        log::debug!("irq entry from pc={:04X}", self.state.pc);
        enter_interrupt(self, bus, IRQ_VECTOR, false);
        self.cycles = IRQ_CYCLES;
    }

    /// Non-maskable interrupt entry.
    pub fn nmi(&mut self, bus: &mut Bus) {
        log::debug!("nmi entry from pc={:04X}", self.state.pc);
        enter_interrupt(self, bus, NMI_VECTOR, false);
        self.cycles = NMI_CYCLES;
    }

    // ---------------------------------------------------------------------
    // Clocking
    // ---------------------------------------------------------------------

    /// Advance the CPU by one cycle.
    pub fn clock(&mut self, bus: &mut Bus) {
        if self.cycles == 0 {
            if bus.take_nmi() {
                self.nmi(bus);
            } else if bus.take_irq() {
                self.irq(bus);
            }
            if self.cycles == 0 {
                self.cycles = self.execute_next(bus);
            }
        }
        self.cycles = self.cycles.saturating_sub(1);
        self.total_cycles += 1;
    }

    /// Clock until the work in flight completes (or, when idle, until one
    /// instruction or interrupt sequence completes). Returns ticks consumed.
    pub fn step(&mut self, bus: &mut Bus) -> u32 {
        let mut ticks = 0;
        loop {
            self.clock(bus);
            ticks += 1;
            if self.cycles == 0 {
                return ticks;
            }
        }
    }

    /// Fetch, decode and execute one instruction; returns its full cost.
    fn execute_next(&mut self, bus: &mut Bus) -> u8 {
        self.ctx = OperandContext::default();
        let opcode = self.state.fetch_u8(bus);
        self.ctx.opcode = opcode;
        let ins = lookup(opcode);

        #[cfg(feature = "trace")]
        {
            let at = self.state.pc.wrapping_sub(1);
            let (text, _) = crate::cpu::disasm::disassemble(at, |a| bus.peek(a));
            log::trace!(
                target: "cpu",
                "{text:<16} A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X}",
                self.state.a,
                self.state.x,
                self.state.y,
                self.state.status,
                self.state.sp
            );
        }

        let crossed = resolve(ins.mode, self, bus);
        let eligible = execute(ins.operation, self, bus);
        ins.cycles + (crossed && eligible) as u8 + self.ctx.extra_cycles
    }

    // ---------------------------------------------------------------------
    // Register access
    // ---------------------------------------------------------------------
    pub fn a(&self) -> u8 {
        self.state.a
    }
    pub fn x(&self) -> u8 {
        self.state.x
    }
    pub fn y(&self) -> u8 {
        self.state.y
    }
    pub fn sp(&self) -> u8 {
        self.state.sp
    }
    pub fn pc(&self) -> u16 {
        self.state.pc
    }
    pub fn status(&self) -> u8 {
        self.state.status
    }

    pub fn set_a(&mut self, v: u8) {
        self.state.a = v;
    }
    pub fn set_x(&mut self, v: u8) {
        self.state.x = v;
    }
    pub fn set_y(&mut self, v: u8) {
        self.state.y = v;
    }
    pub fn set_sp(&mut self, v: u8) {
        self.state.sp = v;
    }
    pub fn set_pc(&mut self, v: u16) {
        self.state.pc = v;
    }
    pub fn set_status(&mut self, v: u8) {
        self.state.status = v;
    }

    pub fn get_flag(&self, mask: u8) -> bool {
        self.state.is_flag_set(mask)
    }

    pub fn set_flag(&mut self, mask: u8, on: bool) {
        self.state.assign_flag(mask, on);
    }
}
