/*!
Nes: the system aggregate that owns the CPU and the bus and drives them from a
single master clock.

Clocking:
- One `clock` call is one PPU dot.
- The CPU is clocked on every `CPU_DIVIDER`-th call (the first call included).
- A PPU NMI request raised during the call is latched onto the bus NMI line
  after the CPU has run, so the CPU sees it at its next instruction boundary.

Usage:
```rust
use famicore::Nes;

let mut nes = Nes::new();
nes.reset();
let ticks = nes.run_frame();
assert_eq!(ticks, 341 * 262);
```
*/

use crate::bus::Bus;
use crate::cartridge::Cartridge;
use crate::cpu::Cpu;

/// PPU dots per CPU cycle.
pub const CPU_DIVIDER: u64 = 3;

#[derive(Debug, Default)]
pub struct Nes {
    cpu: Cpu,
    bus: Bus,
    system_clock_counter: u64,
}

impl Nes {
    pub fn new() -> Self {
        Self::default()
    }

    /// System with `cart` inserted and reset applied.
    pub fn with_cartridge(cart: Cartridge) -> Self {
        let mut nes = Self::new();
        nes.insert_cartridge(cart);
        nes.reset();
        nes
    }

    /// Insert (or replace) the cartridge. Call `reset` afterwards to start it.
    pub fn insert_cartridge(&mut self, cart: Cartridge) {
        self.bus.insert_cartridge(cart);
    }

    /// Reset the bus devices, then the CPU (which reads the reset vector).
    pub fn reset(&mut self) {
        self.bus.reset();
        self.cpu.reset(&mut self.bus);
        self.system_clock_counter = 0;
    }

    /// Advance one PPU dot.
    pub fn clock(&mut self) {
        self.bus.ppu.clock();
        if self.system_clock_counter % CPU_DIVIDER == 0 {
            self.cpu.clock(&mut self.bus);
        }
        if self.bus.ppu.take_nmi_request() {
            self.bus.request_nmi();
        }
        self.system_clock_counter += 1;
    }

    /// Clock until the PPU completes a frame. Returns the dots consumed.
    pub fn run_frame(&mut self) -> u64 {
        let start = self.system_clock_counter;
        loop {
            self.clock();
            if self.bus.ppu.take_frame_complete() {
                return self.system_clock_counter - start;
            }
        }
    }

    /// Clock until the CPU finishes its current instruction (or, if idle,
    /// one full instruction). Returns the dots consumed.
    pub fn step_instruction(&mut self) -> u64 {
        let start = self.system_clock_counter;
        // get onto a CPU tick that starts work
        while self.cpu.is_idle() {
            self.clock();
        }
        while !self.cpu.is_idle() {
            self.clock();
        }
        self.system_clock_counter - start
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    /// PPU dots since the last reset.
    pub fn system_clock_counter(&self) -> u64 {
        self.system_clock_counter
    }
}
