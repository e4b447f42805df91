use std::env;
use std::error::Error;

use famicore::cpu::{disassemble, CARRY, DECIMAL, IRQ_DISABLE, NEGATIVE, OVERFLOW, ZERO};
use famicore::{Cartridge, CartridgeHeader, Mirroring, Nes};

const DEFAULT_FRAMES: u32 = 1;

/// Demo program at $8000: accumulate into $0200 while X counts up, then
/// park in a vblank-driven loop that bumps $0201 from the NMI handler.
fn build_demo_cartridge() -> Result<Cartridge, Box<dyn Error>> {
    let mut cart = Cartridge::new(CartridgeHeader {
        prg_units: 1,
        chr_units: 1,
        mapper_id: 0,
        mirroring: Mirroring::Horizontal,
    })?;

    let program: &[u8] = &[
        0xA9, 0x10, // LDA #$10
        0x69, 0x05, // ADC #$05 => A = 0x15
        0x8D, 0x00, 0x02, // STA $0200
        0xE8, // INX
        0xD0, 0xFD, // BNE -3 -> loop until X wraps to 0
        0xA9, 0x80, // LDA #$80
        0x8D, 0x00, 0x20, // STA $2000 (NMI on vblank)
        0x4C, 0x0F, 0x80, // JMP $800F
    ];
    let nmi: &[u8] = &[
        0xEE, 0x01, 0x02, // INC $0201
        0x40, // RTI
    ];

    let prg = cart.prg_rom_mut();
    prg[..program.len()].copy_from_slice(program);
    prg[0x0100..0x0100 + nmi.len()].copy_from_slice(nmi);
    // NMI -> $8100, RESET -> $8000, IRQ -> $8000
    prg[0x3FFA..0x4000].copy_from_slice(&[0x00, 0x81, 0x00, 0x80, 0x00, 0x80]);
    Ok(cart)
}

fn flag_string(p: u8) -> String {
    [(NEGATIVE, 'N'), (OVERFLOW, 'V'), (DECIMAL, 'D'), (IRQ_DISABLE, 'I'), (ZERO, 'Z'), (CARRY, 'C')]
        .iter()
        .map(|&(mask, c)| if p & mask != 0 { c } else { '-' })
        .collect()
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let cart = match args.next() {
        Some(path) => Cartridge::from_ines_file(&path)?,
        None => build_demo_cartridge()?,
    };
    let frames = match args.next() {
        Some(n) => n.parse::<u32>()?,
        None => DEFAULT_FRAMES,
    };

    let mut nes = Nes::with_cartridge(cart);
    for _ in 0..frames {
        nes.run_frame();
    }

    let cpu = nes.cpu();
    let bus = nes.bus();
    let (next, _) = disassemble(cpu.pc(), |a| bus.peek(a));
    println!("frames:      {frames}");
    println!("cpu cycles:  {}", cpu.total_cycles());
    println!("A: 0x{:02X}  X: 0x{:02X}  Y: 0x{:02X}", cpu.a(), cpu.x(), cpu.y());
    println!("SP: 0x{:02X}  PC: 0x{:04X}  next: {next}", cpu.sp(), cpu.pc());
    println!("P: 0x{:02X} [{}]", cpu.status(), flag_string(cpu.status()));
    println!("mem[0x0200]: 0x{:02X}", bus.peek(0x0200));
    println!("mem[0x0201]: 0x{:02X}", bus.peek(0x0201));
    Ok(())
}
