//! End-to-end checks through the public `Nes` / `Cartridge` API.

use famicore::{Cartridge, CartridgeError, Mirroring, Nes};

/// iNES image: one 16 KiB PRG unit holding `program` at $8000, 8 KiB CHR ROM,
/// vertical mirroring.
fn ines_image(program: &[u8], nmi: u16) -> Vec<u8> {
    let mut rom = Vec::with_capacity(16 + 0x4000 + 0x2000);
    rom.extend_from_slice(b"NES\x1A");
    rom.extend_from_slice(&[1, 1, 0b0000_0001, 0, 0, 0, 0, 0, 0, 0, 0, 0]);

    let mut prg = vec![0xEA; 0x4000];
    prg[..program.len()].copy_from_slice(program);
    prg[0x3FFA..0x4000].copy_from_slice(&[nmi as u8, (nmi >> 8) as u8, 0x00, 0x80, 0x00, 0x80]);
    rom.extend_from_slice(&prg);
    rom.extend((0..0x2000).map(|i| i as u8));
    rom
}

#[test]
fn loads_and_runs_an_ines_image() {
    // LDX #$00; loop: INX; STX $10; CPX #$05; BNE loop; halt: JMP halt
    let program = [
        0xA2, 0x00, 0xE8, 0x86, 0x10, 0xE0, 0x05, 0xD0, 0xF9, 0x4C, 0x09, 0x80,
    ];
    let cart = Cartridge::from_ines_bytes(&ines_image(&program, 0x8000)).expect("parse");
    assert_eq!(cart.mirroring(), Mirroring::Vertical);
    assert_eq!(cart.mapper_id(), 0);

    let mut nes = Nes::with_cartridge(cart);
    nes.run_frame();
    assert_eq!(nes.bus().peek(0x0010), 5);
    assert_eq!(nes.cpu().pc(), 0x8009);
}

#[test]
fn vblank_nmi_counts_frames() {
    // LDA #$80; STA $2000; halt: JMP halt ; nmi at $8100: INC $20; RTI
    let mut program = vec![0xA9, 0x80, 0x8D, 0x00, 0x20, 0x4C, 0x05, 0x80];
    program.resize(0x100, 0xEA);
    program.extend_from_slice(&[0xE6, 0x20, 0x40]);
    let cart = Cartridge::from_ines_bytes(&ines_image(&program, 0x8100)).expect("parse");

    let mut nes = Nes::with_cartridge(cart);
    for _ in 0..3 {
        nes.run_frame();
    }
    assert_eq!(nes.bus().peek(0x0020), 3);
}

#[test]
fn chr_is_visible_through_ppudata() {
    // set PPUADDR = $0005, dummy read, read into $30
    let program = [
        0xA9, 0x00, 0x8D, 0x06, 0x20, // LDA #$00; STA $2006
        0xA9, 0x05, 0x8D, 0x06, 0x20, // LDA #$05; STA $2006
        0xAD, 0x07, 0x20, // LDA $2007 (buffer fill)
        0xAD, 0x07, 0x20, // LDA $2007
        0x85, 0x30, // STA $30
        0x4C, 0x12, 0x80, // halt
    ];
    let cart = Cartridge::from_ines_bytes(&ines_image(&program, 0x8000)).expect("parse");
    let mut nes = Nes::with_cartridge(cart);
    nes.run_frame();
    assert_eq!(nes.bus().peek(0x0030), 0x05);
}

#[test]
fn unsupported_mapper_is_a_load_error() {
    let mut rom = ines_image(&[], 0x8000);
    rom[6] |= 0x40; // mapper 4
    match Cartridge::from_ines_bytes(&rom) {
        Err(CartridgeError::UnsupportedMapper(4)) => {}
        other => panic!("expected UnsupportedMapper(4), got {other:?}"),
    }
}
