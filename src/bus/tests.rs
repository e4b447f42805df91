use super::*;
use crate::cartridge::Cartridge;
use crate::test_utils::{build_ines, bus_with_program};

fn bus_with_flags6(flags6: u8, chr_8k: usize) -> Bus {
    let rom = build_ines(1, chr_8k, flags6, 0, 1, None);
    Bus::with_cartridge(Cartridge::from_ines_bytes(&rom).expect("parse"))
}

fn set_ppu_addr(bus: &mut Bus, addr: u16) {
    let _ = bus.read(0x2002);
    bus.write(0x2006, (addr >> 8) as u8);
    bus.write(0x2006, addr as u8);
}

#[test]
fn ram_mirroring() {
    let mut bus = Bus::new();
    bus.write(0x0001, 0xAA);
    assert_eq!(bus.read(0x0001), 0xAA);
    assert_eq!(bus.read(0x0801), 0xAA);
    assert_eq!(bus.read(0x1801), 0xAA);
}

#[test]
fn ppu_reg_mirror() {
    let mut bus = Bus::new();
    bus.write(0x2008, 0x80);
    assert_eq!(bus.ppu.ctrl(), 0x80);
    bus.write(0x3FFB, 0x10);
    bus.write(0x3FFC, 0x77);
    assert_eq!(bus.ppu.peek_oam(0x10), 0x77);
}

#[test]
fn io_stub_reads_zero() {
    let mut bus = Bus::new();
    bus.write(0x4000, 0xFF);
    bus.write(0x401F, 0xFF);
    assert_eq!(bus.read(0x4000), 0);
    assert_eq!(bus.read(0x4016), 0);
    assert_eq!(bus.read(0x401F), 0);
}

#[test]
fn empty_cartridge_slot_reads_zero() {
    let mut bus = Bus::new();
    bus.write(0x8000, 0x12);
    assert_eq!(bus.read(0x8000), 0);
    assert_eq!(bus.read(0xFFFC), 0);
    assert_eq!(bus.read_word(0xFFFC), 0);
}

#[test]
fn prg_rom_mirrored_and_read_only() {
    let mut bus = bus_with_program(&[0xA9, 0x42], (0x8000, 0x8000, 0x8000));
    assert_eq!(bus.read(0x8000), 0xA9);
    assert_eq!(bus.read(0xC001), 0x42);
    bus.write(0x8000, 0x00);
    assert_eq!(bus.read(0x8000), 0xA9);
    assert_eq!(bus.read_word(0xFFFC), 0x8000);
}

#[test]
fn prg_ram_basic() {
    let mut bus = bus_with_flags6(0, 1);
    bus.write(0x6000, 0x42);
    bus.write(0x7FFF, 0x24);
    assert_eq!(bus.read(0x6000), 0x42);
    assert_eq!(bus.read(0x7FFF), 0x24);
    assert_eq!(bus.read(0x5000), 0);
}

#[test]
fn peek_has_no_side_effects() {
    let mut bus = bus_with_program(&[0xEA], (0x8000, 0x8000, 0x8000));
    bus.write(0x0010, 0x99);
    assert_eq!(bus.peek(0x0810), 0x99);
    assert_eq!(bus.peek(0x8000), 0xEA);

    set_ppu_addr(&mut bus, 0x2000);
    assert_eq!(bus.peek(0x2007), 0);
    assert_eq!(bus.ppu.vram_addr(), 0x2000);
}

#[test]
fn nametable_horizontal_mirroring() {
    let mut bus = bus_with_flags6(0b0000_0000, 1);

    set_ppu_addr(&mut bus, 0x2000);
    bus.write(0x2007, 0x55);

    set_ppu_addr(&mut bus, 0x2400);
    let _ = bus.read(0x2007); // buffered
    assert_eq!(bus.read(0x2007), 0x55);
}

#[test]
fn nametable_vertical_mirroring() {
    let mut bus = bus_with_flags6(0b0000_0001, 1);

    set_ppu_addr(&mut bus, 0x2000);
    bus.write(0x2007, 0x66);

    set_ppu_addr(&mut bus, 0x2800);
    let _ = bus.read(0x2007);
    assert_eq!(bus.read(0x2007), 0x66);
    assert_eq!(bus.ppu_read(0x2400), 0x00);
}

#[test]
fn nametable_upper_window_mirrors() {
    let mut bus = bus_with_flags6(0b0000_0001, 1);
    bus.ppu_write(0x3005, 0x3C);
    assert_eq!(bus.ppu_read(0x2005), 0x3C);
}

#[test]
fn palette_mirroring_3f10_mirrors_3f00() {
    let mut bus = Bus::new();

    set_ppu_addr(&mut bus, 0x3F00);
    bus.write(0x2007, 0x12);

    // palette reads are not delayed
    set_ppu_addr(&mut bus, 0x3F10);
    assert_eq!(bus.read(0x2007), 0x12);
}

#[test]
fn ppudata_buffered_read_and_increment_via_bus() {
    let mut bus = bus_with_flags6(0, 0);
    bus.write(0x2000, 0x00);

    set_ppu_addr(&mut bus, 0x0000);
    bus.write(0x2007, 0x11);
    bus.write(0x2007, 0x22);

    set_ppu_addr(&mut bus, 0x0000);
    assert_eq!(bus.read(0x2007), 0x00);
    assert_eq!(bus.read(0x2007), 0x11);
    assert_eq!(bus.read(0x2007), 0x22);
}

#[test]
fn ppudata_increment_32() {
    let mut bus = Bus::new();
    bus.write(0x2000, 0x04);
    set_ppu_addr(&mut bus, 0x2000);
    bus.write(0x2007, 0xAA);
    bus.write(0x2007, 0xBB);
    assert_eq!(bus.ppu.vram_addr(), 0x2040);
    assert_eq!(bus.ppu_read(0x2020), 0xBB);
}

#[test]
fn chr_rom_rejects_ppudata_writes() {
    let mut bus = bus_with_flags6(0, 1);
    set_ppu_addr(&mut bus, 0x0000);
    bus.write(0x2007, 0x01);
    assert_eq!(bus.ppu_read(0x0000), 0xCC);
}

#[test]
fn interrupt_lines_latch_until_taken() {
    let mut bus = Bus::new();
    assert!(!bus.take_nmi());
    bus.request_nmi();
    bus.request_irq();
    assert!(bus.nmi_pending());
    assert!(bus.take_nmi());
    assert!(!bus.take_nmi());
    assert!(bus.take_irq());
    assert!(!bus.irq_pending());
}

#[test]
fn reset_drops_pending_requests_keeps_ram() {
    let mut bus = Bus::new();
    bus.write(0x0000, 0x5A);
    bus.request_nmi();
    bus.reset();
    assert!(!bus.nmi_pending());
    assert_eq!(bus.read(0x0000), 0x5A);
}
