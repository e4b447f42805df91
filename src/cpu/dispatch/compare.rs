/*!
compare.rs - CMP / CPX / CPY.

Flags only: C = register >= operand (unsigned), N and Z from the 8-bit
difference. The compared register is never written. CMP pays the indexed
page-cross cycle; CPX and CPY have no indexed forms.
*/

use crate::bus::Bus;
use crate::cpu::core::Cpu;
use crate::cpu::execute::{compare, fetch_operand};

pub(super) fn cmp(cpu: &mut Cpu, bus: &mut Bus) -> bool {
    let m = fetch_operand(cpu, bus);
    let a = cpu.state.a;
    compare(&mut cpu.state, a, m);
    true
}

pub(super) fn cpx(cpu: &mut Cpu, bus: &mut Bus) -> bool {
    let m = fetch_operand(cpu, bus);
    let x = cpu.state.x;
    compare(&mut cpu.state, x, m);
    false
}

pub(super) fn cpy(cpu: &mut Cpu, bus: &mut Bus) -> bool {
    let m = fetch_operand(cpu, bus);
    let y = cpu.state.y;
    compare(&mut cpu.state, y, m);
    false
}

#[cfg(test)]
mod tests {
    use crate::cpu::state::{CARRY, NEGATIVE, ZERO};
    use crate::test_utils::boot;

    #[test]
    fn cmp_equal_sets_zero_and_carry() {
        // LDA #$40; CMP #$40
        let (mut cpu, mut bus) = boot(&[0xA9, 0x40, 0xC9, 0x40]);
        cpu.step(&mut bus);
        assert_eq!(cpu.step(&mut bus), 2);
        assert!(cpu.get_flag(ZERO));
        assert!(cpu.get_flag(CARRY));
        assert_eq!(cpu.a(), 0x40);
    }

    #[test]
    fn cpx_less_than_clears_carry() {
        // LDX #$01; CPX #$02
        let (mut cpu, mut bus) = boot(&[0xA2, 0x01, 0xE0, 0x02]);
        cpu.step(&mut bus);
        cpu.step(&mut bus);
        assert!(!cpu.get_flag(CARRY));
        assert!(!cpu.get_flag(ZERO));
        assert!(cpu.get_flag(NEGATIVE));
        assert_eq!(cpu.x(), 0x01);
    }

    #[test]
    fn cpy_memory_greater_sets_carry() {
        // LDY #$90; CPY $10
        let (mut cpu, mut bus) = boot(&[0xA0, 0x90, 0xC4, 0x10]);
        bus.write(0x0010, 0x10);
        cpu.step(&mut bus);
        assert_eq!(cpu.step(&mut bus), 3);
        assert!(cpu.get_flag(CARRY));
        assert!(!cpu.get_flag(NEGATIVE));
        assert_eq!(cpu.y(), 0x90);
    }

    #[test]
    fn cmp_izy_pays_page_cross() {
        // LDY #$FF; CMP ($20),Y with ($20) -> $0201
        let (mut cpu, mut bus) = boot(&[0xA0, 0xFF, 0xD1, 0x20]);
        bus.write(0x0020, 0x01);
        bus.write(0x0021, 0x02);
        cpu.step(&mut bus);
        assert_eq!(cpu.step(&mut bus), 6);
    }
}
