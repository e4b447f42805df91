/*!
cpu::mod - Public façade for the 6502 CPU core.

Layout:

```text
state.rs        - Register file, flag masks, stack helpers.
table.rs        - 256-entry opcode table (operation, mode, base cycles).
addressing.rs   - Operand context and the twelve addressing resolvers.
execute.rs      - Semantic helpers shared across handlers.
dispatch/       - Operation handlers by family + the `execute` match.
cycles.rs       - Latency constants, vectors, page-cross predicate.
core/           - `Cpu`: clock-driven state machine, reset / IRQ / NMI.
disasm.rs       - Table-driven single-instruction disassembler.
```

Feature flags:
    trace           - Per-instruction disassembly at `log::trace!` (target "cpu").
*/

pub mod addressing;
pub mod core;
pub mod cycles;
pub(crate) mod dispatch;
pub mod disasm;
pub(crate) mod execute;
pub mod state;
pub mod table;

pub use crate::cpu::core::Cpu;
pub use crate::cpu::disasm::disassemble;
pub use crate::cpu::state::{
    BREAK, CARRY, CpuState, DECIMAL, IRQ_DISABLE, NEGATIVE, OVERFLOW, UNUSED, ZERO,
};
pub use crate::cpu::table::{AddrMode, Instruction, Operation, lookup};
