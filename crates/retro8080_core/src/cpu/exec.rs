mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use super::decode::Instruction;
use super::Cpu;
use crate::io::PortIo;

impl<I: PortIo> Cpu<I> {
    /// Execute an already fetched and decoded instruction.
    ///
    /// Immediates are fetched here, so on return PC points past the whole
    /// instruction unless it transferred control.
    pub(super) fn execute(&mut self, instruction: Instruction) {
        match instruction {
            Instruction::Nop => {}

            // Data movement.
            Instruction::Mov { dst, src } => self.exec_mov(dst, src),
            Instruction::Mvi(dst) => self.exec_mvi(dst),
            Instruction::Lxi(rp) => self.exec_lxi(rp),
            Instruction::Ldax(rp) => self.exec_ldax(rp),
            Instruction::Stax(rp) => self.exec_stax(rp),
            Instruction::Lda => self.exec_lda(),
            Instruction::Sta => self.exec_sta(),
            Instruction::Lhld => self.exec_lhld(),
            Instruction::Shld => self.exec_shld(),
            Instruction::Xchg => self.exec_xchg(),

            // 8-bit and 16-bit increment/decrement.
            Instruction::Inr(reg) => self.exec_inr(reg),
            Instruction::Dcr(reg) => self.exec_dcr(reg),
            Instruction::Inx(rp) => self.exec_inx(rp),
            Instruction::Dcx(rp) => self.exec_dcx(rp),

            // Accumulator arithmetic and logic.
            Instruction::Alu(op, src) => self.exec_alu_reg(op, src),
            Instruction::AluImm(op) => self.exec_alu_imm(op),
            Instruction::Dad(rp) => self.exec_dad(rp),
            Instruction::Daa => self.alu_daa(),
            Instruction::Cma => self.exec_cma(),
            Instruction::Stc => self.exec_stc(),
            Instruction::Cmc => self.exec_cmc(),
            Instruction::Rlc => self.exec_rlc(),
            Instruction::Rrc => self.exec_rrc(),
            Instruction::Ral => self.exec_ral(),
            Instruction::Rar => self.exec_rar(),

            // Control transfer.
            Instruction::Jmp(cc) => self.exec_jmp(cc),
            Instruction::Call(cc) => self.exec_call(cc),
            Instruction::Ret(cc) => self.exec_ret(cc),
            Instruction::Rst(n) => self.exec_rst(n),
            Instruction::Pchl => self.exec_pchl(),

            // Stack.
            Instruction::Push(rp) => self.exec_push(rp),
            Instruction::Pop(rp) => self.exec_pop(rp),
            Instruction::Xthl => self.exec_xthl(),

            // Ports and interrupt latch.
            Instruction::Out => self.exec_out(),
            Instruction::In => self.exec_in(),
            Instruction::Ei => self.exec_ei(),
            Instruction::Di => self.exec_di(),

            // `step` enters the crash state before dispatching these.
            Instruction::Invalid(_) => {}
        }
    }
}
