use typed_builder::TypedBuilder;

use crate::DEFAULT_INSTRUCTIONS_PER_FRAME;

/// Tunables for a [`Cpu`](crate::Cpu) instance.
///
/// ```
/// use retro8080_core::CpuConfig;
///
/// let config = CpuConfig::builder().instructions_per_frame(2000).build();
/// assert_eq!(config.interrupt_period(), 1000);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, TypedBuilder)]
pub struct CpuConfig {
    /// Instruction quota for one `run_frame` call.
    #[builder(default = DEFAULT_INSTRUCTIONS_PER_FRAME)]
    pub instructions_per_frame: u32,
}

impl CpuConfig {
    /// Number of instructions between two interrupt checks (half a frame).
    ///
    /// Never zero, so tiny quotas still make progress.
    pub fn interrupt_period(&self) -> u32 {
        (self.instructions_per_frame / 2).max(1)
    }
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
