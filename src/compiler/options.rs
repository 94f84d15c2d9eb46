//! Knobs for a single generation run.

/// How the `scanf`/`printf` scaffolding labels are numbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelPolicy {
    /// The n-th read (or write) statement uses suffix `_n`.
    #[default]
    PerStatement,
    /// Every read and write statement uses suffix `_1`. Programs with more
    /// than one read or more than one write produce colliding labels.
    Fixed,
}

#[derive(Debug, Clone, Default)]
pub struct CompilerOptions {
    pub label_policy: LabelPolicy,
}

impl CompilerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label_policy(mut self, label_policy: LabelPolicy) -> Self {
        self.label_policy = label_policy;
        self
    }
}
