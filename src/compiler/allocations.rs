use std::collections::HashMap;

/// Allocation Table
///
/// Records which program variables already have an `alloca`. Entries are
/// only ever added, so each variable is allocated exactly once per run.
#[derive(Debug, Clone, Default)]
pub struct AllocationTable {
    declared: HashMap<String, bool>,
}

impl AllocationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `name` as declared. Returns `true` only the first time, which is
    /// when the caller has to emit the allocation.
    pub fn declare(&mut self, name: &str) -> bool {
        if self.is_declared(name) {
            return false;
        }

        self.declared.insert(name.to_string(), true);
        true
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.declared.get(name).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.declared.len()
    }
}
