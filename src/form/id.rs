// Control id generation
// Ids are injected per control instead of drawn from a global counter

/// Produces unique element ids for controls.
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator {
    fn next_id(&mut self, control_type: &str) -> String;
}

/// `"{control_type}-{n}"` with `n` counting up from zero.
#[derive(Debug, Default, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self, control_type: &str) -> String {
        let id = format!("{}-{}", control_type, self.next);
        self.next += 1;
        id
    }
}
