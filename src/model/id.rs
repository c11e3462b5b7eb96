use super::NodeKind;

pub const START_ID: &str = "start";
pub const END_ID: &str = "end";

/// Hands out node ids from a monotonic counter.
///
/// Every call advances the counter, so two ids minted back to back (even inside the
/// same event) never collide, and an id is never handed out twice by the same
/// generator. `Start` and `End` use fixed ids because a sequence holds exactly one
/// of each and neither is ever removed.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Mints the id for a fresh node of the given kind.
    pub fn next_id(&mut self, kind: NodeKind) -> String {
        match kind {
            NodeKind::Start => START_ID.to_string(),
            NodeKind::End => END_ID.to_string(),
            NodeKind::InsertPoint => format!("insert-{}", self.bump()),
            NodeKind::Action => format!("action-{}", self.bump()),
        }
    }

    /// Number of counter-based ids issued so far.
    pub fn issued(&self) -> u64 {
        self.next - 1
    }

    fn bump(&mut self) -> u64 {
        let n = self.next;
        self.next += 1;
        n
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
