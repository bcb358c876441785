use crc32fast::Hasher;

/// Derive a document seed from a label using CRC32
pub fn document_seed(label: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(label.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential ID generator for nodes within a document
///
/// Ids are opaque `{seed}-{counter}` strings. Generators with distinct
/// seeds can never collide, so each id source (editing session, standalone
/// import) gets its own seed namespace.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String,
    count: u32,
}

impl IdGenerator {
    pub fn new(label: &str) -> Self {
        Self {
            seed: document_seed(label),
            count: 0,
        }
    }

    pub fn from_seed(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            count: 0,
        }
    }

    /// Generate the next sequential id
    pub fn next_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}
