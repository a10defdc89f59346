use rand::RngCore;

/// Deterministic [`RngCore`] that replays a fixed sequence of `u64` words,
/// cycling when exhausted. Lets sampling tests pin the exact uniforms fed
/// into the transform.
pub struct SequenceRng {
    words: Vec<u64>,
    idx: usize,
}

impl SequenceRng {
    pub fn new(words: Vec<u64>) -> Self {
        assert!(!words.is_empty(), "SequenceRng needs at least one word");
        Self { words, idx: 0 }
    }
}

impl RngCore for SequenceRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        let word = self.words[self.idx % self.words.len()];
        self.idx += 1;
        word
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
