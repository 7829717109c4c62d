use rand::RngCore;

/// Replacement state for a zero seed, which would otherwise lock xorshift at zero.
pub const ZERO_SEED_STATE: u32 = 0x1a2b_3c4d;

/// 32-bit xorshift generator (shifts 13/17/5).
///
/// Shuffles are a pure function of the seed, so a seeded round always deals
/// the same cards.
///
/// # Examples
///
/// ```
/// use koikoi_engine::random::XorShift32;
///
/// let mut a = XorShift32::new(42);
/// let mut b = XorShift32::new(42);
/// assert_eq!(a.step(), b.step());
/// ```
#[derive(Debug, Clone)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { ZERO_SEED_STATE } else { seed };
        Self { state }
    }

    /// Advances the generator and returns the new state.
    pub fn step(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform value in `[0, 1]`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.step()) / f64::from(u32::MAX)
    }

    /// Fisher-Yates from the tail.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = ((self.next_f64() * (i + 1) as f64).floor() as usize).min(i);
            items.swap(i, j);
        }
    }
}

impl RngCore for XorShift32 {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        let hi = u64::from(self.step());
        let lo = u64::from(self.step());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

/// Seed derived from the wall clock, truncated to 32 bits.
pub fn default_seed() -> u32 {
    chrono::Utc::now().timestamp_millis() as u32
}
