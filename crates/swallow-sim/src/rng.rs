/// Linear-congruential generator behind the risk simulator.
///
/// Each [`advance`](SeededRng::advance) computes
/// `state = (state * 1103515245 + 12345) & 0x7fffffff` and returns
/// `(state % 1000) / 1000`. The product is formed in `f64` and reduced to 32
/// bits before masking, the way the published calculator evaluates it; once
/// the state grows past a few thousand the product exceeds 2^53 and low bits
/// are rounded away. Exact integer arithmetic yields a different stream.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u32,
}

const MULTIPLIER: f64 = 1_103_515_245.0;
const INCREMENT: f64 = 12_345.0;
const MASK: u32 = 0x7fff_ffff;
const TWO_POW_32: f64 = 4_294_967_296.0;

impl SeededRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance the state and return the next draw in [0, 1).
    pub fn advance(&mut self) -> f64 {
        let product = f64::from(self.state) * MULTIPLIER + INCREMENT;
        // product is a non-negative integer-valued double; fmod by 2^32 is exact.
        let low_bits = (product % TWO_POW_32) as u32;
        self.state = low_bits & MASK;
        f64::from(self.state % 1000) / 1000.0
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}
