/// Compute the frame checksum over unescaped frame data.
///
/// This is `0xff` minus the low byte of the sum of all bytes, so that
/// adding the checksum to the sum of the frame data always gives `0xff`.
pub fn checksum(frame_data: &[u8]) -> u8 {
    let mut digest = Checksum::new();
    digest.update(frame_data);
    digest.finalize()
}

/// Check a frame data checksum.
pub fn verify(frame_data: &[u8], provided: u8) -> bool {
    checksum(frame_data) == provided
}

/// An incremental checksum digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Checksum {
    sum: u8,
}

impl Checksum {
    pub const fn new() -> Self {
        Self { sum: 0 }
    }

    pub fn update(&mut self, bytes: &[u8]) {
        for b in bytes.iter() {
            self.sum = self.sum.wrapping_add(*b);
        }
    }

    pub fn finalize(self) -> u8 {
        0xff - self.sum
    }
}
