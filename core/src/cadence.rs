//! Short-on / long-off beep duty pattern.

/// One leg of the cadence: whether the buzzer sounds, and for how long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub sounding: bool,
    pub len_ms: u64,
}

/// Alternating on/off cadence, starting with the sounding segment.
pub struct BeepCadence {
    on_ms: u64,
    off_ms: u64,
    sounding: bool,
}

impl BeepCadence {
    pub const fn new(on_ms: u64, off_ms: u64) -> Self {
        Self {
            on_ms,
            off_ms,
            sounding: true,
        }
    }

    pub fn current(&self) -> Segment {
        Segment {
            sounding: self.sounding,
            len_ms: if self.sounding { self.on_ms } else { self.off_ms },
        }
    }

    pub fn advance(&mut self) {
        self.sounding = !self.sounding;
    }

    pub const fn period_ms(&self) -> u64 {
        self.on_ms + self.off_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_the_sounding_segment() {
        let cadence = BeepCadence::new(200, 800);
        assert_eq!(
            cadence.current(),
            Segment {
                sounding: true,
                len_ms: 200
            }
        );
    }

    #[test]
    fn segments_alternate() {
        let mut cadence = BeepCadence::new(200, 800);
        cadence.advance();
        assert_eq!(
            cadence.current(),
            Segment {
                sounding: false,
                len_ms: 800
            }
        );
        cadence.advance();
        assert_eq!(
            cadence.current(),
            Segment {
                sounding: true,
                len_ms: 200
            }
        );
    }

    #[test]
    fn one_period_is_a_second_with_200ms_sounding() {
        let mut cadence = BeepCadence::new(200, 800);
        assert_eq!(cadence.period_ms(), 1000);

        let mut total = 0;
        let mut sounding = 0;
        for _ in 0..2 {
            let seg = cadence.current();
            total += seg.len_ms;
            if seg.sounding {
                sounding += seg.len_ms;
            }
            cadence.advance();
        }
        assert_eq!(total, 1000);
        assert_eq!(sounding, 200);
    }
}
