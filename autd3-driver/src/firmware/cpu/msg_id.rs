/// Generator of message ids.
///
/// Ids increase by one from `min` to `max` and then wrap back to `min`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MsgIdGenerator {
    min: u8,
    max: u8,
    current: Option<u8>,
}

impl MsgIdGenerator {
    /// Creates a new generator whose first id is `min`.
    #[must_use]
    pub const fn new(min: u8, max: u8) -> Self {
        Self {
            min,
            max,
            current: None,
        }
    }

    /// Returns the next id.
    pub fn next_id(&mut self) -> u8 {
        let id = match self.current {
            Some(c) if c >= self.min && c < self.max => c + 1,
            _ => self.min,
        };
        self.current = Some(id);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence() {
        let mut msg_id = MsgIdGenerator::new(0x20, 0xBF);
        assert_eq!(0x20, msg_id.next_id());
        assert_eq!(0x21, msg_id.next_id());
        assert_eq!(0x22, msg_id.next_id());
    }

    #[test]
    fn wrap() {
        let mut msg_id = MsgIdGenerator::new(1, 255);
        let first = msg_id.next_id();
        assert_eq!(1, first);
        let ids = (0..255).map(|_| msg_id.next_id()).collect::<Vec<_>>();
        assert_eq!(255, ids[253]);
        assert_eq!(1, ids[254]);
        assert!(ids.iter().all(|&id| id != 0));

        let mut unique = ids[..254].to_vec();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(254, unique.len());
    }
}
