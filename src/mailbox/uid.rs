use std::fmt::Display;

/// UID the server announced via `UIDNEXT`.
///
/// Zero is representable on purpose: lenient parsing coerces a garbled
/// `UIDNEXT` value to zero instead of dropping it.
#[derive(Debug, PartialEq, Clone, Copy, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(transparent)]
pub struct Uid(u32);

impl Uid {
    pub fn new(uid: u32) -> Self {
        Self(uid)
    }
}

impl Display for Uid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u32> for Uid {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<&u32> for Uid {
    fn from(value: &u32) -> Self {
        Self(*value)
    }
}

impl From<Uid> for u32 {
    fn from(value: Uid) -> Self {
        value.0
    }
}
