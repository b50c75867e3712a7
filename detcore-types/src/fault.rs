/// Sticky, append-only fault bitset threaded by mutable reference through
/// every fallible primitive in the core.
///
/// Once a field is set it is never cleared implicitly - only the caller, by
/// constructing a fresh `FaultFlags`, resets state. This is what lets a batch
/// or epoch accumulate the full set of faults across every sample and
/// element in a single pass instead of aborting on the first one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FaultFlags {
    pub overflow: bool,
    pub underflow: bool,
    pub div_zero: bool,
    pub domain: bool,
    pub precision: bool,
    pub io_error: bool,
    pub format_error: bool,
    pub hash_mismatch: bool,
}

impl FaultFlags {
    pub const fn new() -> Self {
        FaultFlags {
            overflow: false,
            underflow: false,
            div_zero: false,
            domain: false,
            precision: false,
            io_error: false,
            format_error: false,
            hash_mismatch: false,
        }
    }

    /// OR of every field; `true` iff any fault has ever been recorded.
    pub fn any_fault(&self) -> bool {
        self.overflow
            || self.underflow
            || self.div_zero
            || self.domain
            || self.precision
            || self.io_error
            || self.format_error
            || self.hash_mismatch
    }

    /// Merges another flag set into this one; a field set in either stays set.
    pub fn merge(&mut self, other: &FaultFlags) {
        self.overflow |= other.overflow;
        self.underflow |= other.underflow;
        self.div_zero |= other.div_zero;
        self.domain |= other.domain;
        self.precision |= other.precision;
        self.io_error |= other.io_error;
        self.format_error |= other.format_error;
        self.hash_mismatch |= other.hash_mismatch;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_flags_have_no_fault() {
        assert!(!FaultFlags::new().any_fault());
    }

    #[test]
    fn any_fault_is_sticky_or_of_fields() {
        let mut flags = FaultFlags::new();
        flags.overflow = true;
        assert!(flags.any_fault());
        flags.overflow = false;
        // merge never clears: direct field writes can, but the contract is
        // that callers never write `false` back once set.
        assert!(!flags.any_fault());
    }

    #[test]
    fn merge_is_sticky_union() {
        let mut a = FaultFlags::new();
        a.domain = true;
        let mut b = FaultFlags::new();
        b.hash_mismatch = true;
        a.merge(&b);
        assert!(a.domain);
        assert!(a.hash_mismatch);
        assert!(!a.overflow);
    }
}
