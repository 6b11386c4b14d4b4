#![forbid(unsafe_code)]

//! Controlled/uncontrolled value ownership.
//!
//! A [`ValueSource`] holds the host's value (when the picker is controlled)
//! next to the picker's own shadow copy. Every write bumps a shared revision
//! counter; [`ValueSource::current`] returns whichever copy was written last,
//! and the external one when both carry the same revision.

/// External value plus internal shadow with revision-based precedence.
#[derive(Debug, Clone)]
pub struct ValueSource<V> {
    external: Option<Revisioned<V>>,
    internal: Revisioned<V>,
    clock: u64,
}

#[derive(Debug, Clone)]
struct Revisioned<V> {
    value: V,
    revision: u64,
}

impl<V: Clone> ValueSource<V> {
    /// The picker owns the value.
    #[must_use]
    pub fn uncontrolled(initial: V) -> Self {
        Self {
            external: None,
            internal: Revisioned {
                value: initial,
                revision: 0,
            },
            clock: 0,
        }
    }

    /// The host owns the value.
    #[must_use]
    pub fn controlled(value: V) -> Self {
        Self {
            external: Some(Revisioned {
                value: value.clone(),
                revision: 0,
            }),
            internal: Revisioned { value, revision: 0 },
            clock: 0,
        }
    }

    /// Whether a host value is present.
    #[must_use]
    pub fn is_controlled(&self) -> bool {
        self.external.is_some()
    }

    /// The value in effect.
    #[must_use]
    pub fn current(&self) -> &V {
        match &self.external {
            Some(external) if external.revision >= self.internal.revision => &external.value,
            _ => &self.internal.value,
        }
    }

    /// Record a commit made by the picker.
    pub fn write_internal(&mut self, value: V) {
        self.clock += 1;
        self.internal = Revisioned {
            value,
            revision: self.clock,
        };
    }

    /// Record a value pushed by the host.
    ///
    /// An uncontrolled source becomes controlled from here on, and the
    /// shadow is resynchronized so later merges start from the host's value.
    pub fn write_external(&mut self, value: V) {
        self.clock += 1;
        self.internal = Revisioned {
            value: value.clone(),
            revision: self.clock,
        };
        self.external = Some(Revisioned {
            value,
            revision: self.clock,
        });
    }

    /// Revision of the value in effect.
    #[must_use]
    pub fn revision(&self) -> u64 {
        match &self.external {
            Some(external) if external.revision >= self.internal.revision => external.revision,
            _ => self.internal.revision,
        }
    }
}
