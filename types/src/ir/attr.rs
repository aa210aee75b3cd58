//! Pointer attribute state: qualifier flags and address spaces.
//!
//! The two sets behave differently and are kept in separate representations:
//! qualifiers are independent flags (any subset may be active at once), while
//! the address space is a single exclusive value that is replaced wholesale.

use bitflags::bitflags;

bitflags! {
    /// Pointer qualifier flags.
    ///
    /// The three qualifiers are independent: toggling one never affects the
    /// others, and any subset may be active on a pointer simultaneously.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    pub struct Qualifiers: u8 {
        const RESTRICT = 1;
        const VOLATILE = 1 << 1;
        const CONST = 1 << 2;
    }
}

impl Qualifiers {
    /// Qualifier flags in canonical rendering order, with their spellings.
    ///
    /// Rendering iterates this table so the output order is fixed no matter
    /// in which order flags were enabled.
    pub const SPELLINGS: [(Qualifiers, &'static str); 3] = [
        (Qualifiers::RESTRICT, "restrict"),
        (Qualifiers::VOLATILE, "volatile"),
        (Qualifiers::CONST, "const"),
    ];
}

/// Pointer address space.
///
/// Exactly one address space is active per pointer. Setting a new one
/// replaces the previous value entirely; address spaces are never combined.
/// Freshly built pointers start in `Private`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AddressSpace {
    #[default]
    Private,
    Global,
    Constant,
    Local,
}

impl AddressSpace {
    /// Canonical spelling used in type renderings.
    pub fn name(self) -> &'static str {
        match self {
            AddressSpace::Private => "__private",
            AddressSpace::Global => "__global",
            AddressSpace::Constant => "__constant",
            AddressSpace::Local => "__local",
        }
    }
}
