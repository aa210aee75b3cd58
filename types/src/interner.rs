use crate::ir::{AddressSpace, PointerData, Primitive, Qualifiers, TypeBuilder, TypeKind};
use bumpalo::Bump;
use core::cell::RefCell;
use core::fmt;
use hashbrown::{HashMap, HashSet};

/// Deduplicating type store.
///
/// Structurally equal kinds are stored once: interning a kind that compares
/// equal to a previously stored one hands back the identical shared node,
/// which is what lets downstream consumers compare interned types by
/// identity. User-defined type names are interned the same way.
///
/// Pointer attribute state is part of the dedup key, so pointer nodes
/// obtained from this store must be treated as frozen: mutating one in place
/// would desynchronize the lookup table. Build pointers with `pointer_with`,
/// supplying qualifiers and address space up front. The reference-counted
/// and arena builders keep the mutate-in-place contract for callers that
/// need it.
///
/// # Example
///
/// ```
/// use bumpalo::Bump;
/// use kmangle_types::{Primitive, TypeBuilder, TypeInterner};
///
/// let arena = Bump::new();
/// let types = TypeInterner::new(&arena);
/// let builder = types.builder();
///
/// let a = builder.primitive(Primitive::Int);
/// let b = builder.primitive(Primitive::Int);
/// assert!(core::ptr::eq(*a.interned(), *b.interned()));
/// ```
pub struct TypeInterner<'arena> {
    // Arena holding all nodes from this interner.
    arena: &'arena Bump,
    interned_strs: RefCell<HashMap<&'arena str, &'arena str>>,
    interned: RefCell<HashSet<&'arena TypeKind<InternBuilder<'arena>>>>,
}

impl<'arena> TypeInterner<'arena> {
    pub fn new(arena: &'arena Bump) -> &'arena Self {
        arena.alloc(Self {
            arena,
            interned_strs: RefCell::new(HashMap::new()),
            interned: RefCell::new(HashSet::new()),
        })
    }

    /// The builder handle for this store.
    pub fn builder(&'arena self) -> InternBuilder<'arena> {
        InternBuilder { interner: self }
    }

    /// Number of distinct nodes stored.
    pub fn len(&self) -> usize {
        self.interned.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn intern_str(&self, s: &str) -> &'arena str {
        if let Some(&interned) = self.interned_strs.borrow().get(s) {
            return interned;
        }
        let arena_str = self.arena.alloc_str(s);
        self.interned_strs.borrow_mut().insert(arena_str, arena_str);
        arena_str
    }

    fn intern_kind(
        &self,
        kind: TypeKind<InternBuilder<'arena>>,
    ) -> &'arena TypeKind<InternBuilder<'arena>> {
        if let Some(&found) = self.interned.borrow().get(&kind) {
            return found;
        }
        let arena_kind: &'arena TypeKind<InternBuilder<'arena>> = self.arena.alloc(kind);
        self.interned.borrow_mut().insert(arena_kind);
        arena_kind
    }
}

/// `TypeBuilder` view over a `TypeInterner`.
#[derive(Copy, Clone)]
pub struct InternBuilder<'arena> {
    interner: &'arena TypeInterner<'arena>,
}

impl fmt::Debug for InternBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InternBuilder").finish_non_exhaustive()
    }
}

// Two builders are equal if they point to the same store.
impl<'arena> PartialEq for InternBuilder<'arena> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.interner, other.interner)
    }
}

impl<'arena> Eq for InternBuilder<'arena> {}

impl<'arena> core::hash::Hash for InternBuilder<'arena> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        core::ptr::hash(self.interner, state)
    }
}

impl<'arena> TypeBuilder for InternBuilder<'arena> {
    type TypeView = crate::Ty<Self>;
    type InternedTy = &'arena TypeKind<Self>;
    type InternedStr = &'arena str;

    // ========================================================================
    // High-level type constructors
    // ========================================================================

    fn primitive(self, prim: Primitive) -> Self::TypeView {
        TypeKind::Primitive(prim).intern(self)
    }

    fn pointer(self, pointee: Self::TypeView) -> Self::TypeView {
        TypeKind::Pointer(PointerData::new(pointee)).intern(self)
    }

    fn pointer_with(
        self,
        pointee: Self::TypeView,
        qualifiers: Qualifiers,
        address_space: AddressSpace,
    ) -> Self::TypeView {
        TypeKind::Pointer(PointerData::with_attrs(pointee, qualifiers, address_space)).intern(self)
    }

    fn vector(self, elem: Self::TypeView, len: u32) -> Self::TypeView {
        TypeKind::Vector { elem, len }.intern(self)
    }

    fn user_defined(self, name: impl AsRef<str>) -> Self::TypeView {
        TypeKind::UserDefined(self.intern_str(name.as_ref())).intern(self)
    }

    // ========================================================================
    // Low-level internals
    // ========================================================================

    fn intern_ty(self, kind: TypeKind<Self>) -> Self::InternedTy {
        self.interner.intern_kind(kind)
    }

    fn ty_kind(self, ty: &Self::InternedTy) -> &TypeKind<Self> {
        ty
    }

    fn intern_str(self, s: &str) -> Self::InternedStr {
        self.interner.intern_str(s)
    }
}
