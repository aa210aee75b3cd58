use crate::ir::{AddressSpace, PointerData, Primitive, Qualifiers, TypeBuilder, TypeKind};
use bumpalo::Bump;

/// Builder that allocates nodes in a `Bump` arena (no deduplication).
///
/// Nodes live as long as the arena, handles are plain references, and `Ty`
/// is `Copy` for this builder. Pointer attribute state remains mutable in
/// place through the shared reference, with the same visible-to-all-holders
/// semantics as the reference-counted builder.
///
/// # Example
///
/// ```
/// use bumpalo::Bump;
/// use kmangle_types::{ArenaBuilder, Primitive, TypeBuilder};
///
/// let arena = Bump::new();
/// let builder = ArenaBuilder::new(&arena);
///
/// let int_ty = builder.primitive(Primitive::Int);
/// let vec_ty = builder.vector(int_ty, 4);
/// assert!(vec_ty.is_vector(builder));
/// ```
#[derive(Copy, Clone, Debug)]
pub struct ArenaBuilder<'arena> {
    arena: &'arena Bump,
}

// Manual implementations since Bump doesn't implement PartialEq/Eq/Hash.
// Two builders are equal if they point to the same arena.
impl<'arena> PartialEq for ArenaBuilder<'arena> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.arena, other.arena)
    }
}

impl<'arena> Eq for ArenaBuilder<'arena> {}

impl<'arena> core::hash::Hash for ArenaBuilder<'arena> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        core::ptr::hash(self.arena, state)
    }
}

impl<'arena> ArenaBuilder<'arena> {
    /// Create a new arena builder.
    pub fn new(arena: &'arena Bump) -> Self {
        Self { arena }
    }
}

impl<'arena> TypeBuilder for ArenaBuilder<'arena> {
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
        self.arena.alloc(kind)
    }

    fn ty_kind(self, ty: &Self::InternedTy) -> &TypeKind<Self> {
        ty
    }

    fn intern_str(self, s: &str) -> Self::InternedStr {
        self.arena.alloc_str(s)
    }
}
