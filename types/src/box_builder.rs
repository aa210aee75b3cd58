use crate::ir::{AddressSpace, PointerData, Primitive, Qualifiers, TypeBuilder, TypeKind};
use alloc::rc::Rc;

/// Builder that shares nodes through reference counting (no deduplication).
///
/// Every node is allocated behind an `Rc`, so a subtree can sit behind many
/// parent nodes at once and its storage is released exactly when the last
/// holder drops. Because pointer attribute state is mutable in place, a
/// shared pointer node reflects mutations to every holder.
///
/// # Example
///
/// ```
/// use kmangle_types::{BoxBuilder, Primitive, TypeBuilder};
///
/// let builder = BoxBuilder::new();
/// let int_ty = builder.primitive(Primitive::Int);
/// let ptr_ty = builder.pointer(int_ty);
/// assert!(ptr_ty.is_pointer(builder));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BoxBuilder;

impl BoxBuilder {
    /// Create a new box builder.
    pub fn new() -> Self {
        Self
    }
}

impl TypeBuilder for BoxBuilder {
    type TypeView = crate::Ty<Self>;
    type InternedTy = Rc<TypeKind<Self>>;
    type InternedStr = Rc<str>;

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
        Rc::new(kind)
    }

    fn ty_kind(self, ty: &Self::InternedTy) -> &TypeKind<Self> {
        ty
    }

    fn intern_str(self, s: &str) -> Self::InternedStr {
        Rc::from(s)
    }
}
