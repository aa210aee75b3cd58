//! TypeBuilder trait - unified type construction and storage abstraction.
//!
//! This trait combines:
//! - High-level type constructors (primitive(), pointer(), vector(), ...)
//! - Low-level storage management (interning node kinds and name strings)
//! - Pluggable storage strategies (Rc, arena, deduplicating interner)

use crate::{AddressSpace, Primitive, Qualifiers, TypeKind};
use core::fmt::Debug;
use core::hash::Hash;

/// Abstraction over type construction and storage.
///
/// The builder pattern separates:
/// - **What a type is** (`TypeKind<B>`) - the logical structure
/// - **How nodes are stored** (`B::InternedTy`) - the representation
/// - **How to construct types** (`B::pointer()`, etc.) - the API
///
/// Builders must be `Copy` so they can be passed around cheaply; a builder
/// value is a capability handle, not the storage itself.
///
/// # Example
///
/// ```
/// use kmangle_types::{BoxBuilder, Primitive, TypeBuilder};
///
/// let builder = BoxBuilder::new();
///
/// let int_ty = builder.primitive(Primitive::Int);
/// let ptr_ty = builder.pointer(int_ty);
/// assert!(ptr_ty.is_pointer(builder));
/// ```
pub trait TypeBuilder: Copy + Clone + Debug + Eq {
    /// The type handle returned by this builder.
    ///
    /// This is what users interact with - it implements `TypeView`.
    type TypeView: crate::TypeView<Self> + Clone + Debug + Eq + Hash;

    /// The internal stored representation of a type node.
    ///
    /// Opaque to generic code - could be `Rc<TypeKind<B>>` (reference
    /// counting) or `&'arena TypeKind<B>` (arena / interner).
    type InternedTy: Clone + Debug + Eq + Hash;

    /// The stored representation of a user-defined type name.
    type InternedStr: Clone + Debug + Eq + Hash + AsRef<str> + core::fmt::Display;

    // ========================================================================
    // High-level type constructors (ergonomic API)
    // ========================================================================

    /// Construct a primitive type node.
    fn primitive(self, prim: Primitive) -> Self::TypeView;

    /// Construct a pointer to `pointee` with no qualifiers, in the default
    /// (private) address space.
    fn pointer(self, pointee: Self::TypeView) -> Self::TypeView;

    /// Construct a pointer with explicit attribute state.
    ///
    /// Deduplicating builders require attributes to arrive at construction
    /// time; prefer this over mutating a node after interning.
    fn pointer_with(
        self,
        pointee: Self::TypeView,
        qualifiers: Qualifiers,
        address_space: AddressSpace,
    ) -> Self::TypeView;

    /// Construct a vector of `len` elements of scalar type `elem`.
    fn vector(self, elem: Self::TypeView, len: u32) -> Self::TypeView;

    /// Construct an opaque named type.
    fn user_defined(self, name: impl AsRef<str>) -> Self::TypeView;

    // ========================================================================
    // Low-level internals (implementation details)
    // ========================================================================

    /// Store a type kind, returning the builder's representation.
    ///
    /// Implementations may allocate a fresh node per call (Rc, arena) or
    /// deduplicate structurally equal kinds (interner).
    fn intern_ty(self, kind: TypeKind<Self>) -> Self::InternedTy;

    /// Retrieve the type structure for a stored node.
    ///
    /// This is the inverse of `intern_ty`.
    fn ty_kind(self, ty: &Self::InternedTy) -> &TypeKind<Self>;

    /// Store a user-defined type name.
    fn intern_str(self, s: &str) -> Self::InternedStr;
}
