use super::{AddressSpace, Primitive, Qualifiers, TypeBuilder, TypeVisitor};
use core::cell::Cell;
use core::fmt;
use core::hash::{Hash, Hasher};

/// Variant tag of a type node.
///
/// The tag is fixed at construction and always matches the concrete variant.
/// Its derived `Ord` is the variant order used by `types_cmp`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TypeTag {
    Primitive,
    Pointer,
    Vector,
    UserDefined,
}

/// Pointer payload: pointee handle plus attribute state.
///
/// The pointee is a shared handle; the same subtree may sit behind many
/// pointers. Qualifier flags and the address space stay mutable after
/// construction, so flipping an attribute on a shared node is visible to
/// every holder of that node. Callers that need an independent attribute set
/// must build a distinct node (a default `TypeFolder` pass does this).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointerData<B: TypeBuilder> {
    pointee: B::TypeView,
    qualifiers: Cell<Qualifiers>,
    address_space: Cell<AddressSpace>,
}

impl<B: TypeBuilder> PointerData<B> {
    /// A pointer with no qualifiers in the default (private) address space.
    pub fn new(pointee: B::TypeView) -> Self {
        Self::with_attrs(pointee, Qualifiers::empty(), AddressSpace::Private)
    }

    /// A pointer with explicit attribute state.
    pub fn with_attrs(
        pointee: B::TypeView,
        qualifiers: Qualifiers,
        address_space: AddressSpace,
    ) -> Self {
        Self {
            pointee,
            qualifiers: Cell::new(qualifiers),
            address_space: Cell::new(address_space),
        }
    }

    /// The type this pointer points at.
    pub fn pointee(&self) -> &B::TypeView {
        &self.pointee
    }

    /// Replaces the active address space.
    ///
    /// The previous value is discarded; address spaces are exclusive, never
    /// combined. Observable to all holders of this node.
    pub fn set_address_space(&self, space: AddressSpace) {
        self.address_space.set(space);
    }

    /// The currently active address space.
    pub fn address_space(&self) -> AddressSpace {
        self.address_space.get()
    }

    /// Adds or removes one qualifier flag, leaving the others untouched.
    pub fn set_qualifier(&self, qual: Qualifiers, enabled: bool) {
        let mut flags = self.qualifiers.get();
        flags.set(qual, enabled);
        self.qualifiers.set(flags);
    }

    /// Whether the given qualifier flag is currently enabled.
    pub fn has_qualifier(&self, qual: Qualifiers) -> bool {
        self.qualifiers.get().contains(qual)
    }

    /// The full qualifier flag set.
    pub fn qualifiers(&self) -> Qualifiers {
        self.qualifiers.get()
    }
}

// Cell has no Hash impl; hash the current attribute state, matching the
// derived PartialEq which compares Cell contents.
impl<B: TypeBuilder> Hash for PointerData<B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pointee.hash(state);
        self.qualifiers.get().hash(state);
        self.address_space.get().hash(state);
    }
}

/// Logical structure of a parameter type.
///
/// This is generic over the `TypeBuilder` so the same structure works with
/// different storage strategies (reference-counted nodes, arena allocation,
/// deduplicating interner).
#[derive(Clone, Debug)]
pub enum TypeKind<B: TypeBuilder> {
    /// Built-in scalar or opaque kind.
    Primitive(Primitive),

    /// Pointer with qualifier flags and an address space.
    Pointer(PointerData<B>),

    /// Fixed-length vector of a scalar element type.
    ///
    /// Lengths are not validated here; the signature parser rejects lengths
    /// the target does not support.
    Vector { elem: B::TypeView, len: u32 },

    /// Opaque aggregate or externally-defined type, identified only by name.
    UserDefined(B::InternedStr),
}

// Manual PartialEq (not derived): the derive's `B: PartialEq` bound recurses
// infinitely through `InternedTy = &TypeKind<B>`. The field projection types
// are PartialEq via the TypeBuilder trait bounds, so this compares identically.
impl<B: TypeBuilder> PartialEq for TypeKind<B> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TypeKind::Primitive(a), TypeKind::Primitive(b)) => a == b,
            (TypeKind::Pointer(a), TypeKind::Pointer(b)) => a == b,
            (
                TypeKind::Vector {
                    elem: ae,
                    len: al,
                },
                TypeKind::Vector {
                    elem: be,
                    len: bl,
                },
            ) => ae == be && al == bl,
            (TypeKind::UserDefined(a), TypeKind::UserDefined(b)) => a == b,
            _ => false,
        }
    }
}

// Manual Eq marker (not derived): the derive emits `AssertParamIsEq` for each
// field projection, recursing infinitely through `InternedTy = &TypeKind<B>`.
// Structural equality is still provided by the derived PartialEq.
impl<B: TypeBuilder> Eq for TypeKind<B> {}

// Manual Hash (not derived): deriving would add a `B: Hash` parameter bound
// and evaluate the field projections' Hash, which recurses infinitely through
// `InternedTy = &TypeKind<B>`. The TypeBuilder trait already guarantees
// TypeView/InternedStr: Hash, so a `B: TypeBuilder`-bounded impl hashes
// identically without the recursive bound.
impl<B: TypeBuilder> Hash for TypeKind<B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        core::mem::discriminant(self).hash(state);
        match self {
            TypeKind::Primitive(prim) => prim.hash(state),
            TypeKind::Pointer(ptr) => ptr.hash(state),
            TypeKind::Vector { elem, len } => {
                elem.hash(state);
                len.hash(state);
            }
            TypeKind::UserDefined(name) => name.hash(state),
        }
    }
}

impl<B: TypeBuilder> TypeKind<B> {
    /// The variant tag of this kind.
    pub fn tag(&self) -> TypeTag {
        match self {
            TypeKind::Primitive(_) => TypeTag::Primitive,
            TypeKind::Pointer(_) => TypeTag::Pointer,
            TypeKind::Vector { .. } => TypeTag::Vector,
            TypeKind::UserDefined(_) => TypeTag::UserDefined,
        }
    }

    /// Intern this kind into a `Ty` handle.
    pub fn intern(self, builder: B) -> Ty<B> {
        Ty::new(builder.intern_ty(self))
    }
}

/// Handle to a stored type node.
///
/// This is a lightweight wrapper around the builder's storage
/// representation. It can be cloned and used to retrieve the type structure.
#[derive(Clone)]
pub struct Ty<B: TypeBuilder> {
    interned: B::InternedTy,
}

// Manual PartialEq/Eq, same rationale as TypeKind: avoid the derive's
// recursive parameter bounds. `B::InternedTy: Eq` is guaranteed by TypeBuilder.
impl<B: TypeBuilder> PartialEq for Ty<B> {
    fn eq(&self, other: &Self) -> bool {
        self.interned == other.interned
    }
}

impl<B: TypeBuilder> Eq for Ty<B> {}

// Manual Hash (not derived) for the same reason as TypeKind: the derive's
// `B: Hash` bound drives an infinite recursion through the interned node
// type. `B::InternedTy: Hash` is guaranteed by the TypeBuilder trait.
impl<B: TypeBuilder> Hash for Ty<B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.interned.hash(state);
    }
}

// Implement Copy when the storage handle is Copy (e.g., for ArenaBuilder)
impl<B: TypeBuilder> Copy for Ty<B> where B::InternedTy: Copy {}

impl<B: TypeBuilder> Ty<B> {
    /// Create a handle from a builder's storage representation.
    pub fn new(interned: B::InternedTy) -> Self {
        Self { interned }
    }

    /// The storage representation (for builder internals and identity checks).
    pub fn interned(&self) -> &B::InternedTy {
        &self.interned
    }

    /// The structure of this type, looked up through the builder.
    pub fn kind(&self, builder: B) -> &TypeKind<B> {
        builder.ty_kind(&self.interned)
    }

    /// The variant tag of this node. Never changes over the node's lifetime.
    pub fn tag(&self, builder: B) -> TypeTag {
        self.kind(builder).tag()
    }

    /// Check if this is a primitive type.
    pub fn is_primitive(&self, builder: B) -> bool {
        matches!(self.kind(builder), TypeKind::Primitive(_))
    }

    /// Check if this is a pointer type.
    pub fn is_pointer(&self, builder: B) -> bool {
        matches!(self.kind(builder), TypeKind::Pointer(_))
    }

    /// Check if this is a vector type.
    pub fn is_vector(&self, builder: B) -> bool {
        matches!(self.kind(builder), TypeKind::Vector { .. })
    }

    /// Check if this is a user-defined type.
    pub fn is_user_defined(&self, builder: B) -> bool {
        matches!(self.kind(builder), TypeKind::UserDefined(_))
    }

    /// Check if this is the void primitive.
    pub fn is_void(&self, builder: B) -> bool {
        matches!(self.kind(builder), TypeKind::Primitive(Primitive::Void))
    }

    /// Check if this is the variadic marker.
    pub fn is_var_arg(&self, builder: B) -> bool {
        matches!(self.kind(builder), TypeKind::Primitive(Primitive::VarArg))
    }

    /// Variant-checked view of the primitive payload.
    ///
    /// Returns `None` when the node is any other variant.
    pub fn as_primitive(&self, builder: B) -> Option<Primitive> {
        match self.kind(builder) {
            TypeKind::Primitive(prim) => Some(*prim),
            _ => None,
        }
    }

    /// Variant-checked view of the pointer payload.
    pub fn as_pointer(&self, builder: B) -> Option<&PointerData<B>> {
        match self.kind(builder) {
            TypeKind::Pointer(ptr) => Some(ptr),
            _ => None,
        }
    }

    /// Variant-checked view of the vector payload (element type, length).
    pub fn as_vector(&self, builder: B) -> Option<(&B::TypeView, u32)> {
        match self.kind(builder) {
            TypeKind::Vector { elem, len } => Some((elem, *len)),
            _ => None,
        }
    }

    /// Variant-checked view of the user-defined name.
    pub fn as_user_defined(&self, builder: B) -> Option<&B::InternedStr> {
        match self.kind(builder) {
            TypeKind::UserDefined(name) => Some(name),
            _ => None,
        }
    }
}

impl<B: TypeBuilder> Ty<B>
where
    B::TypeView: From<Ty<B>>,
{
    /// Double-dispatch entry point.
    ///
    /// Invokes exactly the visitor hook matching this node's variant,
    /// exactly once. See `TypeVisitor`.
    pub fn dispatch<V: TypeVisitor<B>>(&self, visitor: &mut V) {
        visitor.visit(self.clone().into());
    }
}

impl<B: TypeBuilder> fmt::Debug for Ty<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ty({:?})", self.interned)
    }
}
