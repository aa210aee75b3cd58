//! Cross-builder operations for types.
//!
//! This module provides functions for:
//! - Structural comparison of types across different builders
//! - Type conversion between builder representations
//! - Deterministic type ordering
//!
//! These operations traverse type structures recursively and therefore work
//! no matter which builder stored each side. The interning store relies on
//! `types_equal` to decide whether a freshly built node can be merged with a
//! previously stored one.

use super::{PointerData, Ty, TypeBuilder, TypeKind};
use core::cmp::Ordering;

/// Structurally compare two types from potentially different builders.
///
/// Returns `true` iff the types have the same structure: same variant tag
/// and, recursively, equal payloads. Pointer equality requires all three of
/// pointee equality, full qualifier-set equality, and address-space
/// equality. Comparing nodes of different variants returns `false`, never an
/// error.
///
/// # Example
///
/// ```
/// use bumpalo::Bump;
/// use kmangle_types::{ArenaBuilder, BoxBuilder, Primitive, TypeBuilder, types_equal};
///
/// let arena = Bump::new();
/// let arena_builder = ArenaBuilder::new(&arena);
/// let box_builder = BoxBuilder::new();
///
/// let a = arena_builder.pointer(arena_builder.primitive(Primitive::Int));
/// let b = box_builder.pointer(box_builder.primitive(Primitive::Int));
/// assert!(types_equal(a, arena_builder, b, box_builder));
/// ```
pub fn types_equal<B1: TypeBuilder, B2: TypeBuilder>(
    ty1: B1::TypeView,
    builder1: B1,
    ty2: B2::TypeView,
    builder2: B2,
) -> bool {
    match (ty1.view(builder1), ty2.view(builder2)) {
        (TypeKind::Primitive(p1), TypeKind::Primitive(p2)) => p1 == p2,

        // Pointers - pointee, qualifier set and address space must all match
        (TypeKind::Pointer(a), TypeKind::Pointer(b)) => {
            a.qualifiers() == b.qualifiers()
                && a.address_space() == b.address_space()
                && types_equal(a.pointee().clone(), builder1, b.pointee().clone(), builder2)
        }

        // Vectors - element type and length must both match
        (TypeKind::Vector { elem: e1, len: l1 }, TypeKind::Vector { elem: e2, len: l2 }) => {
            l1 == l2 && types_equal(e1.clone(), builder1, e2.clone(), builder2)
        }

        // User-defined types compare by exact, case-sensitive name
        (TypeKind::UserDefined(n1), TypeKind::UserDefined(n2)) => n1.as_ref() == n2.as_ref(),

        // Different variants are not equal
        _ => false,
    }
}

/// Structurally compare two types and return an ordering.
///
/// Useful for sorting parameter lists canonically or keeping ordered
/// collections of types from different builders. Variant tags order first
/// (Primitive < Pointer < Vector < UserDefined); within the same variant the
/// payloads compare recursively.
pub fn types_cmp<B1: TypeBuilder, B2: TypeBuilder>(
    ty1: B1::TypeView,
    builder1: B1,
    ty2: B2::TypeView,
    builder2: B2,
) -> Ordering {
    let kind1 = ty1.view(builder1);
    let kind2 = ty2.view(builder2);

    match kind1.tag().cmp(&kind2.tag()) {
        Ordering::Equal => match (kind1, kind2) {
            (TypeKind::Primitive(p1), TypeKind::Primitive(p2)) => p1.cmp(p2),

            (TypeKind::Pointer(a), TypeKind::Pointer(b)) => {
                match types_cmp(a.pointee().clone(), builder1, b.pointee().clone(), builder2) {
                    Ordering::Equal => match a.qualifiers().bits().cmp(&b.qualifiers().bits()) {
                        Ordering::Equal => a.address_space().cmp(&b.address_space()),
                        ord => ord,
                    },
                    ord => ord,
                }
            }

            (TypeKind::Vector { elem: e1, len: l1 }, TypeKind::Vector { elem: e2, len: l2 }) => {
                match types_cmp(e1.clone(), builder1, e2.clone(), builder2) {
                    Ordering::Equal => l1.cmp(l2),
                    ord => ord,
                }
            }

            (TypeKind::UserDefined(n1), TypeKind::UserDefined(n2)) => n1.as_ref().cmp(n2.as_ref()),

            _ => unreachable!("tags matched but kinds don't"),
        },
        ord => ord,
    }
}

/// Convert a type from one builder to another.
///
/// Creates a structurally equivalent tree in the target builder by
/// traversing the source and reconstructing each node. Pointer attribute
/// state is carried over as a snapshot of its current values. When the
/// target is a deduplicating interner, this is the operation that merges a
/// freshly built tree into the store.
pub fn convert_ty<B1: TypeBuilder, B2: TypeBuilder>(
    ty: B1::TypeView,
    from_builder: B1,
    to_builder: B2,
) -> B2::TypeView
where
    B2::TypeView: From<Ty<B2>>,
{
    match ty.view(from_builder) {
        TypeKind::Primitive(prim) => TypeKind::Primitive(*prim).intern(to_builder).into(),

        TypeKind::Pointer(ptr) => {
            let pointee = convert_ty(ptr.pointee().clone(), from_builder, to_builder);
            TypeKind::Pointer(PointerData::with_attrs(
                pointee,
                ptr.qualifiers(),
                ptr.address_space(),
            ))
            .intern(to_builder)
            .into()
        }

        TypeKind::Vector { elem, len } => {
            let elem = convert_ty(elem.clone(), from_builder, to_builder);
            TypeKind::Vector { elem, len: *len }.intern(to_builder).into()
        }

        TypeKind::UserDefined(name) => {
            TypeKind::UserDefined(to_builder.intern_str(name.as_ref()))
                .intern(to_builder)
                .into()
        }
    }
}

/// TypeView trait for viewing types uniformly across different builders.
///
/// This trait provides a common interface for accessing type structure
/// regardless of which TypeBuilder was used to create the type.
pub trait TypeView<B: TypeBuilder>: Sized + Clone {
    /// View the structure of this type.
    ///
    /// Returns a reference to the TypeKind, allowing pattern matching and
    /// inspection.
    fn view(&self, builder: B) -> &TypeKind<B>;
}

/// Implementation of TypeView for `Ty<B>`.
impl<B: TypeBuilder> TypeView<B> for Ty<B> {
    fn view(&self, builder: B) -> &TypeKind<B> {
        self.kind(builder)
    }
}
