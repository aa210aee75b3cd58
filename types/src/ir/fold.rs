use super::{PointerData, TypeBuilder, TypeKind};
use crate::TypeView;

/// Trait for rebuilding types.
///
/// A folder walks a type tree and produces a new tree in the same builder.
/// The default implementation rebuilds every node, which yields a deep copy
/// with a snapshot of each pointer's attribute state: the supported way to
/// obtain a pointer whose qualifiers and address space can change
/// independently of a shared original.
///
/// # Example
///
/// ```
/// use kmangle_types::{BoxBuilder, Primitive, Ty, TypeBuilder, TypeFolder, TypeKind};
///
/// // Replace every half with float
/// struct HalfToFloatFolder {
///     builder: BoxBuilder,
/// }
///
/// impl TypeFolder<BoxBuilder> for HalfToFloatFolder {
///     fn builder(&self) -> BoxBuilder {
///         self.builder
///     }
///
///     fn fold_ty(&mut self, ty: Ty<BoxBuilder>) -> Ty<BoxBuilder> {
///         match ty.kind(self.builder) {
///             TypeKind::Primitive(Primitive::Half) => self.builder.primitive(Primitive::Float),
///             _ => self.super_fold_ty(ty),
///         }
///     }
/// }
///
/// let builder = BoxBuilder::new();
/// let vec_half = builder.vector(builder.primitive(Primitive::Half), 4);
///
/// let mut folder = HalfToFloatFolder { builder };
/// let result = folder.fold_ty(vec_half);
/// let (elem, len) = result.as_vector(builder).unwrap();
/// assert_eq!(elem.as_primitive(builder), Some(Primitive::Float));
/// assert_eq!(len, 4);
/// ```
pub trait TypeFolder<B: TypeBuilder> {
    /// Get the builder for creating new nodes.
    fn builder(&self) -> B;

    /// Transform a type.
    ///
    /// Override this to customize behavior for all types.
    /// Call `super_fold_ty` to recurse into nested types.
    fn fold_ty(&mut self, ty: B::TypeView) -> B::TypeView
    where
        B::TypeView: From<crate::Ty<B>>,
    {
        self.super_fold_ty(ty)
    }

    /// Default recursion into nested types.
    ///
    /// Override `fold_ty` instead of this method.
    fn super_fold_ty(&mut self, ty: B::TypeView) -> B::TypeView
    where
        B::TypeView: From<crate::Ty<B>>,
    {
        let builder = self.builder();

        match ty.view(builder) {
            // Leaf cases - rebuild as-is
            TypeKind::Primitive(prim) => TypeKind::Primitive(*prim).intern(builder).into(),
            TypeKind::UserDefined(name) => {
                TypeKind::UserDefined(name.clone()).intern(builder).into()
            }

            // Recursive cases - extract owned data, then fold
            TypeKind::Pointer(ptr) => {
                let qualifiers = ptr.qualifiers();
                let address_space = ptr.address_space();
                let pointee = ptr.pointee().clone();
                let new_pointee = self.fold_ty(pointee);
                TypeKind::Pointer(PointerData::with_attrs(
                    new_pointee,
                    qualifiers,
                    address_space,
                ))
                .intern(builder)
                .into()
            }

            TypeKind::Vector { elem, len } => {
                let len = *len;
                let elem = elem.clone();
                let new_elem = self.fold_ty(elem);
                TypeKind::Vector { elem: new_elem, len }.intern(builder).into()
            }
        }
    }
}
