use super::{PointerData, Primitive, TypeBuilder, TypeKind};
use crate::TypeView;

/// Double-dispatch interface over the four type variants.
///
/// `visit` is the dispatch entry point: for a node of a given variant it
/// invokes exactly the matching hook, exactly once, and never a hook for a
/// different variant. Implement the per-variant hooks; the defaults recurse
/// into child handles so a partial visitor still traverses whole trees.
///
/// # Example
///
/// ```
/// use kmangle_types::{BoxBuilder, PointerData, Primitive, TypeBuilder, TypeVisitor};
///
/// struct PointerCounter {
///     builder: BoxBuilder,
///     count: usize,
/// }
///
/// impl TypeVisitor<BoxBuilder> for PointerCounter {
///     fn builder(&self) -> BoxBuilder {
///         self.builder
///     }
///
///     fn visit_pointer(&mut self, ptr: &PointerData<BoxBuilder>) {
///         self.count += 1;
///         self.visit(ptr.pointee().clone());
///     }
/// }
///
/// let builder = BoxBuilder::new();
/// let ty = builder.pointer(builder.pointer(builder.primitive(Primitive::Int)));
///
/// let mut counter = PointerCounter { builder, count: 0 };
/// counter.visit(ty);
/// assert_eq!(counter.count, 2);
/// ```
pub trait TypeVisitor<B: TypeBuilder> {
    /// The builder used to resolve node handles.
    fn builder(&self) -> B;

    /// Dispatch entry point.
    ///
    /// Invokes the one hook matching `ty`'s variant. Override the hooks, not
    /// this method.
    fn visit(&mut self, ty: B::TypeView) {
        let builder = self.builder();
        match ty.view(builder) {
            TypeKind::Primitive(prim) => self.visit_primitive(*prim),
            TypeKind::Pointer(ptr) => self.visit_pointer(ptr),
            TypeKind::Vector { elem, len } => self.visit_vector(elem, *len),
            TypeKind::UserDefined(name) => self.visit_user_defined(name),
        }
    }

    /// Hook for primitive nodes. Leaf; the default does nothing.
    fn visit_primitive(&mut self, _prim: Primitive) {}

    /// Hook for pointer nodes. The default recurses into the pointee.
    fn visit_pointer(&mut self, ptr: &PointerData<B>) {
        self.visit(ptr.pointee().clone());
    }

    /// Hook for vector nodes. The default recurses into the element type.
    fn visit_vector(&mut self, elem: &B::TypeView, _len: u32) {
        self.visit(elem.clone());
    }

    /// Hook for user-defined nodes. Leaf; the default does nothing.
    fn visit_user_defined(&mut self, _name: &B::InternedStr) {}
}
