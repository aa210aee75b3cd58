use super::{PointerData, Primitive, Qualifiers, TypeBuilder, TypeVisitor};
use alloc::string::String;
use core::fmt::Write;

/// Visitor that renders types into their canonical textual form.
///
/// The rendering is what the mangling encoder consumes, so the order is
/// fixed: pointers print their qualifiers (restrict, volatile, const), then
/// the address space, then the pointee, then `*`; vectors print the scalar
/// rendering immediately followed by the decimal length.
pub struct TypeFormatter<B: TypeBuilder> {
    output: String,
    builder: B,
}

impl<B: TypeBuilder> TypeFormatter<B> {
    pub fn new(builder: B) -> Self {
        Self {
            output: String::new(),
            builder,
        }
    }

    pub fn format(ty: B::TypeView, builder: B) -> String {
        let mut formatter = Self::new(builder);
        formatter.visit(ty);
        formatter.output
    }
}

impl<B: TypeBuilder> TypeVisitor<B> for TypeFormatter<B> {
    fn builder(&self) -> B {
        self.builder
    }

    fn visit_primitive(&mut self, prim: Primitive) {
        let _ = self.output.write_str(prim.name());
    }

    fn visit_pointer(&mut self, ptr: &PointerData<B>) {
        for (flag, spelling) in Qualifiers::SPELLINGS {
            if ptr.has_qualifier(flag) {
                let _ = write!(self.output, "{} ", spelling);
            }
        }
        let _ = write!(self.output, "{} ", ptr.address_space().name());
        self.visit(ptr.pointee().clone());
        let _ = self.output.write_str(" *");
    }

    fn visit_vector(&mut self, elem: &B::TypeView, len: u32) {
        self.visit(elem.clone());
        let _ = write!(self.output, "{}", len);
    }

    fn visit_user_defined(&mut self, name: &B::InternedStr) {
        let _ = write!(self.output, "{}", name);
    }
}

/// Extension trait to add display methods to type handles.
pub trait TyDisplay<B: TypeBuilder> {
    fn display(&self, builder: B) -> String;
}

impl<B: TypeBuilder> TyDisplay<B> for B::TypeView {
    fn display(&self, builder: B) -> String {
        TypeFormatter::format(self.clone(), builder)
    }
}
