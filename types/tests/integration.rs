//! Integration tests for kmangle-types.
//!
//! These tests exercise construction, variant-checked access, dispatch and
//! the pointer attribute contract across both ArenaBuilder and BoxBuilder.

use bumpalo::Bump;
use kmangle_types::{
    AddressSpace, ArenaBuilder, BoxBuilder, PointerData, Primitive, Qualifiers, Ty, TypeBuilder,
    TypeFolder, TypeTag, TypeVisitor,
};
use std::rc::Rc;

#[test]
fn test_box_builder_basic_types() {
    let builder = BoxBuilder::new();

    let int_ty = builder.primitive(Primitive::Int);
    let ptr_ty = builder.pointer(int_ty.clone());
    let vec_ty = builder.vector(int_ty.clone(), 4);
    let user_ty = builder.user_defined("my_struct");

    assert!(int_ty.is_primitive(builder));
    assert!(!int_ty.is_pointer(builder));

    assert!(ptr_ty.is_pointer(builder));
    assert!(!ptr_ty.is_primitive(builder));

    assert!(vec_ty.is_vector(builder));
    assert!(user_ty.is_user_defined(builder));

    let void_ty = builder.primitive(Primitive::Void);
    assert!(void_ty.is_void(builder));
    assert!(!void_ty.is_var_arg(builder));
    assert!(builder.primitive(Primitive::VarArg).is_var_arg(builder));
}

#[test]
fn test_arena_builder_basic_types() {
    let arena = Bump::new();
    let builder = ArenaBuilder::new(&arena);

    let float_ty = builder.primitive(Primitive::Float);
    let vec_ty = builder.vector(float_ty, 4);
    let ptr_ty = builder.pointer(vec_ty);

    assert!(float_ty.is_primitive(builder));
    assert!(vec_ty.is_vector(builder));
    assert!(ptr_ty.is_pointer(builder));

    // Ty is Copy for the arena builder; float_ty is still usable above.
    let (elem, len) = vec_ty.as_vector(builder).unwrap();
    assert_eq!(elem.as_primitive(builder), Some(Primitive::Float));
    assert_eq!(len, 4);
}

#[test]
fn test_primitive_predicates() {
    assert!(Primitive::UInt.is_integer());
    assert!(Primitive::Char.is_integer());
    assert!(!Primitive::Bool.is_integer());
    assert!(!Primitive::Float.is_integer());

    assert!(Primitive::Half.is_floating());
    assert!(Primitive::Double.is_floating());
    assert!(!Primitive::Long.is_floating());

    assert!(Primitive::Image1dBuffer.is_image());
    assert!(!Primitive::Sampler.is_image());
    assert!(!Primitive::Event.is_image());
}

#[test]
fn test_tags_match_variants() {
    let builder = BoxBuilder::new();

    let int_ty = builder.primitive(Primitive::Int);
    assert_eq!(int_ty.tag(builder), TypeTag::Primitive);
    assert_eq!(
        builder.pointer(int_ty.clone()).tag(builder),
        TypeTag::Pointer
    );
    assert_eq!(builder.vector(int_ty, 2).tag(builder), TypeTag::Vector);
    assert_eq!(
        builder.user_defined("foo").tag(builder),
        TypeTag::UserDefined
    );
}

#[test]
fn test_downcast_succeeds_only_on_the_diagonal() {
    let builder = BoxBuilder::new();

    let nodes = vec![
        builder.primitive(Primitive::Int),
        builder.pointer(builder.primitive(Primitive::Int)),
        builder.vector(builder.primitive(Primitive::Int), 4),
        builder.user_defined("foo"),
    ];

    for (i, node) in nodes.iter().enumerate() {
        assert_eq!(node.as_primitive(builder).is_some(), i == 0);
        assert_eq!(node.as_pointer(builder).is_some(), i == 1);
        assert_eq!(node.as_vector(builder).is_some(), i == 2);
        assert_eq!(node.as_user_defined(builder).is_some(), i == 3);
    }
}

#[test]
fn test_qualifiers_are_independent() {
    let builder = BoxBuilder::new();
    let ptr = builder.pointer(builder.primitive(Primitive::Int));
    let data = ptr.as_pointer(builder).unwrap();

    // Freshly built pointers have no qualifiers
    assert_eq!(data.qualifiers(), Qualifiers::empty());

    data.set_qualifier(Qualifiers::RESTRICT, true);
    assert!(data.has_qualifier(Qualifiers::RESTRICT));
    assert!(!data.has_qualifier(Qualifiers::VOLATILE));
    assert!(!data.has_qualifier(Qualifiers::CONST));

    data.set_qualifier(Qualifiers::CONST, true);
    assert!(data.has_qualifier(Qualifiers::RESTRICT));
    assert!(data.has_qualifier(Qualifiers::CONST));
    assert!(!data.has_qualifier(Qualifiers::VOLATILE));

    // Disabling one flag leaves the other enabled
    data.set_qualifier(Qualifiers::RESTRICT, false);
    assert!(!data.has_qualifier(Qualifiers::RESTRICT));
    assert!(data.has_qualifier(Qualifiers::CONST));
}

#[test]
fn test_address_space_is_exclusive() {
    let builder = BoxBuilder::new();
    let ptr = builder.pointer(builder.primitive(Primitive::Int));
    let data = ptr.as_pointer(builder).unwrap();

    // Default before any call is private
    assert_eq!(data.address_space(), AddressSpace::Private);

    data.set_address_space(AddressSpace::Global);
    assert_eq!(data.address_space(), AddressSpace::Global);

    // A second set replaces the value entirely
    data.set_address_space(AddressSpace::Local);
    assert_eq!(data.address_space(), AddressSpace::Local);
}

#[test]
fn test_mutation_is_visible_to_every_holder() {
    let builder = BoxBuilder::new();
    let ptr = builder.pointer(builder.primitive(Primitive::Int));
    let alias = ptr.clone();

    ptr.as_pointer(builder)
        .unwrap()
        .set_address_space(AddressSpace::Global);
    ptr.as_pointer(builder)
        .unwrap()
        .set_qualifier(Qualifiers::VOLATILE, true);

    let seen = alias.as_pointer(builder).unwrap();
    assert_eq!(seen.address_space(), AddressSpace::Global);
    assert!(seen.has_qualifier(Qualifiers::VOLATILE));
}

#[test]
fn test_shared_pointee_distinct_pointer_attributes() {
    let builder = BoxBuilder::new();

    // Two pointer nodes sharing one pointee subtree
    let int_ty = builder.primitive(Primitive::Int);
    let p1 = builder.pointer(int_ty.clone());
    let p2 = builder.pointer(int_ty);

    p1.as_pointer(builder)
        .unwrap()
        .set_qualifier(Qualifiers::CONST, true);

    assert!(p1.as_pointer(builder).unwrap().has_qualifier(Qualifiers::CONST));
    assert!(!p2.as_pointer(builder).unwrap().has_qualifier(Qualifiers::CONST));
}

struct TagRecorder {
    builder: BoxBuilder,
    tags: Vec<TypeTag>,
}

impl TypeVisitor<BoxBuilder> for TagRecorder {
    fn builder(&self) -> BoxBuilder {
        self.builder
    }

    fn visit_primitive(&mut self, _prim: Primitive) {
        self.tags.push(TypeTag::Primitive);
    }

    fn visit_pointer(&mut self, _ptr: &PointerData<BoxBuilder>) {
        self.tags.push(TypeTag::Pointer);
    }

    fn visit_vector(&mut self, _elem: &Ty<BoxBuilder>, _len: u32) {
        self.tags.push(TypeTag::Vector);
    }

    fn visit_user_defined(&mut self, _name: &Rc<str>) {
        self.tags.push(TypeTag::UserDefined);
    }
}

#[test]
fn test_dispatch_invokes_exactly_the_matching_hook() {
    let builder = BoxBuilder::new();

    let nodes = [
        (builder.primitive(Primitive::Int), TypeTag::Primitive),
        (
            builder.pointer(builder.primitive(Primitive::Int)),
            TypeTag::Pointer,
        ),
        (
            builder.vector(builder.primitive(Primitive::Int), 4),
            TypeTag::Vector,
        ),
        (builder.user_defined("foo"), TypeTag::UserDefined),
    ];

    for (node, expected) in nodes {
        let mut recorder = TagRecorder {
            builder,
            tags: Vec::new(),
        };
        node.dispatch(&mut recorder);
        assert_eq!(recorder.tags, vec![expected]);
    }
}

#[test]
fn test_visitor_default_recursion_reaches_leaves() {
    struct PrimitiveCounter {
        builder: BoxBuilder,
        count: usize,
    }

    impl TypeVisitor<BoxBuilder> for PrimitiveCounter {
        fn builder(&self) -> BoxBuilder {
            self.builder
        }

        fn visit_primitive(&mut self, _prim: Primitive) {
            self.count += 1;
        }
    }

    let builder = BoxBuilder::new();
    // Pointer -> Vector -> Float
    let ty = builder.pointer(builder.vector(builder.primitive(Primitive::Float), 8));

    let mut counter = PrimitiveCounter { builder, count: 0 };
    counter.visit(ty);
    assert_eq!(counter.count, 1);
}

struct CopyFolder {
    builder: BoxBuilder,
}

impl TypeFolder<BoxBuilder> for CopyFolder {
    fn builder(&self) -> BoxBuilder {
        self.builder
    }
}

#[test]
fn test_folder_copy_mutates_independently() {
    let builder = BoxBuilder::new();

    let original = builder.pointer(builder.primitive(Primitive::Int));
    original
        .as_pointer(builder)
        .unwrap()
        .set_qualifier(Qualifiers::RESTRICT, true);

    let mut folder = CopyFolder { builder };
    let copy = folder.fold_ty(original.clone());

    // The copy carries a snapshot of the attribute state
    let copy_data = copy.as_pointer(builder).unwrap();
    assert!(copy_data.has_qualifier(Qualifiers::RESTRICT));

    // Mutating the copy leaves the original untouched
    copy_data.set_qualifier(Qualifiers::CONST, true);
    copy_data.set_address_space(AddressSpace::Local);

    let original_data = original.as_pointer(builder).unwrap();
    assert!(!original_data.has_qualifier(Qualifiers::CONST));
    assert_eq!(original_data.address_space(), AddressSpace::Private);
}

#[test]
fn test_folder_rewrite_pass() {
    // Moves every pointer it rebuilds into the global address space
    struct GlobalizeFolder {
        builder: BoxBuilder,
    }

    impl TypeFolder<BoxBuilder> for GlobalizeFolder {
        fn builder(&self) -> BoxBuilder {
            self.builder
        }

        fn fold_ty(&mut self, ty: Ty<BoxBuilder>) -> Ty<BoxBuilder> {
            let folded = self.super_fold_ty(ty);
            if let Some(ptr) = folded.as_pointer(self.builder) {
                ptr.set_address_space(AddressSpace::Global);
            }
            folded
        }
    }

    let builder = BoxBuilder::new();
    // Pointer to pointer to int, both private
    let inner = builder.pointer(builder.primitive(Primitive::Int));
    let outer = builder.pointer(inner);

    let mut folder = GlobalizeFolder { builder };
    let rewritten = folder.fold_ty(outer.clone());

    let outer_data = rewritten.as_pointer(builder).unwrap();
    assert_eq!(outer_data.address_space(), AddressSpace::Global);
    let inner_data = outer_data.pointee().as_pointer(builder).unwrap();
    assert_eq!(inner_data.address_space(), AddressSpace::Global);

    // The source tree keeps its original spaces
    let untouched = outer.as_pointer(builder).unwrap();
    assert_eq!(untouched.address_space(), AddressSpace::Private);
}
