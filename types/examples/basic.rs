//! Basic example demonstrating both BoxBuilder and ArenaBuilder.
//!
//! Run with: cargo run --example basic

use bumpalo::Bump;
use kmangle_types::{
    AddressSpace, ArenaBuilder, BoxBuilder, PointerData, Primitive, Qualifiers, TyDisplay,
    TypeBuilder, TypeFolder, TypeVisitor,
};

fn main() {
    println!("=== kmangle Types Example ===\n");

    // Example 1: Using BoxBuilder (reference counting)
    println!("1. BoxBuilder (reference counting):");
    let box_builder = BoxBuilder::new();

    let int_ty = box_builder.primitive(Primitive::Int);
    let vec_ty = box_builder.vector(box_builder.primitive(Primitive::Float), 4);
    let ptr_ty = box_builder.pointer(vec_ty.clone());
    ptr_ty
        .as_pointer(box_builder)
        .unwrap()
        .set_address_space(AddressSpace::Global);

    println!("   int: {}", int_ty.display(box_builder));
    println!("   float4: {}", vec_ty.display(box_builder));
    println!("   pointer to float4: {}", ptr_ty.display(box_builder));

    // Example 2: Using ArenaBuilder (arena allocation)
    println!("\n2. ArenaBuilder (arena allocation):");
    let arena = Bump::new();
    let arena_builder = ArenaBuilder::new(&arena);

    let sampler = arena_builder.primitive(Primitive::Sampler);
    let user = arena_builder.user_defined("my_struct");
    let ptr = arena_builder.pointer_with(
        arena_builder.primitive(Primitive::UChar),
        Qualifiers::CONST,
        AddressSpace::Constant,
    );

    println!("   sampler: {}", sampler.display(arena_builder));
    println!("   user-defined: {}", user.display(arena_builder));
    println!("   const uchar pointer: {}", ptr.display(arena_builder));

    // Example 3: Using the visitor pattern
    println!("\n3. Visitor Pattern - Counting pointer nodes:");
    struct PointerCounter {
        builder: BoxBuilder,
        count: usize,
    }

    impl TypeVisitor<BoxBuilder> for PointerCounter {
        fn builder(&self) -> BoxBuilder {
            self.builder
        }

        fn visit_pointer(&mut self, ptr: &PointerData<BoxBuilder>) {
            self.count += 1;
            self.visit(ptr.pointee().clone());
        }
    }

    let nested = box_builder.pointer(box_builder.pointer(box_builder.primitive(Primitive::Int)));
    let mut counter = PointerCounter {
        builder: box_builder,
        count: 0,
    };
    counter.visit(nested.clone());
    println!("   Type: {}", nested.display(box_builder));
    println!("   Contains {} pointer nodes", counter.count);

    // Example 4: Using the folder pattern to copy a shared tree
    println!("\n4. Folder Pattern - independent attribute state:");
    struct CopyFolder {
        builder: BoxBuilder,
    }

    impl TypeFolder<BoxBuilder> for CopyFolder {
        fn builder(&self) -> BoxBuilder {
            self.builder
        }
    }

    let shared = box_builder.pointer(box_builder.primitive(Primitive::Short));
    let mut folder = CopyFolder {
        builder: box_builder,
    };
    let copy = folder.fold_ty(shared.clone());
    copy.as_pointer(box_builder)
        .unwrap()
        .set_qualifier(Qualifiers::VOLATILE, true);

    println!("   original: {}", shared.display(box_builder));
    println!("   mutated copy: {}", copy.display(box_builder));

    println!("\n=== Done ===");
}
