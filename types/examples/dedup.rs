//! Deduplicating interner example.
//!
//! Run with: cargo run --example dedup

use bumpalo::Bump;
use kmangle_types::{
    AddressSpace, BoxBuilder, Primitive, Qualifiers, TyDisplay, TypeBuilder, TypeInterner,
    convert_ty,
};

fn main() {
    println!("=== kmangle Interner Example ===\n");

    let arena = Bump::new();
    let store = TypeInterner::new(&arena);
    let builder = store.builder();

    // Structurally equal kinds come back as the identical node
    let a = builder.vector(builder.primitive(Primitive::Float), 4);
    let b = builder.vector(builder.primitive(Primitive::Float), 4);
    println!("float4 built twice: {}", a.display(builder));
    println!(
        "identical node: {}",
        core::ptr::eq(*a.interned(), *b.interned())
    );
    println!("distinct nodes stored: {}", store.len());

    // Pointer attributes are part of the dedup key
    let global = builder.pointer_with(
        builder.primitive(Primitive::Int),
        Qualifiers::empty(),
        AddressSpace::Global,
    );
    let global_const = builder.pointer_with(
        builder.primitive(Primitive::Int),
        Qualifiers::CONST,
        AddressSpace::Global,
    );
    println!("\n{}", global.display(builder));
    println!("{}", global_const.display(builder));
    println!(
        "share a node: {}",
        core::ptr::eq(*global.interned(), *global_const.interned())
    );

    // Trees built elsewhere merge into the store via conversion
    let box_builder = BoxBuilder::new();
    let outside = box_builder.pointer_with(
        box_builder.primitive(Primitive::Int),
        Qualifiers::empty(),
        AddressSpace::Global,
    );
    let merged = convert_ty(outside, box_builder, builder);
    println!(
        "\nmerged tree reuses the stored node: {}",
        core::ptr::eq(*merged.interned(), *global.interned())
    );

    println!("\n=== Done ===");
}
