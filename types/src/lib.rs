//! Kernel parameter-type model with pluggable type builders.
//!
//! This crate is the type representation a kernel-symbol mangling encoder
//! consumes: scalar primitives, pointers carrying address-space and qualifier
//! attributes, fixed-length vectors, and opaque user-defined types. Storage
//! is pluggable, so the same type structure works with reference-counted
//! nodes, arena allocation, or a deduplicating interner.
//!
//! # Example
//!
//! ```ignore
//! use kmangle_types::{BoxBuilder, Primitive, TyDisplay, TypeBuilder};
//!
//! let builder = BoxBuilder::new();
//!
//! let float_ty = builder.primitive(Primitive::Float);
//! let vec_ty = builder.vector(float_ty, 4);
//! let ptr_ty = builder.pointer(vec_ty);
//! assert_eq!(ptr_ty.display(builder), "__private float4 *");
//! ```

#![no_std]
extern crate alloc;

// Intermediate Representation - generic parameter-type model
pub mod ir;

// Concrete builder implementations
pub mod arena_builder;
pub mod box_builder;
pub mod interner;

// Re-export IR types for convenience
pub use ir::{
    AddressSpace, PointerData, Primitive, Qualifiers, Ty, TyDisplay, TypeBuilder, TypeFolder,
    TypeFormatter, TypeKind, TypeTag, TypeView, TypeVisitor, convert_ty, types_cmp, types_equal,
};

// Re-export concrete builders
pub use arena_builder::ArenaBuilder;
pub use box_builder::BoxBuilder;
pub use interner::{InternBuilder, TypeInterner};
