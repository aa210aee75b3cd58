//! Intermediate representation of kernel parameter types.
//!
//! This module contains the generic, builder-agnostic representation of the
//! types that appear in kernel signatures. It is parameterized by the
//! `TypeBuilder` trait, which lets different implementations choose how type
//! nodes are built and stored in memory.
//!
//! ## Structure
//!
//! - **Core types**: `TypeKind`, `Ty` - the logical structure of types
//! - **Attributes**: `Qualifiers`, `AddressSpace` - pointer attribute state
//! - **TypeBuilder trait**: Abstract interface for construction and storage
//! - **TypeView trait**: Unified view over types from different builders
//! - **Generic algorithms**: Visitor and folder patterns over types
//! - **Display**: canonical rendering for the mangling encoder

pub mod attr;
pub mod builder;
pub mod display;
pub mod fold;
pub mod primitive;
pub mod ty;
pub mod view;
pub mod visit;

pub use attr::{AddressSpace, Qualifiers};
pub use builder::TypeBuilder;
pub use display::{TyDisplay, TypeFormatter};
pub use fold::TypeFolder;
pub use primitive::Primitive;
pub use ty::{PointerData, Ty, TypeKind, TypeTag};
pub use view::{TypeView, convert_ty, types_cmp, types_equal};
pub use visit::TypeVisitor;
