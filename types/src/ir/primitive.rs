//! Primitive kinds of the kernel parameter-type model.
//!
//! This module defines the Primitive enum which covers every built-in kind a
//! kernel signature can mention: the scalar types, the void and variadic
//! markers, and the opaque image, event and sampler kinds that carry no
//! internal structure of their own.

/// Built-in parameter-type kinds.
///
/// The set is closed: extending it means extending `name()` as well, since
/// rendering is total over the set with no fallback arm.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Primitive {
    Bool,
    UChar,
    Char,
    UShort,
    Short,
    UInt,
    Int,
    ULong,
    Long,
    Half,
    Float,
    Double,
    Void,
    /// Marks a trailing variadic parameter.
    VarArg,
    Image1d,
    Image2d,
    Image3d,
    Image1dBuffer,
    Image1dArray,
    Image2dArray,
    Event,
    Sampler,
}

impl Primitive {
    /// Canonical source-level name, used downstream for mangling.
    pub fn name(self) -> &'static str {
        match self {
            Primitive::Bool => "bool",
            Primitive::UChar => "uchar",
            Primitive::Char => "char",
            Primitive::UShort => "ushort",
            Primitive::Short => "short",
            Primitive::UInt => "uint",
            Primitive::Int => "int",
            Primitive::ULong => "ulong",
            Primitive::Long => "long",
            Primitive::Half => "half",
            Primitive::Float => "float",
            Primitive::Double => "double",
            Primitive::Void => "void",
            Primitive::VarArg => "...",
            Primitive::Image1d => "image1d_t",
            Primitive::Image2d => "image2d_t",
            Primitive::Image3d => "image3d_t",
            Primitive::Image1dBuffer => "image1d_buffer_t",
            Primitive::Image1dArray => "image1d_array_t",
            Primitive::Image2dArray => "image2d_array_t",
            Primitive::Event => "event_t",
            Primitive::Sampler => "sampler_t",
        }
    }

    /// Returns true for the integer kinds, signed or unsigned.
    pub fn is_integer(self) -> bool {
        matches!(
            self,
            Primitive::UChar
                | Primitive::Char
                | Primitive::UShort
                | Primitive::Short
                | Primitive::UInt
                | Primitive::Int
                | Primitive::ULong
                | Primitive::Long
        )
    }

    /// Returns true for the floating-point kinds (half, float, double).
    pub fn is_floating(self) -> bool {
        matches!(self, Primitive::Half | Primitive::Float | Primitive::Double)
    }

    /// Returns true for the opaque image kinds.
    pub fn is_image(self) -> bool {
        matches!(
            self,
            Primitive::Image1d
                | Primitive::Image2d
                | Primitive::Image3d
                | Primitive::Image1dBuffer
                | Primitive::Image1dArray
                | Primitive::Image2dArray
        )
    }
}
