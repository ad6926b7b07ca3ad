//! Numeric descriptors
//!
//! The category table is deliberately narrow. Only six source types are
//! recognised; everything else, including every unsigned integer, `bool`,
//! `char`, `i128` and the pointer-sized integers, classifies as
//! [`NumericCategory::Unknown`].

use std::any::TypeId;
use std::fmt;
use std::str::FromStr;

use dynreflect_traits::VariableTraits;

use super::{Descriptor, DescriptorKind, UNKNOWN_NAME};

/// Fixed classification of numeric types
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NumericCategory {
    #[default]
    Unknown,
    Int8,
    Int16,
    Int32,
    Int64,
    Float,
    Double,
}

impl NumericCategory {
    /// Every category, in declaration order
    pub const ALL: [NumericCategory; 7] = [
        Self::Unknown,
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::Float,
        Self::Double,
    ];

    /// Descriptor name for this category
    ///
    /// This table is fixed; it is not derived from bit widths.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Float => "float",
            Self::Double => "double",
            Self::Unknown => UNKNOWN_NAME,
        }
    }

    /// Classify a source type
    ///
    /// `i8` stands in for the single-byte character type (`c_char` on the
    /// common targets).
    ///
    /// ```
    /// use dynreflect_core::descriptor::NumericCategory;
    ///
    /// assert_eq!(NumericCategory::of::<i32>(), NumericCategory::Int32);
    /// assert_eq!(NumericCategory::of::<u32>(), NumericCategory::Unknown);
    /// ```
    pub fn of<T: ?Sized + 'static>() -> Self {
        let id = TypeId::of::<T>();

        if id == TypeId::of::<i8>() {
            Self::Int8
        } else if id == TypeId::of::<i16>() {
            Self::Int16
        } else if id == TypeId::of::<i32>() {
            Self::Int32
        } else if id == TypeId::of::<i64>() {
            Self::Int64
        } else if id == TypeId::of::<f32>() {
            Self::Float
        } else if id == TypeId::of::<f64>() {
            Self::Double
        } else {
            Self::Unknown
        }
    }

    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64)
    }

    pub const fn is_floating_point(self) -> bool {
        matches!(self, Self::Float | Self::Double)
    }
}

impl fmt::Display for NumericCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string matches no category name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown numeric category name: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for NumericCategory {
    type Err = ParseCategoryError;

    /// Parse a category from its descriptor name (`"int32"`, `"Unknown"`, ...)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.name() == s)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// Descriptor for a numeric value type
///
/// The name always comes from [`NumericCategory::name`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NumericDescriptor {
    name: &'static str,
    category: NumericCategory,
    is_signed: bool,
}

impl NumericDescriptor {
    /// Create a numeric descriptor
    ///
    /// # Arguments
    /// * `category` - Numeric category, which also determines the name
    /// * `is_signed` - Whether the described type is signed
    pub const fn new(category: NumericCategory, is_signed: bool) -> Self {
        Self {
            name: category.name(),
            category,
            is_signed,
        }
    }

    /// Create a descriptor for source type `T`
    ///
    /// All six recognised types are signed, so `is_signed` is true exactly
    /// when the category is known.
    pub fn for_type<T: ?Sized + 'static>() -> Self {
        let category = NumericCategory::of::<T>();
        Self::new(category, category.is_known())
    }

    /// Create a descriptor for the raw type behind a member
    ///
    /// ```
    /// use dynreflect_core::descriptor::{NumericCategory, NumericDescriptor};
    /// use dynreflect_core::traits::Member;
    ///
    /// struct Player;
    /// const HEALTH: Member<Player, &'static [i32; 2]> = Member::new("health");
    ///
    /// let descriptor = NumericDescriptor::for_member(&HEALTH);
    /// assert_eq!(descriptor.category(), NumericCategory::Int32);
    /// ```
    pub fn for_member<M>(_member: &M) -> Self
    where
        M: VariableTraits + ?Sized,
        M::Raw: 'static,
    {
        Self::for_type::<M::Raw>()
    }

    pub const fn category(&self) -> NumericCategory {
        self.category
    }

    pub const fn is_signed(&self) -> bool {
        self.is_signed
    }
}

impl Descriptor for NumericDescriptor {
    fn name(&self) -> &str {
        self.name
    }

    fn kind(&self) -> DescriptorKind {
        DescriptorKind::Numeric
    }
}
