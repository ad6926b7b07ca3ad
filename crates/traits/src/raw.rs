//! Raw type stripping
//!
//! [`RawType`] peels every indirection layer off a type until a leaf is
//! reached. Each impl removes exactly the outermost layer and defers to the
//! inner type, so `&[*const i32; 4]` and `*const [&i32; 4]` both end at `i32`
//! regardless of how the layers are nested.
//!
//! Rust has no `const`/`volatile` type qualifiers. Read-only access is spelled
//! `&T` / `*const T` and is stripped like any other reference or pointer;
//! volatile access is an operation (`ptr::read_volatile`), not a type.
//!
//! Anything that is not an indirection layer is a leaf, including the std
//! containers (`Vec<T>`, `Option<T>`, maps, tuples, cells). A member declared
//! as `Vec<i32>` therefore has the raw type `Vec<i32>`.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::{Arc, Mutex, RwLock};

/// Type with all reference, pointer and array layers removed
pub trait RawType {
    /// The innermost value type
    type Raw: ?Sized;
}

/// Mark types as leaves of [`RawType`] stripping (`Raw = Self`)
///
/// `#[derive(Reflect)]` and `#[derive(ReflectEnum)]` emit this impl for you;
/// use the macro for types that cannot carry a derive.
///
/// ```
/// use dynreflect_traits::{impl_raw_type, RawTypeOf};
///
/// struct Vec3 { x: f32, y: f32, z: f32 }
/// impl_raw_type!(Vec3);
///
/// fn takes_vec3(_: RawTypeOf<&[Vec3; 2]>) {}
/// takes_vec3(Vec3 { x: 0.0, y: 0.0, z: 0.0 });
/// ```
///
/// Generic leaves list their parameters after `impl`, one per `;`:
///
/// ```
/// use dynreflect_traits::{impl_raw_type, RawTypeOf};
///
/// struct Pair<A, B>(A, B);
/// impl_raw_type!(impl<A, B> Pair<A, B>);
///
/// fn takes_pair(_: RawTypeOf<&Pair<u8, bool>>) {}
/// takes_pair(Pair(1, true));
/// ```
#[macro_export]
macro_rules! impl_raw_type {
    ($(impl<$($gen:ident),+> $ty:ty);+ $(;)?) => {
        $(
            impl<$($gen),+> $crate::RawType for $ty {
                type Raw = $ty;
            }
        )+
    };
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::RawType for $ty {
                type Raw = $ty;
            }
        )*
    };
}

impl_raw_type!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, (),
    str, String,
);

impl_raw_type!(
    impl<T> Vec<T>;
    impl<T> VecDeque<T>;
    impl<T> LinkedList<T>;
    impl<T> BinaryHeap<T>;
    impl<T> Option<T>;
    impl<T, E> Result<T, E>;
    impl<K, V, S> HashMap<K, V, S>;
    impl<T, S> HashSet<T, S>;
    impl<K, V> BTreeMap<K, V>;
    impl<T> BTreeSet<T>;
    impl<T> Cell<T>;
    impl<T> RefCell<T>;
    impl<T> Mutex<T>;
    impl<T> RwLock<T>;
    impl<T> PhantomData<T>;
);

impl_raw_type!(
    impl<A> (A,);
    impl<A, B> (A, B);
    impl<A, B, C> (A, B, C);
    impl<A, B, C, D> (A, B, C, D);
    impl<A, B, C, D, E> (A, B, C, D, E);
    impl<A, B, C, D, E, F> (A, B, C, D, E, F);
    impl<A, B, C, D, E, F, G> (A, B, C, D, E, F, G);
    impl<A, B, C, D, E, F, G, H> (A, B, C, D, E, F, G, H);
    impl<A, B, C, D, E, F, G, H, I> (A, B, C, D, E, F, G, H, I);
    impl<A, B, C, D, E, F, G, H, I, J> (A, B, C, D, E, F, G, H, I, J);
    impl<A, B, C, D, E, F, G, H, I, J, K> (A, B, C, D, E, F, G, H, I, J, K);
    impl<A, B, C, D, E, F, G, H, I, J, K, L> (A, B, C, D, E, F, G, H, I, J, K, L);
);

impl<T: RawType + ?Sized> RawType for &T {
    type Raw = T::Raw;
}

impl<T: RawType + ?Sized> RawType for &mut T {
    type Raw = T::Raw;
}

impl<T: RawType + ?Sized> RawType for *const T {
    type Raw = T::Raw;
}

impl<T: RawType + ?Sized> RawType for *mut T {
    type Raw = T::Raw;
}

impl<T: RawType, const N: usize> RawType for [T; N] {
    type Raw = T::Raw;
}

impl<T: RawType> RawType for [T] {
    type Raw = T::Raw;
}

impl<T: RawType + ?Sized> RawType for Box<T> {
    type Raw = T::Raw;
}

impl<T: RawType + ?Sized> RawType for Rc<T> {
    type Raw = T::Raw;
}

impl<T: RawType + ?Sized> RawType for Arc<T> {
    type Raw = T::Raw;
}
