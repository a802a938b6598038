use crate::DynamicArray;

macro_rules! impl_slice_eq {
    ([$($vars:tt)*] $lhs:ty, $rhs:ty) => {
        impl<T, U, $($vars)*> PartialEq<$rhs> for $lhs
        where
            T: PartialEq<U>,
        {
            #[inline]
            fn eq(&self, other: &$rhs) -> bool { self[..] == other[..] }
            #[inline]
            fn ne(&self, other: &$rhs) -> bool { self[..] != other[..] }
        }
    }
}

impl_slice_eq! { [] DynamicArray<T>, DynamicArray<U> }
impl_slice_eq! { [] DynamicArray<T>, [U] }
impl_slice_eq! { [] DynamicArray<T>, &[U] }
impl_slice_eq! { [] DynamicArray<T>, &mut [U] }
impl_slice_eq! { [] [T], DynamicArray<U> }
impl_slice_eq! { [] &[T], DynamicArray<U> }
impl_slice_eq! { [] &mut [T], DynamicArray<U> }
impl_slice_eq! { [const N: usize] DynamicArray<T>, [U; N] }
impl_slice_eq! { [const N: usize] DynamicArray<T>, &[U; N] }
impl_slice_eq! { [const N: usize] DynamicArray<T>, &mut [U; N] }
impl_slice_eq! { [const N: usize] [T; N], DynamicArray<U> }
