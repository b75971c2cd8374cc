//! Macros for terse parcel lists.

/// Build a `Vec<Parcel>` from `place => address` pairs.
///
/// # Example
///
/// ```
/// use village::parcels;
/// use village::core::Parcel;
///
/// let parcels = parcels![
///     "Post Office" => "Cabin",
///     "Farm" => "Shop",
/// ];
///
/// assert_eq!(parcels[0], Parcel::new("Post Office", "Cabin"));
/// assert_eq!(parcels.len(), 2);
/// ```
#[macro_export]
macro_rules! parcels {
    () => {
        ::std::vec::Vec::<$crate::core::Parcel>::new()
    };
    ($($place:expr => $address:expr),+ $(,)?) => {
        ::std::vec![$($crate::core::Parcel::new($place, $address)),+]
    };
}
