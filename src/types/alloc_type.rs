#[cfg(feature = "std")]
pub type Cow<'a, B> = std::borrow::Cow<'a, B>;
#[cfg(not(feature = "std"))]
pub type Cow<'a, B> = alloc::borrow::Cow<'a, B>;

#[cfg(feature = "std")]
pub type Box<T> = std::boxed::Box<T>;
#[cfg(not(feature = "std"))]
pub type Box<T> = alloc::boxed::Box<T>;

#[cfg(feature = "std")]
pub type Vec<T> = std::vec::Vec<T>;
#[cfg(not(feature = "std"))]
pub type Vec<T> = alloc::vec::Vec<T>;

#[cfg(feature = "std")]
pub type String = std::string::String;
#[cfg(not(feature = "std"))]
pub type String = alloc::string::String;

#[cfg(feature = "std")]
pub type Arc<T> = std::sync::Arc<T>;
#[cfg(not(feature = "std"))]
pub type Arc<T> = alloc::sync::Arc<T>;

#[cfg(feature = "std")]
pub type BTreeMap<K, V> = std::collections::BTreeMap<K, V>;
#[cfg(not(feature = "std"))]
pub type BTreeMap<K, V> = alloc::collections::BTreeMap<K, V>;

#[cfg(feature = "std")]
pub type BTreeSet<T> = std::collections::BTreeSet<T>;
#[cfg(not(feature = "std"))]
pub type BTreeSet<T> = alloc::collections::BTreeSet<T>;
