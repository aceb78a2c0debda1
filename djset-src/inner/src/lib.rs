/// Re-exports each listed crate both as a module and as a glob, with the
/// items inlined into the re-exporting crate's documentation.
///
/// Attributes written in front of an entry (typically `#[cfg(...)]`) are
/// applied to its `use` item.
#[macro_export]
macro_rules! doc_inline_reexport {
    ( $( $(#[$attr:meta])* $lib:ident, )* ) => { $(
        $(#[$attr])*
        #[doc(inline)]
        pub use $lib::{self, *};
    )* };
}
