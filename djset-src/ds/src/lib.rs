use inner::doc_inline_reexport;

doc_inline_reexport! {
    any_disjoint_set,
    disjoint_set,
    path_compression,
    quick_find,
    quick_union,
    union_by_rank,
}
