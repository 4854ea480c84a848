pub(crate) mod overview;
pub(crate) mod product_table;
