pub mod source;
pub mod product {
    pub mod entity;
    pub mod registry;
}
