pub mod gallery;
pub mod management;
