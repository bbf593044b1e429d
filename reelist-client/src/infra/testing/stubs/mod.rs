pub mod catalog;
pub mod lists;

pub use catalog::StubMovieCatalog;
pub use lists::StubListsService;
