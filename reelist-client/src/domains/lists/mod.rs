//! List management stores: overview, detail screen and the add-to-list
//! picker.

pub mod add_to_list;
pub mod list_details;
pub mod user_lists;

pub use add_to_list::{AddToListState, AddToListStore};
pub use list_details::{ListDetailsState, ListDetailsStore};
pub use user_lists::{ListsOwner, UserListsState, UserListsStore};
