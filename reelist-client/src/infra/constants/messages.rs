//! User-facing failure messages. One fixed string per operation; the
//! underlying cause only goes to the log.

pub mod lists {
    pub const LOAD_FAILED: &str = "No se pudieron cargar las listas.";
    pub const CREATE_FAILED: &str = "No se pudo crear la lista.";
    pub const DELETE_FAILED: &str = "No se pudo eliminar la lista.";
}

pub mod details {
    pub const LOAD_FAILED: &str = "No se pudo cargar la lista.";
    pub const UPDATE_FAILED: &str = "No se pudo actualizar la lista.";
    pub const ADD_ITEM_FAILED: &str = "No se pudo agregar la película.";
    pub const REMOVE_ITEM_FAILED: &str = "No se pudo quitar la película.";
    pub const UPDATE_ITEM_FAILED: &str = "No se pudo actualizar la nota.";
    pub const DELETE_FAILED: &str = "No se pudo eliminar la lista.";
}

pub mod add_to_list {
    pub const LOAD_FAILED: &str = "No se pudieron cargar las listas.";
    pub const ADD_FAILED: &str = "No se pudo agregar la película a la lista.";
    pub const CREATE_FAILED: &str = "No se pudo crear la lista.";
}

pub mod search {
    pub const MOVIES_FAILED: &str = "No se pudieron buscar películas.";
    pub const LISTS_FAILED: &str = "No se pudieron buscar listas.";
}
