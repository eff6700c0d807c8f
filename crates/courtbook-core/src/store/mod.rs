// ── Client-side state ──
//
// The selection is the only state the client owns; grid data always
// comes from the backend.

pub mod selection;
pub mod selection_store;

pub use selection::Selection;
pub use selection_store::SelectionStore;
