pub mod drag_state;

pub use drag_state::DragSession;
