pub mod board;
pub mod card;
pub mod id;
pub mod list;
pub mod placement;

pub use board::Board;
pub use card::Card;
pub use id::{BoardId, CardId, ListId};
pub use list::List;
pub use placement::{insertion_index, Slot};
