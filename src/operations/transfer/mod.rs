mod move_positions;
mod transfer_positions;

pub use move_positions::{MovePositions, TransferReport};
pub use transfer_positions::TransferPositions;
