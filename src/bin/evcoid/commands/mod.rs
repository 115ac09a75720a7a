pub mod compute;
pub mod parse;
pub mod verify;
