pub mod intake;
pub mod sliding_fee;
