pub mod analysis;
pub mod farcaster;
