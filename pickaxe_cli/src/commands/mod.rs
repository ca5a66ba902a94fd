mod serve;
mod studios;

pub use serve::serve;
pub use studios::studios;
