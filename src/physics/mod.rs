mod body;
mod traits;

pub use body::BodyHandle;
pub use traits::PhysicalBody;
