//! Various unsorted geometrical and numerical operators.

pub use self::center::center;
pub(crate) use self::inv::inv;
pub use self::kabsch::kabsch_rotation;
pub(crate) use self::obj_tokens::obj_tokens;
#[cfg(feature = "wavefront")]
pub(crate) use self::obj_tokens::parse_vertex_line;

mod center;
mod inv;
mod kabsch;
mod obj_tokens;
