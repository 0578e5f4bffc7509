mod avatar;
mod badges;
mod header;
mod hero;
mod toaster;

pub use avatar::Avatar;
pub use badges::{PriorityBadge, ProjectStatusBadge, TaskStatusBadge};
pub use header::{BackLink, Brand, Header};
pub use hero::Hero;
pub use toaster::Toaster;
