//! trakt API model types.

mod auth;
mod calendar;
mod enums;
mod episode;
mod genre;
mod ids;
mod movie;
mod show;
mod sync;

pub use auth::*;
pub use calendar::*;
pub use enums::*;
pub use episode::*;
pub use genre::*;
pub use ids::*;
pub use movie::*;
pub use show::*;
pub use sync::*;
