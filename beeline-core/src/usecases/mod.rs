mod calculate_distance;
mod error;


pub use self::{calculate_distance::*, error::*};

mod prelude {
    pub use super::error::{AddressPosition, Error};
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, gateways::geocode::*};
}
