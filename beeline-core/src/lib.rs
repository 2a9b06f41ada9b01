pub mod gateways;
pub mod usecases;

pub mod entities {
    pub use beeline_entities::{address::*, geo::*};
}
