//! Property command and query handlers.

mod create_property;
mod get_property;
mod list_properties;

pub use create_property::{CreatePropertyCommand, CreatePropertyHandler};
pub use get_property::{GetPropertyHandler, GetPropertyQuery, PropertyDetails};
pub use list_properties::ListPropertiesHandler;
