pub mod messages;
pub mod models;
pub mod search;
pub mod texts;

pub use messages::Envelope;
pub use models::{WeatherQuery, WeatherResult};
