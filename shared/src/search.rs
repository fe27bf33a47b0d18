//! State of the weather search form.
//!
//! Every submission gets a sequence number. Only the response to the most
//! recent submission is committed, older ones are dropped when they arrive.

use super::messages::Envelope;
use super::models::{WeatherQuery, WeatherResult};
use super::texts;

#[derive(Clone, Debug, Default)]
pub struct SearchState {
    pub city: String,
    pub loading: bool,
    pub error: Option<String>,
    pub result: Option<WeatherResult>,
    last_seq: u64,
}

/// What came back from the proxy for one submission.
#[derive(Clone, Debug)]
pub enum Outcome {
    /// The proxy answered with an envelope, whatever its status code.
    Received(Envelope),
    /// The request never produced a readable envelope.
    Failed(Option<String>),
}

impl SearchState {
    pub fn set_city(&mut self, city: impl Into<String>) {
        self.city = city.into();
    }

    /// Start a lookup for the current city, returning the sequence number
    /// to hand back to `resolve` with the query to send.
    pub fn submit(&mut self) -> (u64, WeatherQuery) {
        self.last_seq += 1;
        self.loading = true;
        self.error = None;
        self.result = None;
        (self.last_seq, WeatherQuery::new(self.city.clone()))
    }

    /// Commit the outcome of submission `seq`. Returns false when a newer
    /// submission was made since, in which case nothing changes.
    pub fn resolve(&mut self, seq: u64, outcome: Outcome) -> bool {
        if seq != self.last_seq {
            return false;
        }

        let result = match outcome {
            Outcome::Received(envelope) => envelope.into_result(),
            Outcome::Failed(message) => Err(message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| texts::GENERIC_ERROR.to_string())),
        };

        match result {
            Ok(weather) => self.result = Some(weather),
            Err(message) => self.error = Some(message),
        }
        self.loading = false;

        true
    }

    #[cfg(test)]
    fn is_idle(&self) -> bool {
        !self.loading && self.error.is_none() && self.result.is_none()
    }
}
