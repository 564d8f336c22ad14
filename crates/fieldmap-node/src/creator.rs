//! Field creator node: build, encode, publish.

use fieldmap_core::{FieldSpec, codec};

use crate::bus::Bus;
use crate::error::BusError;

/// Publishes encoded field maps on one topic.
#[derive(Debug, Clone)]
pub struct FieldCreator {
    bus: Bus,
    topic: String,
}

impl FieldCreator {
    pub fn new(bus: Bus, topic: impl Into<String>) -> Self {
        Self {
            bus,
            topic: topic.into(),
        }
    }

    /// Build the field, encode it and hand it to the bus. Returns the
    /// published payload.
    pub fn publish(&self, spec: &FieldSpec) -> Result<String, BusError> {
        let grid = spec.build();
        let payload = codec::encode(&grid);
        let delivered = self.bus.publish(&self.topic, &payload)?;
        log::debug!(
            "{}x{} field map on {:?}, {} subscriber(s)",
            grid.width(),
            grid.height(),
            self.topic,
            delivered
        );
        log::info!("Field map published.");
        Ok(payload)
    }
}
