//! Process-wide shared resources
//!
//! The GML identifier counter and the cached WGS84 definition. `cleanup`
//! releases the cache and may be called any number of times.

use std::sync::{Arc, Mutex, PoisonError};

use lazy_static::lazy_static;
use log::debug;

use crate::srs::constants::wkt;
use crate::srs::errors::SrsResult;
use crate::srs::model::SpatialReference;

lazy_static! {
    static ref GML_ID_COUNTER: Mutex<u64> = Mutex::new(1);
    static ref WGS84_SINGLETON: Mutex<Option<Arc<SpatialReference>>> = Mutex::new(None);
}

/// Next value of the process-wide GML identifier counter
pub fn next_gml_id() -> u64 {
    let mut counter = GML_ID_COUNTER.lock().unwrap_or_else(PoisonError::into_inner);
    let id = *counter;
    *counter += 1;
    id
}

/// Source of GML element identifiers
///
/// `shared()` draws from the process-wide counter; `starting_at` keeps a
/// private one.
#[derive(Debug)]
pub struct GmlContext {
    counter: Option<Mutex<u64>>,
}

impl GmlContext {
    pub fn shared() -> Self {
        GmlContext { counter: None }
    }

    pub fn starting_at(first: u64) -> Self {
        GmlContext { counter: Some(Mutex::new(first)) }
    }

    /// Next identifier value
    pub fn next_id(&self) -> u64 {
        match &self.counter {
            Some(counter) => {
                let mut counter = counter.lock().unwrap_or_else(PoisonError::into_inner);
                let id = *counter;
                *counter += 1;
                id
            }
            None => next_gml_id(),
        }
    }
}

impl Default for GmlContext {
    fn default() -> Self {
        GmlContext::shared()
    }
}

/// The shared WGS84 geographic definition, built on first use
pub fn wgs84() -> SrsResult<Arc<SpatialReference>> {
    let mut slot = WGS84_SINGLETON.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(existing) = slot.as_ref() {
        return Ok(Arc::clone(existing));
    }

    let srs = Arc::new(SpatialReference::from_wkt(wkt::WGS84)?);
    *slot = Some(Arc::clone(&srs));
    Ok(srs)
}

/// Release the shared WGS84 definition
pub fn cleanup() {
    let mut slot = WGS84_SINGLETON.lock().unwrap_or_else(PoisonError::into_inner);
    if slot.take().is_some() {
        debug!("Released shared WGS84 definition");
    }
}
