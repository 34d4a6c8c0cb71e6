use std::fmt::Display;
use std::str::FromStr;
use std::time::{Duration, SystemTime};

use base64::Engine;
use base64::prelude::BASE64_URL_SAFE;
use rand::Rng;
use rand::rngs::ThreadRng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const TIMESTAMP_BYTES: usize = 4;
const PROCESS_BYTES: usize = 5;
const COUNTER_BYTES: usize = 3;

pub const OBJECT_ID_LEN: usize = TIMESTAMP_BYTES + PROCESS_BYTES + COUNTER_BYTES;

const _: () = assert!(OBJECT_ID_LEN == 12);

const PROCESS_OFFSET: usize = TIMESTAMP_BYTES;
const COUNTER_OFFSET: usize = PROCESS_OFFSET + PROCESS_BYTES;

const COUNTER_MASK: u32 = (1 << (COUNTER_BYTES * 8)) - 1;

/// Document key laid out as a big-endian seconds timestamp, a per-generator random
/// block and a wrapping counter. Ordering follows creation time at second granularity.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Copy, Clone)]
pub struct ObjectId([u8; OBJECT_ID_LEN]);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid object id `{0}`")]
pub struct ParseObjectIdError(String);

impl ObjectId {
    pub const fn from_bytes(bytes: [u8; OBJECT_ID_LEN]) -> Self {
        Self(bytes)
    }

    pub const fn bytes(&self) -> [u8; OBJECT_ID_LEN] {
        self.0
    }

    pub fn timestamp(&self) -> SystemTime {
        let mut seconds = [0u8; TIMESTAMP_BYTES];
        seconds.copy_from_slice(&self.0[..PROCESS_OFFSET]);
        SystemTime::UNIX_EPOCH + Duration::from_secs(u32::from_be_bytes(seconds) as u64)
    }

    pub fn counter(&self) -> u32 {
        let mut counter = [0u8; 4];
        counter[1..].copy_from_slice(&self.0[COUNTER_OFFSET..]);
        u32::from_be_bytes(counter)
    }

    pub fn as_base64(&self) -> String {
        BASE64_URL_SAFE.encode(self.0)
    }

    pub fn from_base64(base64: &str) -> Option<Self> {
        let bytes = BASE64_URL_SAFE.decode(base64).ok()?;
        Some(Self(bytes.try_into().ok()?))
    }

    pub fn as_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn from_hex(hex: &str) -> Option<Self> {
        let bytes = hex::decode(hex).ok()?;
        Some(Self(bytes.try_into().ok()?))
    }
}

impl Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_hex())
    }
}

impl FromStr for ObjectId {
    type Err = ParseObjectIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s).ok_or_else(|| ParseObjectIdError(s.to_string()))
    }
}

impl Serialize for ObjectId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_hex())
    }
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        hex.parse().map_err(serde::de::Error::custom)
    }
}

crate::described!(ObjectId);

pub struct ObjectIdGenerator {
    process: [u8; PROCESS_BYTES],
    counter: u32,
    rng: ThreadRng,
}

impl ObjectIdGenerator {
    pub fn new() -> Self {
        let mut rng = rand::thread_rng();
        Self {
            process: rng.gen(),
            counter: rng.gen::<u32>() & COUNTER_MASK,
            rng,
        }
    }

    /// Draws a fresh random block, so ids from this generator no longer share a prefix
    /// with ids generated before the call.
    pub fn reseed(&mut self) {
        self.process = self.rng.gen();
    }

    pub fn generate(&mut self) -> ObjectId {
        self.generate_at(SystemTime::now())
    }

    fn generate_at(&mut self, now: SystemTime) -> ObjectId {
        // Clocks before the epoch collapse to zero rather than failing key creation
        let seconds = now
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs() as u32)
            .unwrap_or_default();
        self.counter = self.counter.wrapping_add(1) & COUNTER_MASK;

        let mut bytes = [0u8; OBJECT_ID_LEN];
        bytes[..PROCESS_OFFSET].copy_from_slice(&seconds.to_be_bytes());
        bytes[PROCESS_OFFSET..COUNTER_OFFSET].copy_from_slice(&self.process);
        bytes[COUNTER_OFFSET..].copy_from_slice(&self.counter.to_be_bytes()[1..]);
        ObjectId(bytes)
    }
}

impl Default for ObjectIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
