//! Container snapshots in `MessagePack`.
//!
//! A container is encoded as its ordered list of `[key, value]` pairs.
//! Decoding replays those pairs through [`ExMap::set`], so the key mode and
//! side table are rebuilt rather than stored. Configuration is not part of a
//! snapshot; decoded containers use the default.

use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::marker::PhantomData;
use std::path::Path;

use exmap_foundation::{Error, ErrorContext, Result, Value};
use serde::de::{DeserializeOwned, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::map::ExMap;
use crate::payload::Payload;

impl<V: Serialize> Serialize for ExMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, V> Deserialize<'de> for ExMap<V>
where
    V: Deserialize<'de> + Payload,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_seq(EntriesVisitor(PhantomData))
    }
}

struct EntriesVisitor<V>(PhantomData<V>);

impl<'de, V> Visitor<'de> for EntriesVisitor<V>
where
    V: Deserialize<'de> + Payload,
{
    type Value = ExMap<V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a sequence of [key, value] pairs")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error> {
        let mut map = ExMap::new();
        while let Some((key, value)) = seq.next_element::<(Value, V)>()? {
            map.set(key, value);
        }
        Ok(map)
    }
}

/// Encodes a container to `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if a value cannot be encoded.
pub fn to_bytes<V: Serialize>(map: &ExMap<V>) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(map).map_err(|e| Error::serialization(e.to_string()))
}

/// Decodes a container from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not a valid container encoding.
pub fn from_bytes<V: DeserializeOwned + Payload>(bytes: &[u8]) -> Result<ExMap<V>> {
    rmp_serde::from_slice(bytes).map_err(|e| Error::deserialization(e.to_string()))
}

fn at(path: &Path, frame: &str) -> ErrorContext {
    ErrorContext::new()
        .with_source(path.display().to_string())
        .with_frame(frame)
}

/// Writes a container snapshot to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns an error if encoding fails or the file cannot be written.
pub fn save_to_file<V: Serialize, P: AsRef<Path>>(map: &ExMap<V>, path: P) -> Result<()> {
    let path = path.as_ref();
    let bytes = to_bytes(map).map_err(|e| e.with_context(at(path, "save_to_file")))?;

    let file = File::create(path).map_err(|e| {
        Error::io(format!("failed to create file: {e}")).with_context(at(path, "save_to_file"))
    })?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(&bytes)
        .and_then(|()| writer.flush())
        .map_err(|e| {
            Error::io(format!("failed to write file: {e}")).with_context(at(path, "save_to_file"))
        })?;

    tracing::debug!(path = %path.display(), entries = map.len(), bytes = bytes.len(), "saved snapshot");
    Ok(())
}

/// Reads a container snapshot from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not decode.
pub fn load_from_file<V: DeserializeOwned + Payload, P: AsRef<Path>>(path: P) -> Result<ExMap<V>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        Error::io(format!("failed to open file: {e}")).with_context(at(path, "load_from_file"))
    })?;

    let mut bytes = Vec::new();
    BufReader::new(file).read_to_end(&mut bytes).map_err(|e| {
        Error::io(format!("failed to read file: {e}")).with_context(at(path, "load_from_file"))
    })?;

    let map = from_bytes(&bytes).map_err(|e| e.with_context(at(path, "load_from_file")))?;
    tracing::debug!(path = %path.display(), entries = map.len(), "loaded snapshot");
    Ok(map)
}
