//! Pretty JSON writer.
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use log::info;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::Error;

const INDENT: &[u8] = b"    ";

fn serialize_into<W, T>(writer: W, value: &T) -> Result<W, Error>
where
    W: Write,
    T: Serialize + ?Sized,
{
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(writer, formatter);
    value.serialize(&mut ser)?;
    Ok(ser.into_inner())
}

/// Serialize `value` into a pretty-printed JSON string.
pub fn to_json_string<T>(value: &T) -> Result<String, Error>
where
    T: Serialize + ?Sized,
{
    let buf = serialize_into(Vec::new(), value)?;
    String::from_utf8(buf).map_err(|e| Error::Custom(e.to_string()))
}

/// Write `value` at `dst`, replacing the file if it exists.
pub fn write_json<T>(value: &T, dst: &Path) -> Result<(), Error>
where
    T: Serialize + ?Sized,
{
    info!("writing {:?}", dst);
    let f = File::create(dst)?;
    let mut writer = serialize_into(BufWriter::new(f), value)?;
    writer.flush()?;
    Ok(())
}
