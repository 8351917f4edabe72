// Fri Oct 16 2026 - Alex

use serde::Serialize;
use serde_json::{to_string, to_string_pretty, Value};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JsonError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub struct JsonSerializer {
    pretty_print: bool,
    include_listing: bool,
}

impl JsonSerializer {
    pub fn new() -> Self {
        Self {
            pretty_print: true,
            include_listing: true,
        }
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    pub fn with_listing(mut self, include: bool) -> Self {
        self.include_listing = include;
        self
    }

    pub fn serialize<T: Serialize>(&self, output: &T) -> Result<String, JsonError> {
        let mut value = serde_json::to_value(output)?;

        if !self.include_listing {
            if let Value::Object(map) = &mut value {
                map.remove("listing");
            }
        }

        let json = if self.pretty_print {
            to_string_pretty(&value)?
        } else {
            to_string(&value)?
        };
        Ok(json)
    }

    pub fn serialize_to_file<T: Serialize, P: AsRef<Path>>(&self, output: &T, path: P) -> Result<(), JsonError> {
        let json = self.serialize(output)?;

        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        writer.write_all(json.as_bytes())?;
        writer.flush()?;

        log::info!("Wrote {}", path.as_ref().display());
        Ok(())
    }
}

impl Default for JsonSerializer {
    fn default() -> Self {
        Self::new()
    }
}
