use super::StructuredError;
use core::fmt::{self, Display};

impl Display for StructuredError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[code]: {}", self.code)?;

        if !self.label.is_empty() {
            write!(f, " [error]: {}", self.label)?;
        }

        if !self.message.is_empty() {
            write!(f, " [message]: {}", self.message)?;
        }

        if let Some(domain) = &self.domain {
            write!(f, " [domain]: {}", domain)?;
        }

        if self.display_time {
            write!(f, " [time]: {}", self.unix_nanos())?;
        }

        Ok(())
    }
}

impl std::error::Error for StructuredError {}

#[cfg(feature = "serde")]
impl serde::Serialize for StructuredError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let rendered = self.render();
        let mut map = serializer.serialize_map(Some(rendered.len()))?;
        for (key, value) in &rendered {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
