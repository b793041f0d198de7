use super::{DocumentWriter, ScenarioDocument};
use std::io::Write;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> DocumentWriter for JsonWriter<W> {
    fn write_document(&mut self, document: &ScenarioDocument<'_>) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(document)?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}
