use glider_template_rs::core::defaults::{SCHEMA_INPUT_FILE, SCHEMA_OUTPUT_FILE};
use glider_template_rs::{export_schema, logging};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    export_schema(SCHEMA_INPUT_FILE, SCHEMA_OUTPUT_FILE)?;
    Ok(())
}
