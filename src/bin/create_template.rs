use glider_template_rs::core::defaults::TEMPLATE_FILE;
use glider_template_rs::{create_template, logging};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    create_template(TEMPLATE_FILE)?;
    Ok(())
}
