use std::path::Path;

use anyhow::bail;
use verdante_core::ProjectDocument;

pub fn init(path: &str, format: &str) -> anyhow::Result<()> {
    let doc = ProjectDocument::seed();
    let (name, content) = match format {
        "toml" => ("verdante.toml", doc.to_toml_string()?),
        "json" => ("verdante.json", doc.to_json_string()?),
        other => bail!("unsupported document format: {other} (expected toml or json)"),
    };

    let output = Path::new(path).join(name);
    if output.exists() {
        bail!("{} already exists", output.display());
    }
    std::fs::write(&output, content)?;
    println!("✓ Generated {}", output.display());

    Ok(())
}
