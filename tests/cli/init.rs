use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert!(output.status.success());
    assert!(stderr(&output).contains("Created .xliffrc.json"));
    let config: serde_json::Value = serde_json::from_str(&test.read_file(".xliffrc.json")?)?;
    assert_eq!(config["sourceLang"], "en");
    assert_eq!(config["functions"][0], "i18n");

    Ok(())
}

#[test]
fn test_init_existing_config() -> Result<()> {
    let test = CliTest::with_file(".xliffrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(".xliffrc.json already exists"));
    assert_eq!(test.read_file(".xliffrc.json")?, "{}");

    Ok(())
}
