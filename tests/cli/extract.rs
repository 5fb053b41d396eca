use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

/// Value of the first `id="..."` attribute in `xml`.
fn first_id(xml: &str) -> &str {
    let start = xml.find("trans-unit id=\"").unwrap() + "trans-unit id=\"".len();
    let end = start + xml[start..].find('"').unwrap();
    &xml[start..end]
}

#[test]
fn test_extract_scenario() -> Result<()> {
    let prefix = format!("{:<41}\n", "// landing page greeting");
    assert_eq!(prefix.len(), 42);

    let test = CliTest::with_file(
        "proj/a.ts",
        &format!("{prefix}i18n(\"Hello\", \"a desc\", \"a meaning\");\n"),
    )?;
    test.create_dir("out")?;

    let output = test
        .extract_command()
        .args(["--project-dir", "proj", "--output-dir", "out", "--source-lang", "en"])
        .output()?;

    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("Extracted 1 translation unit from 1 source file"));

    let xml = test.read_file("out/messages.xlf")?;
    let id = first_id(&xml);
    assert_eq!(id.len(), 16);

    let expected = format!(
        r#"<?xml version="1.1" encoding="utf-8"?>
<xliff version="1.2" xmlns="urn:oasis:names:tc:xliff:document:1.2">
  <file original="typescript.file" datatype="plaintext" source-languge="en">
    <body>
      <trans-unit id="{id}">
        <context-group purpose="location">
          <context context-type="sourcefile">a.ts</context>
          <context context-type="offset">42</context>
        </context-group>
        <source>"Hello"</source>
        <note from="meaning" priority="1">a meaning</note>
        <note from="description" priority="1">a desc</note>
      </trans-unit>
    </body>
  </file>
</xliff>"#
    );
    assert_eq!(xml, expected);

    Ok(())
}

#[test]
fn test_extract_variable_description() -> Result<()> {
    let test = CliTest::with_file(
        "a.ts",
        "const desc = 'a desc';\ni18n(\"Hello\", desc, \"a meaning\");\n",
    )?;

    let output = test.extract_command().output()?;

    assert!(output.status.success(), "{}", stderr(&output));
    let xml = test.read_file("messages.xlf")?;
    assert!(xml.contains(r#"<note from="meaning" priority="1">a meaning</note>"#));
    assert!(!xml.contains(r#"from="description""#));

    Ok(())
}

#[test]
fn test_extract_multiple_files_in_order() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/b.ts", "export const b = [i18n('b1'), i18n('b2')];")?;
    test.write_file("src/a.ts", "export const a = i18n('a1');")?;
    test.write_file("src/nested/c.ts", "export const c = i18n(i18n('c-inner'));")?;
    test.write_file("src/types.d.ts", "declare function i18n(text: string): string;")?;

    let output = test
        .extract_command()
        .args(["--project-dir", "src"])
        .output()?;

    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("Extracted 5 translation units from 3 source files"));

    let xml = test.read_file("messages.xlf")?;
    let sources: Vec<_> = xml
        .lines()
        .filter_map(|l| l.trim().strip_prefix("<source>"))
        .filter_map(|l| l.strip_suffix("</source>"))
        .collect();
    assert_eq!(
        sources,
        vec!["'a1'", "'b1'", "'b2'", "i18n('c-inner')", "'c-inner'"]
    );
    assert!(xml.contains("<context context-type=\"sourcefile\">nested/c.ts</context>"));

    Ok(())
}

#[test]
fn test_extract_uses_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".xliffrc.json",
        r#"{
            "projectDir": "app",
            "outputDir": "locale",
            "sourceLang": "de",
            "ignore": ["**/*.spec.ts"],
            "functions": ["translate"]
        }"#,
    )?;
    test.write_file("app/main.ts", "translate('Hallo'); i18n('not ours');")?;
    test.write_file("app/main.spec.ts", "translate('only in tests');")?;
    test.create_dir("locale")?;

    let output = test.extract_command().output()?;

    assert!(output.status.success(), "{}", stderr(&output));
    let xml = test.read_file("locale/messages.xlf")?;
    assert!(xml.contains("source-languge=\"de\""));
    assert!(xml.contains("<source>'Hallo'</source>"));
    assert!(!xml.contains("not ours"));
    assert!(!xml.contains("only in tests"));

    Ok(())
}

#[test]
fn test_extract_is_deterministic() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a.ts", "i18n('one', 'desc'); i18n('two', undefined, 'meaning');")?;
    test.write_file("b.ts", "class A { t = this.i18n(`three`); }")?;

    assert!(test.extract_command().output()?.status.success());
    let first = test.read_file("messages.xlf")?;
    assert!(test.extract_command().output()?.status.success());
    let second = test.read_file("messages.xlf")?;

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_extract_fail_fast_writes_nothing() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/1.ts", "i18n('one');")?;
    test.write_file("src/2.ts", "i18n('two');")?;
    test.write_file("src/3.ts", "i18n();")?;
    test.write_file("src/4.ts", "i18n('four');")?;
    test.write_file("src/5.ts", "i18n('five');")?;

    let output = test
        .extract_command()
        .args(["--project-dir", "src"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(
        stderr(&output).contains("3.ts:0: cannot classify call: missing message text argument")
    );
    assert!(!test.root().join("messages.xlf").exists());

    Ok(())
}

#[test]
fn test_extract_parse_error() -> Result<()> {
    let test = CliTest::with_file("broken.ts", "export const = ;")?;

    let output = test.extract_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("failed to parse"));
    assert!(!test.root().join("messages.xlf").exists());

    Ok(())
}

#[test]
fn test_extract_missing_output_dir() -> Result<()> {
    let test = CliTest::with_file("a.ts", "i18n('Hello');")?;

    let output = test
        .extract_command()
        .args(["--output-dir", "missing"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("output directory does not exist"));

    Ok(())
}

#[test]
fn test_extract_no_source_files() -> Result<()> {
    let test = CliTest::with_file("README.md", "# nothing here")?;

    let output = test.extract_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("no source files found"));

    Ok(())
}

#[test]
fn test_extract_verbose_lists_units() -> Result<()> {
    let test = CliTest::with_file("a.ts", "i18n('Hello', 'd', 'm', 'greeting');")?;

    let output = test.extract_command().arg("--verbose").output()?;

    assert!(output.status.success(), "{}", stderr(&output));
    let err = stderr(&output);
    assert!(err.contains("No .xliffrc.json found"));
    assert!(err.contains("greeting a.ts:0 'Hello'"));

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("extract"));

    Ok(())
}
