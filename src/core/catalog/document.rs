//! XLIFF 1.2 catalog document assembly.

use crate::core::{
    catalog::xml::{XmlDocument, XmlElement},
    extract::TranslationUnit,
};

const XML_VERSION: &str = "1.1";
const XML_ENCODING: &str = "utf-8";
const XLIFF_VERSION: &str = "1.2";
const XMLNS: &str = "urn:oasis:names:tc:xliff:document:1.2";

const FILE_ORIGINAL: &str = "typescript.file";
const FILE_DATATYPE: &str = "plaintext";
/// Spelled exactly as downstream consumers of these catalogs read it.
const SOURCE_LANGUAGE_ATTR: &str = "source-languge";

const ROOT_TAG: &str = "xliff";
const FILE_TAG: &str = "file";
const BODY_TAG: &str = "body";
const UNIT_TAG: &str = "trans-unit";
const CONTEXT_GROUP_TAG: &str = "context-group";
const CONTEXT_TAG: &str = "context";
const SOURCE_TAG: &str = "source";
const NOTE_TAG: &str = "note";

const NOTE_PRIORITY: &str = "1";

/// Wrap `units`, in order, into a complete XLIFF document.
pub fn build(source_lang: &str, units: &[TranslationUnit]) -> XmlDocument {
    let body = XmlElement::new(BODY_TAG).children(units.iter().map(trans_unit));

    let file = XmlElement::new(FILE_TAG)
        .attr("original", FILE_ORIGINAL)
        .attr("datatype", FILE_DATATYPE)
        .attr(SOURCE_LANGUAGE_ATTR, source_lang)
        .child(body);

    let root = XmlElement::new(ROOT_TAG)
        .attr("version", XLIFF_VERSION)
        .attr("xmlns", XMLNS)
        .child(file);

    XmlDocument {
        version: XML_VERSION.to_string(),
        encoding: XML_ENCODING.to_string(),
        root,
    }
}

fn trans_unit(unit: &TranslationUnit) -> XmlElement {
    let location = XmlElement::new(CONTEXT_GROUP_TAG)
        .attr("purpose", "location")
        .child(
            XmlElement::new(CONTEXT_TAG)
                .attr("context-type", "sourcefile")
                .text(unit.location.file.as_str()),
        )
        .child(
            XmlElement::new(CONTEXT_TAG)
                .attr("context-type", "offset")
                .text(unit.location.offset.to_string()),
        );

    let mut element = XmlElement::new(UNIT_TAG)
        .attr("id", unit.id.as_str())
        .child(location)
        .child(XmlElement::new(SOURCE_TAG).text(unit.source_text.as_str()));

    // Meaning always precedes description.
    if let Some(meaning) = &unit.meaning {
        element = element.child(note("meaning", meaning));
    }
    if let Some(description) = &unit.description {
        element = element.child(note("description", description));
    }

    element
}

fn note(from: &str, text: &str) -> XmlElement {
    XmlElement::new(NOTE_TAG)
        .attr("from", from)
        .attr("priority", NOTE_PRIORITY)
        .text(text)
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::extract::SourceLocation;

    fn unit(id: &str, text: &str, meaning: Option<&str>, description: Option<&str>) -> TranslationUnit {
        TranslationUnit {
            id: id.to_string(),
            source_text: text.to_string(),
            location: SourceLocation {
                file: "a.ts".to_string(),
                offset: 42,
            },
            meaning: meaning.map(String::from),
            description: description.map(String::from),
        }
    }

    #[test]
    fn test_empty_catalog() {
        let xml = build("en", &[]).to_xml_string();

        assert_snapshot!(xml, @r#"
        <?xml version="1.1" encoding="utf-8"?>
        <xliff version="1.2" xmlns="urn:oasis:names:tc:xliff:document:1.2">
          <file original="typescript.file" datatype="plaintext" source-languge="en">
            <body/>
          </file>
        </xliff>
        "#);
    }

    #[test]
    fn test_full_unit() {
        let units = [unit("greeting", "\"Hello\"", Some("a meaning"), Some("a desc"))];
        let xml = build("en", &units).to_xml_string();

        assert_snapshot!(xml, @r#"
        <?xml version="1.1" encoding="utf-8"?>
        <xliff version="1.2" xmlns="urn:oasis:names:tc:xliff:document:1.2">
          <file original="typescript.file" datatype="plaintext" source-languge="en">
            <body>
              <trans-unit id="greeting">
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
        </xliff>
        "#);
    }

    #[test]
    fn test_note_order_and_gating() {
        let units = [
            unit("a", "'A'", None, Some("only desc")),
            unit("b", "'B'", Some("only meaning"), None),
            unit("c", "'C'", None, None),
        ];
        let doc = build("de", &units);

        let body = doc
            .root
            .elements()
            .next()
            .and_then(|file| file.elements().next())
            .unwrap();
        let notes: Vec<Vec<&str>> = body
            .elements()
            .map(|tu| {
                tu.elements()
                    .filter(|e| e.name == NOTE_TAG)
                    .filter_map(|e| e.get_attr("from"))
                    .collect()
            })
            .collect();

        assert_eq!(
            notes,
            vec![vec!["description"], vec!["meaning"], Vec::<&str>::new()]
        );
    }

    #[test]
    fn test_units_keep_input_order() {
        let units = [
            unit("z", "'Z'", None, None),
            unit("a", "'A'", None, None),
            unit("m", "'M'", None, None),
        ];
        let doc = build("en", &units);
        let body = doc
            .root
            .elements()
            .next()
            .and_then(|file| file.elements().next())
            .unwrap();

        let ids: Vec<_> = body.elements().filter_map(|tu| tu.get_attr("id")).collect();
        assert_eq!(ids, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_source_language_attribute() {
        let doc = build("fr-CA", &[]);
        let file = doc.root.elements().next().unwrap();

        assert_eq!(file.get_attr("source-languge"), Some("fr-CA"));
        assert_eq!(file.get_attr("source-language"), None);
    }

    #[test]
    fn test_source_text_is_escaped_on_output() {
        let units = [unit("x", "'a < b & c'", None, None)];
        let xml = build("en", &units).to_xml_string();

        assert!(xml.contains("<source>'a &lt; b &amp; c'</source>"));
    }
}
