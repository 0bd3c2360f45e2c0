//! Pretty-printing XML writer.

use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::{Error, Result, XmlElement};

/// Convert an element tree to an indented XML string with a declaration.
pub fn to_xml_string(root: &XmlElement) -> Result<String> {
    let mut output = Vec::new();
    write_xml(root, &mut output)?;
    Ok(String::from_utf8(output)?)
}

/// Write an element tree as XML, indented by two spaces.
///
/// The output starts with an XML declaration and ends with a newline.
pub fn write_xml<W: Write>(root: &XmlElement, writer: &mut W) -> Result<()> {
    let mut xml_writer = Writer::new_with_indent(&mut *writer, b' ', 2);

    xml_writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
        .map_err(|e| Error::Xml(e.to_string()))?;

    write_element(&mut xml_writer, root)?;

    writer.write_all(b"\n")?;
    Ok(())
}

/// Write a single element and its children.
fn write_element<W: Write>(writer: &mut Writer<W>, element: &XmlElement) -> Result<()> {
    let mut start = BytesStart::new(element.tag.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.children.is_empty() && element.text.is_empty() {
        // Self-closing element
        writer
            .write_event(Event::Empty(start))
            .map_err(|e| Error::Xml(e.to_string()))?;
        return Ok(());
    }

    writer
        .write_event(Event::Start(start))
        .map_err(|e| Error::Xml(e.to_string()))?;

    if !element.text.is_empty() {
        writer
            .write_event(Event::Text(BytesText::new(&element.text)))
            .map_err(|e| Error::Xml(e.to_string()))?;
    }

    for child in &element.children {
        write_element(writer, child)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new(element.tag.as_str())))
        .map_err(|e| Error::Xml(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_element;

    #[test]
    fn test_write_indented() {
        let root = XmlElement::new("linden_genepool")
            .with_attr("version", "1.0")
            .with_child(
                XmlElement::new("archetype")
                    .with_attr("name", "???")
                    .with_child(XmlElement::new("param").with_attr("id", "33")),
            );

        let xml = to_xml_string(&root).unwrap();
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
             <linden_genepool version=\"1.0\">\n\
             \x20 <archetype name=\"???\">\n\
             \x20   <param id=\"33\"/>\n\
             \x20 </archetype>\n\
             </linden_genepool>\n"
        );
    }

    #[test]
    fn test_write_escapes_values() {
        let root = XmlElement::new("archetype").with_attr("name", "Tom & \"Jerry\"");
        let xml = to_xml_string(&root).unwrap();
        assert!(xml.contains("Tom &amp; &quot;Jerry&quot;"));

        let reparsed = parse_element(&xml).unwrap();
        assert_eq!(reparsed, root);
    }

    #[test]
    fn test_write_text_content() {
        let root = XmlElement::new("note").with_text("a < b");
        let xml = to_xml_string(&root).unwrap();
        assert!(xml.contains("<note>a &lt; b</note>"));
    }
}
