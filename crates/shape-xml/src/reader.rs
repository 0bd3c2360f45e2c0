//! Parse XML text into an [`XmlElement`] tree.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::{Error, Result, XmlElement};

/// Parse XML text into its root element.
///
/// Declarations, comments and processing instructions are skipped. The
/// document must contain exactly one root element and every element must be
/// closed.
///
/// # Example
///
/// ```
/// use shape_xml::parse_element;
///
/// let root = parse_element(r#"<?xml version="1.0"?><a><param id="1" u8="10"/></a>"#)?;
/// assert_eq!(root.tag, "a");
/// assert_eq!(root.children[0].attribute("u8"), Some("10"));
/// # Ok::<(), shape_xml::Error>(())
/// ```
pub fn parse_element(xml: &str) -> Result<XmlElement> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let element = element_from_start(&e, &reader)?;
                if stack.is_empty() && root.is_some() {
                    return Err(multiple_roots(&reader));
                }
                stack.push(element);
            }
            Ok(Event::Empty(e)) => {
                // Self-closing element
                let element = element_from_start(&e, &reader)?;
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(element);
                } else if root.is_some() {
                    return Err(multiple_roots(&reader));
                } else {
                    root = Some(element);
                }
            }
            Ok(Event::End(_)) => {
                if let Some(element) = stack.pop() {
                    if let Some(parent) = stack.last_mut() {
                        parent.children.push(element);
                    } else {
                        root = Some(element);
                    }
                }
            }
            Ok(Event::Text(e)) => {
                let Some(element) = stack.last_mut() else {
                    return Err(text_outside_root(&reader));
                };
                let text = e.unescape().map_err(|e| Error::Parse {
                    position: reader.buffer_position(),
                    message: e.to_string(),
                })?;
                element.text.push_str(&text);
            }
            Ok(Event::CData(e)) => {
                let Some(element) = stack.last_mut() else {
                    return Err(text_outside_root(&reader));
                };
                element.text.push_str(&String::from_utf8_lossy(&e.into_inner()));
            }
            Ok(Event::Eof) => break,
            Ok(_) => {} // Declarations, comments, doctypes, PIs
            Err(e) => {
                return Err(Error::Parse {
                    position: reader.error_position(),
                    message: e.to_string(),
                })
            }
        }
    }

    if let Some(open) = stack.pop() {
        return Err(Error::UnclosedElement { tag: open.tag });
    }

    root.ok_or(Error::NoRoot)
}

/// Build an element (without children) from a start or empty tag.
fn element_from_start(start: &BytesStart<'_>, reader: &Reader<&[u8]>) -> Result<XmlElement> {
    let tag = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut element = XmlElement::new(tag);

    for attr in start.attributes() {
        let attr = attr.map_err(|e| Error::Parse {
            position: reader.buffer_position(),
            message: e.to_string(),
        })?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value().map_err(|e| Error::Parse {
            position: reader.buffer_position(),
            message: e.to_string(),
        })?;
        element.attributes.push((key, value.into_owned()));
    }

    Ok(element)
}

fn multiple_roots(reader: &Reader<&[u8]>) -> Error {
    Error::Parse {
        position: reader.buffer_position(),
        message: "document has more than one root element".to_string(),
    }
}

fn text_outside_root(reader: &Reader<&[u8]>) -> Error {
    Error::Parse {
        position: reader.buffer_position(),
        message: "text outside root element".to_string(),
    }
}
