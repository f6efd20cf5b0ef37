//! Element-tree construction from XML text.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::{XmlDocument, XmlNode};
use crate::error::{Error, Result};

pub(super) fn parse_document(content: &str) -> Result<XmlDocument> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<XmlNode> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                stack.push(element_from_start(&reader, &e)?);
            },
            Ok(Event::Empty(e)) => {
                let element = element_from_start(&reader, &e)?;
                match stack.last_mut() {
                    Some(parent) => parent.append_child(element),
                    // A document whose root is an empty element
                    None => return Ok(XmlDocument::new(element)),
                }
            },
            Ok(Event::End(_)) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| Error::Xml("unbalanced end tag".to_string()))?;
                match stack.last_mut() {
                    Some(parent) => parent.append_child(element),
                    None => return Ok(XmlDocument::new(element)),
                }
            },
            Ok(Event::Text(t)) => {
                if let Some(current) = stack.last_mut() {
                    let text = t
                        .decode()
                        .map_err(|e| Error::Xml(format!("text decode error: {}", e)))?;
                    current.push_text(&text);
                }
            },
            Ok(Event::Eof) => break,
            Ok(_) => {},
            Err(e) => return Err(Error::Xml(format!("XML parsing error: {}", e))),
        }
    }

    Err(Error::Xml("document has no root element".to_string()))
}

fn element_from_start(reader: &Reader<&[u8]>, start: &BytesStart) -> Result<XmlNode> {
    let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
    let mut element = XmlNode::new(name);

    for attr in start.attributes() {
        let attr = attr.map_err(|e| Error::Xml(format!("malformed attribute: {}", e)))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        // Namespace declarations are dropped; element and attribute names
        // are matched by local name throughout.
        if key == "xmlns" || key.starts_with("xmlns:") {
            continue;
        }
        let local = key.rsplit(':').next().unwrap_or(&key).to_string();
        let value = attr
            .decode_and_unescape_value(reader.decoder())
            .map_err(|e| Error::Xml(format!("attribute decode error: {}", e)))?;
        element.set_attribute(local, value.into_owned());
    }

    Ok(element)
}
