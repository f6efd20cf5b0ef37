//! Element-tree printing to XML text.

use std::io::Cursor;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use super::{XmlDocument, XmlNode};
use crate::error::{Error, Result};

pub(super) fn write_document(document: &XmlDocument) -> Result<String> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
        .map_err(|e| Error::Xml(format!("failed to write XML declaration: {}", e)))?;

    write_element(&mut writer, document.root())?;

    String::from_utf8(writer.into_inner().into_inner())
        .map_err(|e| Error::Xml(format!("generated XML is not UTF-8: {}", e)))
}

fn write_element(writer: &mut Writer<Cursor<Vec<u8>>>, element: &XmlNode) -> Result<()> {
    let mut start = BytesStart::new(element.name());
    for (key, value) in element.attributes() {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.children().is_empty() && element.text().is_none() {
        writer
            .write_event(Event::Empty(start))
            .map_err(|e| Error::Xml(format!("failed to write <{}>: {}", element.name(), e)))?;
        return Ok(());
    }

    writer
        .write_event(Event::Start(start))
        .map_err(|e| Error::Xml(format!("failed to write <{}>: {}", element.name(), e)))?;

    if let Some(text) = element.text() {
        writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(|e| Error::Xml(format!("failed to write text: {}", e)))?;
    }

    for child in element.children() {
        write_element(writer, child)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new(element.name())))
        .map_err(|e| Error::Xml(format!("failed to close <{}>: {}", element.name(), e)))?;

    Ok(())
}
