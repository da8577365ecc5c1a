//! RSS 2.0 serialization of the relayed feed.

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::models::{ChannelMeta, RssItem};
use crate::HotentryError;

/// Single-quoted declaration, emitted verbatim ahead of the document.
const XML_DECLARATION: &str = "<?xml version='1.0' encoding='UTF-8'?>";

/// Serialize the relayed feed as indented RSS 2.0 text.
///
/// One `<item>` per input entry, in input order. Text content is
/// XML-escaped by the writer.
pub fn write_rss(meta: &ChannelMeta, items: &[RssItem]) -> Result<String, HotentryError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    let mut rss = BytesStart::new("rss");
    rss.push_attribute(("version", "2.0"));
    writer.write_event(Event::Start(rss)).map_err(write_err)?;
    writer
        .write_event(Event::Start(BytesStart::new("channel")))
        .map_err(write_err)?;

    text_element(&mut writer, "title", &meta.title)?;
    text_element(&mut writer, "link", &meta.link)?;
    text_element(&mut writer, "description", &meta.description)?;

    for item in items {
        writer
            .write_event(Event::Start(BytesStart::new("item")))
            .map_err(write_err)?;
        text_element(&mut writer, "title", &item.title)?;
        text_element(&mut writer, "link", &item.link)?;
        text_element(&mut writer, "description", &item.description)?;
        text_element(&mut writer, "pubDate", &item.pub_date)?;
        writer
            .write_event(Event::End(BytesEnd::new("item")))
            .map_err(write_err)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("channel")))
        .map_err(write_err)?;
    writer
        .write_event(Event::End(BytesEnd::new("rss")))
        .map_err(write_err)?;

    let body = String::from_utf8(writer.into_inner()).map_err(|e| HotentryError::Write(e.to_string()))?;
    Ok(format!("{}{}", XML_DECLARATION, body))
}

fn text_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> Result<(), HotentryError> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(write_err)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(write_err)?;
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(write_err)?;
    Ok(())
}

fn write_err<E: std::fmt::Display>(e: E) -> HotentryError {
    HotentryError::Write(e.to_string())
}
