use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::models::HotEntry;
use crate::HotentryError;

/// Parse the upstream hot-entry feed from raw XML bytes.
///
/// Fields are matched by XML local name, so the RDF feed's namespaced
/// `dc:date` and `hatena:bookmarkcount` elements resolve to `date` and
/// `bookmarkcount`. Source order is preserved; a feed with no items yields
/// an empty vec.
pub fn parse_hotentry_feed(xml: &[u8]) -> Result<Vec<HotEntry>, HotentryError> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut entries = Vec::new();
    let mut buf = Vec::new();

    let mut current_item: Option<HotEntryBuilder> = None;
    let mut current_element = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();

                if name == "item" {
                    current_item = Some(HotEntryBuilder::default());
                }
                current_element = name;
            }
            Ok(Event::End(e)) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();

                if name == "item" {
                    if let Some(builder) = current_item.take() {
                        if let Some(entry) = builder.build() {
                            entries.push(entry);
                        }
                    }
                }
                current_element.clear();
            }
            Ok(Event::Text(e)) => {
                if let Some(ref mut item) = current_item {
                    let text = e.unescape().unwrap_or_default().to_string();
                    if !text.is_empty() {
                        item.set_field(&current_element, text);
                    }
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(ref mut item) = current_item {
                    let text = String::from_utf8_lossy(&e.into_inner()).to_string();
                    if !text.is_empty() {
                        item.set_field(&current_element, text);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(HotentryError::Parse(format!("XML parse error: {}", e))),
            _ => {}
        }
        buf.clear();
    }

    Ok(entries)
}

#[derive(Default)]
struct HotEntryBuilder {
    title: Option<String>,
    link: Option<String>,
    description: Option<String>,
    date: Option<String>,
    bookmark_count: Option<u32>,
}

impl HotEntryBuilder {
    fn set_field(&mut self, element: &str, text: String) {
        match element {
            "title" => self.title = Some(text),
            "link" => self.link = Some(text),
            "description" => self.description = Some(text),
            "date" => self.date = Some(text),
            "bookmarkcount" => self.bookmark_count = text.parse().ok(),
            _ => {}
        }
    }

    /// An item without title or link is dropped; the remaining fields
    /// default to empty.
    fn build(self) -> Option<HotEntry> {
        Some(HotEntry {
            title: self.title?,
            link: self.link?,
            description: self.description.unwrap_or_default(),
            date: self.date.unwrap_or_default(),
            bookmark_count: self.bookmark_count.unwrap_or(0),
        })
    }
}
