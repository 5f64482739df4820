use crate::models::responses::{ClassifyBookResponse, SearchResult};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("XML parse error: no root element")]
    MissingRoot,
    #[error("XML parse error: unexpected EOF inside <{0}>")]
    UnexpectedEof(String),
}

/// Sees every start or empty tag along with `path`, the local names of its
/// open ancestors, root first.
trait ElementVisitor {
    fn visit(&mut self, path: &[String], element: &BytesStart) -> Result<(), DecodeError>;
}

fn walk(xml: &str, visitor: &mut impl ElementVisitor) -> Result<(), DecodeError> {
    let mut reader = Reader::from_str(xml);
    let mut path: Vec<String> = Vec::new();
    let mut seen_root = false;

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => {
                seen_root = true;
                visitor.visit(&path, e)?;
                path.push(String::from_utf8_lossy(e.local_name().as_ref()).to_string());
            }
            Event::Empty(ref e) => {
                seen_root = true;
                visitor.visit(&path, e)?;
            }
            Event::End(_) => {
                path.pop();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !seen_root {
        return Err(DecodeError::MissingRoot);
    }
    if let Some(open) = path.pop() {
        return Err(DecodeError::UnexpectedEof(open));
    }

    Ok(())
}

fn is_element(element: &BytesStart, name: &str) -> bool {
    element.local_name().as_ref() == name.as_bytes()
}

/// Returns the unescaped value of attribute `name`, or an empty string.
fn attribute(element: &BytesStart, name: &str) -> Result<String, DecodeError> {
    for attr in element.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if attr.key.local_name().as_ref() == name.as_bytes() {
            return Ok(attr.unescape_value()?.into_owned());
        }
    }
    Ok(String::new())
}

fn path_is(path: &[String], below_root: &[&str]) -> bool {
    path.len() == below_root.len() + 1
        && path[1..].iter().zip(below_root).all(|(open, want)| open == want)
}

#[derive(Default)]
struct SearchVisitor {
    results: Vec<SearchResult>,
}

impl ElementVisitor for SearchVisitor {
    fn visit(&mut self, path: &[String], element: &BytesStart) -> Result<(), DecodeError> {
        if is_element(element, "work") && path_is(path, &["works"]) {
            self.results.push(SearchResult {
                title: attribute(element, "title")?,
                author: attribute(element, "author")?,
                year: attribute(element, "hyr")?,
                id: attribute(element, "owi")?,
            });
        }
        Ok(())
    }
}

#[derive(Default)]
struct BookVisitor {
    book: ClassifyBookResponse,
    seen_work: bool,
    seen_classification: bool,
}

impl ElementVisitor for BookVisitor {
    fn visit(&mut self, path: &[String], element: &BytesStart) -> Result<(), DecodeError> {
        if !self.seen_work && is_element(element, "work") && path_is(path, &[]) {
            self.book.title = attribute(element, "title")?;
            self.book.author = attribute(element, "author")?;
            self.book.id = attribute(element, "owi")?;
            self.seen_work = true;
        } else if !self.seen_classification
            && is_element(element, "mostPopular")
            && path_is(path, &["recommendations", "ddc"])
        {
            self.book.classification = attribute(element, "sfa")?;
            self.seen_classification = true;
        }
        Ok(())
    }
}

/// Decodes a title-search response into its `works>work` entries, in document order.
pub fn decode_search(xml: &str) -> Result<Vec<SearchResult>, DecodeError> {
    let mut visitor = SearchVisitor::default();
    walk(xml, &mut visitor)?;
    Ok(visitor.results)
}

/// Decodes an owi lookup response.
///
/// Missing elements leave the corresponding fields empty.
pub fn decode_book(xml: &str) -> Result<ClassifyBookResponse, DecodeError> {
    let mut visitor = BookVisitor::default();
    walk(xml, &mut visitor)?;
    Ok(visitor.book)
}
