//! Small lookups over lopdf objects shared by the font loader, the
//! interpreter and the document model.

use lopdf::{Dictionary, Document, Object, Stream};
use pdflayout_core::Rect;

use crate::error::BackendError;

/// Follow an indirect reference, returning `obj` itself when it is direct
/// or dangling.
pub(crate) fn resolve<'a>(doc: &'a Document, obj: &'a Object) -> &'a Object {
    match obj {
        Object::Reference(id) => doc.get_object(*id).unwrap_or(obj),
        _ => obj,
    }
}

/// Convert a numeric object (Integer or Real) to f64.
pub(crate) fn object_to_f64(obj: &Object) -> Result<f64, BackendError> {
    match obj {
        Object::Integer(i) => Ok(*i as f64),
        Object::Real(f) => Ok(f64::from(*f)),
        _ => Err(BackendError::Parse(format!("expected number, got {obj:?}"))),
    }
}

pub(crate) fn get_object<'a>(doc: &'a Document, dict: &'a Dictionary, key: &[u8]) -> Option<&'a Object> {
    dict.get(key).ok().map(|obj| resolve(doc, obj))
}

pub(crate) fn get_number(doc: &Document, dict: &Dictionary, key: &[u8]) -> Option<f64> {
    get_object(doc, dict, key).and_then(|obj| object_to_f64(obj).ok())
}

pub(crate) fn get_dict<'a>(doc: &'a Document, dict: &'a Dictionary, key: &[u8]) -> Option<&'a Dictionary> {
    get_object(doc, dict, key).and_then(|obj| obj.as_dict().ok())
}

pub(crate) fn get_stream<'a>(doc: &'a Document, dict: &'a Dictionary, key: &[u8]) -> Option<&'a Stream> {
    get_object(doc, dict, key).and_then(|obj| obj.as_stream().ok())
}

pub(crate) fn get_name(doc: &Document, dict: &Dictionary, key: &[u8]) -> Option<String> {
    get_object(doc, dict, key)
        .and_then(|obj| obj.as_name().ok())
        .map(|name| String::from_utf8_lossy(name).into_owned())
}

/// Numbers of an array object; non-numeric items fail the whole array.
pub(crate) fn number_array(doc: &Document, obj: &Object) -> Option<Vec<f64>> {
    resolve(doc, obj)
        .as_array()
        .ok()?
        .iter()
        .map(|item| object_to_f64(resolve(doc, item)).ok())
        .collect()
}

/// A four-number rectangle array, normalized.
pub(crate) fn rect_from_object(doc: &Document, obj: &Object) -> Option<Rect> {
    match number_array(doc, obj)?.as_slice() {
        [llx, lly, urx, ury] => Some(Rect::new(*llx, *lly, *urx, *ury)),
        _ => None,
    }
}

/// Decode a stream, decompressing if it declares a filter.
pub(crate) fn decode_stream(stream: &Stream) -> Result<Vec<u8>, BackendError> {
    if stream.dict.get(b"Filter").is_ok() {
        stream
            .decompressed_content()
            .map_err(|e| BackendError::Parse(format!("stream decompression failed: {e}")))
    } else {
        Ok(stream.content.clone())
    }
}
