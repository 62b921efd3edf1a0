use crate::error::FieldExtractError;

/// Returns the sub-slice of `data` holding the `field_index`-th field,
/// where fields are separated by non-overlapping full-length occurrences
/// of `delimiter`. Single left-to-right pass, O(n) in the buffer length.
///
/// Matching is all-or-nothing at each scan position: a truncated or
/// interrupted delimiter occurrence is never consumed as a separator, so
/// its bytes stay inside the field currently accumulating. After a full
/// match the scan continues immediately past the delimiter; bytes inside
/// a matched delimiter are never re-examined.
///
/// A comparison that would run past the end of the buffer counts as no
/// match, and a delimiter closing the buffer does not open a trailing
/// empty field.
pub fn extract_field<'a>(
    data: &'a [u8],
    field_index: usize,
    delimiter: &[u8],
) -> Result<&'a [u8], FieldExtractError> {
    let mut current_field = 0usize;
    let mut start = None;
    let mut end = None;
    let mut fields = 0usize;

    let mut i = 0usize;
    while i < data.len() {
        if start.is_none() && current_field == field_index {
            start = Some(i);
        }
        fields = current_field + 1;

        if !delimiter.is_empty() && data[i..].starts_with(delimiter) {
            current_field += 1;
            if start.is_some() && end.is_none() {
                end = Some(i);
            }
            i += delimiter.len();
        } else {
            i += 1;
        }
    }

    match start {
        Some(start) => Ok(&data[start..end.unwrap_or(data.len())]),
        None => Err(FieldExtractError::OutOfRange {
            index: field_index,
            fields,
        }),
    }
}
