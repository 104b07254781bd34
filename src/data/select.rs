use crate::error::SelectionError;

use super::filter::FilteredView;
use super::model::Record;

/// First record in `view` whose name equals `name` (case-sensitive).
pub fn resolve<'a>(view: &FilteredView<'a>, name: &str) -> Result<&'a Record, SelectionError> {
    if view.is_empty() {
        return Err(SelectionError::EmptySubset);
    }
    view.records()
        .find(|r| r.name == name)
        .ok_or_else(|| SelectionError::NotFound(name.to_string()))
}
