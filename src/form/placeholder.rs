//! Placeholder guidance text: non-semantic text pre-filled in an empty field
//! to hint at the expected input. A field still holding its guidance at
//! submission time means "no explicit value entered".

use crate::parameter::WidgetHint;

/// The guidance text shown for a widget kind.
pub fn guidance(widget: WidgetHint) -> &'static str {
    match widget {
        WidgetHint::Directory => "Pick a directory...",
        WidgetHint::File => "Pick a file...",
        WidgetHint::FileOrDirectory => "Pick a file or directory...",
        WidgetHint::Text => "Enter...",
        WidgetHint::Password => "",
        WidgetHint::Checkbox => "",
    }
}
