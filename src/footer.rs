//! Current calendar year in the footer, written once at mount.

use web_sys::Document;

use crate::consts::YEAR_ID;

pub fn mount(document: &Document) {
    let Some(element) = document.get_element_by_id(YEAR_ID) else {
        return;
    };
    let year = js_sys::Date::new_0().get_full_year();
    element.set_text_content(Some(&year.to_string()));
}
